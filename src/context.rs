use std::sync::atomic::{AtomicBool, AtomicU16, Ordering};

/// Scalars shared between the tick loop and asynchronous notification
/// paths (resize events, Ctrl+C). Each field is an independent atomic;
/// nothing here needs a lock or a multi-step critical section.
pub struct Ctx {
    stop: AtomicBool,
    term_cols: AtomicU16,
    term_rows: AtomicU16,
}

impl Ctx {
    pub fn new(term_cols: u16, term_rows: u16) -> Self {
        Ctx {
            stop: AtomicBool::new(false),
            term_cols: AtomicU16::new(term_cols),
            term_rows: AtomicU16::new(term_rows),
        }
    }

    pub fn stop_requested(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }

    pub fn request_stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    pub fn term_size(&self) -> (u16, u16) {
        (
            self.term_cols.load(Ordering::Relaxed),
            self.term_rows.load(Ordering::Relaxed),
        )
    }

    pub fn set_term_size(&self, cols: u16, rows: u16) {
        self.term_cols.store(cols, Ordering::Relaxed);
        self.term_rows.store(rows, Ordering::Relaxed);
    }
}
