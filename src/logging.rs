use anyhow::Result;
use log::LevelFilter;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

/// Sets up file logging when `TORSNAKE_LOG` names a log file path.
/// Logging stays off otherwise: the terminal belongs to the game, so
/// nothing may ever be written to stdout or stderr while it runs.
pub fn init_from_env() -> Result<()> {
    let path = match std::env::var("TORSNAKE_LOG") {
        Ok(p) if !p.is_empty() => p,
        _ => return Ok(()),
    };

    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} {l} {t} {m}{n}",
        )))
        .build(&path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("logfile", Box::new(logfile)))
        .build(Root::builder().appender("logfile").build(LevelFilter::Trace))?;

    log4rs::init_config(config)?;
    Ok(())
}
