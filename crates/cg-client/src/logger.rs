use cg_client::{ClientError, ClientResult};
use cg_config::LoggingConfig;

use std::fmt::Arguments;
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{LevelFilter, Record, debug};

/// Crates whose request-level chatter is only useful when tracing
const NOISY_DEPENDENCIES: &[&str] = &["reqwest", "hyper", "hyper_util", "rustls"];

/// Route `log` output to `[logging] file` when set, otherwise to stderr so
/// stdout carries only command JSON.
#[track_caller]
pub fn initialize(logging: &LoggingConfig) -> ClientResult<()> {
    let level = LevelFilter::from(logging.level);

    let mut root = Dispatch::new().level(level);
    if level < LevelFilter::Trace {
        for target in NOISY_DEPENDENCIES {
            root = root.level_for(*target, LevelFilter::Warn);
        }
    }

    let output = match logging.file.as_deref() {
        Some(path) => {
            let file = fern::log_file(path).map_err(|e| {
                ClientError::config(format!("Failed to open log file {path}: {e}"))
            })?;
            Dispatch::new()
                .format(|out, message, record| {
                    write_line(out, message, record, record.level().as_str(), true)
                })
                .chain(file)
        }
        None if logging.colored => {
            let colors = ColoredLevelConfig::new()
                .debug(Color::Blue)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red);
            Dispatch::new()
                .format(move |out, message, record| {
                    let level = colors.color(record.level()).to_string();
                    write_line(out, message, record, &level, false)
                })
                .chain(std::io::stderr())
        }
        None => Dispatch::new()
            .format(|out, message, record| {
                write_line(out, message, record, record.level().as_str(), false)
            })
            .chain(std::io::stderr()),
    };

    root.chain(output)
        .apply()
        .map_err(|e| ClientError::config(format!("Failed to initialize logger: {e}")))?;

    debug!(
        "Logger initialized: level={:?}, output={}",
        level,
        logging.file.as_deref().unwrap_or("stderr")
    );
    Ok(())
}

/// Files get millisecond timestamps and the source location; the terminal
/// gets whole seconds.
fn write_line(
    out: FormatCallback<'_>,
    message: &Arguments<'_>,
    record: &Record<'_>,
    level: &str,
    detailed: bool,
) {
    let now = SystemTime::now();
    if detailed {
        out.finish(format_args!(
            "[{} - {}] {} [{}:{}]",
            humantime::format_rfc3339_millis(now),
            level,
            message,
            record.file().unwrap_or("unknown"),
            record.line().unwrap_or(0),
        ))
    } else {
        out.finish(format_args!(
            "[{} - {}] {}",
            humantime::format_rfc3339_seconds(now),
            level,
            message
        ))
    }
}
