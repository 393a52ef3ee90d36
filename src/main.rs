use clap::{Parser, ValueEnum};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use trmmtui::core::config;
use trmmtui::tui;

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Parser)]
#[command(name = "trmmtui", version, about = "Terminal client browser with an API login form")]
struct Args {
    /// Config file to use instead of ~/.trmmtui/config.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where to write the log (the terminal belongs to the UI)
    #[arg(long, default_value = "trmmtui.log")]
    log_file: PathBuf,

    #[arg(long, value_enum, default_value_t)]
    log_level: LogLevel,

    /// Maximum characters accepted per login field
    #[arg(long)]
    char_limit: Option<usize>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // File logger - stdout/stderr are owned by the alternate screen
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(args.log_level.into(), log_config, log_file);
    }

    log::info!("trmmtui {} starting up", env!("CARGO_PKG_VERSION"));

    let file_config = config::load_config(args.config.as_deref()).unwrap_or_else(|e| {
        log::warn!("{e}, falling back to defaults");
        eprintln!("trmmtui: {e}, falling back to defaults");
        config::TrmmConfig::default()
    });
    let resolved = config::resolve(&file_config, args.char_limit);
    log::debug!("Resolved config: {:?}", resolved);

    tui::run(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["trmmtui"]);
        assert!(args.config.is_none());
        assert_eq!(args.log_file, PathBuf::from("trmmtui.log"));
        assert_eq!(LevelFilter::from(args.log_level), LevelFilter::Info);
        assert!(args.char_limit.is_none());
    }

    #[test]
    fn test_args_overrides() {
        let args = Args::parse_from([
            "trmmtui",
            "--config",
            "/tmp/alt.toml",
            "--log-level",
            "debug",
            "--char-limit",
            "64",
        ]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/alt.toml")));
        assert_eq!(LevelFilter::from(args.log_level), LevelFilter::Debug);
        assert_eq!(args.char_limit, Some(64));
    }
}
