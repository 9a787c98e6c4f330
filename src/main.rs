use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};
use debdeps::{build_report, Config, DpkgInventory};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Print the Debian package constraints an executable's shared libraries need.
#[derive(Parser, Debug)]
#[command(name = "debdeps", version)]
struct Cli {
    /// Executable to inspect
    executable: PathBuf,

    /// Dynamic-linker introspection program
    #[arg(long, env = "DEBDEPS_LDD", default_value = "ldd")]
    ldd: String,

    /// Package manager program
    #[arg(long, env = "DEBDEPS_DPKG", default_value = "dpkg")]
    dpkg: String,

    /// Extra path substring whose owners are never counted (repeatable)
    #[arg(long = "ignore", env = "DEBDEPS_IGNORE", value_delimiter = ',')]
    ignore: Vec<String>,

    /// Log verbosity on stderr; RUST_LOG takes precedence
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Config {
            ldd: cli.ldd.clone(),
            dpkg: cli.dpkg.clone(),
            extra_ignore: cli.ignore.clone(),
        }
    }
}

fn init_tracing(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| {
            EnvFilter::new(format!("debdeps={}", LevelFilter::from_level(level.into())))
        });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => {
            println!("{}", Cli::command().render_usage());
            return ExitCode::from(1);
        }
    };

    init_tracing(cli.log_level);

    let config = Config::from(&cli);
    let inventory = DpkgInventory::from_config(&config);
    let report = build_report(&inventory, &cli.executable, &config);

    if let Some(line) = report.line() {
        println!("{line}");
    }
    ExitCode::from(report.exit_code())
}
