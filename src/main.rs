use clap::Parser;
use local_weather::{Error, Options, Units, DEFAULT_USER_AGENT};
use std::path::PathBuf;
use std::process::{self, ExitCode};
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Exit status for any failure, `-1` as the OS reports it.
const FAILURE: u8 = u8::MAX;

#[derive(Debug, Parser)]
#[clap(version, about = "Display the weather for the current location")]
struct Args {
    /// Write output to FILE instead of printing to STDOUT
    #[clap(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output weather in the specified units. "us" for US units (°F, mph, etc.)
    /// and "metric" for metric units (°C, kph, etc.)
    #[clap(short, long, value_enum, default_value_t = Units::Us)]
    units: Units,

    /// Show more output
    #[clap(short, long)]
    verbose: bool,

    /// API key for the IP geolocation service
    #[clap(long, env = "FREEGEOIP_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// User-Agent sent to the weather services
    #[clap(long, default_value_t = String::from(DEFAULT_USER_AGENT))]
    user_agent: String,
}

/// Log level used when `RUST_LOG` is not set.
fn default_level(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}

fn init_tracing(verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_level(verbose))),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Logs a failure with all of its causes and picks the process exit status.
fn exit_status(result: Result<(), Error>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            error!("{}", err.display_chain());
            FAILURE
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    std::panic::set_hook(Box::new(|info| {
        error!("Unexpected failure: {}", info);
        process::exit(FAILURE.into());
    }));

    let options = Options {
        units: args.units,
        output: args.output,
        user_agent: args.user_agent,
        ..Options::new(args.api_key.as_deref().unwrap_or_default())
    };

    ExitCode::from(exit_status(local_weather::run(&options).await))
}
