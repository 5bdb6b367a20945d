use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use claude_quota::config::Config;
use claude_quota_core::StatusLine;

fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = Config::parse_args();

    // Setup logging
    setup_logging(cli.debug);

    let line = match claude_quota::load_settings(&cli) {
        Ok(settings) => claude_quota::run(&settings),
        Err(e) => {
            error!("{:#}", e);
            StatusLine::error(e)
        }
    };

    // stdout carries exactly this one line
    println!("{}", line);
    ExitCode::from(line.exit_code())
}

fn setup_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("claude_quota=debug,claude_quota_core=debug")
    } else {
        EnvFilter::new("claude_quota=warn,claude_quota_core=warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
