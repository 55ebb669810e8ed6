use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use qu::Qu;
use qu_yfinance::YfConnector;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Quote and fundamentals snapshot for one or more ticker symbols.
#[derive(Debug, Parser)]
#[command(name = "qu", version, about)]
struct Cli {
    /// Ticker symbols, e.g. AAPL KO ^GSPC BRK-B
    #[arg(required = true, allow_hyphen_values = true, trailing_var_arg = true)]
    symbols: Vec<String>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

async fn run(symbols: &[String]) -> Result<u8, Box<dyn std::error::Error>> {
    let yf = YfConnector::new_default()?;
    let qu = Qu::builder().with_connector(Arc::new(yf)).build()?;
    let summary = qu.run(symbols, &mut io::stdout().lock()).await?;
    Ok(summary.exit_status())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            error!(error = %e, "failed to start runtime");
            return ExitCode::FAILURE;
        }
    };

    match rt.block_on(run(&cli.symbols)) {
        Ok(status) => ExitCode::from(status),
        Err(e) => {
            error!(error = %e, "qu failed");
            ExitCode::FAILURE
        }
    }
}
