use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub use tracing_subscriber::util::TryInitError;

/// Telemetry-related configuration options
#[derive(Debug, Clone, Parser)]
pub struct TelemetryOpts {
    /// Whether to use ANSI colors in the logs. Disable if you're piping logs to a file or using
    /// third party services to collect logs.
    #[clap(long = "telemetry.use-ansi", env = "BHP_TELEMETRY_USE_ANSI", default_value_t = true)]
    pub use_ansi: bool,
}

impl TelemetryOpts {
    /// Setup the logging stack: `RUST_LOG`-filtered tracing to stderr.
    ///
    /// Logs go to stderr so that stdout only carries the produced prover input.
    pub fn setup(&self) -> Result<(), TryInitError> {
        tracing_subscriber::registry()
            .with(EnvFilter::from_env("RUST_LOG"))
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(self.use_ansi)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    }
}
