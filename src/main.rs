use clap::Parser;
use shift_case::{
    cli::Args,
    error::{ShiftError, ShiftResult},
};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> ShiftResult<()> {
    let args = Args::parse();
    let filter = match args.verbose {
        true => EnvFilter::new("debug"),
        false => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    let subscriber =
        FmtSubscriber::builder().with_env_filter(filter).with_target(false).with_writer(std::io::stderr).finish();
    tracing::subscriber::set_global_default(subscriber).map_err(|err| ShiftError::any(err.to_string()))?;
    args.run()
}
