use clap::Parser;
use matchboard::app;
use matchboard::cli::Args;
use matchboard::error::AppError;
use matchboard::logging::setup_logging;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Config operations don't need the logging stack
    if app::handle_config_ops(&args).await? {
        return Ok(());
    }

    // The guard must stay alive until exit so logs are flushed
    let (log_file_path, _guard) = setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    app::run(&args).await
}
