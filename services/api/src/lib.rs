mod cli;
mod infra;
mod report;
mod routes;
mod server;

use auto_finder::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
