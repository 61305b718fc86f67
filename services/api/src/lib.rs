mod cli;
mod infra;
mod predict;
mod routes;
mod server;

use salary_whisperer::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
