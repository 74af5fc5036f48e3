mod cli;
mod demo;
mod infra;
mod routes;
mod server;

use offer_costing::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
