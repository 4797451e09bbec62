mod cli;
mod demo;
mod infra;

use arune::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
