mod cli;
pub mod console;
pub mod questionnaire;

use rann_saka::error::AppError;

/// Parses the command line and runs the selected command.
pub fn run() -> Result<(), AppError> {
    cli::run()
}
