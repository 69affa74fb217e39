// Entrypoint for the CLI application.
// - Keeps `main` small: create the upload client and hand it to the UI flow.
// - Maps the outcome to the exit code here: cancellation and success both
//   exit 0, any upload failure exits 1.

use davispics_cli::{api::UploadClient, ui};
use std::process::ExitCode;

fn main() -> ExitCode {
    // The client is configured by the environment variable `UPLOAD_URL`
    // or defaults to the production endpoint. See `api::UploadClient::from_env`.
    let client = match UploadClient::from_env() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    // Run the interactive flow. This call blocks until the user is done.
    match ui::run(client) {
        Ok(ui::RunOutcome::Uploaded) => {
            println!();
            println!("✓ Upload completed successfully!");
            ExitCode::SUCCESS
        }
        Ok(ui::RunOutcome::Cancelled) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!();
            eprintln!("✗ Upload failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
