// UI layer: native file dialog via `rfd`, sequential prompts via
// `dialoguer`, and a spinner via `indicatif`. The functions are small and
// synchronous to make the flow easy to follow: select files, collect the
// two upload settings, confirm, upload, report.

use crate::api::UploadClient;
use anyhow::Result;
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Bounds and default for the max-dimension prompt. Out-of-range entries
/// are rejected at the prompt; a dismissed prompt falls back to the
/// default instead of re-asking.
pub const MIN_DIMENSION: u32 = 100;
pub const MAX_DIMENSION: u32 = 4000;
pub const DEFAULT_MAX_DIMENSION: u32 = 1920;

/// How the run ended from the user's point of view. Cancellation at any
/// stage is a normal outcome, not an error.
pub enum RunOutcome {
    Cancelled,
    Uploaded,
}

/// Drive the whole interactive flow: file dialog, settings prompts,
/// confirmation, upload. This call blocks until the user has answered
/// every step and the HTTP request has completed or failed.
///
/// Upload failures propagate as `Err`; the caller turns them into the
/// process exit code.
pub fn run(client: UploadClient) -> Result<RunOutcome> {
    println!("Davis Pics Upload");
    println!("=================");

    println!("Opening file dialog...");
    run_with_selection(client, select_images())
}

/// The flow after file selection: settings prompts, confirmation, upload.
/// Split out from `run` so the empty-selection early exit can be exercised
/// without a native dialog.
fn run_with_selection(client: UploadClient, files: Vec<PathBuf>) -> Result<RunOutcome> {
    if files.is_empty() {
        println!("No files selected. Exiting.");
        return Ok(RunOutcome::Cancelled);
    }

    println!("Selected {} files:", files.len());
    for path in &files {
        println!("  - {}", base_name(path));
    }

    let (max_dimension, folder) = prompt_upload_params()?;

    println!();
    println!("Upload settings:");
    println!("  Max dimension: {}px", max_dimension);
    if folder.is_empty() {
        println!("  Folder: '' (root)");
    } else {
        println!("  Folder: '{}'", folder);
    }

    let answer: String = Input::new()
        .with_prompt("Proceed with upload? (y/N)")
        .allow_empty(true)
        .interact_text()?;
    if !is_affirmative(&answer) {
        println!("Upload cancelled.");
        return Ok(RunOutcome::Cancelled);
    }

    // Spinner while the single blocking request runs.
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    spinner.set_message(format!("Uploading {} files...", files.len()));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = client.upload_images(&files, max_dimension, &folder);
    spinner.finish_and_clear();
    result?;

    Ok(RunOutcome::Uploaded)
}

/// Open the native multi-file dialog, filtered to common image types.
/// `None` (dialog cancelled or no backend available) becomes an empty
/// selection, which the caller treats as a normal early exit.
fn select_images() -> Vec<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Select images to upload")
        .add_filter("Image files", &["jpg", "jpeg", "png", "JPG", "JPEG", "PNG"])
        .add_filter("JPEG files", &["jpg", "jpeg", "JPG", "JPEG"])
        .add_filter("PNG files", &["png", "PNG"])
        .add_filter("All files", &["*"])
        .pick_files()
        .unwrap_or_default()
}

/// Ask for the two upload settings in sequence. Empty input takes the
/// default; a typed value for the dimension must pass the range check
/// before the prompt accepts it.
fn prompt_upload_params() -> Result<(u32, String)> {
    let max_dimension: u32 = Input::new()
        .with_prompt(format!(
            "Maximum dimension in pixels ({}-{})",
            MIN_DIMENSION, MAX_DIMENSION
        ))
        .default(DEFAULT_MAX_DIMENSION)
        .validate_with(|value: &u32| -> std::result::Result<(), String> {
            if dimension_in_range(*value) {
                Ok(())
            } else {
                Err(format!(
                    "enter a value between {} and {}",
                    MIN_DIMENSION, MAX_DIMENSION
                ))
            }
        })
        .interact_text()?;

    let folder: String = Input::new()
        .with_prompt("Folder name (optional)")
        .allow_empty(true)
        .interact_text()?;

    Ok((max_dimension, folder))
}

/// Range check backing the dimension prompt validator.
fn dimension_in_range(value: u32) -> bool {
    (MIN_DIMENSION..=MAX_DIMENSION).contains(&value)
}

/// Only "y"/"yes" (any case, surrounding whitespace ignored) proceed;
/// everything else, including empty input, cancels.
fn is_affirmative(answer: &str) -> bool {
    matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    )
}

/// Base filename for display, mirroring what the server will receive.
fn base_name(path: &Path) -> String {
    path.file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("image.jpg")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selection_cancels_before_prompts_or_network() {
        // A client pointed at a port nothing listens on: any request made
        // here would surface as an error, and there is no terminal for the
        // prompts to read from, so reaching either would fail the test.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let client = UploadClient::new(&format!("http://{}/upload/", addr)).unwrap();

        let outcome = run_with_selection(client, Vec::new()).unwrap();
        assert!(matches!(outcome, RunOutcome::Cancelled));
    }

    #[test]
    fn dimension_range_is_inclusive_at_both_ends() {
        assert!(!dimension_in_range(99));
        assert!(dimension_in_range(100));
        assert!(dimension_in_range(1920));
        assert!(dimension_in_range(4000));
        assert!(!dimension_in_range(4001));
    }

    #[test]
    fn only_y_and_yes_confirm() {
        assert!(is_affirmative("y"));
        assert!(is_affirmative("Y"));
        assert!(is_affirmative("yes"));
        assert!(is_affirmative("YES"));
        assert!(is_affirmative("  yes  "));
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative("no"));
        assert!(!is_affirmative("yep"));
    }

    #[test]
    fn base_name_strips_directories() {
        assert_eq!(base_name(Path::new("/tmp/photos/a.jpg")), "a.jpg");
        assert_eq!(base_name(Path::new("b.png")), "b.png");
    }
}
