// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) uses these modules to implement the interactive uploader.
//
// Module responsibilities:
// - `api`: Encapsulates the HTTP interaction with the upload endpoint
//   (one multipart POST carrying the settings and the selected files).
// - `ui`: Implements the interactive flow (file dialog, prompts,
//   confirmation) and delegates the actual upload to `api`.
//
// Keeping this separation makes it possible to test the upload logic
// against a local server without driving the interactive prompts.
pub mod api;
pub mod ui;
