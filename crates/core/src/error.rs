//! Error types for font bundle downloads.

use std::result;

pub use reqwest::StatusCode;

/// Errors that can occur while assembling a font bundle.
///
/// All of these abort the whole download: there is no retry and no partial
/// bundle.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Connection-level or body-decoding failure from the HTTP client.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Either endpoint answered with a non-success status.
    #[error("HTTP {status} for {url}")]
    Status { status: StatusCode, url: String },

    /// The CSS response did not contain exactly one `src: url(...)`
    /// declaration.
    #[error("failed to query google fonts for URL: {url}")]
    FontUrlQuery { url: String },

    /// The discovered asset URL carries no file extension to name the local
    /// file after.
    #[error("no file extension in font URL: {url}")]
    AssetExtension { url: String },
}

pub type Result<T> = result::Result<T, Error>;
