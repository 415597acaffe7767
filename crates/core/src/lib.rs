//! Download Google Fonts CSS and font files for self-hosting.
//!
//! For every requested weight the Google Fonts CSS endpoint is queried once
//! per font format (woff and woff2, selected via the `User-Agent` header),
//! the referenced font file is downloaded, and the CSS is rewritten to point
//! at the local filenames. The result is a filename→bytes mapping ready to
//! be archived.
//!
//! # Example
//!
//! ```no_run
//! use fontpack_core::FontBundleBuilder;
//!
//! let bundle = FontBundleBuilder::new()
//!     .build_bundle("Open Sans", &["400", "700"], &["latin", "latin-ext"], false)
//!     .unwrap();
//! for filename in bundle.keys() {
//!     println!("{filename}");
//! }
//! ```

pub mod bundle;
pub mod config;
pub mod css;
pub mod error;
pub mod transport;

pub use bundle::{AssetBundle, FontBundleBuilder, base_filename, expand_weights, weight_label};
pub use config::{FONT_FORMATS, FontFormat, GOOGLE_FONTS_API};
pub use error::{Error, Result};
pub use transport::{FetchedBytes, FetchedText, HttpTransport, Transport};
