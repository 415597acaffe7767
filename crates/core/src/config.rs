//! Configuration constants for the Google Fonts CSS endpoint.

/// Google Fonts CSS endpoint (v1 API).
pub const GOOGLE_FONTS_API: &str = "https://fonts.googleapis.com/css";

/// User-Agent for which the endpoint serves WOFF asset URLs.
pub const WOFF_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 6.1; WOW64; rv:27.0) Gecko/20100101 Firefox/27.0";

/// User-Agent for which the endpoint serves WOFF2 asset URLs.
pub const WOFF2_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 6.3; rv:39.0) Gecko/20100101 Firefox/39.0";

/// A font container format served by the CSS endpoint.
///
/// The endpoint picks the format from the requesting client's `User-Agent`,
/// so each format carries the client identifier that selects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontFormat {
    /// CSS `format()` identifier, e.g. `woff2`.
    pub format: &'static str,
    /// Client identifier sent as the `User-Agent` request header.
    pub user_agent: &'static str,
}

/// Formats fetched for every weight, in request order.
///
/// The generated CSS lists sources in reverse of this order, so the last
/// entry here ends up first in every `src:` list.
pub const FONT_FORMATS: &[FontFormat] = &[
    FontFormat { format: "woff", user_agent: WOFF_USER_AGENT },
    FontFormat { format: "woff2", user_agent: WOFF2_USER_AGENT },
];
