//! Font bundle assembly: the per-weight, per-format download loop.

use indexmap::IndexMap;
use log::info;

use crate::config::{FONT_FORMATS, FontFormat, GOOGLE_FONTS_API};
use crate::css;
use crate::error::{Error, Result};
use crate::transport::{HttpTransport, Transport};

/// Output mapping of relative filename to byte content.
///
/// Insertion order follows the weight list, each weight contributing one
/// file per font format; the combined CSS file comes last.
pub type AssetBundle = IndexMap<String, Vec<u8>>;

/// Interleaves each weight with its italic-suffixed counterpart when
/// `italic` is set; otherwise returns the weights unchanged.
pub fn expand_weights<W: AsRef<str>>(weights: &[W], italic: bool) -> Vec<String> {
    if italic {
        weights
            .iter()
            .flat_map(|weight| {
                let weight = weight.as_ref();
                [weight.to_string(), format!("{weight}i")]
            })
            .collect()
    } else {
        weights.iter().map(|weight| weight.as_ref().to_string()).collect()
    }
}

/// Filename label for a weight: the italic marker is spelled out, so `400`
/// stays `400` and `400i` becomes `400talic`.
pub fn weight_label(weight: &str) -> String {
    match weight.strip_suffix('i') {
        Some(base) => format!("{base}talic"),
        None => weight.to_string(),
    }
}

/// Shared filename prefix and archive directory name for a download:
/// lower-cased family with spaces as underscores, `-`, subsets joined with
/// underscores.
pub fn base_filename<S: AsRef<str>>(family: &str, subsets: &[S]) -> String {
    let subsets: Vec<&str> = subsets.iter().map(|subset| subset.as_ref()).collect();
    format!("{}-{}", family.to_lowercase().replace(' ', "_"), subsets.join("_"))
}

/// Extension of the URL's last path segment, after its final `.`.
fn asset_extension(url: &str) -> Option<&str> {
    url.rsplit('/')
        .next()
        .and_then(|segment| segment.rsplit_once('.'))
        .map(|(_, extension)| extension)
}

/// Downloads a font family's CSS and binary assets into an [`AssetBundle`].
///
/// One CSS request and one asset request are issued per weight per entry of
/// the captured format list, strictly in sequence. Any failure aborts the
/// whole build; no partial bundle is ever returned.
pub struct FontBundleBuilder<T = HttpTransport> {
    transport: T,
    endpoint: String,
    formats: &'static [FontFormat],
}

impl FontBundleBuilder {
    /// Builder against the live Google Fonts endpoint.
    pub fn new() -> Self {
        Self::with_transport(HttpTransport::new())
    }
}

impl Default for FontBundleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> FontBundleBuilder<T> {
    /// Builder with a caller-supplied transport.
    pub fn with_transport(transport: T) -> Self {
        Self { transport, endpoint: GOOGLE_FONTS_API.to_string(), formats: FONT_FORMATS }
    }

    /// Overrides the CSS endpoint URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Downloads `family` at the given weights and subsets.
    ///
    /// With `italic` set, every weight is fetched in both upright and italic
    /// variants. Each resolved request URL is logged at `info` level.
    ///
    /// Expects `family` and `subsets` to be non-empty and every weight to be
    /// a numeric weight token; unrecognized combinations surface as
    /// [`Error::FontUrlQuery`] when the endpoint answers without a font URL.
    pub fn build_bundle<W, S>(
        &self,
        family: &str,
        weights: &[W],
        subsets: &[S],
        italic: bool,
    ) -> Result<AssetBundle>
    where
        W: AsRef<str>,
        S: AsRef<str>,
    {
        let weights = expand_weights(weights, italic);
        let base = base_filename(family, subsets);
        let subset_query =
            subsets.iter().map(|subset| subset.as_ref()).collect::<Vec<_>>().join(",");

        let mut files = AssetBundle::new();
        let mut css_parts: Vec<String> = Vec::new();

        for weight in &weights {
            let family_query = format!("{family}:{weight}");
            let mut weight_files: Vec<(&FontFormat, String)> = Vec::new();
            let mut css_template = String::new();

            for font_format in self.formats {
                let query =
                    [("family", family_query.as_str()), ("subset", subset_query.as_str())];
                let response =
                    self.transport.get_text(&self.endpoint, &query, font_format.user_agent)?;
                info!("{}", response.url);

                let font_url = css::extract_font_url(&response.body)
                    .ok_or_else(|| Error::FontUrlQuery { url: response.url.clone() })?
                    .to_string();

                let asset = self.transport.get_bytes(&font_url, font_format.user_agent)?;
                info!("{}", asset.url);

                let extension = asset_extension(&font_url)
                    .ok_or_else(|| Error::AssetExtension { url: font_url.clone() })?;
                let filename = format!("{base}-{}.{extension}", weight_label(weight));
                files.insert(filename.clone(), asset.bytes);
                weight_files.push((font_format, filename));

                // The most recent response doubles as the CSS template for
                // this weight.
                css_template = response.body;
            }

            let declaration = css::src_declaration(
                weight_files
                    .iter()
                    .rev()
                    .map(|(font_format, filename)| (filename.as_str(), font_format.format)),
            );
            css_parts.push(css::replace_src_declaration(&css_template, &declaration));
        }

        files.insert(format!("{base}.css"), css_parts.join("\n").into_bytes());
        Ok(files)
    }
}
