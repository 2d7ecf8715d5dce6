//! TMDB image URL construction

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// TMDB image size tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SizeTier {
    #[default]
    Original,
    W500,
}

/// Builds `{base}/{tier}/{path}`.
///
/// `path` is a TMDB file path such as `/abc.jpg`; the leading slash is
/// optional. An empty path still produces the tier URL.
pub fn image_url(base: &str, path: &str, tier: SizeTier) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{tier}/{path}")
}
