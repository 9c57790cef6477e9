//! Voice list request
//!
//! Use [get_voice_list](crate::client::TTSMaker::get_voice_list) to get available voices.
//! Use [get_voice_list](crate::client::TTSMakerAsync::get_voice_list) of [TTSMakerAsync](crate::client::TTSMakerAsync)
//! to get available voices asynchronously.
//!
//! The response is returned as [serde_json::Value] unmodified, keyed by language code.

use crate::{config::endpoint, constants, error::Result};
use url::Url;

/// Language codes the voice list can be filtered by.
///
/// Informational only, other codes are passed to the service as is.
pub const SUPPORTED_LANGUAGES: [&str; 16] = [
    "en", "zh", "es", "ja", "ko", "de", "fr", "it", "ru", "pt", "tr", "ms", "th", "vi", "id", "he",
];

pub(crate) fn voice_list_url(base_url: &str, token: &str, language: Option<&str>) -> Result<Url> {
    let endpoint = endpoint(base_url, constants::VOICE_LIST_PATH)?;
    let mut params = vec![("token", token)];
    if let Some(language) = language.filter(|language| !language.is_empty()) {
        params.push(("language", language));
    }
    Ok(Url::parse_with_params(endpoint.as_str(), &params)?)
}
