//! TTS Client module

use {
    crate::{
        config::{ClientBuilder, REDACTED, endpoint, resolve_token},
        constants,
        error::Result,
        order::{CreateOrderRequest, OrderConfig, OrderInfo, download_error},
        voice::voice_list_url,
    },
    std::path::{Path, PathBuf},
    url::Url,
};

fn token_status_url(base_url: &str, token: &str) -> Result<Url> {
    let endpoint = endpoint(base_url, constants::TOKEN_STATUS_PATH)?;
    Ok(Url::parse_with_params(endpoint.as_str(), &[("token", token)])?)
}

/// Sync Client
#[cfg(feature = "blocking")]
#[derive(Clone)]
pub struct TTSMaker {
    token: String,
    base_url: String,
    http: reqwest::blocking::Client,
}

#[cfg(feature = "blocking")]
impl std::fmt::Debug for TTSMaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TTSMaker")
            .field("token", &REDACTED)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "blocking")]
impl Default for TTSMaker {
    fn default() -> Self {
        Self::new("")
    }
}

#[cfg(feature = "blocking")]
impl TTSMaker {
    /// Create a client for the developer `token`. An empty token uses `ttsmaker_demo_token`.
    pub fn new(token: &str) -> Self {
        Self::from_parts(
            resolve_token(Some(token)),
            constants::BASE_URL.to_string(),
            reqwest::blocking::Client::new(),
        )
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub(crate) fn from_parts(
        token: String,
        base_url: String,
        http: reqwest::blocking::Client,
    ) -> Self {
        Self {
            token,
            base_url,
            http,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Get available voices, only of `language` if given, e.g. `Some("en")`.
    ///
    /// `None` returns voices of every language. Pass `Some("zh")` for the
    /// Chinese list the service's own client requests by default.
    pub fn get_voice_list(&self, language: Option<&str>) -> Result<serde_json::Value> {
        let url = voice_list_url(&self.base_url, &self.token, language)?;
        tracing::debug!(endpoint = constants::VOICE_LIST_PATH, ?language, "requesting voice list");
        Ok(self.http.get(url).send()?.json()?)
    }

    /// Create a tts order. Fails with [Error::Order](crate::error::Error::Order)
    /// unless the service reports `success`.
    pub fn create_tts_order(&self, text: &str, config: &OrderConfig) -> Result<TTSOrder> {
        let url = endpoint(&self.base_url, constants::CREATE_ORDER_PATH)?;
        tracing::debug!(
            endpoint = constants::CREATE_ORDER_PATH,
            voice_id = config.voice_id,
            characters = text.chars().count(),
            "creating tts order"
        );
        let response: serde_json::Value = self
            .http
            .post(url)
            .json(&CreateOrderRequest::new(&self.token, text, config))
            .send()?
            .json()?;
        Ok(self.restore_order(OrderInfo::from_created(response)?))
    }

    /// Quota, used and remaining characters and the next reset date of the token.
    pub fn get_token_status(&self) -> Result<serde_json::Value> {
        let url = token_status_url(&self.base_url, &self.token)?;
        tracing::debug!(endpoint = constants::TOKEN_STATUS_PATH, "requesting token status");
        Ok(self.http.get(url).send()?.json()?)
    }

    /// Wrap an order response obtained earlier so its audio can be saved with this client.
    pub fn restore_order(&self, info: impl Into<OrderInfo>) -> TTSOrder {
        TTSOrder {
            info: info.into(),
            http: self.http.clone(),
        }
    }
}

/// Sync tts order
#[cfg(feature = "blocking")]
#[derive(Debug, Clone)]
pub struct TTSOrder {
    info: OrderInfo,
    http: reqwest::blocking::Client,
}

#[cfg(feature = "blocking")]
impl TTSOrder {
    pub fn info(&self) -> &OrderInfo {
        &self.info
    }

    pub fn into_info(self) -> OrderInfo {
        self.info
    }

    /// Download the audio and write it to `{filename}.{audio_file_type}`.
    ///
    /// A failed order errors before any request is sent. Nothing is written
    /// unless the download answers `200 OK`. Returns the written path.
    pub fn save_audio(&self, filename: impl AsRef<Path>) -> Result<PathBuf> {
        let (url, path) = self.info.audio_target(filename.as_ref())?;
        let response = self.http.get(url).send()?;
        if response.status() != reqwest::StatusCode::OK {
            tracing::warn!(url, status = %response.status(), "audio download failed");
            return Err(download_error(url));
        }
        let bytes = response.bytes()?;
        std::fs::write(&path, &bytes)?;
        tracing::info!(path = %path.display(), bytes = bytes.len(), "audio file saved");
        Ok(path)
    }
}

/// Async Client
#[derive(Clone)]
pub struct TTSMakerAsync {
    token: String,
    base_url: String,
    http: reqwest::Client,
}

impl std::fmt::Debug for TTSMakerAsync {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TTSMakerAsync")
            .field("token", &REDACTED)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl Default for TTSMakerAsync {
    fn default() -> Self {
        Self::new("")
    }
}

impl TTSMakerAsync {
    /// Create a client for the developer `token`. An empty token uses `ttsmaker_demo_token`.
    pub fn new(token: &str) -> Self {
        Self::from_parts(
            resolve_token(Some(token)),
            constants::BASE_URL.to_string(),
            reqwest::Client::new(),
        )
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub(crate) fn from_parts(token: String, base_url: String, http: reqwest::Client) -> Self {
        Self {
            token,
            base_url,
            http,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Get available voices asynchronously, only of `language` if given.
    /// `None` returns every language, see [TTSMaker::get_voice_list] for `Some("zh")`.
    pub async fn get_voice_list(&self, language: Option<&str>) -> Result<serde_json::Value> {
        let url = voice_list_url(&self.base_url, &self.token, language)?;
        tracing::debug!(endpoint = constants::VOICE_LIST_PATH, ?language, "requesting voice list");
        Ok(self.http.get(url).send().await?.json().await?)
    }

    /// Create a tts order asynchronously. Fails with [Error::Order](crate::error::Error::Order)
    /// unless the service reports `success`.
    pub async fn create_tts_order(
        &self,
        text: &str,
        config: &OrderConfig,
    ) -> Result<TTSOrderAsync> {
        let url = endpoint(&self.base_url, constants::CREATE_ORDER_PATH)?;
        tracing::debug!(
            endpoint = constants::CREATE_ORDER_PATH,
            voice_id = config.voice_id,
            characters = text.chars().count(),
            "creating tts order"
        );
        let response: serde_json::Value = self
            .http
            .post(url)
            .json(&CreateOrderRequest::new(&self.token, text, config))
            .send()
            .await?
            .json()
            .await?;
        Ok(self.restore_order(OrderInfo::from_created(response)?))
    }

    pub async fn get_token_status(&self) -> Result<serde_json::Value> {
        let url = token_status_url(&self.base_url, &self.token)?;
        tracing::debug!(endpoint = constants::TOKEN_STATUS_PATH, "requesting token status");
        Ok(self.http.get(url).send().await?.json().await?)
    }

    pub fn restore_order(&self, info: impl Into<OrderInfo>) -> TTSOrderAsync {
        TTSOrderAsync {
            info: info.into(),
            http: self.http.clone(),
        }
    }
}

/// Async tts order
#[derive(Debug, Clone)]
pub struct TTSOrderAsync {
    info: OrderInfo,
    http: reqwest::Client,
}

impl TTSOrderAsync {
    pub fn info(&self) -> &OrderInfo {
        &self.info
    }

    pub fn into_info(self) -> OrderInfo {
        self.info
    }

    /// Download the audio and write it to `{filename}.{audio_file_type}` asynchronously.
    /// Same rules as [TTSOrder::save_audio].
    pub async fn save_audio(&self, filename: impl AsRef<Path>) -> Result<PathBuf> {
        let (url, path) = self.info.audio_target(filename.as_ref())?;
        let response = self.http.get(url).send().await?;
        if response.status() != reqwest::StatusCode::OK {
            tracing::warn!(url, status = %response.status(), "audio download failed");
            return Err(download_error(url));
        }
        let bytes = response.bytes().await?;
        tokio::fs::write(&path, &bytes).await?;
        tracing::info!(path = %path.display(), bytes = bytes.len(), "audio file saved");
        Ok(path)
    }
}
