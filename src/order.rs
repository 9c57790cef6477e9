//! OrderConfig, OrderStatus and the parsed order response.

use crate::{
    constants,
    error::{Error, Result},
};
use std::{ffi::OsString, path::PathBuf};

/// Audio formats the service documents for [OrderConfig::audio_format].
pub const AUDIO_FORMATS: [&str; 4] = ["mp3", "ogg", "aac", "opus"];

/// Synthesis parameters of a tts order.
///
/// Ranges are enforced by the service, not checked here.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderConfig {
    /// Voice id from the voice list.
    pub voice_id: i64,
    /// One of [AUDIO_FORMATS]. Default `mp3`.
    pub audio_format: String,
    /// 0.5 ~ 2.0, 1.0 is normal speed.
    pub audio_speed: f64,
    /// 0 ~ 10, each step adds 10% volume. 0 means no adjustment.
    pub audio_volume: f64,
    /// Pause inserted between paragraphs in milliseconds, 500 ~ 5000.
    /// At most 50 pauses are inserted, the service drops them all beyond that.
    /// 0 means no pause.
    pub text_paragraph_pause_time: u32,
}

impl OrderConfig {
    pub fn new(voice_id: i64) -> Self {
        Self {
            voice_id,
            audio_format: "mp3".to_string(),
            audio_speed: 1.0,
            audio_volume: 0.0,
            text_paragraph_pause_time: 0,
        }
    }
}

#[derive(serde::Serialize)]
pub(crate) struct CreateOrderRequest<'a> {
    token: &'a str,
    text: &'a str,
    voice_id: i64,
    audio_format: &'a str,
    audio_speed: f64,
    audio_volume: f64,
    text_paragraph_pause_time: u32,
}

impl<'a> CreateOrderRequest<'a> {
    pub(crate) fn new(token: &'a str, text: &'a str, config: &'a OrderConfig) -> Self {
        Self {
            token,
            text,
            voice_id: config.voice_id,
            audio_format: &config.audio_format,
            audio_speed: config.audio_speed,
            audio_volume: config.audio_volume,
            text_paragraph_pause_time: config.text_paragraph_pause_time,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Success,
    Failure,
}

/// Order response returned by the service.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderInfo {
    pub status: OrderStatus,
    pub error_details: Option<String>,
    pub audio_file_url: Option<String>,
    pub audio_file_type: Option<String>,
    /// The whole response, untouched.
    pub raw: serde_json::Value,
}

impl From<serde_json::Value> for OrderInfo {
    fn from(raw: serde_json::Value) -> Self {
        let status = if raw["status"].as_str() == Some(constants::STATUS_SUCCESS) {
            OrderStatus::Success
        } else {
            OrderStatus::Failure
        };
        let error_details = match &raw["error_details"] {
            serde_json::Value::Null => None,
            serde_json::Value::String(details) => Some(details.clone()),
            details => Some(details.to_string()),
        };
        Self {
            status,
            error_details,
            audio_file_url: raw["audio_file_url"].as_str().map(|x| x.to_owned()),
            audio_file_type: raw["audio_file_type"].as_str().map(|x| x.to_owned()),
            raw,
        }
    }
}

impl OrderInfo {
    pub fn is_success(&self) -> bool {
        self.status == OrderStatus::Success
    }

    /// Parse a create order response, failing unless its status is `success`.
    pub(crate) fn from_created(raw: serde_json::Value) -> Result<Self> {
        let info = Self::from(raw);
        if info.is_success() {
            Ok(info)
        } else {
            let details = info.error_details.as_deref().unwrap_or(constants::UNKNOWN_ERROR);
            tracing::warn!(details, "tts order rejected");
            Err(Error::order(format!("TTS generation failed: {}", details)))
        }
    }

    /// Audio url and output path `{filename}.{audio_file_type}` of a successful order.
    pub(crate) fn audio_target(&self, filename: impl Into<PathBuf>) -> Result<(&str, PathBuf)> {
        if !self.is_success() {
            return Err(Error::order(format!(
                "Cannot save audio. TTS generation failed: {}",
                self.error_details.as_deref().unwrap_or(constants::UNKNOWN_ERROR)
            )));
        }
        let url = self
            .audio_file_url
            .as_deref()
            .ok_or_else(|| Error::order("Cannot save audio. Order has no audio_file_url"))?;
        let audio_format = self
            .audio_file_type
            .as_deref()
            .ok_or_else(|| Error::order("Cannot save audio. Order has no audio_file_type"))?;

        let mut path = OsString::from(filename.into());
        path.push(".");
        path.push(audio_format);
        Ok((url, PathBuf::from(path)))
    }
}

pub(crate) fn download_error(url: &str) -> Error {
    Error::order(format!("Failed to download audio file from URL: {}", url))
}
