//! Client configuration
//!
//! Use [ClientBuilder] when the defaults of [TTSMaker::new](crate::client::TTSMaker::new)
//! are not enough: a custom base url (self-hosted mirror, local test server) or a proxy.

use crate::{client::TTSMakerAsync, constants, error::Result};
use url::Url;

#[cfg(feature = "blocking")]
use crate::client::TTSMaker;

pub(crate) const REDACTED: &str = "<redacted>";

#[derive(Clone)]
struct ProxyConfig {
    url: String,
    username: Option<String>,
    password: Option<String>,
}

impl std::fmt::Debug for ProxyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProxyConfig")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| REDACTED))
            .finish()
    }
}

/// Builder for [TTSMaker](crate::client::TTSMaker) and [TTSMakerAsync].
#[derive(Clone, Default)]
pub struct ClientBuilder {
    token: Option<String>,
    base_url: Option<String>,
    proxy: Option<ProxyConfig>,
}

impl std::fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("token", &self.token.as_ref().map(|_| REDACTED))
            .field("base_url", &self.base_url)
            .field("proxy", &self.proxy)
            .finish()
    }
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Developer token. An empty token falls back to the demo token.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Override `https://api.ttsmaker.cn/v1/`. A missing trailing `/` is added.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Send every request, audio downloads included, through a proxy.
    ///
    /// The proxy protocol is specified by the URI scheme.
    ///
    /// `http`: Proxy. Default when no scheme is specified.
    /// `https`: HTTPS Proxy.
    /// `socks5`: SOCKS5 Proxy.
    /// `socks5h`: SOCKS5 Proxy. Proxy resolves URL hostname.
    ///
    /// Basic authentication is used only when both `username` and `password` are given.
    pub fn proxy(mut self, proxy: &str, username: Option<&str>, password: Option<&str>) -> Self {
        self.proxy = Some(ProxyConfig {
            url: proxy.to_string(),
            username: username.map(str::to_string),
            password: password.map(str::to_string),
        });
        self
    }

    /// Build a blocking [TTSMaker].
    #[cfg(feature = "blocking")]
    pub fn build(self) -> Result<TTSMaker> {
        let mut builder = reqwest::blocking::Client::builder();
        if let Some(proxy) = self.reqwest_proxy()? {
            builder = builder.proxy(proxy);
        }
        Ok(TTSMaker::from_parts(
            self.resolve_token(),
            self.resolve_base_url()?,
            builder.build()?,
        ))
    }

    /// Build an async [TTSMakerAsync].
    pub fn build_async(self) -> Result<TTSMakerAsync> {
        let mut builder = reqwest::Client::builder();
        if let Some(proxy) = self.reqwest_proxy()? {
            builder = builder.proxy(proxy);
        }
        Ok(TTSMakerAsync::from_parts(
            self.resolve_token(),
            self.resolve_base_url()?,
            builder.build()?,
        ))
    }

    fn resolve_token(&self) -> String {
        resolve_token(self.token.as_deref())
    }

    fn resolve_base_url(&self) -> Result<String> {
        let base_url = self.base_url.as_deref().unwrap_or(constants::BASE_URL);
        let base_url = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        Url::parse(&base_url)?;
        Ok(base_url)
    }

    fn reqwest_proxy(&self) -> Result<Option<reqwest::Proxy>> {
        let Some(ref config) = self.proxy else {
            return Ok(None);
        };
        let mut proxy = reqwest::Proxy::all(config.url.as_str())?;
        if let (Some(username), Some(password)) = (&config.username, &config.password) {
            proxy = proxy.basic_auth(username, password);
        }
        Ok(Some(proxy))
    }
}

pub(crate) fn endpoint(base_url: &str, path: &str) -> Result<Url> {
    Ok(Url::parse(base_url)?.join(path)?)
}

pub(crate) fn resolve_token(token: Option<&str>) -> String {
    match token {
        Some(token) if !token.is_empty() => token.to_string(),
        _ => constants::DEMO_TOKEN.to_string(),
    }
}
