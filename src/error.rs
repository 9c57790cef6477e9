use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    /// Raised by the library itself. Only the message tells the cases apart.
    #[error("order error: {0}")]
    Order(String),
    #[error("reqwest error: {0}")]
    ReqwestError(#[from] reqwest::Error),
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("url error: {0}")]
    UrlError(#[from] url::ParseError),
}

impl Error {
    pub(crate) fn order(message: impl Into<String>) -> Self {
        Self::Order(message.into())
    }

    /// `true` for errors raised by this library rather than by the transport.
    pub fn is_order_error(&self) -> bool {
        matches!(self, Self::Order(_))
    }
}
