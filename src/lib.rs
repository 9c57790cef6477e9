//! This library is a wrapper of **TTSMaker** text to speech API.
//! You can list voices, create tts orders, check the quota of your token and save the synthesized audio.
//!
//! # Features
//! + `blocking`: sync [TTSMaker](client::TTSMaker) and [TTSOrder](client::TTSOrder). Default
//!
//! The async [TTSMakerAsync](client::TTSMakerAsync) is always available.
//!
//! # How to use
//! 1. Create a client with your developer token. An empty token uses the demo token `ttsmaker_demo_token`.
//! Use [ClientBuilder](config::ClientBuilder) for a proxy or another base url.
//!
//! 2. Pick a voice id with [get_voice_list](client::TTSMaker::get_voice_list).
//! The response is returned as [serde_json::Value] without any change.
//!
//! 3. Create an order with [create_tts_order](client::TTSMaker::create_tts_order) and an [OrderConfig](order::OrderConfig),
//! then call [save_audio](client::TTSOrder::save_audio). The file extension is the audio format of the order.
//!     ### Sync Client
//!     ```rust,no_run
//!     use ttsmaker::{client::TTSMaker, order::OrderConfig};
//!
//!     fn main() {
//!         let tts = TTSMaker::new("");
//!         let voices = tts.get_voice_list(Some("en")).unwrap();
//!         println!("{:#}", voices);
//!
//!         let order = tts
//!             .create_tts_order("Hello, World! 你好，世界！", &OrderConfig::new(148))
//!             .unwrap();
//!         let path = order.save_audio("hello").unwrap();
//!         println!("saved to {}", path.display());
//!
//!         println!("{:#}", tts.get_token_status().unwrap());
//!     }
//!     ```
//!     ### Async Client
//!     ```rust,no_run
//!     use ttsmaker::{client::TTSMakerAsync, order::OrderConfig};
//!
//!     #[tokio::main]
//!     async fn main() {
//!         let tts = TTSMakerAsync::new("");
//!         let config = OrderConfig {
//!             audio_format: "ogg".to_string(),
//!             audio_speed: 1.2,
//!             ..OrderConfig::new(148)
//!         };
//!         let order = tts
//!             .create_tts_order("Hello, World! 你好，世界！", &config)
//!             .await
//!             .unwrap();
//!         order.save_audio("hello").await.unwrap();
//!     }
//!     ```
//!     ### Proxy
//!     ```rust,no_run
//!     use ttsmaker::config::ClientBuilder;
//!
//!     fn main() {
//!         let tts = ClientBuilder::new()
//!             .token("my_developer_token")
//!             .proxy("socks5h://localhost:10808", None, None)
//!             .build()
//!             .unwrap();
//!         println!("{:#}", tts.get_token_status().unwrap());
//!     }
//!     ```
//!
//! Every failure the library raises by itself is [Error::Order](error::Error::Order),
//! transport and file system failures are passed through as their own variants.

mod constants;

pub mod client;
pub mod config;
pub mod error;
pub mod order;
pub mod voice;
