use std::time::Instant;
use ttsmaker::{client::TTSMakerAsync, order::OrderConfig};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let tts = TTSMakerAsync::default();
    let config = OrderConfig {
        audio_format: "ogg".to_string(),
        audio_speed: 1.2,
        text_paragraph_pause_time: 800,
        ..OrderConfig::new(148)
    };
    let start = Instant::now();
    let order = tts
        .create_tts_order("Hello, World!\n\n你好，世界！", &config)
        .await
        .unwrap();
    let path = order.save_audio("hello_async").await.unwrap();
    println!("saved to {}", path.display());
    println!("{:?}", Instant::now() - start);
}
