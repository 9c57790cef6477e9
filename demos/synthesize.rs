use std::time::Instant;
use ttsmaker::{client::TTSMaker, order::OrderConfig};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let token = std::env::var("TTSMAKER_TOKEN").unwrap_or_default();
    let tts = TTSMaker::new(&token);
    let start = Instant::now();
    let order = tts
        .create_tts_order("Hello, World! 你好，世界！", &OrderConfig::new(148))
        .unwrap();
    println!("{:#}", order.info().raw);
    let path = order.save_audio("hello").unwrap();
    println!("saved to {}", path.display());
    println!("{:?}", Instant::now() - start);
}
