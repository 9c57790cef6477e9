use std::time::Instant;
use ttsmaker::client::TTSMaker;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let tts = TTSMaker::default();
    let start = Instant::now();
    let voices = tts.get_voice_list(Some("en")).unwrap();
    println!("{:#}", voices);
    println!("{:?}", Instant::now() - start);
}
