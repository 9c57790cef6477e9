use std::time::Instant;
use ttsmaker::client::TTSMakerAsync;

#[tokio::main]
async fn main() {
    let start = Instant::now();
    let voices = TTSMakerAsync::default().get_voice_list(None).await.unwrap();
    println!("{:#}", voices);
    println!("{:?}", Instant::now() - start);
}
