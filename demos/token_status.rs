use ttsmaker::client::TTSMaker;

fn main() {
    let token = std::env::var("TTSMAKER_TOKEN").unwrap_or_default();
    let status = TTSMaker::new(&token).get_token_status().unwrap();
    println!("{:#}", status);
}
