use ttsmaker::config::ClientBuilder;

fn main() {
    // socks5 proxy
    let tts = ClientBuilder::new()
        .proxy("socks5h://localhost:10808", None, None)
        .build()
        .unwrap();
    println!("{:#}", tts.get_voice_list(Some("zh")).unwrap());

    // http proxy
    let tts = ClientBuilder::new()
        .proxy("http://localhost:10809", Some("user"), Some("password"))
        .build()
        .unwrap();
    println!("{:#}", tts.get_voice_list(Some("zh")).unwrap());
}
