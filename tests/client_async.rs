use mockito::{Matcher, Server};
use serde_json::json;
use ttsmaker::{
    client::TTSMakerAsync,
    config::ClientBuilder,
    error::Error,
    order::{OrderConfig, OrderStatus},
};

fn client(server: &Server, token: &str) -> TTSMakerAsync {
    ClientBuilder::new()
        .token(token)
        .base_url(format!("{}/v1/", server.url()))
        .build_async()
        .unwrap()
}

#[tokio::test]
async fn voice_list_is_returned_unmodified() {
    let mut server = Server::new_async().await;
    let body = json!({"en": [{"id": 148, "name": "Emma"}]});
    let mock = server
        .mock("GET", "/v1/get-voice-list")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("token".into(), "ttsmaker_demo_token".into()),
            Matcher::UrlEncoded("language".into(), "en".into()),
        ]))
        .with_body(body.to_string())
        .create_async()
        .await;

    let voices = client(&server, "").get_voice_list(Some("en")).await.unwrap();
    assert_eq!(voices, body);
    mock.assert_async().await;
}

#[tokio::test]
async fn create_order_with_custom_config_and_save_audio() {
    let mut server = Server::new_async().await;
    let audio_url = format!("{}/file/b.opus", server.url());
    server
        .mock("POST", "/v1/create-tts-order")
        .match_body(Matcher::PartialJson(json!({
            "token": "my_token",
            "audio_format": "opus",
            "audio_speed": 0.5,
            "audio_volume": 8.0,
            "text_paragraph_pause_time": 500
        })))
        .with_body(
            json!({
                "status": "success",
                "audio_file_url": audio_url,
                "audio_file_type": "opus",
                "tts_order_characters": 5
            })
            .to_string(),
        )
        .create_async()
        .await;
    server
        .mock("GET", "/file/b.opus")
        .with_body(b"OggS\x00\x02")
        .create_async()
        .await;

    let config = OrderConfig {
        audio_format: "opus".to_string(),
        audio_speed: 0.5,
        audio_volume: 8.0,
        text_paragraph_pause_time: 500,
        ..OrderConfig::new(148)
    };
    let order = client(&server, "my_token")
        .create_tts_order("hello", &config)
        .await
        .unwrap();
    assert_eq!(order.info().status, OrderStatus::Success);
    assert_eq!(order.info().raw["tts_order_characters"], json!(5));

    let dir = tempfile::tempdir().unwrap();
    let path = order.save_audio(dir.path().join("b")).await.unwrap();
    assert_eq!(path, dir.path().join("b.opus"));
    assert_eq!(std::fs::read(&path).unwrap(), b"OggS\x00\x02");
}

#[tokio::test]
async fn rejected_order_is_an_order_error() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/v1/create-tts-order")
        .match_body(Matcher::PartialJson(json!({"token": "ttsmaker_demo_token"})))
        .with_body(r#"{"status":"error"}"#)
        .create_async()
        .await;

    let err = client(&server, "")
        .create_tts_order("hello", &OrderConfig::new(1))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Order(ref msg) if msg == "TTS generation failed: Unknown error"));
}

#[tokio::test]
async fn failed_order_never_downloads() {
    let mut server = Server::new_async().await;
    let download = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let order = client(&server, "").restore_order(json!({
        "status": "failed",
        "audio_file_url": format!("{}/file/a.mp3", server.url()),
        "audio_file_type": "mp3"
    }));
    let dir = tempfile::tempdir().unwrap();
    let err = order.save_audio(dir.path().join("a")).await.unwrap_err();
    assert!(err.is_order_error());
    download.assert_async().await;
}

#[tokio::test]
async fn failed_download_writes_nothing() {
    let mut server = Server::new_async().await;
    let audio_url = format!("{}/file/a.aac", server.url());
    server
        .mock("GET", "/file/a.aac")
        .with_status(500)
        .create_async()
        .await;

    let order = client(&server, "").restore_order(json!({
        "status": "success",
        "audio_file_url": audio_url,
        "audio_file_type": "aac"
    }));
    let dir = tempfile::tempdir().unwrap();
    let err = order.save_audio(dir.path().join("a")).await.unwrap_err();
    assert!(err.to_string().ends_with(&audio_url));
    assert!(!dir.path().join("a.aac").exists());
}

#[tokio::test]
async fn token_status_uses_demo_token_by_default() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/get-token-status")
        .match_query(Matcher::Exact("token=ttsmaker_demo_token".into()))
        .with_body(r#"{"status":"success","remaining_characters":100}"#)
        .create_async()
        .await;

    let tts = ClientBuilder::new()
        .base_url(format!("{}/v1", server.url()))
        .build_async()
        .unwrap();
    assert_eq!(tts.token(), "ttsmaker_demo_token");
    let status = tts.get_token_status().await.unwrap();
    assert_eq!(status["remaining_characters"], json!(100));
    mock.assert_async().await;
}
