pub(crate) static BASE_URL: &str = "https://api.ttsmaker.cn/v1/";
pub(crate) static DEMO_TOKEN: &str = "ttsmaker_demo_token";

pub(crate) static VOICE_LIST_PATH: &str = "get-voice-list";
pub(crate) static CREATE_ORDER_PATH: &str = "create-tts-order";
pub(crate) static TOKEN_STATUS_PATH: &str = "get-token-status";

pub(crate) static STATUS_SUCCESS: &str = "success";
pub(crate) static UNKNOWN_ERROR: &str = "Unknown error";
