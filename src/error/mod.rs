use thiserror::Error;

#[derive(Error, Debug)]
pub enum EbmError {
    #[error("Invalid option: {option} = {value}")]
    InvalidOption { option: String, value: String },
    #[error("Unknown topic: {0}")]
    UnknownTopic(String),
    #[error("Error parsing options: {0}")]
    Json(#[from] serde_json::Error),
}
