use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptGenError {
    #[error("store error: {0}")] Store(#[from] rusqlite::Error),
    #[error("json error: {0}")] Json(#[from] serde_json::Error),
    #[error("io error: {0}")] Io(#[from] std::io::Error),
    #[error("unknown field: {0}")] UnknownField(String),
    #[error("field {field} holds {kind}, not {requested}")] FieldKind {
        field: String,
        kind: &'static str,
        requested: &'static str,
    },
    #[error("not a yes/no value: {0}")] InvalidBool(String),
    #[error("config error: {0}")] Config(String),
}

pub type Result<T> = std::result::Result<T, PromptGenError>;
