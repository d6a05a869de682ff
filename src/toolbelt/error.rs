use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolbeltError {
    #[error("No catalog file selected: pass --file or set one with `toolbelt config catalog <path>`")]
    MissingPath,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("{0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, ToolbeltError>;
