use thiserror::Error;

#[derive(Error, Debug)]
pub enum FileXError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Front-matter error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),

    #[error("Vault error: {0}")]
    Vault(String),
}

pub type Result<T> = std::result::Result<T, FileXError>;
