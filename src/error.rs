pub mod code;
pub mod formatter;

pub use code::ErrorCode;
pub use formatter::ErrorFormatter;

use std::path::PathBuf;
use thiserror::Error;

/// devcn-ui 統一エラー型
#[derive(Debug, Error)]
pub enum DevcnError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to fetch {url} (status: {status})")]
    RegistryFetch { url: String, status: u16 },

    #[error("Failed to parse JSON response from {url}: {source}")]
    RegistryParse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid registry URL: {0}")]
    InvalidRegistryUrl(String),

    #[error("Failed to parse {}: {source}", path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Command `{command}` exited with {status}")]
    CommandFailed { command: String, status: String },

    #[error("Failed to run `{command}`: {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to scaffold {component}: {source}")]
    Scaffold {
        component: String,
        #[source]
        source: Box<DevcnError>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DevcnError>;

impl DevcnError {
    /// 表示用のエラーコード
    pub fn code(&self) -> ErrorCode {
        match self {
            DevcnError::Network(_) => ErrorCode::Net001,
            DevcnError::RegistryFetch { .. } => ErrorCode::Reg001,
            DevcnError::RegistryParse { .. } => ErrorCode::Reg002,
            DevcnError::InvalidRegistryUrl(_) => ErrorCode::Reg003,
            DevcnError::ManifestParse { .. } => ErrorCode::Man001,
            DevcnError::CommandFailed { .. } => ErrorCode::Cmd001,
            DevcnError::CommandSpawn { .. } => ErrorCode::Cmd002,
            DevcnError::Scaffold { .. } => ErrorCode::Scf001,
            DevcnError::Io(_) => ErrorCode::Io001,
            DevcnError::Json(_) => ErrorCode::Int001,
        }
    }

    /// レジストリから取得できなかったエラーかどうか
    pub fn is_registry_unavailable(&self) -> bool {
        matches!(
            self,
            DevcnError::Network(_)
                | DevcnError::RegistryFetch { .. }
                | DevcnError::RegistryParse { .. }
        )
    }
}
