use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("unknown section id '{0}'")]
    UnknownSection(String),
    #[error("i/o failure at '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize site data: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to render template: {0}")]
    Render(#[from] askama::Error),
}

impl SiteError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    NotFound,
    Internal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl From<SiteError> for ApiError {
    fn from(value: SiteError) -> Self {
        let code = match value {
            SiteError::UnknownSection(_) => ErrorCode::NotFound,
            SiteError::Io { .. } | SiteError::Serialize(_) | SiteError::Render(_) => {
                ErrorCode::Internal
            }
        };
        Self::new(code, value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn unknown_section_maps_to_not_found() {
        let error = ApiError::from(SiteError::UnknownSection("blog".into()));
        assert_eq!(error.code, ErrorCode::NotFound);
        assert_eq!(error.message, "unknown section id 'blog'");
    }

    #[test]
    fn io_failure_names_the_path() {
        let error = SiteError::io("dist/index.html", io::Error::other("disk full"));
        assert_eq!(error.to_string(), "i/o failure at 'dist/index.html'");
        assert_eq!(ApiError::from(error).code, ErrorCode::Internal);
    }
}
