use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{} does not end with .gml or .xgmml", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<pest::error::Error<crate::gml::Rule>> for LoadError {
    fn from(e: pest::error::Error<crate::gml::Rule>) -> Self {
        Self::Parse(e.to_string())
    }
}
