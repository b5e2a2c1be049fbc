//! Error types for post scaffolding

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while preparing a new post
#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Post title is empty")]
    EmptyTitle,

    #[error("Post title {title:?} must fit on one line")]
    InvalidTitle { title: String },

    #[error("Slug {slug:?} is not a valid directory name")]
    InvalidSlug { slug: String },

    #[error("Post already exists: {}", path.display())]
    AlreadyExists { path: PathBuf },

    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl ScaffoldError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
