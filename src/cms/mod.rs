//! Content store adapter: typed queries against the headless CMS object API.

pub mod cosmic;
pub mod fixtures;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use cosmic::CosmicClient;
pub use fixtures::FixtureSource;

/// Errors raised while talking to the content store.
#[derive(Debug, thiserror::Error)]
pub enum CmsError {
    /// The store has no objects of the requested type.
    #[error("No '{object_type}' objects found")]
    NotFound { object_type: String },

    #[error("CMS rejected the read key")]
    Unauthorized,

    #[error("CMS returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("CMS request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Malformed CMS response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid CMS URL: {0}")]
    InvalidUrl(String),

    #[error("Fixture error: {0}")]
    Fixture(String),
}

impl CmsError {
    /// Check if this error is the store's "no such objects" answer.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// A single object listing request: type, projected props, relation depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectQuery {
    pub object_type: String,
    pub props: Vec<String>,
    pub depth: u8,
}

impl ObjectQuery {
    pub fn new(object_type: impl Into<String>) -> Self {
        Self {
            object_type: object_type.into(),
            props: Vec::new(),
            depth: 0,
        }
    }

    /// Restrict the returned fields. An empty projection returns everything.
    pub fn props(mut self, props: &[&str]) -> Self {
        self.props = props.iter().map(|p| p.to_string()).collect();
        self
    }

    /// Expand referenced objects inline up to `depth` levels.
    pub fn depth(mut self, depth: u8) -> Self {
        self.depth = depth;
        self
    }
}

/// Raw listing returned by the object API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObjectPage {
    #[serde(default)]
    pub objects: Vec<Value>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub limit: Option<u64>,
    #[serde(default)]
    pub skip: Option<u64>,
}

/// Anything that can answer object listing queries.
///
/// Implementations return loosely-typed records; mapping them into domain
/// entities is the caller's job.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn find_objects(&self, query: &ObjectQuery) -> Result<ObjectPage, CmsError>;
}
