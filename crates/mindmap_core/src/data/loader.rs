//! JSON document loading for the mind-map tree.
//!
//! # Responsibility
//! - Resolve the single data source location.
//! - Read, decode and validate the tree in one step.
//! - Shape failures into the user-facing load status.
//!
//! # Invariants
//! - A load either yields a fully validated tree or an error; never a partial tree.
//! - No retries, no timeouts.

use crate::model::node::{validate_tree, MindMapNode, TreeValidationError};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Default location of the mind-map document, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "assets/data/mind-map-data.json";
/// Environment variable overriding [`DEFAULT_DATA_PATH`].
pub const DATA_PATH_ENV: &str = "MINDMAP_DATA_PATH";

const LOAD_FAILURE_PREFIX: &str = "Failed to load mind map data";
const UNKNOWN_ERROR: &str = "Unknown error";

/// Result type for loader APIs.
pub type LoadResult<T> = Result<T, LoadError>;

/// Loader error for file access, decoding and tree validation.
#[derive(Debug)]
pub enum LoadError {
    /// The document cannot be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The document is not a valid node tree in JSON form.
    Parse(serde_json::Error),
    /// The document decodes but breaks a hierarchy invariant.
    Invalid(TreeValidationError),
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid mind map document: {err}"),
            Self::Invalid(err) => write!(f, "invalid mind map tree: {err}"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Invalid(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

impl From<TreeValidationError> for LoadError {
    fn from(value: TreeValidationError) -> Self {
        Self::Invalid(value)
    }
}

/// Location of the mind-map document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSource {
    pub path: PathBuf,
}

impl DataSource {
    /// Creates a source for an explicit path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolves the source from `MINDMAP_DATA_PATH`, falling back to the default path.
    ///
    /// Blank environment values are ignored.
    pub fn resolve() -> Self {
        Self::from_env_value(std::env::var(DATA_PATH_ENV).ok().as_deref())
    }

    fn from_env_value(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(trimmed) if !trimmed.is_empty() => Self::new(trimmed),
            _ => Self::default(),
        }
    }
}

impl Default for DataSource {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_PATH)
    }
}

/// Reads and validates the mind-map document at `source`.
pub fn load_mind_map(source: &DataSource) -> LoadResult<MindMapNode> {
    let result = read_document(&source.path).and_then(|text| parse_mind_map(&text));
    match &result {
        Ok(root) => info!(
            "event=data_load module=data status=ok nodes={} domains={}",
            root.node_count(),
            root.domains().len()
        ),
        Err(err) => error!(
            "event=data_load module=data status=error path={} error={}",
            source.path.display(),
            err
        ),
    }
    result
}

/// Decodes and validates a mind-map document from JSON text.
pub fn parse_mind_map(text: &str) -> LoadResult<MindMapNode> {
    let root: MindMapNode = serde_json::from_str(text)?;
    validate_tree(&root)?;
    Ok(root)
}

fn read_document(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Progress of the one-shot data load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// Load in flight; the loading indicator is shown.
    #[default]
    Loading,
    /// Tree loaded and installed as the view root.
    Ready,
    /// Load failed; `message` is shown instead of the map.
    Failed { message: String },
}

impl LoadStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns the user-facing failure message, if any.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Builds the user-facing message for a failed load.
///
/// Falls back to `Unknown error` when the failure has no description.
pub fn load_failure_message(err: &dyn Error) -> String {
    let description = err.to_string();
    let description = description.trim();
    if description.is_empty() {
        format!("{LOAD_FAILURE_PREFIX}: {UNKNOWN_ERROR}")
    } else {
        format!("{LOAD_FAILURE_PREFIX}: {description}")
    }
}
