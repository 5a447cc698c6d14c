//! cw-case: case file format and validation.
//!
//! A case is stored as YAML (`.yaml`, `.yml`) or JSON (`.json`); the format is
//! picked from the file extension.

pub mod schema;
pub mod validate;

use std::path::Path;

pub use schema::{Case, DEFAULT_MAX_ITERATIONS};
pub use validate::{ValidationError, validate_case};

pub type CaseResult<T> = Result<T, CaseError>;

#[derive(thiserror::Error, Debug)]
pub enum CaseError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unsupported case file extension: {path}")]
    UnsupportedFormat { path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseFormat {
    Yaml,
    Json,
}

impl CaseFormat {
    pub fn from_path(path: &Path) -> CaseResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("yaml") | Some("yml") => Ok(CaseFormat::Yaml),
            Some("json") => Ok(CaseFormat::Json),
            _ => Err(CaseError::UnsupportedFormat {
                path: path.display().to_string(),
            }),
        }
    }
}

pub fn load_yaml(path: &Path) -> CaseResult<Case> {
    let content = std::fs::read_to_string(path)?;
    from_yaml_str(&content)
}

pub fn from_yaml_str(content: &str) -> CaseResult<Case> {
    let case: Case = serde_yaml::from_str(content)?;
    validate_case(&case)?;
    Ok(case)
}

pub fn save_yaml(path: &Path, case: &Case) -> CaseResult<()> {
    validate_case(case)?;
    let content = serde_yaml::to_string(case)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> CaseResult<Case> {
    let content = std::fs::read_to_string(path)?;
    let case: Case = serde_json::from_str(&content)?;
    validate_case(&case)?;
    Ok(case)
}

pub fn save_json(path: &Path, case: &Case) -> CaseResult<()> {
    validate_case(case)?;
    let content = serde_json::to_string_pretty(case)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load a case, choosing the format from the extension.
pub fn load(path: &Path) -> CaseResult<Case> {
    match CaseFormat::from_path(path)? {
        CaseFormat::Yaml => load_yaml(path),
        CaseFormat::Json => load_json(path),
    }
}

/// Save a case, choosing the format from the extension.
pub fn save(path: &Path, case: &Case) -> CaseResult<()> {
    match CaseFormat::from_path(path)? {
        CaseFormat::Yaml => save_yaml(path, case),
        CaseFormat::Json => save_json(path, case),
    }
}
