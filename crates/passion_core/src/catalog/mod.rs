//! Fixed in-memory project catalog.
//!
//! # Responsibility
//! - Parse authored catalog JSON into validated [`Project`] records.
//! - Hold the catalog read-only for the process lifetime.
//!
//! # Invariants
//! - Project ids are non-empty and unique.
//! - Catalog order equals authoring order and is never re-sorted.
//! - No create/update/delete operation exists after construction.

use crate::fixtures::SEED_PROJECTS_JSON;
use crate::model::project::{Project, ProjectValidationError};
use log::{info, warn};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog construction failures.
#[derive(Debug)]
pub enum CatalogError {
    /// Catalog file could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Catalog text is not a JSON array of projects.
    Parse(serde_json::Error),
    /// One record violates a project invariant.
    InvalidProject(ProjectValidationError),
    DuplicateId(String),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read catalog `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid catalog json: {err}"),
            Self::InvalidProject(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(f, "duplicate project id in catalog: {id}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::InvalidProject(err) => Some(err),
            Self::DuplicateId(_) => None,
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

impl From<ProjectValidationError> for CatalogError {
    fn from(value: ProjectValidationError) -> Self {
        Self::InvalidProject(value)
    }
}

/// Read-only collection of all projects.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    /// Builds a catalog after validating every record and id uniqueness.
    pub fn new(projects: Vec<Project>) -> CatalogResult<Self> {
        let mut seen = HashSet::with_capacity(projects.len());
        for project in &projects {
            project.validate()?;
            if !seen.insert(project.id.as_str()) {
                warn!(
                    "event=catalog_load module=catalog status=error reason=duplicate_id id={}",
                    project.id
                );
                return Err(CatalogError::DuplicateId(project.id.clone()));
            }
        }

        Ok(Self { projects })
    }

    /// Parses a JSON array of projects in seed wire shape.
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let projects: Vec<Project> = serde_json::from_str(json)?;
        Self::new(projects)
    }

    /// Loads a catalog from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&text)?;
        info!(
            "event=catalog_load module=catalog status=ok source=file projects={}",
            catalog.len()
        );
        Ok(catalog)
    }

    /// Returns the built-in three-project demo catalog.
    pub fn seed() -> CatalogResult<Self> {
        let catalog = Self::from_json_str(SEED_PROJECTS_JSON)?;
        info!(
            "event=catalog_load module=catalog status=ok source=seed projects={}",
            catalog.len()
        );
        Ok(catalog)
    }

    /// All projects in catalog order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{Catalog, CatalogError};

    #[test]
    fn seed_catalog_keeps_authoring_order() {
        let catalog = Catalog::seed().expect("seed catalog should parse");
        let ids = catalog
            .projects()
            .iter()
            .map(|project| project.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn rejects_non_array_json() {
        let err = Catalog::from_json_str("{}").expect_err("object is not a catalog");
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn empty_array_is_a_valid_empty_catalog() {
        let catalog = Catalog::from_json_str("[]").expect("empty catalog");
        assert!(catalog.is_empty());
    }
}
