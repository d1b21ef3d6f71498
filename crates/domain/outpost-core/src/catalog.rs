use serde::{Deserialize, Serialize};

use crate::ProjectRecord;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("project '{0}' not found")]
pub struct NotFoundError(pub String);

/// Ordered, read-only list of projects shown in the gallery.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectCatalog {
    projects: Vec<ProjectRecord>,
}

impl ProjectCatalog {
    pub fn new(projects: Vec<ProjectRecord>) -> Self {
        Self { projects }
    }

    pub fn find(&self, id: &str) -> Option<&ProjectRecord> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn get(&self, id: &str) -> Result<&ProjectRecord, NotFoundError> {
        self.find(id).ok_or_else(|| NotFoundError(id.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProjectRecord> {
        self.projects.iter()
    }

    pub fn as_slice(&self) -> &[ProjectRecord] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

impl From<Vec<ProjectRecord>> for ProjectCatalog {
    fn from(projects: Vec<ProjectRecord>) -> Self {
        Self::new(projects)
    }
}
