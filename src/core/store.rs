/// Record store
///
/// Read-only view over the four portfolio collections. The interpreter
/// only ever sees this, never the writable `Database`.

use crate::db::{Contact, Database, Experience, Project, Skill};
use crate::error::Result;
use std::sync::Arc;
use tracing::debug;

/// Handles record retrieval operations
#[derive(Clone)]
pub struct RecordStore {
    db: Arc<Database>,
}

impl RecordStore {
    /// Create a new store instance
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Projects in insertion order
    pub async fn projects(&self) -> Result<Vec<Project>> {
        let projects = self.db.get_projects().await?;
        debug!(count = projects.len(), "Fetched projects");
        Ok(projects)
    }

    /// Skills, descending by proficiency
    pub async fn skills(&self) -> Result<Vec<Skill>> {
        let skills = self.db.get_skills().await?;
        debug!(count = skills.len(), "Fetched skills");
        Ok(skills)
    }

    /// Contacts, ascending by channel kind
    pub async fn contacts(&self) -> Result<Vec<Contact>> {
        let contacts = self.db.get_contacts().await?;
        debug!(count = contacts.len(), "Fetched contacts");
        Ok(contacts)
    }

    /// Experience entries in insertion order
    pub async fn experience(&self) -> Result<Vec<Experience>> {
        let experience = self.db.get_experience().await?;
        debug!(count = experience.len(), "Fetched experience");
        Ok(experience)
    }
}
