//! JSON shapes returned by `GET /ps/projects`.

use serde::Deserialize;

use crate::projects::ProjectItem;

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectsResponse {
    pub projects: Vec<RawProject>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawProject {
    pub id: String,
    pub name: String,
    pub image_url: String,
}

impl From<RawProject> for ProjectItem {
    fn from(raw: RawProject) -> Self {
        ProjectItem {
            id: raw.id,
            name: raw.name,
            image_url: raw.image_url,
        }
    }
}

impl ProjectsResponse {
    /// Normalize every raw record, keeping server order.
    pub fn into_items(self) -> Vec<ProjectItem> {
        self.projects.into_iter().map(ProjectItem::from).collect()
    }
}
