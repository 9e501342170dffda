use crate::domain::model::{Images, UserAttributes};
use crate::domain::ordering::{sort_projects, ProjectOrder};
use crate::domain::parse_timestamp;
use crate::domain::ports::ScratchApi;
use crate::domain::project::Project;
use crate::domain::SITE_URL;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Arc;

/// A Scratch account as of the fetch that produced it.
#[derive(Clone)]
pub struct User {
    attributes: UserAttributes,
    joined_at: DateTime<Utc>,
    api: Arc<dyn ScratchApi>,
}

impl User {
    pub fn new(attributes: UserAttributes, api: Arc<dyn ScratchApi>) -> Result<Self> {
        let joined_at = parse_timestamp("history.joined", &attributes.history.joined)?;
        Ok(Self {
            attributes,
            joined_at,
            api,
        })
    }

    pub fn id(&self) -> u64 {
        self.attributes.id
    }

    pub fn username(&self) -> &str {
        &self.attributes.username
    }

    pub fn is_scratch_team(&self) -> bool {
        self.attributes.scratchteam
    }

    pub fn joined_at(&self) -> DateTime<Utc> {
        self.joined_at
    }

    pub fn images(&self) -> &Images {
        &self.attributes.profile.images
    }

    pub fn status(&self) -> &str {
        &self.attributes.profile.status
    }

    pub fn bio(&self) -> &str {
        &self.attributes.profile.bio
    }

    pub fn country(&self) -> &str {
        &self.attributes.profile.country
    }

    pub fn attributes(&self) -> &UserAttributes {
        &self.attributes
    }

    pub fn url(&self) -> String {
        format!("{}/users/{}/", SITE_URL, self.attributes.username)
    }

    /// Fetches every shared project, optionally sorted client-side.
    pub async fn projects(&self, order: Option<ProjectOrder>) -> Result<Vec<Project>> {
        let mut projects = self.api.projects(self.username()).await?;
        if let Some(order) = order {
            sort_projects(&mut projects, order);
        }
        Ok(projects)
    }

    pub async fn favorites(&self) -> Result<Vec<Project>> {
        self.api.favorites(self.username()).await
    }

    pub async fn following(&self) -> Result<Vec<User>> {
        self.api.following(self.username()).await
    }

    pub async fn followers(&self) -> Result<Vec<User>> {
        self.api.followers(self.username()).await
    }

    pub async fn message_count(&self) -> Result<u64> {
        self.api.message_count(self.username()).await
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.attributes.id)
            .field("username", &self.attributes.username)
            .field("joined_at", &self.joined_at)
            .finish_non_exhaustive()
    }
}
