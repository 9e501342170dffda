use crate::domain::model::{Images, ProjectAttributes};
use crate::domain::parse_timestamp;
use crate::domain::ports::ScratchApi;
use crate::domain::user::User;
use crate::domain::SITE_URL;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Arc;

/// A shared project as of the fetch that produced it.
#[derive(Clone)]
pub struct Project {
    attributes: ProjectAttributes,
    author: User,
    created_at: DateTime<Utc>,
    modified_at: DateTime<Utc>,
    shared_at: DateTime<Utc>,
    parent_id: Option<u64>,
    root_id: Option<u64>,
    api: Arc<dyn ScratchApi>,
}

impl Project {
    pub fn new(attributes: ProjectAttributes, api: Arc<dyn ScratchApi>) -> Result<Self> {
        let history = &attributes.history;
        let created_at = parse_timestamp("history.created", &history.created)?;
        let modified_at = parse_timestamp("history.modified", &history.modified)?;
        let shared_at = parse_timestamp("history.shared", &history.shared)?;
        let author = User::new(attributes.author.clone(), Arc::clone(&api))?;

        // A zero id means "no parent" just like null.
        let parent_id = attributes.remix.parent.filter(|id| *id != 0);
        let root_id = attributes.remix.root.filter(|id| *id != 0);

        Ok(Self {
            attributes,
            author,
            created_at,
            modified_at,
            shared_at,
            parent_id,
            root_id,
            api,
        })
    }

    pub fn id(&self) -> u64 {
        self.attributes.id
    }

    pub fn title(&self) -> &str {
        &self.attributes.title
    }

    pub fn description(&self) -> &str {
        &self.attributes.description
    }

    pub fn instructions(&self) -> &str {
        &self.attributes.instructions
    }

    pub fn visibility(&self) -> &str {
        &self.attributes.visibility
    }

    pub fn is_public(&self) -> bool {
        self.attributes.public
    }

    pub fn is_published(&self) -> bool {
        self.attributes.is_published
    }

    pub fn comments_allowed(&self) -> bool {
        self.attributes.comments_allowed
    }

    pub fn author(&self) -> &User {
        &self.author
    }

    pub fn image(&self) -> &str {
        &self.attributes.image
    }

    pub fn images(&self) -> &Images {
        &self.attributes.images
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn modified_at(&self) -> DateTime<Utc> {
        self.modified_at
    }

    pub fn shared_at(&self) -> DateTime<Utc> {
        self.shared_at
    }

    pub fn views(&self) -> u64 {
        self.attributes.stats.views
    }

    pub fn loves(&self) -> u64 {
        self.attributes.stats.loves
    }

    pub fn favorites(&self) -> u64 {
        self.attributes.stats.favorites
    }

    pub fn comments(&self) -> u64 {
        self.attributes.stats.comments
    }

    pub fn remixes(&self) -> u64 {
        self.attributes.stats.remixes
    }

    pub fn parent_id(&self) -> Option<u64> {
        self.parent_id
    }

    pub fn root_id(&self) -> Option<u64> {
        self.root_id
    }

    pub fn is_remix(&self) -> bool {
        self.parent_id.is_some()
    }

    pub fn attributes(&self) -> &ProjectAttributes {
        &self.attributes
    }

    pub fn url(&self) -> String {
        format!("{}/projects/{}/", SITE_URL, self.attributes.id)
    }

    /// The project this one was remixed from. No request is made for originals.
    pub async fn parent(&self) -> Result<Option<Project>> {
        match self.parent_id {
            Some(id) => self.api.project(id).await.map(Some),
            None => Ok(None),
        }
    }

    /// The original at the top of the remix tree. No request is made for originals.
    pub async fn root(&self) -> Result<Option<Project>> {
        match self.root_id {
            Some(id) => self.api.project(id).await.map(Some),
            None => Ok(None),
        }
    }
}

impl fmt::Debug for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Project")
            .field("id", &self.attributes.id)
            .field("title", &self.attributes.title)
            .field("author", &self.author.username())
            .field("parent_id", &self.parent_id)
            .field("root_id", &self.root_id)
            .finish_non_exhaustive()
    }
}
