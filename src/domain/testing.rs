//! Factories and an in-memory `ScratchApi` for unit tests.

use crate::domain::model::{
    ProfileAttributes, ProjectAttributes, ProjectHistory, ProjectStats, RemixAttributes,
    UserAttributes, UserHistory,
};
use crate::domain::ordering::SortKey;
use crate::domain::ports::ScratchApi;
use crate::domain::project::Project;
use crate::domain::user::User;
use crate::utils::error::{Result, ScratchError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub fn user_attributes(username: &str) -> UserAttributes {
    let images = ["90x90", "60x60", "55x55", "50x50", "32x32"]
        .iter()
        .map(|size| {
            (
                size.to_string(),
                format!("https://cdn2.scratch.mit.edu/get_image/user/{username}_{size}.png"),
            )
        })
        .collect();

    UserAttributes {
        id: 42,
        username: username.to_string(),
        scratchteam: false,
        history: UserHistory {
            joined: "2019-05-04T12:00:00.000Z".to_string(),
        },
        profile: ProfileAttributes {
            id: Some(4200),
            images,
            status: "Making games".to_string(),
            bio: "I like cats.".to_string(),
            country: "Canada".to_string(),
        },
    }
}

pub fn project_attributes(id: u64) -> ProjectAttributes {
    ProjectAttributes {
        id,
        title: format!("Project {id}"),
        description: "A small game".to_string(),
        instructions: "Press the green flag".to_string(),
        visibility: "visible".to_string(),
        public: true,
        comments_allowed: true,
        is_published: true,
        author: user_attributes("author"),
        image: format!("https://cdn2.scratch.mit.edu/get_image/project/{id}_480x360.png"),
        images: HashMap::from([(
            "282x218".to_string(),
            format!("https://cdn2.scratch.mit.edu/get_image/project/{id}_282x218.png"),
        )]),
        history: ProjectHistory {
            created: "2021-01-01T00:00:00.000Z".to_string(),
            modified: "2021-02-01T00:00:00.000Z".to_string(),
            shared: "2021-03-01T00:00:00.000Z".to_string(),
        },
        stats: ProjectStats::default(),
        remix: RemixAttributes::default(),
    }
}

pub fn set_stat(attrs: &mut ProjectAttributes, key: SortKey, value: u64) {
    let stats = &mut attrs.stats;
    match key {
        SortKey::Views => stats.views = value,
        SortKey::Loves => stats.loves = value,
        SortKey::Favorites => stats.favorites = value,
        SortKey::Comments => stats.comments = value,
        SortKey::Remixes => stats.remixes = value,
        SortKey::CreatedAt | SortKey::ModifiedAt | SortKey::SharedAt => {
            panic!("{key:?} is not a stat")
        }
    }
}

/// Serves canned data, or fails every call with status 500 like a
/// transport with outbound connections disabled.
#[derive(Default)]
pub struct FakeApi {
    projects: Vec<ProjectAttributes>,
    failing: bool,
    calls: AtomicUsize,
    usernames: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            failing: true,
            ..Self::default()
        })
    }

    pub fn with_projects(projects: Vec<ProjectAttributes>) -> Arc<Self> {
        Arc::new(Self {
            projects,
            ..Self::default()
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requested_usernames(&self) -> Vec<String> {
        self.usernames.lock().unwrap().clone()
    }

    fn record(&self, username: Option<&str>) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(username) = username {
            self.usernames.lock().unwrap().push(username.to_string());
        }
        if self.failing {
            return Err(ScratchError::Request {
                status: 500,
                url: "fake://disabled".to_string(),
            });
        }
        Ok(())
    }

    fn build_projects(&self) -> Result<Vec<Project>> {
        self.projects
            .iter()
            .cloned()
            .map(|attrs| Project::new(attrs, FakeApi::failing()))
            .collect()
    }
}

#[async_trait]
impl ScratchApi for FakeApi {
    async fn user(&self, username: &str) -> Result<Option<User>> {
        self.record(Some(username))?;
        User::new(user_attributes(username), FakeApi::failing()).map(Some)
    }

    async fn project(&self, id: u64) -> Result<Project> {
        self.record(None)?;
        Project::new(project_attributes(id), FakeApi::failing())
    }

    async fn projects(&self, username: &str) -> Result<Vec<Project>> {
        self.record(Some(username))?;
        self.build_projects()
    }

    async fn favorites(&self, username: &str) -> Result<Vec<Project>> {
        self.record(Some(username))?;
        self.build_projects()
    }

    async fn followers(&self, username: &str) -> Result<Vec<User>> {
        self.record(Some(username))?;
        let follower = User::new(
            user_attributes(&format!("follower-of-{username}")),
            FakeApi::failing(),
        )?;
        Ok(vec![follower])
    }

    async fn following(&self, username: &str) -> Result<Vec<User>> {
        self.record(Some(username))?;
        let followed = User::new(
            user_attributes(&format!("followed-by-{username}")),
            FakeApi::failing(),
        )?;
        Ok(vec![followed])
    }

    async fn message_count(&self, username: &str) -> Result<u64> {
        self.record(Some(username))?;
        Ok(3)
    }
}
