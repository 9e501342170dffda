use crate::core::client::Client;
use crate::domain::project::Project;
use crate::domain::user::User;
use crate::utils::error::Result;
use std::sync::OnceLock;

static DEFAULT_CLIENT: OnceLock<Client> = OnceLock::new();

/// The process-wide client behind [`Scratch`]. Built on first use and kept
/// for the life of the process.
pub fn default_client() -> &'static Client {
    DEFAULT_CLIENT.get_or_init(|| {
        tracing::debug!("Initializing default Scratch client");
        Client::new()
    })
}

/// Entry points that need no explicit client.
///
/// ```no_run
/// # async fn run() -> scratch_client::Result<()> {
/// use scratch_client::{ProjectOrder, Scratch, SortKey};
///
/// if let Some(user) = Scratch::user("griffpatch").await? {
///     let popular = user.projects(Some(ProjectOrder::desc(SortKey::Loves))).await?;
///     println!("{} has {} projects", user.username(), popular.len());
/// }
/// # Ok(()) }
/// ```
pub struct Scratch;

impl Scratch {
    pub async fn user(username: &str) -> Result<Option<User>> {
        default_client().user(username).await
    }

    pub async fn project(id: u64) -> Result<Project> {
        default_client().project(id).await
    }
}
