use crate::domain::project::Project;
use crate::domain::user::User;
use crate::utils::error::Result;
use async_trait::async_trait;

/// The fetch operations domain objects delegate to when resolving related
/// resources. [`crate::Client`] is the production implementation.
#[async_trait]
pub trait ScratchApi: Send + Sync {
    /// `Ok(None)` when the account does not exist.
    async fn user(&self, username: &str) -> Result<Option<User>>;
    async fn project(&self, id: u64) -> Result<Project>;
    async fn projects(&self, username: &str) -> Result<Vec<Project>>;
    async fn favorites(&self, username: &str) -> Result<Vec<Project>>;
    async fn followers(&self, username: &str) -> Result<Vec<User>>;
    async fn following(&self, username: &str) -> Result<Vec<User>>;
    async fn message_count(&self, username: &str) -> Result<u64>;
}
