//! Typed async client for the [Scratch](https://scratch.mit.edu) REST API.
//!
//! Fetched [`User`]s and [`Project`]s are snapshots that can resolve related
//! resources on demand: a user's projects, favorites, followers and
//! following, or a project's remix parent and root.

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::ClientConfig;
pub use crate::core::{
    client::Client,
    scratch::{default_client, Scratch},
};
pub use crate::domain::ordering::{ProjectOrder, SortDirection, SortKey};
pub use crate::domain::ports::ScratchApi;
pub use crate::domain::project::Project;
pub use crate::domain::user::User;
pub use crate::utils::error::{Result, ScratchError};
