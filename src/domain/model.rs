//! Raw response records, deserialized exactly as the API sends them.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Image URLs keyed by pixel dimensions, e.g. `"90x90"`.
pub type Images = HashMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAttributes {
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub scratchteam: bool,
    pub history: UserHistory,
    pub profile: ProfileAttributes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserHistory {
    pub joined: String,
}

/// Project authors come back with only `id` and `images` in their profile,
/// so the text fields default to empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileAttributes {
    pub id: Option<u64>,
    #[serde(default)]
    pub images: Images,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectAttributes {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub visibility: String,
    pub public: bool,
    #[serde(default)]
    pub comments_allowed: bool,
    #[serde(default)]
    pub is_published: bool,
    pub author: UserAttributes,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub images: Images,
    pub history: ProjectHistory,
    pub stats: ProjectStats,
    pub remix: RemixAttributes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectHistory {
    pub created: String,
    pub modified: String,
    pub shared: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectStats {
    pub views: u64,
    pub loves: u64,
    pub favorites: u64,
    pub comments: u64,
    pub remixes: u64,
}

/// Both ids are `null` for an original project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemixAttributes {
    pub parent: Option<u64>,
    pub root: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageCount {
    pub count: u64,
}
