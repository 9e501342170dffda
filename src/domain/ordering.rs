//! Client-side ordering of fetched project collections.

use crate::domain::project::Project;
use crate::utils::error::ScratchError;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    CreatedAt,
    ModifiedAt,
    SharedAt,
    Views,
    Loves,
    Favorites,
    Comments,
    Remixes,
}

impl SortKey {
    pub const ALL: [SortKey; 8] = [
        SortKey::CreatedAt,
        SortKey::ModifiedAt,
        SortKey::SharedAt,
        SortKey::Views,
        SortKey::Loves,
        SortKey::Favorites,
        SortKey::Comments,
        SortKey::Remixes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::CreatedAt => "createdAt",
            SortKey::ModifiedAt => "modifiedAt",
            SortKey::SharedAt => "sharedAt",
            SortKey::Views => "views",
            SortKey::Loves => "loves",
            SortKey::Favorites => "favorites",
            SortKey::Comments => "comments",
            SortKey::Remixes => "remixes",
        }
    }

    fn compare(&self, a: &Project, b: &Project) -> Ordering {
        match self {
            SortKey::CreatedAt => a.created_at().cmp(&b.created_at()),
            SortKey::ModifiedAt => a.modified_at().cmp(&b.modified_at()),
            SortKey::SharedAt => a.shared_at().cmp(&b.shared_at()),
            SortKey::Views => a.views().cmp(&b.views()),
            SortKey::Loves => a.loves().cmp(&b.loves()),
            SortKey::Favorites => a.favorites().cmp(&b.favorites()),
            SortKey::Comments => a.comments().cmp(&b.comments()),
            SortKey::Remixes => a.remixes().cmp(&b.remixes()),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts the API's camelCase names as well as snake_case.
impl FromStr for SortKey {
    type Err = ScratchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('_', "").to_ascii_lowercase();
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str().to_ascii_lowercase() == normalized)
            .ok_or_else(|| ScratchError::InvalidOrder {
                value: s.to_string(),
                reason: format!(
                    "unknown sort key, expected one of: {}",
                    SortKey::ALL.map(|key| key.as_str()).join(", ")
                ),
            })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => f.write_str("ASC"),
            SortDirection::Desc => f.write_str("DESC"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = ScratchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ASC" => Ok(SortDirection::Asc),
            "DESC" => Ok(SortDirection::Desc),
            _ => Err(ScratchError::InvalidOrder {
                value: s.to_string(),
                reason: "direction must be ASC or DESC".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProjectOrder {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl ProjectOrder {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    pub fn asc(key: SortKey) -> Self {
        Self::new(key, SortDirection::Asc)
    }

    pub fn desc(key: SortKey) -> Self {
        Self::new(key, SortDirection::Desc)
    }

    /// Parses a key and a direction given separately, e.g. `("createdAt", "DESC")`.
    pub fn parse(key: &str, direction: &str) -> Result<Self, ScratchError> {
        Ok(Self::new(key.parse()?, direction.parse()?))
    }

    pub fn compare(&self, a: &Project, b: &Project) -> Ordering {
        let ordering = self.key.compare(a, b);
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Stable sort: projects that compare equal keep their fetched order.
pub fn sort_projects(projects: &mut [Project], order: ProjectOrder) {
    projects.sort_by(|a, b| order.compare(a, b));
}
