use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A link to a user as it appears in `sys.createdBy` / `sys.updatedBy`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub sys: LinkSys,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LinkSys {
    pub id: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct EnvironmentSys {
    id: String,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
    created_by: Option<Link>,
    updated_by: Option<Link>,
}

#[derive(Deserialize, Debug)]
struct RawEnvironment {
    name: String,
    sys: EnvironmentSys,
}

/// Snapshot of one environment in a space.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(from = "RawEnvironment")]
pub struct Environment {
    pub id: String,
    pub name: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
}

impl From<RawEnvironment> for Environment {
    fn from(raw: RawEnvironment) -> Self {
        Environment {
            id: raw.sys.id,
            name: raw.name,
            created_at: raw.sys.created_at,
            updated_at: raw.sys.updated_at,
            created_by: raw.sys.created_by.map(|link| link.sys.id),
            updated_by: raw.sys.updated_by.map(|link| link.sys.id),
        }
    }
}

impl Environment {
    /// Build a record with no audit metadata.
    pub fn new(id: &str, name: &str) -> Self {
        Environment {
            id: id.to_string(),
            name: name.to_string(),
            created_at: None,
            updated_at: None,
            created_by: None,
            updated_by: None,
        }
    }
}

#[derive(Deserialize, Debug)]
struct SpaceSys {
    id: String,
}

#[derive(Deserialize, Debug)]
struct RawSpace {
    name: String,
    sys: SpaceSys,
}

/// The top-level content container being queried.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(from = "RawSpace")]
pub struct Space {
    pub id: String,
    pub name: String,
}

impl From<RawSpace> for Space {
    fn from(raw: RawSpace) -> Self {
        Space {
            id: raw.sys.id,
            name: raw.name,
        }
    }
}

/// Paged collection envelope shared by every list endpoint.
#[derive(Deserialize, Debug)]
pub struct Collection<T> {
    pub total: usize,
    pub items: Vec<T>,
}
