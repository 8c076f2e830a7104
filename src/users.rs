use crate::environment::LinkSys;
use serde::Deserialize;
use std::collections::HashMap;

/// Resolved details of a space member.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

impl UserInfo {
    fn full_name(&self) -> Option<String> {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }

    fn email(&self) -> Option<&str> {
        self.email
            .as_deref()
            .map(str::trim)
            .filter(|email| !email.is_empty())
    }
}

/// User entry as returned under `includes.User`.
#[derive(Deserialize, Debug)]
pub struct IncludedUser {
    pub sys: LinkSys,
    #[serde(flatten)]
    pub info: UserInfo,
}

/// Users keyed by id.
pub type UserDirectory = HashMap<String, UserInfo>;

pub fn directory_from(users: Vec<IncludedUser>) -> UserDirectory {
    users
        .into_iter()
        .map(|user| (user.sys.id, user.info))
        .collect()
}

/// Render a user reference for the report.
///
/// A resolved user renders as `First Last (email)`, degrading to the email
/// alone and then the raw id. Without a directory every id renders raw.
pub fn format_user(user_id: &str, directory: Option<&UserDirectory>) -> String {
    let Some(info) = directory.and_then(|users| users.get(user_id)) else {
        return user_id.to_string();
    };

    match (info.full_name(), info.email()) {
        (Some(name), Some(email)) => format!("{} ({})", name, email),
        (Some(name), None) => name,
        (None, Some(email)) => email.to_string(),
        (None, None) => user_id.to_string(),
    }
}
