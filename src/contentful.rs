use crate::environment::{Collection, Environment, Space};
use crate::error::ApiError;
use crate::users::{directory_from, IncludedUser, UserDirectory};
use log::debug;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use serde::de::DeserializeOwned;
use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://api.contentful.com";
const CONTENT_TYPE_CMA: &str = "application/vnd.contentful.management.v1+json";

#[derive(Deserialize, Debug, Default)]
struct Includes {
    #[serde(rename = "User", default)]
    user: Vec<IncludedUser>,
}

#[derive(Deserialize, Debug)]
struct MembershipPage {
    total: usize,
    #[serde(default)]
    items: Vec<serde_json::Value>,
    #[serde(default)]
    includes: Includes,
}

/// Blocking client for the Content Management API, scoped to one space.
pub struct Contentful {
    client: Client,
    base_url: String,
    space_id: String,
    page_size: usize,
}

impl Contentful {
    pub fn new(
        base_url: &str,
        space_id: &str,
        token: &str,
        page_size: usize,
    ) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        let bearer = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| ApiError::new("access token contains invalid header characters"))?;
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(ACCEPT, HeaderValue::from_static(CONTENT_TYPE_CMA));

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(concat!("envmatch/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Contentful {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            space_id: space_id.to_string(),
            page_size,
        })
    }

    fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, usize)]) -> Result<T, ApiError> {
        let url = format!("{}/spaces/{}{}", self.base_url, self.space_id, path);
        debug!("GET {} {:?}", url, query);

        let response = self.client.get(&url).query(query).send()?;
        if !response.status().is_success() {
            return Err(ApiError::from_response(response));
        }
        Ok(response.json::<T>()?)
    }

    pub fn get_space(&self) -> Result<Space, ApiError> {
        self.get("", &[])
    }

    /// List every environment in the space, walking all pages.
    pub fn list_environments(&self) -> Result<Vec<Environment>, ApiError> {
        let mut environments = Vec::new();
        loop {
            let page: Collection<Environment> = self.get(
                "/environments",
                &[("limit", self.page_size), ("skip", environments.len())],
            )?;
            let fetched = page.items.len();
            environments.extend(page.items);
            debug!("fetched {} of {} environments", environments.len(), page.total);
            if fetched == 0 || environments.len() >= page.total {
                break;
            }
        }
        Ok(environments)
    }

    /// Resolve the users behind the space memberships.
    pub fn list_space_users(&self) -> Result<UserDirectory, ApiError> {
        let mut users = Vec::new();
        let mut seen = 0;
        loop {
            let page: MembershipPage = self.get(
                "/space_memberships",
                &[("limit", self.page_size), ("skip", seen)],
            )?;
            seen += page.items.len();
            users.extend(page.includes.user);
            if page.items.is_empty() || seen >= page.total {
                break;
            }
        }
        Ok(directory_from(users))
    }
}
