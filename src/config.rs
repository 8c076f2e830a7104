use crate::contentful::DEFAULT_BASE_URL;
use confique::Config;
use serde::Serialize;
use std::path::Path;

#[derive(Config, Serialize, Debug)]
pub struct Conf {
    #[config(nested)]
    pub api: ApiConf,

    #[config(nested)]
    pub report: ReportConf,
}

#[derive(Config, Serialize, Debug)]
pub struct ApiConf {
    /// Base URL of the Content Management API.
    #[config(env = "CONTENTFUL_API_URL", default = "https://api.contentful.com")]
    pub base_url: String,

    /// Number of items requested per page when listing (1 to 1000).
    #[config(default = 100)]
    pub page_size: usize,
}

#[derive(Config, Serialize, Debug)]
pub struct ReportConf {
    /// List every environment in the space when nothing matches.
    #[config(default = true)]
    pub list_all_on_miss: bool,

    /// Look up space members to print names instead of user ids.
    #[config(default = true)]
    pub resolve_users: bool,
}

impl Default for ApiConf {
    fn default() -> Self {
        ApiConf {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: 100,
        }
    }
}

impl Default for ReportConf {
    fn default() -> Self {
        ReportConf {
            list_all_on_miss: true,
            resolve_users: true,
        }
    }
}

impl Default for Conf {
    fn default() -> Self {
        Conf {
            api: ApiConf::default(),
            report: ReportConf::default(),
        }
    }
}

impl Conf {
    /// Load from env and the given file; a missing file leaves the defaults.
    pub fn load(path: &Path) -> Result<Self, confique::Error> {
        Conf::builder().env().file(path).load()
    }

    pub fn is_valid(&self) -> Result<(), String> {
        let base_url = self.api.base_url.trim();
        if base_url.is_empty() {
            return Err("api.base_url must not be empty".to_string());
        }
        if reqwest::Url::parse(base_url).is_err() {
            return Err(format!("api.base_url '{}' is not a valid URL", base_url));
        }
        if !(1..=1000).contains(&self.api.page_size) {
            return Err(format!(
                "api.page_size must be between 1 and 1000, got {}",
                self.api.page_size
            ));
        }
        Ok(())
    }
}
