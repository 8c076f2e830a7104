pub mod cli;
pub mod config;
pub mod config_error;
pub mod contentful;
pub mod environment;
pub mod error;
pub mod github;
pub mod matcher;
pub mod report;
pub mod settings;
pub mod users;

use anyhow::{Context, Result};
use config::Conf;
use contentful::Contentful;
use log::{info, warn};
use matcher::{find_matches, search_term};
use report::{render_report, ReportInput};
use settings::Settings;

/// Result of a completed search.
#[derive(Debug)]
pub struct Outcome {
    pub report: String,
    pub exact: usize,
    pub partial: usize,
}

/// Fetch the space's environments, match them against the branch and render
/// the report. Any failure of the space or environment calls is fatal; the
/// user lookup is best-effort.
pub fn run(settings: &Settings, conf: &Conf) -> Result<Outcome> {
    let client = Contentful::new(
        &conf.api.base_url,
        &settings.space_id,
        &settings.token,
        conf.api.page_size,
    )
    .context("Failed to create Contentful client")?;

    let term = search_term(&settings.branch);
    info!("Searching for environments matching '{}'", term);

    let space = client
        .get_space()
        .with_context(|| format!("Failed to fetch space {}", settings.space_id))?;
    let environments = client
        .list_environments()
        .context("Failed to list environments")?;
    info!("Space {} has {} environment(s)", space.id, environments.len());

    let matches = find_matches(term, &environments);
    let wants_users = conf.report.resolve_users
        && (!matches.is_empty() || conf.report.list_all_on_miss);
    let users = if wants_users {
        match client.list_space_users() {
            Ok(users) => Some(users),
            Err(err) => {
                warn!("Could not fetch user details, showing user ids: {}", err);
                None
            }
        }
    } else {
        None
    };

    let report = render_report(&ReportInput {
        branch: &settings.branch,
        term,
        space: &space,
        environments: &environments,
        matches: &matches,
        users: users.as_ref(),
        list_all_on_miss: conf.report.list_all_on_miss,
    });

    Ok(Outcome {
        report,
        exact: matches.exact.len(),
        partial: matches.partial.len(),
    })
}
