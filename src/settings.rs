use crate::cli::Cli;
use crate::github::GitHubEvent;
use log::{info, warn};
use thiserror::Error;

pub const SPACE_ID_VAR: &str = "CONTENTFUL_SPACE_ID";
pub const TOKEN_VAR: &str = "CONTENTFUL_MANAGEMENT_TOKEN";
pub const BRANCH_VAR: &str = "BRANCH_NAME";

/// The three values every run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub space_id: String,
    pub token: String,
    pub branch: String,
}

/// Required values that could not be resolved.
#[derive(Debug, Error)]
#[error("{}", report_lines(.missing, .event))]
pub struct SettingsError {
    /// Names of the environment variables that were unset or empty.
    pub missing: Vec<&'static str>,
    /// Why the branch could not be read from the GitHub event payload.
    pub event: Option<anyhow::Error>,
}

fn report_lines(missing: &[&str], event: &Option<anyhow::Error>) -> String {
    let mut lines = Vec::new();
    if let Some(err) = event {
        lines.push(format!("{:#}", err));
    }
    lines.extend(
        missing
            .iter()
            .map(|name| format!("Missing required environment variable: {}", name)),
    );
    lines.join("\n")
}

fn present(value: &Option<String>) -> Option<String> {
    value.clone().filter(|v| !v.trim().is_empty())
}

impl Settings {
    /// Resolve from the parsed command line, falling back to the GitHub event
    /// payload for the branch. Every missing value is reported, not just the first.
    pub fn resolve(cli: &Cli) -> Result<Self, SettingsError> {
        let space_id = present(&cli.space_id);
        let token = present(&cli.token);
        let mut branch = present(&cli.branch);
        let mut event_error = None;

        if branch.is_none() {
            if let Some(path) = &cli.github_event {
                match GitHubEvent::from_path(path) {
                    Ok(event) => {
                        if let Some(head) = event.head_branch() {
                            info!("Using branch {} from {}", head, path.display());
                            if !event.is_merged() {
                                warn!("Pull request in {} is not marked as merged", path.display());
                            }
                            branch = Some(head.to_string());
                        }
                    }
                    Err(err) => event_error = Some(err),
                }
            }
        }

        match (space_id, token, branch) {
            (Some(space_id), Some(token), Some(branch)) => Ok(Settings {
                space_id,
                token,
                branch,
            }),
            (space_id, token, branch) => {
                let missing = [
                    (space_id.is_none(), SPACE_ID_VAR),
                    (token.is_none(), TOKEN_VAR),
                    (branch.is_none(), BRANCH_VAR),
                ]
                .into_iter()
                .filter_map(|(absent, name)| absent.then_some(name))
                .collect();
                Err(SettingsError {
                    missing,
                    event: event_error,
                })
            }
        }
    }
}
