use crate::environment::{Environment, Space};
use crate::error::ApiError;
use crate::matcher::{MatchKind, Matches};
use crate::settings::{SPACE_ID_VAR, TOKEN_VAR};
use crate::users::{format_user, UserDirectory};
use chrono::{DateTime, Utc};

const TROUBLESHOOTING: &[&str] = &[
    "Check that the access token is valid and has not been revoked",
    "Check that the token has access to the space",
    "Check that the space id is correct",
    "Check network connectivity to the Contentful API",
];

/// Everything the stdout report is built from.
pub struct ReportInput<'a> {
    pub branch: &'a str,
    pub term: &'a str,
    pub space: &'a Space,
    pub environments: &'a [Environment],
    pub matches: &'a Matches<'a>,
    pub users: Option<&'a UserDirectory>,
    pub list_all_on_miss: bool,
}

fn timestamp(at: &Option<DateTime<Utc>>) -> String {
    at.as_ref()
        .map(|at| at.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

fn audit_line(
    label: &str,
    at: &Option<DateTime<Utc>>,
    by: &Option<String>,
    users: Option<&UserDirectory>,
) -> Option<String> {
    if at.is_none() && by.is_none() {
        return None;
    }
    let mut line = format!("    {}: {}", label, timestamp(at));
    if let Some(user_id) = by {
        line.push_str(&format!(" by {}", format_user(user_id, users)));
    }
    Some(line)
}

fn environment_block(lines: &mut Vec<String>, env: &Environment, users: Option<&UserDirectory>) {
    lines.push(format!("  - {} (name: {})", env.id, env.name));
    lines.extend(audit_line("Created", &env.created_at, &env.created_by, users));
    lines.extend(audit_line("Updated", &env.updated_at, &env.updated_by, users));
}

fn finish(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

pub fn render_report(input: &ReportInput) -> String {
    let mut lines = vec![
        format!("Branch: {}", input.branch),
        format!("Search term: {}", input.term),
        format!("Space: {} ({})", input.space.name, input.space.id),
        format!("Environments in space: {}", input.environments.len()),
        String::new(),
    ];

    if input.matches.is_empty() {
        lines.push(format!("No environment matches '{}'.", input.term));
        if input.list_all_on_miss {
            lines.push(String::new());
            lines.push("Available environments:".to_string());
            for env in input.environments {
                environment_block(&mut lines, env, input.users);
            }
        }
        return finish(lines);
    }

    lines.push(format!(
        "Found {} matching environment(s): {} exact, {} partial",
        input.matches.len(),
        input.matches.exact.len(),
        input.matches.partial.len()
    ));

    let mut current = None;
    for (kind, env) in input.matches.ranked() {
        if current != Some(kind) {
            let heading = match kind {
                MatchKind::Exact => "Exact matches:",
                MatchKind::Partial => "Partial matches:",
            };
            lines.push(String::new());
            lines.push(heading.to_string());
            current = Some(kind);
        }
        environment_block(&mut lines, env, input.users);
    }
    finish(lines)
}

/// Failure report for a fatal API error.
pub fn render_api_error(err: &ApiError) -> String {
    let mut lines = vec![format!("Error: {}", err.message)];
    match (err.status, &err.status_text) {
        (Some(status), Some(text)) => lines.push(format!("  Status: {} {}", status, text)),
        (Some(status), None) => lines.push(format!("  Status: {}", status)),
        _ => {}
    }
    lines.push(String::new());
    lines.push("Troubleshooting:".to_string());
    lines.extend(TROUBLESHOOTING.iter().map(|hint| format!("  - {}", hint)));
    lines.push(format!(
        "  - Verify {} and {} in the workflow secrets",
        SPACE_ID_VAR, TOKEN_VAR
    ));
    finish(lines)
}
