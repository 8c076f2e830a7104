use branchenv::cli::Cli;
use branchenv::settings::{Settings, BRANCH_VAR, SPACE_ID_VAR, TOKEN_VAR};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn cli(space_id: Option<&str>, token: Option<&str>, branch: Option<&str>) -> Cli {
    Cli {
        subcommand: None,
        space_id: space_id.map(str::to_string),
        token: token.map(str::to_string),
        branch: branch.map(str::to_string),
        github_event: None,
        config: PathBuf::from(".config/envmatch.toml"),
    }
}

#[test]
fn test_values_are_passed_through_untrimmed() {
    let settings = Settings::resolve(&cli(Some("space123"), Some(" token "), Some("feat/x "))).unwrap();

    assert_eq!(settings.space_id, "space123");
    assert_eq!(settings.token, " token ");
    assert_eq!(settings.branch, "feat/x ");
}

#[test]
fn test_blank_values_count_as_missing() {
    let err = Settings::resolve(&cli(Some("  "), Some(""), Some("main"))).unwrap_err();

    assert_eq!(err.missing, vec![SPACE_ID_VAR, TOKEN_VAR]);
    assert!(err.event.is_none());
}

#[test]
fn test_unreadable_event_keeps_missing_list() {
    let temp = TempDir::new().unwrap();
    let mut args = cli(None, None, None);
    args.github_event = Some(temp.path().join("nope.json"));

    let err = Settings::resolve(&args).unwrap_err();

    assert_eq!(err.missing, vec![SPACE_ID_VAR, TOKEN_VAR, BRANCH_VAR]);
    assert!(err.event.is_some());
    let message = err.to_string();
    assert!(message.contains("failed to read GitHub event payload"));
    assert_eq!(message.matches("Missing required environment variable").count(), 3);
}

#[test]
fn test_branch_from_event_payload() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("event.json");
    fs::write(
        &path,
        r#"{ "pull_request": { "merged": true, "head": { "ref": "feat/test-env" } } }"#,
    )
    .unwrap();
    let mut args = cli(Some("space123"), Some("token"), None);
    args.github_event = Some(path);

    let settings = Settings::resolve(&args).unwrap();

    assert_eq!(settings.branch, "feat/test-env");
}

#[test]
fn test_explicit_branch_wins_over_event() {
    let mut args = cli(Some("space123"), Some("token"), Some("fix/explicit"));
    args.github_event = Some(PathBuf::from("/does/not/exist.json"));

    let settings = Settings::resolve(&args).unwrap();

    assert_eq!(settings.branch, "fix/explicit");
}
