use branchenv::users::{format_user, UserDirectory, UserInfo};

fn directory() -> UserDirectory {
    let mut users = UserDirectory::new();
    users.insert(
        "full".to_string(),
        UserInfo {
            first_name: Some("Ada".to_string()),
            last_name: Some("Lovelace".to_string()),
            email: Some("ada@example.com".to_string()),
        },
    );
    users.insert(
        "email-only".to_string(),
        UserInfo {
            email: Some("ci@example.com".to_string()),
            ..Default::default()
        },
    );
    users.insert(
        "name-only".to_string(),
        UserInfo {
            first_name: Some("Grace".to_string()),
            ..Default::default()
        },
    );
    users.insert("blank".to_string(), UserInfo::default());
    users
}

#[test]
fn test_full_user_renders_name_and_email() {
    let users = directory();
    assert_eq!(
        format_user("full", Some(&users)),
        "Ada Lovelace (ada@example.com)"
    );
}

#[test]
fn test_email_only_user_renders_email() {
    let users = directory();
    assert_eq!(format_user("email-only", Some(&users)), "ci@example.com");
}

#[test]
fn test_name_without_email_renders_name() {
    let users = directory();
    assert_eq!(format_user("name-only", Some(&users)), "Grace");
}

#[test]
fn test_user_without_details_renders_id() {
    let users = directory();
    assert_eq!(format_user("blank", Some(&users)), "blank");
}

#[test]
fn test_unresolved_id_renders_raw_id() {
    let users = directory();
    assert_eq!(format_user("unknown-user", Some(&users)), "unknown-user");
}

#[test]
fn test_missing_directory_renders_raw_id() {
    assert_eq!(format_user("full", None), "full");
}
