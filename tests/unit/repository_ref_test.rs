//! Tests for clone URL construction

use gitprovider::core::models::{RepositoryRef, TransportType, Validate};
use test_case::test_case;

fn nested() -> RepositoryRef {
    RepositoryRef {
        domain: "gitlab.com".to_string(),
        organization: "acme".to_string(),
        sub_organizations: vec!["platform".to_string(), "tools".to_string()],
        repository_name: "cli".to_string(),
    }
}

#[test_case(TransportType::HTTPS, "https://github.com/acme/cli.git" ; "https")]
#[test_case(TransportType::GIT, "git@github.com:acme/cli.git" ; "git")]
#[test_case(TransportType::SSH, "ssh://git@github.com/acme/cli" ; "ssh")]
fn test_clone_url(transport: TransportType, expected: &str) {
    let repo = RepositoryRef::new("github.com", "acme", "cli");
    assert_eq!(repo.clone_url(&transport).as_deref(), Some(expected));
}

#[test_case(TransportType::HTTPS, "https://gitlab.com/acme/platform/tools/cli.git" ; "https")]
#[test_case(TransportType::GIT, "git@gitlab.com:acme/platform/tools/cli.git" ; "git")]
#[test_case(TransportType::SSH, "ssh://git@gitlab.com/acme/platform/tools/cli" ; "ssh")]
fn test_clone_url_sub_orgs(transport: TransportType, expected: &str) {
    assert_eq!(nested().clone_url(&transport).as_deref(), Some(expected));
}

#[test]
fn test_unknown_transport() {
    assert_eq!(nested().clone_url(&TransportType::from("ftp")), None);
}

#[test]
fn test_display() {
    assert_eq!(nested().to_string(), "gitlab.com/acme/platform/tools/cli");
}

#[test]
fn test_required_fields() {
    let map = RepositoryRef::default().validate().unwrap_err().to_map();
    let fields: Vec<_> = map.keys().map(String::as_str).collect();
    assert_eq!(fields, vec!["domain", "organization", "repository_name"]);
}

#[test]
fn test_whitespace_only_fields_are_required() {
    let repo = RepositoryRef {
        domain: " ".to_string(),
        organization: "\t".to_string(),
        sub_organizations: vec!["  ".to_string()],
        repository_name: "cli".to_string(),
    };
    let map = repo.validate().unwrap_err().to_map();
    let fields: Vec<_> = map.keys().map(String::as_str).collect();
    assert_eq!(fields, vec!["domain", "organization", "sub_organizations[0]"]);
}
