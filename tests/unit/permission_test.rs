//! Tests for permission ordering

use gitprovider::core::models::RepositoryPermission;
use test_case::test_case;

#[test]
fn test_declared_order_is_least_to_most_privileged() {
    let ranks: Vec<_> = RepositoryPermission::ALL.iter().map(|p| p.rank().unwrap()).collect();
    assert_eq!(ranks, vec![0, 1, 2, 3, 4]);
    assert_eq!(RepositoryPermission::ALL.first(), Some(&RepositoryPermission::PULL));
    assert_eq!(RepositoryPermission::ALL.last(), Some(&RepositoryPermission::ADMIN));
}

#[test_case(RepositoryPermission::PULL, "guest" ; "pull")]
#[test_case(RepositoryPermission::TRIAGE, "reporter" ; "triage")]
#[test_case(RepositoryPermission::PUSH, "developer" ; "push")]
#[test_case(RepositoryPermission::MAINTAIN, "maintainer" ; "maintain")]
#[test_case(RepositoryPermission::ADMIN, "owner" ; "admin")]
fn test_gitlab_role(permission: RepositoryPermission, role: &str) {
    assert_eq!(permission.gitlab_role(), Some(role));
}

#[test]
fn test_unknown_permission_has_no_rank() {
    let unknown = RepositoryPermission::from("write");
    assert_eq!(unknown.rank(), None);
    assert_eq!(unknown.gitlab_role(), None);
    assert!(!unknown.at_least(&RepositoryPermission::PULL));
    assert!(!RepositoryPermission::ADMIN.at_least(&unknown));
}

#[test_case(RepositoryPermission::ADMIN, RepositoryPermission::PUSH, true ; "admin covers push")]
#[test_case(RepositoryPermission::PUSH, RepositoryPermission::PUSH, true ; "equal")]
#[test_case(RepositoryPermission::TRIAGE, RepositoryPermission::MAINTAIN, false ; "triage below maintain")]
fn test_at_least(a: RepositoryPermission, b: RepositoryPermission, expected: bool) {
    assert_eq!(a.at_least(&b), expected);
}

#[test]
fn test_from_gitlab_role() {
    assert_eq!(
        RepositoryPermission::from_gitlab_role("developer"),
        Some(RepositoryPermission::PUSH)
    );
    assert_eq!(RepositoryPermission::from_gitlab_role("planner"), None);
}
