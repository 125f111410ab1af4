//! Tests for object validation and error accumulation

use gitprovider::core::models::{
    DeployKey, LicenseTemplate, RepoVisibility, RepositoryCreateOptions, RepositoryInfo,
    RepositoryPermission, TeamAccess, Validate,
};
use gitprovider::core::services::prepare_create;
use gitprovider::validation::{FieldError, ValidationErrors};

use crate::common::{deploy_key, team_access};

// =============================================================================
// ACCUMULATOR
// =============================================================================

#[test]
fn test_append_records_field_and_value() {
    let mut errs = ValidationErrors::new();
    let v = RepoVisibility::from("secret");
    errs.append(v.validate(), &v, "repositories[0].visibility");

    assert_eq!(errs.len(), 1);
    let violation = &errs.violations()[0];
    assert_eq!(violation.field, "repositories[0].visibility");
    assert_eq!(violation.value, "secret");
    assert_eq!(violation.kind, FieldError::EnumInvalid);
    assert_eq!(
        violation.to_string(),
        "repositories[0].visibility: field value is not one of the allowed values: \"secret\""
    );
}

#[test]
fn test_error_kinds_are_distinguishable() {
    assert!(FieldError::EnumInvalid.is_enum_invalid());
    assert!(!FieldError::Required.is_enum_invalid());
    assert!(!FieldError::Invalid.is_enum_invalid());
    assert_ne!(FieldError::EnumInvalid.as_str(), FieldError::Invalid.as_str());
}

#[test]
fn test_display_lists_every_violation() {
    let mut errs = ValidationErrors::new();
    errs.require(false, "name");
    errs.require(false, "key");
    assert_eq!(errs.to_string(), "name: field is required\nkey: field is required");
}

// =============================================================================
// OBJECTS
// =============================================================================

#[test]
fn test_valid_objects() {
    assert!(deploy_key(None).validate().is_ok());
    assert!(team_access(Some(RepositoryPermission::TRIAGE)).validate().is_ok());
    assert!(RepositoryInfo::default().validate().is_ok());
    assert!(RepositoryCreateOptions::default().validate().is_ok());
}

#[test]
fn test_deploy_key_reports_both_required_fields() {
    let errs = DeployKey::default().validate().unwrap_err();
    let map = errs.to_map();
    assert_eq!(map.len(), 2);
    assert_eq!(map["name"], "field is required");
    assert_eq!(map["key"], "field is required");
}

#[test]
fn test_team_access_unknown_permission() {
    let errs = team_access(Some(RepositoryPermission::from("owner"))).validate().unwrap_err();
    assert_eq!(errs.len(), 1);
    assert!(errs.contains(FieldError::EnumInvalid));
    assert!(errs.to_map().contains_key("permission"));
}

#[test]
fn test_repository_info_errors() {
    let info = RepositoryInfo {
        description: None,
        default_branch: Some("  ".to_string()),
        visibility: Some(RepoVisibility::from("hidden")),
    };
    let map = info.validate().unwrap_err().to_map();
    assert_eq!(map.len(), 2);
    assert!(map["visibility"].contains("hidden"));
    assert!(map["default_branch"].starts_with("field is invalid"));
}

#[test]
fn test_create_options_license_without_init() {
    let opts = RepositoryCreateOptions {
        auto_init: Some(false),
        license_template: Some(LicenseTemplate::from("wtfpl")),
    };
    let errs = opts.validate().unwrap_err();
    assert_eq!(errs.len(), 2);
    assert!(errs.contains(FieldError::EnumInvalid));
    assert!(errs.contains(FieldError::Invalid));

    let unset_init = RepositoryCreateOptions {
        auto_init: None,
        license_template: Some(LicenseTemplate::GPL3),
    };
    assert!(unset_init.validate().is_ok());
}

#[test]
fn test_validate_does_not_apply_defaults() {
    let info = RepositoryInfo::default();
    assert!(info.validate().is_ok());
    assert_eq!(info, RepositoryInfo::default());
}

// =============================================================================
// CREATE WORKFLOW
// =============================================================================

#[test]
fn test_prepare_create_defaults_then_validates() {
    let mut team = team_access(None);
    prepare_create(&mut team).unwrap();
    assert_eq!(team.permission, Some(RepositoryPermission::PULL));
}

#[test]
fn test_prepare_create_keeps_invalid_explicit_value() {
    let mut info = RepositoryInfo {
        visibility: Some(RepoVisibility::from("everyone")),
        ..RepositoryInfo::default()
    };
    let errs = prepare_create(&mut info).unwrap_err();
    assert_eq!(info.default_branch.as_deref(), Some("master"));
    assert_eq!(errs.violations()[0].field, "visibility");
}
