//! Compute a clone URL

use anyhow::Context;
use gitprovider::core::models::{RepositoryRef, TransportType, Validate};
use gitprovider::output::{CloneUrlResult, OutputMode};

/// Print the clone URL of a repository for the given transport
pub fn clone_url(
    domain: String,
    organization: String,
    sub_organizations: Vec<String>,
    repository_name: String,
    transport: &str,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let repo = RepositoryRef {
        domain,
        organization,
        sub_organizations,
        repository_name,
    };
    repo.validate().context("invalid repository reference")?;

    let transport = TransportType::from(transport);
    let url = repo.clone_url(&transport).with_context(|| {
        let known: Vec<&str> = TransportType::ALL.iter().map(TransportType::as_str).collect();
        format!("unknown transport \"{transport}\", expected one of: {}", known.join(", "))
    })?;

    CloneUrlResult {
        transport: transport.to_string(),
        url,
    }
    .render(mode);
    Ok(())
}
