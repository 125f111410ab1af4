//! List legal enum values

use std::collections::BTreeMap;

use gitprovider::core::models::{ENUM_KINDS, values_of};
use gitprovider::output::{OutputMode, ValuesReport};

/// List the legal values of one enum kind, or of all of them
pub fn values(kind: Option<&str>, mode: OutputMode) -> anyhow::Result<()> {
    let kinds: Vec<&str> = kind.map_or_else(|| ENUM_KINDS.to_vec(), |k| vec![k]);

    let mut report = ValuesReport {
        kinds: BTreeMap::new(),
    };
    for k in kinds {
        let Some(values) = values_of(k) else {
            anyhow::bail!("unknown kind {k:?}, expected one of: {}", ENUM_KINDS.join(", "));
        };
        report
            .kinds
            .insert(k.to_string(), values.into_iter().map(str::to_string).collect());
    }

    report.render(mode);
    Ok(())
}
