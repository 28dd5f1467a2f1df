//! Startup-time catalog validation.
//!
//! A catalog is accepted only when it describes every [`Operation`] the
//! client exposes, uses known path placeholders, and attaches bodies only to
//! verbs that carry one.

use once_cell::sync::Lazy;
use regex::Regex;

use super::error::CatalogError;
use super::operation::Operation;
use super::{OperationCatalog, TENANT_PLACEHOLDER};

/// Path placeholders the client knows how to bind.
pub const PATH_PARAMS: [&str; 2] = ["id", "mboxName"];

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([^{}/]*)\}").expect("placeholder pattern is valid"));

/// Placeholder names in a path template, in order of appearance.
pub fn placeholders(path: &str) -> Vec<String> {
    PLACEHOLDER
        .captures_iter(path)
        .map(|c| c[1].to_string())
        .collect()
}

/// `Some(name)` when the segment is exactly `{name}`.
pub fn whole_placeholder(segment: &str) -> Option<&str> {
    segment
        .strip_prefix('{')
        .and_then(|s| s.strip_suffix('}'))
        .filter(|name| !name.is_empty() && !name.contains(['{', '}']))
}

pub fn validate_server(template: &str) -> Result<(), CatalogError> {
    let invalid = |reason: &str| CatalogError::InvalidServer {
        template: template.to_string(),
        reason: reason.to_string(),
    };
    if !template.contains(TENANT_PLACEHOLDER) {
        return Err(invalid("missing {tenant-name} placeholder"));
    }
    let probe = template.replace(TENANT_PLACEHOLDER, "tenant");
    let url = url::Url::parse(&probe).map_err(|e| invalid(&e.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(invalid("not a base URL"));
    }
    Ok(())
}

pub fn validate(catalog: &OperationCatalog) -> Result<(), CatalogError> {
    validate_server(catalog.server())?;

    for op in Operation::ALL {
        let d = catalog.get(op)?;
        let invalid = |reason: String| CatalogError::InvalidDescriptor {
            operation: op.name(),
            reason,
        };

        if !d.path.starts_with('/') {
            return Err(invalid(format!("path '{}' must start with '/'", d.path)));
        }
        if d.path.contains('?') {
            return Err(invalid("query parameters belong under `query`".to_string()));
        }
        for segment in d.path.split('/') {
            if segment.contains('{') && whole_placeholder(segment).is_none() {
                return Err(invalid(format!(
                    "placeholder must fill a whole path segment, found '{}'",
                    segment
                )));
            }
        }
        for p in &d.path_params {
            if !PATH_PARAMS.contains(&p.as_str()) {
                return Err(invalid(format!("unknown path placeholder '{{{}}}'", p)));
            }
        }
        if d.body && !d.method.allows_body() {
            return Err(invalid(format!("{} cannot carry a body", d.method)));
        }
        for q in &d.query {
            if q.trim().is_empty() {
                return Err(invalid("empty query parameter name".to_string()));
            }
        }
    }
    Ok(())
}
