use heck::ToPascalCase;
use regex::Regex;
use serde::Serialize;
use serde_json::json;

use crate::core::error::{Error, ErrorCode, Result};
use crate::core::slugify::kebab_name;

/// Shape every package name must match after normalization.
pub const NAME_PATTERN: &str = r"^[a-z0-9-]+/[a-z0-9-]+$";

/// Metadata for one generated package. Built fresh per invocation and
/// discarded when the command finishes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageDescriptor {
    pub name: String,
    pub vendor: String,
    pub package: String,
    pub description: String,
    pub author_name: String,
    pub author_email: String,
    pub namespace: String,
    /// Relative path of the generated directory. Set only after the
    /// directory has actually been created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// A normalized `vendor/package` name split into its segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameParts {
    pub name: String,
    pub vendor: String,
    pub package: String,
}

/// Kebab-case a raw package name and check it against [`NAME_PATTERN`].
pub fn validate_name(raw: &str) -> Result<NameParts> {
    let name = kebab_name(raw);

    if name.is_empty() {
        return Err(Error::new(
            ErrorCode::ValidationMissingArgument,
            "You must specify a package name",
            json!({ "field": "name" }),
        ));
    }

    let pattern = Regex::new(NAME_PATTERN)
        .map_err(|e| Error::internal_unexpected(format!("invalid name pattern: {}", e)))?;

    if !pattern.is_match(&name) {
        return Err(Error::validation_invalid_argument(
            "name",
            "You must use only alphanumeric characters",
            Some(name),
        ));
    }

    let (vendor, package) = match name.split_once('/') {
        Some((vendor, package)) => (vendor.to_string(), package.to_string()),
        None => {
            return Err(Error::validation_invalid_argument(
                "name",
                "You must use only alphanumeric characters",
                Some(name),
            ));
        }
    };

    Ok(NameParts {
        name,
        vendor,
        package,
    })
}

/// Default PHP namespace for a package: `PascalCase(vendor)\PascalCase(package)`.
pub fn default_namespace(vendor: &str, package: &str) -> String {
    format!("{}\\{}", vendor.to_pascal_case(), package.to_pascal_case())
}
