use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::error::Error;
use crate::utils::io;

/// Workspace configuration file, looked up in the monorepo root.
pub const CONFIG_FILE: &str = "packsmith.json";

/// Root configuration structure for packsmith.json
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Directory that holds generated packages, relative to the workspace root.
    #[serde(default = "default_packages_dir")]
    pub packages_dir: String,

    /// Skeleton template directory, relative to the workspace root.
    #[serde(default = "default_skeleton_path")]
    pub skeleton_path: String,

    /// Root dependency manifest, relative to the workspace root.
    #[serde(default = "default_manifest_path")]
    pub manifest_path: String,

    #[serde(default)]
    pub skeleton: SkeletonTokens,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            packages_dir: default_packages_dir(),
            skeleton_path: default_skeleton_path(),
            manifest_path: default_manifest_path(),
            skeleton: SkeletonTokens::default(),
        }
    }
}

/// Placeholder literals baked into the skeleton's template files.
///
/// These are matched verbatim during the rewrite step, so they must spell
/// the tokens exactly as the skeleton files do.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkeletonTokens {
    #[serde(default = "default_skeleton_name")]
    pub name: String,

    #[serde(default = "default_skeleton_namespace")]
    pub namespace: String,

    #[serde(default = "default_skeleton_slug")]
    pub slug: String,

    #[serde(default = "default_skeleton_description")]
    pub description: String,

    #[serde(default = "default_skeleton_author_name")]
    pub author_name: String,

    #[serde(default = "default_skeleton_author_email")]
    pub author_email: String,
}

impl Default for SkeletonTokens {
    fn default() -> Self {
        Self {
            name: default_skeleton_name(),
            namespace: default_skeleton_namespace(),
            slug: default_skeleton_slug(),
            description: default_skeleton_description(),
            author_name: default_skeleton_author_name(),
            author_email: default_skeleton_author_email(),
        }
    }
}

impl GeneratorConfig {
    /// Relative path under which a package lands: `<packagesDir>/<vendor>/<package>`.
    pub fn package_path(&self, vendor: &str, package: &str) -> String {
        format!("{}/{}/{}", self.packages_dir, vendor, package)
    }
}

// =============================================================================
// Default value functions (match the stock skeleton package)
// =============================================================================

fn default_packages_dir() -> String {
    "packages".to_string()
}

fn default_skeleton_path() -> String {
    "vendor/uccello/package-skeleton".to_string()
}

fn default_manifest_path() -> String {
    "composer.json".to_string()
}

fn default_skeleton_name() -> String {
    "uccello/package-skeleton".to_string()
}

fn default_skeleton_namespace() -> String {
    "Uccello\\PackageSkeleton".to_string()
}

fn default_skeleton_slug() -> String {
    "package-skeleton".to_string()
}

fn default_skeleton_description() -> String {
    "Package skeleton for Uccello".to_string()
}

fn default_skeleton_author_name() -> String {
    "Jonathan SARDO".to_string()
}

fn default_skeleton_author_email() -> String {
    "jonathan@uccellolabs.com".to_string()
}

// =============================================================================
// Loading functions
// =============================================================================

/// Load config from `<root>/packsmith.json`, merging file values with
/// built-in defaults. If the file is missing or invalid, silently returns
/// the built-in defaults.
pub fn load(root: &Path) -> GeneratorConfig {
    load_from_file(root).unwrap_or_default()
}

fn load_from_file(root: &Path) -> crate::core::error::Result<GeneratorConfig> {
    let path = root.join(CONFIG_FILE);

    if !path.exists() {
        return Err(Error::internal_io(
            format!("{} not found", CONFIG_FILE),
            None,
        ));
    }

    let content = io::read_file(&path, "read packsmith.json")?;

    let config: GeneratorConfig = serde_json::from_str(&content)
        .map_err(|e| Error::internal_json(e.to_string(), Some("parse packsmith.json".to_string())))?;

    Ok(config)
}
