//! Literal token substitution in skeleton template files.

use std::path::Path;

use crate::core::config::SkeletonTokens;
use crate::core::descriptor::PackageDescriptor;
use crate::core::error::Result;
use crate::utils::io;

pub const MANIFEST_TEMPLATE: &str = "composer.json";
pub const BUILD_CONFIG_TEMPLATE: &str = "webpack.mix.js";
pub const PROVIDER_TEMPLATE: &str = "src/Providers/AppServiceProvider.php";
pub const ROUTES_TEMPLATE: &str = "src/Http/routes.php";

/// One literal substitution: every occurrence of `from` becomes `to`.
/// Exact string match, case-sensitive, never a pattern.
#[derive(Debug, Clone)]
pub struct Substitution {
    pub from: String,
    pub to: String,
}

/// Planned rewrite of a single template file, as an ordered substitution list.
#[derive(Debug, Clone)]
pub struct FileRewrite {
    /// Path relative to the generated package directory.
    pub file: &'static str,
    pub substitutions: Vec<Substitution>,
}

/// Double every backslash, matching how the manifest's own JSON text
/// spells a PHP namespace.
pub fn escape_namespace(namespace: &str) -> String {
    namespace.replace('\\', "\\\\")
}

/// Replacement for the skeleton's empty `"laravel": {}` placeholder:
/// registers the package's service provider under `providers`.
fn providers_block(escaped_namespace: &str) -> String {
    format!(
        "\"laravel\": {{\n            \"providers\": [\n                \"{}\\\\Providers\\\\AppServiceProvider\"\n            ]\n        }}",
        escaped_namespace
    )
}

/// Build the per-file substitution tables for one generated package.
///
/// Order matters within a table: the skeleton's full package name contains
/// the bare slug, so the name pair must run before the slug pair.
pub fn rewrite_plan(tokens: &SkeletonTokens, descriptor: &PackageDescriptor) -> Vec<FileRewrite> {
    let escaped_skeleton_namespace = escape_namespace(&tokens.namespace);
    let escaped_namespace = escape_namespace(&descriptor.namespace);

    vec![
        FileRewrite {
            file: MANIFEST_TEMPLATE,
            substitutions: vec![
                Substitution {
                    from: tokens.name.clone(),
                    to: descriptor.name.clone(),
                },
                Substitution {
                    from: escaped_skeleton_namespace,
                    to: escaped_namespace.clone(),
                },
                Substitution {
                    from: tokens.description.clone(),
                    to: descriptor.description.clone(),
                },
                Substitution {
                    from: tokens.author_name.clone(),
                    to: descriptor.author_name.clone(),
                },
                Substitution {
                    from: tokens.author_email.clone(),
                    to: descriptor.author_email.clone(),
                },
                Substitution {
                    from: "\"laravel\": {}".to_string(),
                    to: providers_block(&escaped_namespace),
                },
            ],
        },
        FileRewrite {
            file: BUILD_CONFIG_TEMPLATE,
            substitutions: vec![Substitution {
                from: tokens.name.clone(),
                to: descriptor.name.clone(),
            }],
        },
        FileRewrite {
            file: PROVIDER_TEMPLATE,
            substitutions: vec![
                Substitution {
                    from: tokens.name.clone(),
                    to: descriptor.name.clone(),
                },
                Substitution {
                    from: tokens.namespace.clone(),
                    to: descriptor.namespace.clone(),
                },
                Substitution {
                    from: tokens.slug.clone(),
                    to: descriptor.package.clone(),
                },
            ],
        },
        FileRewrite {
            file: ROUTES_TEMPLATE,
            substitutions: vec![
                Substitution {
                    from: tokens.namespace.clone(),
                    to: descriptor.namespace.clone(),
                },
                Substitution {
                    from: tokens.slug.clone(),
                    to: descriptor.package.clone(),
                },
            ],
        },
    ]
}

/// Apply an ordered substitution list to a string.
pub fn apply(content: &str, substitutions: &[Substitution]) -> String {
    substitutions
        .iter()
        .fold(content.to_string(), |acc, sub| {
            acc.replace(&sub.from, &sub.to)
        })
}

/// Apply one planned rewrite to a file inside the package directory.
/// Returns `Ok(false)` when the template file is absent so the caller
/// can warn and continue.
pub fn apply_to_dir(package_dir: &Path, rewrite: &FileRewrite) -> Result<bool> {
    let path = package_dir.join(rewrite.file);
    if !path.is_file() {
        return Ok(false);
    }

    let operation = format!("rewrite {}", rewrite.file);
    let content = io::read_file(&path, &operation)?;
    let rewritten = apply(&content, &rewrite.substitutions);
    io::write_file(&path, &rewritten, &operation)?;

    Ok(true)
}
