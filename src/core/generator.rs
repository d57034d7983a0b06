//! Descriptor collection and the package materialization pipeline.

use std::fs;
use std::path::Path;

use crate::core::config::GeneratorConfig;
use crate::core::descriptor::{self, PackageDescriptor};
use crate::core::error::{Error, Result};
use crate::core::prompt::{PromptEngine, TextPrompt, YesNoPrompt};
use crate::core::{rewrite, skeleton};

/// Outcome of a successful materialization.
#[derive(Debug)]
pub struct GeneratedPackage {
    /// Descriptor with `path` populated.
    pub descriptor: PackageDescriptor,
    /// Relative path of the generated directory.
    pub path: String,
    /// Template files that were rewritten, relative to the package directory.
    pub rewritten_files: Vec<String>,
    /// Skeleton artifacts deleted after the copy.
    pub removed: Vec<String>,
    /// Template files that were expected but absent from the skeleton.
    pub warnings: Vec<String>,
}

/// Gather a complete descriptor, prompting for every field and asking for
/// confirmation at the end. Declined confirmation restarts the whole
/// collection from scratch; nothing is carried over between attempts.
///
/// A name passed on the command line is tried once, then the loop falls
/// back to prompting. When the engine is non-interactive a validation
/// failure is fatal instead of retrying, and every prompt resolves to
/// its default.
pub fn collect_descriptor(
    engine: &PromptEngine,
    name_arg: Option<String>,
) -> Result<PackageDescriptor> {
    let mut name_arg = name_arg;

    loop {
        let raw_name = match name_arg.take() {
            Some(name) => name,
            None => engine.text(&TextPrompt {
                question: "What is the package name? (e.g. vendor/package)".to_string(),
                default: None,
            })?,
        };

        let parts = match descriptor::validate_name(&raw_name) {
            Ok(parts) => parts,
            Err(err) if engine.is_interactive() => {
                engine.message(&err.message);
                continue;
            }
            Err(err) => return Err(err),
        };

        let description = engine.text(&TextPrompt {
            question: "Description".to_string(),
            default: None,
        })?;

        let author_name = engine.text(&TextPrompt {
            question: "Author name (e.g. John Smith)".to_string(),
            default: None,
        })?;

        let author_email = engine.text(&TextPrompt {
            question: "Author email (e.g. john@smith.com)".to_string(),
            default: None,
        })?;

        let namespace = engine.text(&TextPrompt {
            question: "Namespace".to_string(),
            default: Some(descriptor::default_namespace(&parts.vendor, &parts.package)),
        })?;

        engine.table(
            &["Name", "Description", "Author", "Email", "Namespace"],
            &[vec![
                parts.name.clone(),
                description.clone(),
                author_name.clone(),
                author_email.clone(),
                namespace.clone(),
            ]],
        );

        let confirmed = engine.yes_no(&YesNoPrompt {
            question: "Is this information correct?".to_string(),
            default: true,
        })?;
        if !confirmed {
            continue;
        }

        return Ok(PackageDescriptor {
            name: parts.name,
            vendor: parts.vendor,
            package: parts.package,
            description,
            author_name,
            author_email,
            namespace,
            path: None,
        });
    }
}

/// Materialize one package under `root`: copy the skeleton into
/// `<packagesDir>/<vendor>/<package>`, rewrite the template files, and
/// prune skeleton artifacts. The root manifest is not touched here.
///
/// Nothing is created on the failure paths: both the skeleton check and
/// the collision check run before the first write.
pub fn make_package(
    root: &Path,
    config: &GeneratorConfig,
    mut descriptor: PackageDescriptor,
) -> Result<GeneratedPackage> {
    let skeleton_dir = root.join(&config.skeleton_path);
    if !skeleton_dir.is_dir() {
        return Err(Error::skeleton_not_found(config.skeleton_path.clone()));
    }

    let relative_path = config.package_path(&descriptor.vendor, &descriptor.package);
    let package_dir = root.join(&relative_path);

    if package_dir.exists() {
        return Err(Error::package_already_exists(relative_path));
    }

    fs::create_dir_all(&package_dir).map_err(|e| {
        Error::internal_io(
            e.to_string(),
            Some(format!("create {}", package_dir.display())),
        )
    })?;
    descriptor.path = Some(relative_path.clone());

    skeleton::copy_dir_recursive(&skeleton_dir, &package_dir)?;

    let mut rewritten_files = Vec::new();
    let mut warnings = Vec::new();
    for file_rewrite in rewrite::rewrite_plan(&config.skeleton, &descriptor) {
        if rewrite::apply_to_dir(&package_dir, &file_rewrite)? {
            rewritten_files.push(file_rewrite.file.to_string());
        } else {
            warnings.push(format!(
                "Template file not found, skipped: {}",
                file_rewrite.file
            ));
        }
    }

    let removed = skeleton::prune_skeleton_artifacts(&package_dir)?;

    Ok(GeneratedPackage {
        descriptor,
        path: relative_path,
        rewritten_files,
        removed,
        warnings,
    })
}
