use std::env;

use clap::Args;
use serde::Serialize;

use packsmith::config;
use packsmith::descriptor::PackageDescriptor;
use packsmith::generator;
use packsmith::manifest;
use packsmith::prompt::PromptEngine;
use packsmith::{log_status, Error};

use super::CmdResult;

#[derive(Args)]
pub struct MakeArgs {
    /// Package name as vendor/package (prompted for when omitted)
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MakeOutput {
    pub command: &'static str,
    pub package: PackageDescriptor,
    pub rewritten_files: Vec<String>,
    pub removed: Vec<String>,
    pub repository_url: String,
    pub install_hint: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

pub fn run_json(args: MakeArgs) -> CmdResult<MakeOutput> {
    let root = env::current_dir().map_err(|e| {
        Error::internal_io(e.to_string(), Some("resolve working directory".to_string()))
    })?;

    let config = config::load(&root);
    let engine = PromptEngine::new();

    let descriptor = generator::collect_descriptor(&engine, args.name)?;

    log_status!("make", "Creating package {}...", descriptor.name);
    let generated = generator::make_package(&root, &config, descriptor)?;

    let repository_url =
        manifest::register_path_repository(&root.join(&config.manifest_path), &generated.path)?;

    for warning in &generated.warnings {
        log_status!("make", "Warning: {}", warning);
    }

    let install_hint = format!("composer require {}", generated.descriptor.name);
    log_status!("make", "Package created!");
    log_status!("make", "You can install with: {}", install_hint);

    Ok((
        MakeOutput {
            command: "make",
            package: generated.descriptor,
            rewritten_files: generated.rewritten_files,
            removed: generated.removed,
            repository_url,
            install_hint,
            warnings: generated.warnings,
        },
        0,
    ))
}
