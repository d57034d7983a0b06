use std::fs;
use std::path::Path;

use serde_json::Value;
use tempfile::TempDir;

use packsmith::config::{self, GeneratorConfig};
use packsmith::descriptor::PackageDescriptor;
use packsmith::generator;
use packsmith::manifest;
use packsmith::prompt::PromptEngine;

const SKELETON_COMPOSER: &str = r#"{
    "name": "uccello/package-skeleton",
    "description": "Package skeleton for Uccello",
    "type": "library",
    "license": "MIT",
    "authors": [
        {
            "name": "Jonathan SARDO",
            "email": "jonathan@uccellolabs.com"
        }
    ],
    "require": {},
    "autoload": {
        "psr-4": {
            "Uccello\\PackageSkeleton\\": "src/"
        }
    },
    "extra": {
        "laravel": {}
    }
}
"#;

const SKELETON_WEBPACK: &str = r#"const mix = require('laravel-mix');

mix.setPublicPath('public/uccello/package-skeleton')
    .js('src/assets/js/app.js', 'js');
"#;

const SKELETON_PROVIDER: &str = r#"<?php

namespace Uccello\PackageSkeleton\Providers;

use Illuminate\Support\ServiceProvider;

class AppServiceProvider extends ServiceProvider
{
    public function boot()
    {
        $this->loadViewsFrom(__DIR__ . '/../../resources/views', 'package-skeleton');
        $this->publishes([
            __DIR__ . '/../../public' => public_path('vendor/uccello/package-skeleton'),
        ], 'public');
    }
}
"#;

const SKELETON_ROUTES: &str = r#"<?php

Route::group(['namespace' => 'Uccello\PackageSkeleton\Http\Controllers', 'middleware' => 'web', 'prefix' => 'package-skeleton'], function () {
    //
});
"#;

const ROOT_COMPOSER: &str = r#"{
    "name": "uccello/uccello",
    "description": "Monorepo root",
    "require": {
        "php": "^8.1"
    },
    "repositories": [
        {
            "type": "vcs",
            "url": "https://github.com/uccello/legacy"
        }
    ]
}
"#;

/// Lay out a monorepo root with the stock skeleton and a root manifest.
fn setup_workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    let skeleton = dir.path().join("vendor/uccello/package-skeleton");

    fs::create_dir_all(skeleton.join("src/Providers")).unwrap();
    fs::create_dir_all(skeleton.join("src/Http")).unwrap();
    fs::create_dir_all(skeleton.join("resources/views")).unwrap();
    fs::create_dir_all(skeleton.join(".git/refs")).unwrap();

    fs::write(skeleton.join("composer.json"), SKELETON_COMPOSER).unwrap();
    fs::write(skeleton.join("webpack.mix.js"), SKELETON_WEBPACK).unwrap();
    fs::write(
        skeleton.join("src/Providers/AppServiceProvider.php"),
        SKELETON_PROVIDER,
    )
    .unwrap();
    fs::write(skeleton.join("src/Http/routes.php"), SKELETON_ROUTES).unwrap();
    fs::write(
        skeleton.join("resources/views/index.blade.php"),
        "<h1>{{ $title }}</h1>\n",
    )
    .unwrap();
    fs::write(skeleton.join("README.md"), "# Package skeleton\n").unwrap();
    fs::write(skeleton.join(".git/HEAD"), "ref: refs/heads/main\n").unwrap();

    fs::write(dir.path().join("composer.json"), ROOT_COMPOSER).unwrap();

    dir
}

fn billing_descriptor() -> PackageDescriptor {
    PackageDescriptor {
        name: "acme/billing".to_string(),
        vendor: "acme".to_string(),
        package: "billing".to_string(),
        description: "Billing and invoicing".to_string(),
        author_name: "Jane Doe".to_string(),
        author_email: "jane@acme.test".to_string(),
        namespace: "Acme\\Billing".to_string(),
        path: None,
    }
}

/// Run the whole pipeline the way the make command does.
fn scaffold(root: &Path, descriptor: PackageDescriptor) -> (String, String) {
    let config = GeneratorConfig::default();
    let generated = generator::make_package(root, &config, descriptor).unwrap();
    let url =
        manifest::register_path_repository(&root.join(&config.manifest_path), &generated.path)
            .unwrap();
    (generated.path, url)
}

#[test]
fn full_run_rewrites_package_manifest() {
    let dir = setup_workspace();
    scaffold(dir.path(), billing_descriptor());

    let content =
        fs::read_to_string(dir.path().join("packages/acme/billing/composer.json")).unwrap();

    assert!(content.contains("acme/billing"));
    assert!(!content.contains("uccello/package-skeleton"));
    assert!(!content.contains("Package skeleton for Uccello"));
    assert!(!content.contains("Jonathan SARDO"));
    assert!(!content.contains("jonathan@uccellolabs.com"));
    assert!(!content.contains("\"laravel\": {}"));

    // The rewritten manifest must still parse, with the namespace escaping intact.
    let manifest: Value = serde_json::from_str(&content).unwrap();
    assert_eq!(manifest["name"], "acme/billing");
    assert_eq!(manifest["description"], "Billing and invoicing");
    assert_eq!(manifest["authors"][0]["name"], "Jane Doe");
    assert_eq!(manifest["authors"][0]["email"], "jane@acme.test");
    assert!(manifest["autoload"]["psr-4"]
        .as_object()
        .unwrap()
        .contains_key("Acme\\Billing\\"));
    assert_eq!(
        manifest["extra"]["laravel"]["providers"][0],
        "Acme\\Billing\\Providers\\AppServiceProvider"
    );
}

#[test]
fn full_run_rewrites_provider_and_routes() {
    let dir = setup_workspace();
    scaffold(dir.path(), billing_descriptor());

    let package_dir = dir.path().join("packages/acme/billing");

    let provider =
        fs::read_to_string(package_dir.join("src/Providers/AppServiceProvider.php")).unwrap();
    assert!(provider.contains("namespace Acme\\Billing\\Providers;"));
    assert!(provider.contains("'billing'"));
    assert!(provider.contains("public_path('vendor/acme/billing')"));
    assert!(!provider.contains("PackageSkeleton"));
    assert!(!provider.contains("package-skeleton"));

    let routes = fs::read_to_string(package_dir.join("src/Http/routes.php")).unwrap();
    assert!(routes.contains("'Acme\\Billing\\Http\\Controllers'"));
    assert!(routes.contains("'prefix' => 'billing'"));

    let webpack = fs::read_to_string(package_dir.join("webpack.mix.js")).unwrap();
    assert!(webpack.contains("public/acme/billing"));
}

#[test]
fn full_run_copies_other_files_verbatim_and_prunes_artifacts() {
    let dir = setup_workspace();
    scaffold(dir.path(), billing_descriptor());

    let package_dir = dir.path().join("packages/acme/billing");

    let view = fs::read_to_string(package_dir.join("resources/views/index.blade.php")).unwrap();
    assert_eq!(view, "<h1>{{ $title }}</h1>\n");

    assert!(!package_dir.join("README.md").exists());
    assert!(!package_dir.join(".git").exists());
}

#[test]
fn full_run_registers_path_repository_and_preserves_manifest() {
    let dir = setup_workspace();
    let (_, url) = scaffold(dir.path(), billing_descriptor());
    assert_eq!(url, "./packages/acme/billing");

    let content = fs::read_to_string(dir.path().join("composer.json")).unwrap();
    let manifest: Value = serde_json::from_str(&content).unwrap();

    let repositories = manifest["repositories"].as_array().unwrap();
    assert_eq!(repositories.len(), 2);
    assert_eq!(repositories[0]["type"], "vcs");
    assert_eq!(repositories[0]["url"], "https://github.com/uccello/legacy");
    assert_eq!(repositories[1]["type"], "path");
    assert_eq!(repositories[1]["url"], "./packages/acme/billing");

    // Untouched keys survive in their original order.
    assert_eq!(manifest["name"], "uccello/uccello");
    assert_eq!(manifest["require"]["php"], "^8.1");
    let name_at = content.find("\"name\"").unwrap();
    let require_at = content.find("\"require\"").unwrap();
    assert!(name_at < require_at);
}

#[test]
fn each_run_appends_exactly_one_repository_entry() {
    let dir = setup_workspace();
    scaffold(dir.path(), billing_descriptor());

    let mut second = billing_descriptor();
    second.name = "acme/invoicing".to_string();
    second.package = "invoicing".to_string();
    second.namespace = "Acme\\Invoicing".to_string();
    scaffold(dir.path(), second);

    let manifest: Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("composer.json")).unwrap())
            .unwrap();
    let repositories = manifest["repositories"].as_array().unwrap();
    assert_eq!(repositories.len(), 3);
    assert_eq!(repositories[1]["url"], "./packages/acme/billing");
    assert_eq!(repositories[2]["url"], "./packages/acme/invoicing");
}

#[test]
fn collision_aborts_without_touching_the_workspace() {
    let dir = setup_workspace();
    fs::create_dir_all(dir.path().join("packages/acme/billing")).unwrap();
    let manifest_before = fs::read_to_string(dir.path().join("composer.json")).unwrap();

    let config = GeneratorConfig::default();
    let err = generator::make_package(dir.path(), &config, billing_descriptor()).unwrap_err();

    assert_eq!(err.code.as_str(), "package.already_exists");

    let manifest_after = fs::read_to_string(dir.path().join("composer.json")).unwrap();
    assert_eq!(manifest_before, manifest_after);

    let leftover: Vec<_> = fs::read_dir(dir.path().join("packages/acme/billing"))
        .unwrap()
        .collect();
    assert!(leftover.is_empty());
}

#[test]
fn non_interactive_collection_feeds_the_pipeline() {
    let dir = setup_workspace();

    let engine = PromptEngine::non_interactive();
    let descriptor =
        generator::collect_descriptor(&engine, Some("my-org/cool-thing".to_string())).unwrap();
    assert_eq!(descriptor.namespace, "MyOrg\\CoolThing");

    let (path, url) = scaffold(dir.path(), descriptor);
    assert_eq!(path, "packages/my-org/cool-thing");
    assert_eq!(url, "./packages/my-org/cool-thing");

    let content = fs::read_to_string(
        dir.path()
            .join("packages/my-org/cool-thing/composer.json"),
    )
    .unwrap();
    let manifest: Value = serde_json::from_str(&content).unwrap();
    assert_eq!(manifest["name"], "my-org/cool-thing");
    // Unanswered prompts fall back to empty strings.
    assert_eq!(manifest["description"], "");
    assert_eq!(
        manifest["extra"]["laravel"]["providers"][0],
        "MyOrg\\CoolThing\\Providers\\AppServiceProvider"
    );

    let provider = fs::read_to_string(
        dir.path()
            .join("packages/my-org/cool-thing/src/Providers/AppServiceProvider.php"),
    )
    .unwrap();
    assert!(provider.contains("namespace MyOrg\\CoolThing\\Providers;"));
    assert!(provider.contains("'cool-thing'"));
}

#[test]
fn workspace_config_overrides_layout() {
    let dir = setup_workspace();
    fs::write(
        dir.path().join("packsmith.json"),
        r#"{ "packagesDir": "libs" }"#,
    )
    .unwrap();

    let config = config::load(dir.path());
    let generated =
        generator::make_package(dir.path(), &config, billing_descriptor()).unwrap();

    assert_eq!(generated.path, "libs/acme/billing");
    assert!(dir.path().join("libs/acme/billing/composer.json").is_file());

    let url =
        manifest::register_path_repository(&dir.path().join(&config.manifest_path), &generated.path)
            .unwrap();
    assert_eq!(url, "./libs/acme/billing");
}
