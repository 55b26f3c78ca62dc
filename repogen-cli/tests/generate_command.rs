//! Integration tests for the generate and stubs commands
//!
//! Commands run with [`ConfigLoader::project_only`] so the developer's user
//! config and `REPOGEN_*` variables cannot change the outcome.

#![allow(clippy::result_large_err)]

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use figment::Jail;
use repogen::config::{ConfigLoader, GeneratorConfig};
use repogen::scaffold::{AlwaysDecline, Confirm};
use repogen_cli::{Cli, Commands, GenerateCommand};
use tempfile::TempDir;

fn parse_generate(args: &[&str]) -> GenerateCommand {
    let cli = Cli::try_parse_from(std::iter::once("repogen").chain(args.iter().copied())).unwrap();
    match cli.command {
        Commands::Generate(command) => command,
        Commands::Stubs { .. } => panic!("expected generate command"),
    }
}

fn project_arg(project: &TempDir) -> String {
    project.path().display().to_string()
}

fn run(command: &GenerateCommand, confirm: &mut dyn Confirm) -> ExitCode {
    command
        .execute_with(&ConfigLoader::project_only(), confirm)
        .unwrap()
}

/// Test that every file is generated under the configured base path
#[test]
fn test_generate_writes_all_files() {
    let project = TempDir::new().unwrap();
    let root = project_arg(&project);
    let command = parse_generate(&["generate", "Admin/Order", "--project", &root, "--skip-autoload"]);

    let code = run(&command, &mut AlwaysDecline);

    assert_eq!(code, ExitCode::SUCCESS);
    for relative in [
        "app/Http/Controllers/Admin/OrderController.php",
        "app/Models/Admin/Order.php",
        "app/Http/Requests/Admin/OrderRequest.php",
        "app/Repositories/Admin/OrderRepository.php",
        "app/Http/Resources/Admin/OrderResource.php",
        "app/Http/Resources/Admin/OrderCollection.php",
        "app/Policies/Admin/OrderPolicy.php",
    ] {
        assert!(project.path().join(relative).is_file(), "{relative} missing");
    }
}

/// Test that `--base` overrides the configured base path
#[test]
fn test_base_option_overrides_config() {
    let project = TempDir::new().unwrap();
    fs::write(project.path().join("repogen.toml"), "base_path = \"app\"\n").unwrap();
    let root = project_arg(&project);
    let command = parse_generate(&[
        "generate", "Order", "--base", "src/Shop", "--project", &root, "--skip-autoload",
    ]);

    assert_eq!(run(&command, &mut AlwaysDecline), ExitCode::SUCCESS);

    let model = fs::read_to_string(project.path().join("src/Shop/Models/Order.php")).unwrap();
    assert!(model.contains("namespace Src\\Shop\\Models;"));
    assert!(!project.path().join("app").exists());
}

/// Test that an unusable name argument fails without writing anything
#[test]
fn test_invalid_name_fails() {
    let project = TempDir::new().unwrap();
    let root = project_arg(&project);

    for name in ["Admin/", "order", "   "] {
        let command = parse_generate(&["generate", name, "--project", &root, "--skip-autoload"]);
        let code = run(&command, &mut AlwaysDecline);
        assert_eq!(code, ExitCode::FAILURE, "{name:?} should fail");
    }
    assert!(!project.path().join("app").exists());
}

/// Test the force and no-override flags against existing files
#[test]
fn test_overwrite_flags() {
    let project = TempDir::new().unwrap();
    let root = project_arg(&project);
    let model = project.path().join("app/Models/Order.php");
    fs::create_dir_all(model.parent().unwrap()).unwrap();

    fs::write(&model, "original").unwrap();
    let command =
        parse_generate(&["generate", "Order", "--no-override", "--project", &root, "--skip-autoload"]);
    let mut never_asked = |_: &Path| -> bool { panic!("no-override must not prompt") };
    assert_eq!(run(&command, &mut never_asked), ExitCode::SUCCESS);
    assert_eq!(fs::read_to_string(&model).unwrap(), "original");

    let command = parse_generate(&["generate", "Order", "-f", "--project", &root, "--skip-autoload"]);
    let mut never_asked = |_: &Path| -> bool { panic!("force must not prompt") };
    assert_eq!(run(&command, &mut never_asked), ExitCode::SUCCESS);
    assert!(fs::read_to_string(&model).unwrap().contains("class Order"));
}

/// Test that a declined prompt keeps the file and still succeeds
#[test]
fn test_declined_prompt_is_not_an_error() {
    let project = TempDir::new().unwrap();
    let root = project_arg(&project);
    let policy = project.path().join("app/Policies/OrderPolicy.php");
    fs::create_dir_all(policy.parent().unwrap()).unwrap();
    fs::write(&policy, "original").unwrap();

    let command = parse_generate(&["generate", "Order", "--project", &root, "--skip-autoload"]);
    let mut prompts = Vec::new();
    let mut decline = |path: &Path| {
        prompts.push(path.to_path_buf());
        false
    };

    assert_eq!(run(&command, &mut decline), ExitCode::SUCCESS);
    assert_eq!(prompts, vec![policy.clone()]);
    assert_eq!(fs::read_to_string(&policy).unwrap(), "original");
}

/// Test that a failed artifact makes the command fail
#[test]
fn test_write_failure_sets_exit_code() {
    let project = TempDir::new().unwrap();
    let root = project_arg(&project);
    fs::write(project.path().join("app"), "not a directory").unwrap();

    let command = parse_generate(&["generate", "Order", "--project", &root, "--skip-autoload"]);
    assert_eq!(run(&command, &mut AlwaysDecline), ExitCode::FAILURE);
}

/// Test that a customized stub published into the project is picked up
#[test]
fn test_published_stub_is_used() {
    let project = TempDir::new().unwrap();
    let root = project_arg(&project);
    let stubs = project.path().join("stubs/repository");

    repogen_cli::commands::stubs::publish_stubs(project.path(), &GeneratorConfig::default(), false)
        .unwrap();
    fs::write(stubs.join("Model.stub"), "// {{modelName}} in {{namespace}}\n").unwrap();
    fs::write(
        project.path().join("repogen.toml"),
        "stubs_path = \"stubs/repository\"\n",
    )
    .unwrap();

    let command = parse_generate(&["generate", "Order", "--project", &root, "--skip-autoload"]);
    assert_eq!(run(&command, &mut AlwaysDecline), ExitCode::SUCCESS);
    assert_eq!(
        fs::read_to_string(project.path().join("app/Models/Order.php")).unwrap(),
        "// Order in App\\Models\n"
    );
}

/// Test that subdirectories cannot leave the base path or break the namespace
#[test]
fn test_unsafe_subdirectories_fail() {
    let project = TempDir::new().unwrap();
    let root = project_arg(&project);

    for name in ["../../Order", "Admin/../../Order", "admin panel/Order"] {
        let command = parse_generate(&["generate", name, "--project", &root, "--skip-autoload"]);
        assert_eq!(run(&command, &mut AlwaysDecline), ExitCode::FAILURE, "{name:?} should fail");
    }
    assert!(fs::read_dir(project.path()).unwrap().next().is_none());
}

/// Test that non-ASCII class names are accepted
#[test]
fn test_non_ascii_entity() {
    let project = TempDir::new().unwrap();
    let root = project_arg(&project);
    let command = parse_generate(&["generate", "Café", "--project", &root, "--skip-autoload"]);

    assert_eq!(run(&command, &mut AlwaysDecline), ExitCode::SUCCESS);
    assert!(project.path().join("app/Models/Café.php").is_file());
}

/// Test that environment overrides only apply when the loader reads them
#[test]
fn test_environment_isolation() {
    Jail::expect_with(|jail| {
        jail.set_env("REPOGEN_BASE_PATH", "src");
        let root = jail.directory().display().to_string();
        let command = parse_generate(&["generate", "Order", "--project", &root, "--skip-autoload"]);

        let code = command
            .execute_with(&ConfigLoader::project_only(), &mut AlwaysDecline)
            .unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
        assert!(jail.directory().join("app/Models/Order.php").is_file());
        assert!(!jail.directory().join("src").exists());

        let code = command
            .execute_with(&ConfigLoader::project_only().with_env(true), &mut AlwaysDecline)
            .unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
        assert!(jail.directory().join("src/Models/Order.php").is_file());
        Ok(())
    });
}

/// Test that the JSON log flag reaches the logging configuration
#[test]
fn test_log_json_flag() {
    let cli = Cli::try_parse_from(["repogen", "stubs", "list", "--log-json", "-v"]).unwrap();
    let config = cli.observability();
    assert!(config.json);
    assert_eq!(config.default_filter, "info,repogen=debug");

    let cli = Cli::try_parse_from(["repogen", "stubs", "list"]).unwrap();
    assert!(!cli.observability().json);
}

/// Test that the verbosity flag is global
#[test]
fn test_verbose_flag_parses_anywhere() {
    let cli = Cli::try_parse_from(["repogen", "generate", "Order", "-vv"]).unwrap();
    assert_eq!(cli.verbose, 2);

    let cli = Cli::try_parse_from(["repogen", "-v", "stubs", "list"]).unwrap();
    assert_eq!(cli.verbose, 1);
}

/// Test that unknown artifact types are rejected by the parser
#[test]
fn test_stubs_diff_rejects_unknown_artifact() {
    assert!(Cli::try_parse_from(["repogen", "stubs", "diff", "view"]).is_err());
    assert!(Cli::try_parse_from(["repogen", "stubs", "diff", "policy"]).is_ok());
}
