//! Stub customization commands
//!
//! - `publish` - Copy the built-in stubs into the project for editing
//! - `list` - Show which stubs are customized
//! - `diff` - Show changes from the built-in stub

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Subcommand;
use console::{style, Emoji};
use repogen::config::{ConfigLoader, GeneratorConfig, PROJECT_CONFIG_FILE};
use repogen::scaffold::stub::builtin_text;
use repogen::scaffold::ArtifactType;
use similar::{ChangeTag, TextDiff};

static CHECK: Emoji<'_, '_> = Emoji("✓ ", "");
static FOLDER: Emoji<'_, '_> = Emoji("📁 ", "");
static FILE: Emoji<'_, '_> = Emoji("📄 ", "");
static CUSTOM: Emoji<'_, '_> = Emoji("✨ ", "* ");
static DEFAULT: Emoji<'_, '_> = Emoji("  ", "  ");

/// Where stubs are published when `stubs_path` is not configured
pub const DEFAULT_STUBS_DIR: &str = "stubs/repository";

/// Stub management subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum StubsCommand {
    /// Copy the built-in stubs into the project's stub directory
    Publish {
        /// Overwrite stubs that already exist
        #[arg(short, long)]
        force: bool,
        /// Project root (defaults to the current directory)
        #[arg(long, value_name = "DIR")]
        project: Option<PathBuf>,
    },
    /// List every stub and whether it is customized
    List {
        /// Project root (defaults to the current directory)
        #[arg(long, value_name = "DIR")]
        project: Option<PathBuf>,
    },
    /// Show the diff between a customized stub and the built-in one
    Diff {
        /// Artifact type (controller, model, request, repository, resource,
        /// collection, policy)
        artifact: ArtifactType,
        /// Project root (defaults to the current directory)
        #[arg(long, value_name = "DIR")]
        project: Option<PathBuf>,
    },
}

impl StubsCommand {
    /// Execute the stubs command
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or a stub
    /// cannot be read or written.
    pub fn execute(&self) -> Result<ExitCode> {
        self.execute_with(&ConfigLoader::default())
    }

    /// Execute with an explicit configuration loader
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or a stub
    /// cannot be read or written.
    pub fn execute_with(&self, loader: &ConfigLoader) -> Result<ExitCode> {
        let root = super::project_root(self.project())?;
        let config = loader.load(&root).context("Failed to load configuration")?;

        match self {
            Self::Publish { force, .. } => {
                publish_stubs(&root, &config, *force)?;
            }
            Self::List { .. } => list_stubs(&stubs_dir(&root, &config)),
            Self::Diff { artifact, .. } => diff_stub(&stubs_dir(&root, &config), *artifact)?,
        }
        Ok(ExitCode::SUCCESS)
    }

    fn project(&self) -> Option<&Path> {
        match self {
            Self::Publish { project, .. } | Self::List { project } | Self::Diff { project, .. } => {
                project.as_deref()
            }
        }
    }
}

/// Directory customized stubs live in for a project
#[must_use]
pub fn stubs_dir(root: &Path, config: &GeneratorConfig) -> PathBuf {
    config
        .resolved_stubs_path(root)
        .unwrap_or_else(|| root.join(DEFAULT_STUBS_DIR))
}

/// Write the built-in stubs into the project's stub directory, keeping
/// existing ones unless `force`
///
/// Returns the stubs that were written.
///
/// # Errors
///
/// Returns an error if the directory or a stub cannot be written.
pub fn publish_stubs(
    root: &Path,
    config: &GeneratorConfig,
    force: bool,
) -> Result<Vec<PathBuf>> {
    let dir = stubs_dir(root, config);
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create stub directory: {}", dir.display()))?;

    println!("{FOLDER}Publishing stubs to {}", style(dir.display()).cyan());
    println!();

    let mut written = Vec::new();
    for artifact in ArtifactType::ALL {
        let path = dir.join(artifact.stub_file_name());
        if path.exists() && !force {
            println!(
                "  {DEFAULT}{} {}",
                style(artifact.stub_file_name()).dim(),
                style("(exists, kept)").dim()
            );
            continue;
        }

        fs::write(&path, builtin_text(artifact))
            .with_context(|| format!("Failed to write stub: {}", path.display()))?;
        println!("  {CHECK}{}", style(artifact.stub_file_name()).green());
        written.push(path);
    }

    if config.stubs_path.is_none() {
        let relative = dir.strip_prefix(root).unwrap_or(&dir);
        println!();
        println!(
            "Add {} to {} to use them.",
            style(format!("stubs_path = \"{}\"", relative.display())).yellow(),
            style(PROJECT_CONFIG_FILE).bold()
        );
    }

    tracing::info!(dir = %dir.display(), count = written.len(), "stubs published");
    Ok(written)
}

/// Print every stub and whether `dir` customizes it
fn list_stubs(dir: &Path) {
    println!("{FOLDER}Repository stubs");
    println!();
    println!("  Directory: {}", style(dir.display()).cyan());
    println!();

    let mut customized = 0;
    for artifact in ArtifactType::ALL {
        let name = artifact.stub_file_name();
        if dir.join(&name).is_file() {
            println!("    {CUSTOM}{}", style(name).yellow());
            customized += 1;
        } else {
            println!("    {DEFAULT}{}", style(name).dim());
        }
    }

    println!();
    println!(
        "  {} customized, {} default",
        style(customized).yellow(),
        style(ArtifactType::ALL.len() - customized).dim()
    );
}

/// Print a line diff from the built-in stub to the customized one
fn diff_stub(dir: &Path, artifact: ArtifactType) -> Result<()> {
    let path = dir.join(artifact.stub_file_name());
    if !path.is_file() {
        anyhow::bail!("Stub '{}' is not customized", artifact.stub_file_name());
    }

    let custom = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read stub: {}", path.display()))?;

    println!("{FILE}{}", style(path.display()).bold());
    println!();
    print!("{}", render_diff(builtin_text(artifact), &custom));
    println!();

    Ok(())
}

/// Unified-style line diff with `-`/`+`/` ` prefixes
#[must_use]
pub fn render_diff(default: &str, custom: &str) -> String {
    let diff = TextDiff::from_lines(default, custom);
    let mut out = String::new();

    for change in diff.iter_all_changes() {
        let line = match change.tag() {
            ChangeTag::Delete => style(format!("-{change}")).red().to_string(),
            ChangeTag::Insert => style(format!("+{change}")).green().to_string(),
            ChangeTag::Equal => format!(" {change}"),
        };
        out.push_str(&line);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_publish_writes_every_stub() {
        let project = tempdir().unwrap();
        let dir = project.path().join(DEFAULT_STUBS_DIR);

        let config = GeneratorConfig::default();
        let written = publish_stubs(project.path(), &config, false).unwrap();

        assert_eq!(written.len(), ArtifactType::ALL.len());
        assert_eq!(
            fs::read_to_string(dir.join("Policy.stub")).unwrap(),
            builtin_text(ArtifactType::Policy)
        );
    }

    #[test]
    fn test_publish_keeps_existing_unless_forced() {
        let project = tempdir().unwrap();
        let dir = project.path().join(DEFAULT_STUBS_DIR);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("Model.stub"), "mine").unwrap();

        let config = GeneratorConfig::default();
        let written = publish_stubs(project.path(), &config, false).unwrap();
        assert_eq!(written.len(), ArtifactType::ALL.len() - 1);
        assert_eq!(fs::read_to_string(dir.join("Model.stub")).unwrap(), "mine");

        publish_stubs(project.path(), &config, true).unwrap();
        assert_eq!(
            fs::read_to_string(dir.join("Model.stub")).unwrap(),
            builtin_text(ArtifactType::Model)
        );
    }

    #[test]
    fn test_publish_uses_given_config() {
        let project = tempdir().unwrap();
        // never read: the caller already loaded the configuration
        fs::write(project.path().join(PROJECT_CONFIG_FILE), "not = [valid").unwrap();
        let config = GeneratorConfig {
            stubs_path: Some(PathBuf::from("resources/stubs")),
            ..GeneratorConfig::default()
        };

        let written = publish_stubs(project.path(), &config, false).unwrap();

        assert_eq!(written.len(), ArtifactType::ALL.len());
        assert!(project.path().join("resources/stubs/Controller.stub").is_file());
        assert!(!project.path().join(DEFAULT_STUBS_DIR).exists());
    }

    #[test]
    fn test_stubs_dir_falls_back_to_default() {
        let root = Path::new("/project");
        assert_eq!(
            stubs_dir(root, &GeneratorConfig::default()),
            root.join(DEFAULT_STUBS_DIR)
        );
    }

    #[test]
    fn test_render_diff_marks_changes() {
        console::set_colors_enabled(false);
        let diff = render_diff("a\nb\n", "a\nc\n");
        assert_eq!(diff, " a\n-b\n+c\n");
    }

    #[test]
    fn test_diff_requires_customized_stub() {
        let dir = tempdir().unwrap();
        assert!(diff_stub(dir.path(), ArtifactType::Model).is_err());
    }
}
