//! Repository-pattern file generation command
//!
//! ```bash
//! repogen generate Admin/Order --base app --no-override
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;
use console::{style, Emoji};
use repogen::config::ConfigLoader;
use repogen::scaffold::{
    AutoloadRefresh, Confirm, GenerationContext, GenerationReport, Outcome, OverwritePolicy,
    RepositoryGenerator,
};
use repogen::RepogenError;

use crate::prompt::TerminalConfirm;

static SUCCESS: Emoji<'_, '_> = Emoji("✓ ", "+ ");
static SKIPPED: Emoji<'_, '_> = Emoji("• ", "- ");
static FAILED: Emoji<'_, '_> = Emoji("✗ ", "x ");

/// Generate every repository-pattern file for an entity
#[derive(Debug, Clone, Args)]
pub struct GenerateCommand {
    /// Class (singular) to generate for, e.g. `User` or `Admin/User`
    ///
    /// The class must start with an uppercase letter. Subdirectories become
    /// namespace segments, so they must be identifiers too; `..` is refused.
    pub name: String,

    /// Base path to generate the files in, relative to the project root
    #[arg(long)]
    pub base: Option<String>,

    /// Overwrite existing files without asking
    #[arg(short, long)]
    pub force: bool,

    /// Never overwrite existing files
    #[arg(long)]
    pub no_override: bool,

    /// Do not run the autoload command afterwards
    #[arg(long)]
    pub skip_autoload: bool,

    /// Project root (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub project: Option<PathBuf>,
}

impl GenerateCommand {
    /// Execute the generate command, asking on the terminal before
    /// overwriting
    ///
    /// # Errors
    ///
    /// Returns an error if the project root or configuration cannot be
    /// determined.
    pub fn execute(&self) -> Result<ExitCode> {
        self.execute_with(&ConfigLoader::default(), &mut TerminalConfirm::default())
    }

    /// Execute with an explicit configuration loader and overwrite
    /// confirmation
    ///
    /// Returns [`ExitCode::FAILURE`] for an invalid name argument or when
    /// any artifact failed; skipped files do not affect the exit code.
    ///
    /// # Errors
    ///
    /// Returns an error if the project root or configuration cannot be
    /// determined.
    pub fn execute_with(
        &self,
        loader: &ConfigLoader,
        confirm: &mut dyn Confirm,
    ) -> Result<ExitCode> {
        let project_root = super::project_root(self.project.as_deref())?;
        let config = loader
            .load(&project_root)
            .context("Failed to load configuration")?;

        let base_path = self.base.as_deref().unwrap_or(&config.base_path);
        let context = match GenerationContext::parse(&self.name, base_path) {
            Ok(context) => context,
            Err(RepogenError::InvalidArgument(message)) => {
                eprintln!("{} {message}", style("error:").red().bold());
                return Ok(ExitCode::FAILURE);
            }
            Err(err) => return Err(err.into()),
        };

        println!(
            "\n{} {} {}",
            style("Generating repository files for").cyan().bold(),
            style(context.entity_name()).green().bold(),
            style("...").cyan().bold()
        );

        let autoload = config
            .autoload_command
            .clone()
            .filter(|_| !self.skip_autoload);

        let mut generator = RepositoryGenerator::new(context, config, project_root.clone())
            .with_policy(OverwritePolicy::from_flags(self.force, self.no_override));
        if let Some(command) = autoload {
            generator = generator.with_listener(AutoloadRefresh::new(command, &project_root));
        }

        let report = generator.generate(confirm);
        print_report(&report, &project_root);

        if report.has_failures() {
            Ok(ExitCode::FAILURE)
        } else {
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn print_report(report: &GenerationReport, project_root: &Path) {
    println!();
    for result in &report.results {
        let shown = result
            .path
            .strip_prefix(project_root)
            .unwrap_or(&result.path)
            .display();

        match &result.outcome {
            Outcome::Written => {
                println!("  {}{} ({})", style(SUCCESS).green(), shown, style(result.artifact).dim());
            }
            Outcome::Skipped => {
                println!(
                    "  {}{} {}",
                    style(SKIPPED).yellow(),
                    shown,
                    style("(exists, skipped)").yellow()
                );
            }
            Outcome::Failed(err) => {
                println!("  {}{} {}", style(FAILED).red(), shown, style(err).red());
            }
        }
    }

    for failure in &report.hook_failures {
        println!(
            "\n{} {} hook: {}",
            style("warning:").yellow().bold(),
            failure.listener,
            failure.error
        );
    }

    let written = report.written().count();
    let skipped = report.skipped().count();
    let failed = report.failures().count();
    println!(
        "\n{} written, {} skipped, {} failed",
        style(written).green().bold(),
        style(skipped).yellow(),
        style(failed).red()
    );
}
