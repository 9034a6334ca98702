use std::{io, path::PathBuf};

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};

use crate::{
    config::InstallerConfig,
    errors::Result,
    hooks::{HOOK_NAMES, HookState},
    installer::{InstallReport, Installer, install},
    utils::{format_list, print_info, print_success, print_warning},
};

#[derive(Subcommand)]
enum Commands {
    /// Install subcommand (default)
    /// Write every git hook from the template, backing up hand-written hooks.
    #[command(short_flag = 'i')]
    Install,

    /// Status subcommand
    /// Show whether each hook is missing, generated or user-authored.
    #[command(short_flag = 's')]
    Status,

    /// List the hook names the installer manages
    #[command(short_flag = 'l')]
    List,

    /// Print the effective configuration as TOML
    Config,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser)]
#[command(about = "Installs the project's git hooks:\n\
\t- Every hook runs the shared template in '.git-hooks'.\n\
\t- Hand-written hooks are kept as '<hook>.backup'.")]
#[command(help_template = "{about}\n\nUSAGE:\n{usage}\n\n{all-args}\n")]
#[command(name = "hook-installer", version)]
pub struct Cli {
    /// Commands
    #[command(subcommand)]
    command: Option<Commands>,

    /// Project root containing `.git` (defaults to the current directory)
    #[arg(short = 'C', long = "directory", value_name = "DIR")]
    directory: Option<PathBuf>,

    /// Verbose
    /// If passed, print what happened to every hook.
    #[arg(short, long, default_value = "false")]
    verbose: bool,
}

/// # `run`
/// Runs the program.
///
/// ## Errors
/// Returns an error if the configuration cannot be loaded or the command fails.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let root = cli.directory.clone().unwrap_or_else(|| PathBuf::from("."));

    match cli.command.unwrap_or(Commands::Install) {
        Commands::Install => {
            let report = match &cli.directory {
                Some(directory) => Installer::new(InstallerConfig::load(directory)?).install()?,
                None => install()?,
            };

            report_install(&report, cli.verbose);
        }
        Commands::Status => {
            let installer = Installer::new(InstallerConfig::load(&root)?);

            for (name, state) in installer.status()? {
                println!("{}", format_status(name, state));
            }
        }
        Commands::List => {
            for name in HOOK_NAMES {
                println!("{name}");
            }
        }
        Commands::Config => {
            print!("{}", InstallerConfig::load(&root)?.to_toml()?);
        }
        Commands::Completions { shell } => {
            let mut command = Cli::command();
            let name = command.get_name().to_string();
            generate(shell, &mut command, name, &mut io::stdout());
        }
    }

    Ok(())
}

fn report_install(report: &InstallReport, verbose: bool) {
    if verbose {
        let lines: Vec<String> = report
            .outcomes
            .iter()
            .map(|outcome| format!("{}: {}", outcome.name, outcome.action))
            .collect();

        print_info(
            &format!("Template: {}", report.template_path.display()),
            &format_list(&lines),
        );
    }

    let backed_up: Vec<String> = report
        .backed_up()
        .map(|outcome| format!("{} -> {}.backup", outcome.name, outcome.name))
        .collect();

    if !backed_up.is_empty() {
        print_warning(
            "Existing hooks were backed up before being replaced",
            &format_list(&backed_up),
        );
    }

    print_success(
        &format!(
            "Installed {} git hooks in {}",
            report.outcomes.len(),
            report.hooks_dir.display()
        ),
        "",
    );
}

fn format_status(name: &str, state: HookState) -> String {
    format!("{name:<20} {state}")
}
