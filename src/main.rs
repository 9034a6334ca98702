use hook_installer::{
    cli::run,
    errors::{InstallerError, ResolutionError},
    utils::print_error,
};

fn main() {
    if let Err(error) = run() {
        let suggestion = match &error {
            InstallerError::Resolution(ResolutionError::GitDirNotFound { .. }) => {
                "Run hook-installer from the repository root, or pass it with --directory."
            }
            InstallerError::Write(_) => {
                "Hooks installed before this one were kept; fix the problem and run again."
            }
            _ => "Fix the problem above and run hook-installer again.",
        };

        print_error("Git hooks were not installed", &error.to_string(), suggestion);
        std::process::exit(1);
    }
}
