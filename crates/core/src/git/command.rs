use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, error};
use vendorscope_api::VcsRunner;

/// Runs the `git` executable as a subprocess.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: PathBuf,
}

impl GitCli {
    pub fn new() -> Self {
        Self {
            program: PathBuf::from("git"),
        }
    }

    /// Use a specific git executable instead of the one on `PATH`.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl VcsRunner for GitCli {
    fn run(&self, dir: &Path, args: &[&str]) -> Option<String> {
        let output = match Command::new(&self.program)
            .args(args)
            .current_dir(dir)
            .output()
        {
            Ok(output) => output,
            Err(e) => {
                error!("Failed to run git {} in {}: {}", args.join(" "), dir.display(), e);
                return None;
            }
        };

        if !output.status.success() {
            debug!(
                "git {} in {} exited with {}: {}",
                args.join(" "),
                dir.display(),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
            return None;
        }

        Some(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
