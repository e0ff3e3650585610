use std::io;
use std::path::Path;
use std::process::Command;

/// Registers and unregisters daemon descriptors with the OS service
/// manager. Implemented by [`Launchctl`] in production and by doubles in
/// tests that need to fail without spawning anything.
pub trait Registrar {
    fn name(&self) -> &'static str;
    fn load(&self, path: &Path) -> Result<(), RegistrarError>;
    fn unload(&self, path: &Path) -> Result<(), RegistrarError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RegistrarError {
    #[error("could not run the service manager command")]
    Io(
        #[from]
        #[source]
        io::Error,
    ),
}

/// Talks to launchd through the `launchctl` binary.
#[derive(Debug, Clone, Copy)]
pub struct Launchctl;

impl Launchctl {
    fn run(self, subcommand: &str, path: &Path) -> Result<(), RegistrarError> {
        // output is left on the operators terminal, only the exit
        // status is inspected
        let status = Command::new("launchctl")
            .arg(subcommand)
            .arg(path)
            .status()?;
        if !status.success() {
            tracing::warn!("launchctl {subcommand} exited with {status}");
        }
        Ok(())
    }
}

impl Registrar for Launchctl {
    fn name(&self) -> &'static str {
        "launchctl"
    }

    fn load(&self, path: &Path) -> Result<(), RegistrarError> {
        self.run("load", path)
    }

    fn unload(&self, path: &Path) -> Result<(), RegistrarError> {
        self.run("unload", path)
    }
}
