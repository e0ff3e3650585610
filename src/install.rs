#![allow(clippy::missing_errors_doc)]
// ^error variants already document what can go wrong

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::launchd::{self, Params};
use crate::registrar::{Launchctl, Registrar};
use crate::Schedule;

/// Identifier launchd tracks the daemon under.
const LABEL: &str = "org.curfew.shutdown";
/// Descriptors of daemons that run as root live here.
const SYSTEM_DAEMON_DIR: &str = "/Library/LaunchDaemons";

#[derive(thiserror::Error, Debug)]
pub enum InstallError {
    #[error("could not write the daemon descriptor to {path}")]
    Writing {
        #[source]
        source: io::Error,
        path: PathBuf,
    },
}

#[derive(thiserror::Error, Debug)]
pub enum RemoveError {
    #[error("could not delete the daemon descriptor at {path}")]
    Deleting {
        #[source]
        source: io::Error,
        path: PathBuf,
    },
}

/// Owns the one descriptor file and its lifecycle. The daemon is
/// installed exactly when the file at `path` exists; drift caused by
/// outside edits is not reconciled.
#[derive(Debug)]
pub struct ShutdownDaemon<R = Launchctl> {
    path: PathBuf,
    registrar: R,
}

impl ShutdownDaemon<Launchctl> {
    /// The production location, managed through `launchctl`.
    #[must_use]
    pub fn system() -> Self {
        let path = Path::new(SYSTEM_DAEMON_DIR).join(format!("{LABEL}.plist"));
        Self::at(path, Launchctl)
    }
}

impl<R: Registrar> ShutdownDaemon<R> {
    /// Manage a descriptor at a non standard location, used by tests to
    /// redirect everything into a temp dir.
    pub fn at(path: PathBuf, registrar: R) -> Self {
        Self { path, registrar }
    }

    /// Write the descriptor and register it. Registration is best
    /// effort: a service manager that can not be run is reported and the
    /// written descriptor is left in place.
    pub fn install(&self, schedule: Schedule) -> Result<(), InstallError> {
        let params = Params {
            label: LABEL.to_owned(),
            run_as: "root".to_owned(),
            exe_args: ["shutdown", "-h", "now"].map(String::from).to_vec(),
        };

        let plist = launchd::render_daemon(&params, &schedule);
        launchd::write_daemon(&self.path, &plist).map_err(|source| InstallError::Writing {
            source,
            path: self.path.clone(),
        })?;

        if let Err(error) = self.registrar.load(&self.path) {
            tracing::error!(
                "could not register the daemon using {}, error: {error}",
                self.registrar.name()
            );
        }
        Ok(())
    }

    /// Unregister (best effort) and delete the descriptor. A descriptor
    /// that can not be deleted, including one that is already gone, is
    /// an error.
    pub fn remove(&self) -> Result<(), RemoveError> {
        if let Err(error) = self.registrar.unload(&self.path) {
            tracing::error!(
                "could not unregister the daemon using {}, error: {error}",
                self.registrar.name()
            );
        }

        fs::remove_file(&self.path).map_err(|source| RemoveError::Deleting {
            source,
            path: self.path.clone(),
        })
    }
}
