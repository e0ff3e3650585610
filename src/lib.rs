#![doc= include_str!("../README.md")]

// build the plist descriptor
// load/unload it through launchctl
// delete the descriptor on removal

mod install;
mod launchd;
mod privilege;
mod registrar;
mod schedule;

pub use install::InstallError;
pub use install::RemoveError;
pub use install::ShutdownDaemon;

pub use privilege::{require_superuser, EffectiveUid, NotSuperuser, Privilege};
pub use registrar::{Launchctl, Registrar, RegistrarError};
pub use schedule::{InvalidTime, Schedule};
