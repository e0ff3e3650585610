use std::io::{self, Write};
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use itertools::Itertools;

use crate::Schedule;

/// What the daemon runs, as whom and under which label.
#[derive(Debug, Clone)]
pub(crate) struct Params {
    pub(crate) label: String,
    pub(crate) run_as: String,
    pub(crate) exe_args: Vec<String>,
}

/// Render the descriptor launchd expects: a property list conforming to
/// the public PLIST 1.0 DTD.
pub(crate) fn render_daemon(params: &Params, schedule: &Schedule) -> String {
    let Params {
        label,
        run_as,
        exe_args,
    } = params;
    let Schedule::Daily(time) = schedule;

    let arguments: String = exe_args
        .iter()
        .map(|arg| format!("        <string>{arg}</string>"))
        .join("\n");

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
    <key>Label</key>
    <string>{label}</string>
    <key>UserName</key>
    <string>{run_as}</string>
    <key>ProgramArguments</key>
    <array>
{arguments}
    </array>
    <key>StartCalendarInterval</key>
    <dict>
        <key>Minute</key>
        <integer>{minute}</integer>
        <key>Hour</key>
        <integer>{hour}</integer>
    </dict>
</dict>
</plist>
"#,
        minute = time.minute(),
        hour = time.hour(),
    )
}

pub(crate) fn write_daemon(path: &Path, plist: &str) -> Result<(), io::Error> {
    let mut f = std::fs::File::create(path)?;
    f.write_all(plist.as_bytes())?;
    // launchd refuses group or world writable descriptors
    let mut perm = f.metadata()?.permissions();
    perm.set_mode(0o644);
    f.set_permissions(perm)?;
    Ok(())
}
