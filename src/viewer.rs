use std::io;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

fn viewer_command(path: &Path) -> Command {
    if cfg!(target_os = "macos") {
        let mut cmd = Command::new("open");
        cmd.arg(path);
        cmd
    } else if cfg!(windows) {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", ""]).arg(path);
        cmd
    } else {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(path);
        cmd
    }
}

/// Hand the written chart to the platform's default image viewer.
pub(crate) fn open(path: &Path) -> io::Result<()> {
    let mut cmd = viewer_command(path);
    debug!(command = ?cmd, "launching viewer");
    let status = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()?;
    if status.success() {
        Ok(())
    } else {
        Err(io::Error::new(
            io::ErrorKind::Other,
            format!("viewer exited with {status}"),
        ))
    }
}
