//! Opening a repository in the user's terminal or editor.

use std::io;
use std::process::{Command, Stdio};

use gfm_core::{Launcher, OpenRequest};

/// Launches applications through the operating system.
///
/// On macOS this goes through `open -a <app> <path>`, which returns as soon
/// as the application has been asked to open the path. Elsewhere the
/// application is executed directly with the path as its argument and left
/// running.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn open(&self, request: &OpenRequest) -> io::Result<()> {
        let mut cmd = command_for(request);
        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        tracing::debug!(
            target = %request.target,
            app = %request.app.display(),
            path = %request.path.display(),
            "opening"
        );

        if cfg!(target_os = "macos") {
            let status = cmd.status()?;
            if !status.success() {
                return Err(io::Error::other(format!(
                    "could not open {} ({status})",
                    request.app.display()
                )));
            }
        } else {
            cmd.spawn()?;
        }
        Ok(())
    }
}

fn command_for(request: &OpenRequest) -> Command {
    if cfg!(target_os = "macos") {
        let mut cmd = Command::new("open");
        cmd.arg("-a").arg(&request.app).arg(&request.path);
        cmd
    } else {
        let mut cmd = Command::new(&request.app);
        cmd.arg(&request.path).current_dir(&request.path);
        cmd
    }
}
