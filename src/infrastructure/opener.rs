//! System Link Opener
//!
//! Hands links to the platform's default handler.

use std::process::{Command, Stdio};

use crate::domain::ports::LinkOpener;
use crate::error::{FolioError, FolioResult};

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLinkOpener;

impl SystemLinkOpener {
    fn command(link: &str) -> Command {
        if cfg!(target_os = "windows") {
            let mut cmd = Command::new("cmd");
            // `start` treats the first quoted argument as a window title
            cmd.args(["/C", "start", ""]).arg(link);
            cmd
        } else if cfg!(target_os = "macos") {
            let mut cmd = Command::new("open");
            cmd.arg(link);
            cmd
        } else {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(link);
            cmd
        }
    }
}

impl LinkOpener for SystemLinkOpener {
    fn open(&self, link: &str) -> FolioResult<()> {
        let status = Self::command(link)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| FolioError::OpenLink {
                link: link.to_string(),
                message: e.to_string(),
            })?;

        if !status.success() {
            return Err(FolioError::OpenLink {
                link: link.to_string(),
                message: format!("opener exited with {}", status),
            });
        }
        tracing::info!(link, "handed link to the system opener");
        Ok(())
    }
}
