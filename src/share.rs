use std::io::Write;
use std::process::{Command, Stdio};
use tracing::debug;

/// Destination for a shared link. The system clipboard is the production
/// implementation; the trait keeps the fallback chain testable.
pub trait ShareTarget {
    fn copy(&self, text: &str) -> std::io::Result<()>;
}

/// Copies through the platform clipboard command: `pbcopy` on macOS,
/// `wl-copy` or `xclip` on Linux.
pub struct SystemClipboard;

impl SystemClipboard {
    fn candidates() -> Vec<(&'static str, Vec<&'static str>)> {
        if cfg!(target_os = "macos") {
            vec![("pbcopy", vec![])]
        } else {
            vec![
                ("wl-copy", vec![]),
                ("xclip", vec!["-selection", "clipboard"]),
            ]
        }
    }
}

impl ShareTarget for SystemClipboard {
    fn copy(&self, text: &str) -> std::io::Result<()> {
        let mut last_err = std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no clipboard command available",
        );

        for (cmd, args) in Self::candidates() {
            let spawned = Command::new(cmd)
                .args(&args)
                .stdin(Stdio::piped())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn();

            let mut child = match spawned {
                Ok(child) => child,
                Err(e) => {
                    debug!(command = cmd, error = %e, "clipboard command unavailable");
                    last_err = e;
                    continue;
                }
            };

            if let Some(stdin) = child.stdin.as_mut() {
                stdin.write_all(text.as_bytes())?;
            }
            let status = child.wait()?;
            if status.success() {
                return Ok(());
            }
            last_err = std::io::Error::other(format!("{} exited with {}", cmd, status));
        }

        Err(last_err)
    }
}

/// Outcome of a share attempt, rendered by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The URL landed on the clipboard.
    Copied { label: String, url: String },
    /// No copy mechanism worked; the user gets the URL to copy by hand.
    Manual { label: String, url: String },
}

/// Share a link: copy it to the target, falling back to a manual-copy
/// instruction when no mechanism is available. Never fails.
pub fn share_link(target: &dyn ShareTarget, label: &str, url: &str) -> ShareOutcome {
    match target.copy(url) {
        Ok(()) => ShareOutcome::Copied {
            label: label.to_string(),
            url: url.to_string(),
        },
        Err(e) => {
            debug!(error = %e, "clipboard copy failed, falling back to manual copy");
            ShareOutcome::Manual {
                label: label.to_string(),
                url: url.to_string(),
            }
        }
    }
}
