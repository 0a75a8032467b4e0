//! Terminal implementations of the core's user-facing ports.

use std::fmt;
use std::io::{self, Read, Write};

use readmegen_core::{ClipboardError, ClipboardPort, LoginRedirect};
use url::Url;

/// Hidden subcommand run by the detached clipboard helper.
pub const SERVE_CLIPBOARD_COMMAND: &str = "serve-clipboard";

/// First line the helper prints once it owns a clipboard handle.
const HELPER_READY: &str = "ready";

/// System clipboard via `arboard`.
///
/// On Linux the selection is served by the process that set it and is lost
/// when that process exits. Since the CLI exits right after copying, the
/// text is handed to a detached `readmegen serve-clipboard` child there,
/// which keeps serving it until another application takes the clipboard
/// over. Other platforms store the text directly.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardPort for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        #[cfg(target_os = "linux")]
        {
            hand_off_to_helper(text)
        }
        #[cfg(not(target_os = "linux"))]
        {
            let mut clipboard = arboard::Clipboard::new().map_err(clipboard_error)?;
            clipboard.set_text(text).map_err(clipboard_error)
        }
    }
}

fn clipboard_error(err: impl fmt::Display) -> ClipboardError {
    ClipboardError(err.to_string())
}

#[cfg(target_os = "linux")]
fn helper_command(exe: &std::path::Path) -> std::process::Command {
    use std::process::Stdio;

    let mut command = std::process::Command::new(exe);
    command
        .arg(SERVE_CLIPBOARD_COMMAND)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null());
    command
}

/// Interpret the helper's first line of output.
#[cfg(target_os = "linux")]
fn check_helper_status(line: &str) -> Result<(), ClipboardError> {
    match line.trim() {
        HELPER_READY => Ok(()),
        "" => Err(ClipboardError("clipboard helper exited".to_string())),
        reason => Err(ClipboardError(reason.to_string())),
    }
}

// The helper outlives this process on purpose.
#[cfg(target_os = "linux")]
#[allow(clippy::zombie_processes)]
fn hand_off_to_helper(text: &str) -> Result<(), ClipboardError> {
    use std::io::BufRead;

    let exe = std::env::current_exe().map_err(clipboard_error)?;
    let mut child = helper_command(&exe).spawn().map_err(clipboard_error)?;

    let mut stdin = child
        .stdin
        .take()
        .ok_or_else(|| ClipboardError("clipboard helper has no stdin".to_string()))?;
    stdin.write_all(text.as_bytes()).map_err(clipboard_error)?;
    // The helper reads until EOF before it takes the clipboard.
    drop(stdin);

    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| ClipboardError("clipboard helper has no stdout".to_string()))?;
    let mut status = String::new();
    io::BufReader::new(stdout)
        .read_line(&mut status)
        .map_err(clipboard_error)?;
    check_helper_status(&status)?;

    tracing::debug!(pid = child.id(), "Clipboard handed to helper");
    Ok(())
}

/// Body of the hidden helper command.
///
/// Reads the text from stdin, reports on stdout whether a clipboard is
/// available, then owns the clipboard. On Linux this blocks until another
/// application replaces the contents.
pub fn serve_clipboard() -> Result<(), ClipboardError> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .map_err(clipboard_error)?;

    let mut stdout = io::stdout();
    let mut clipboard = match arboard::Clipboard::new() {
        Ok(clipboard) => {
            writeln!(stdout, "{HELPER_READY}").map_err(clipboard_error)?;
            clipboard
        }
        Err(e) => {
            writeln!(stdout, "{e}").ok();
            return Err(clipboard_error(e));
        }
    };
    stdout.flush().map_err(clipboard_error)?;

    #[cfg(target_os = "linux")]
    {
        use arboard::SetExtLinux;
        clipboard.set().wait().text(text).map_err(clipboard_error)
    }
    #[cfg(not(target_os = "linux"))]
    {
        clipboard.set_text(text).map_err(clipboard_error)
    }
}

/// Points the user at the service's login page.
///
/// A terminal cannot follow a redirect, so the URL is printed together with
/// how to hand the resulting session back to the CLI.
#[derive(Debug, Clone)]
pub struct TerminalLoginRedirect {
    login_url: Url,
}

impl TerminalLoginRedirect {
    pub const fn new(login_url: Url) -> Self {
        Self { login_url }
    }

    pub fn message(&self) -> String {
        format!(
            "Sign in required. Open {} in your browser, then set READMEGEN_SESSION to the session cookie.",
            self.login_url
        )
    }
}

impl LoginRedirect for TerminalLoginRedirect {
    fn redirect_to_login(&self) {
        tracing::debug!(url = %self.login_url, "Redirecting to login");
        eprintln!("{}", self.message());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(target_os = "linux")]
    #[test]
    fn test_helper_runs_hidden_subcommand() {
        let command = helper_command(std::path::Path::new("/usr/bin/readmegen"));
        assert_eq!(command.get_program(), "/usr/bin/readmegen");
        let args: Vec<_> = command.get_args().collect();
        assert_eq!(args, vec![SERVE_CLIPBOARD_COMMAND]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_helper_status() {
        assert!(check_helper_status("ready\n").is_ok());
        assert_eq!(
            check_helper_status(""),
            Err(ClipboardError("clipboard helper exited".to_string()))
        );
        assert_eq!(
            check_helper_status("X11 server connection timed out\n"),
            Err(ClipboardError("X11 server connection timed out".to_string()))
        );
    }

    #[test]
    fn test_login_message_names_url() {
        let redirect = TerminalLoginRedirect::new(Url::parse("http://localhost:8000/login").unwrap());
        let message = redirect.message();
        assert!(message.contains("http://localhost:8000/login"));
        assert!(message.contains("READMEGEN_SESSION"));
    }
}
