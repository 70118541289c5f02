use crate::error::{DocdeckError, Result};
use std::process::{Command, Stdio};

/// Copies text to the system clipboard.
/// - macOS: pbcopy
/// - Linux: xclip, falling back to xsel
/// - Windows: clip.exe
///
/// Failures are reported to the caller; docdeck never retries and never
/// treats a clipboard failure as fatal.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    return pipe_to(Command::new("pbcopy"), text);

    #[cfg(target_os = "linux")]
    {
        let mut xclip = Command::new("xclip");
        xclip.args(["-selection", "clipboard"]);
        match pipe_to(xclip, text) {
            Err(DocdeckError::Clipboard(_)) => {
                let mut xsel = Command::new("xsel");
                xsel.args(["--clipboard", "--input"]);
                pipe_to(xsel, text)
            }
            other => other,
        }
    }

    #[cfg(target_os = "windows")]
    return pipe_to(Command::new("clip"), text);

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        let _ = text;
        Err(DocdeckError::Clipboard(
            "clipboard not supported on this platform".to_string(),
        ))
    }
}

#[cfg(any(target_os = "macos", target_os = "linux", target_os = "windows"))]
fn pipe_to(mut command: Command, text: &str) -> Result<()> {
    use std::io::Write;

    let program = command.get_program().to_string_lossy().to_string();
    let mut child = command
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| DocdeckError::Clipboard(format!("failed to spawn {}: {}", program, e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| DocdeckError::Clipboard(format!("failed to write to {}: {}", program, e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| DocdeckError::Clipboard(format!("failed to wait for {}: {}", program, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(DocdeckError::Clipboard(format!(
            "{} exited with error",
            program
        )))
    }
}

/// Formats an example for the clipboard: the endpoint line, the language,
/// a blank line, then the code.
pub fn format_for_clipboard(url: &str, language: &str, code: &str) -> String {
    format!("# {} ({})\n\n{}", url, language, code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_for_clipboard() {
        let text = format_for_clipboard("/auth/api-key", "curl", "curl -X POST ...");
        assert_eq!(text, "# /auth/api-key (curl)\n\ncurl -X POST ...");
    }
}
