//! Terminal clipboard access through the OSC 52 escape sequence.
//!
//! Works over SSH and inside tmux (with `set-clipboard on`) since the
//! terminal emulator, not this process, owns the clipboard.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use crossterm::Command;
use std::fmt;
use std::io::Write;

/// Copy text to the system clipboard (`c` selection).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyToClipboard(pub String);

impl Command for CopyToClipboard {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        write!(f, "\x1b]52;c;{}\x07", STANDARD.encode(self.0.as_bytes()))
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> std::io::Result<()> {
        Err(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "OSC 52 clipboard requires ANSI support",
        ))
    }

    #[cfg(windows)]
    fn is_ansi_code_supported(&self) -> bool {
        true
    }
}

/// Write the clipboard sequence to a terminal writer.
pub fn copy(writer: &mut impl Write, text: &str) -> crate::Result<()> {
    crossterm::execute!(writer, CopyToClipboard(text.to_string()))?;
    Ok(())
}
