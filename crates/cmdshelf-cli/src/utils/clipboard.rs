//! Clipboard support using OSC 52 escape sequences
//!
//! OSC 52 asks the terminal to place text on the system clipboard. It works
//! over SSH and inside tmux, so cmdshelf needs no platform clipboard library.
//!
//! The format is: `\x1b]52;c;<base64_content>\x07`
//!
//! References:
//! - https://invisible-island.net/xterm/ctlseqs/ctlseqs.html#h3-Operating-System-Commands

use base64::{Engine, engine::general_purpose::STANDARD};
use std::io::{self, Write};

/// Build the OSC 52 sequence that copies `text`.
fn osc52_sequence(text: &str) -> String {
    // BEL terminator; some terminals ignore the ST form
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

/// Copy an expanded command line to the clipboard
///
/// The sequence goes to stderr so it never ends up in piped stdout.
///
/// # Errors
///
/// Returns an `io::Error` if stderr cannot be written.
pub fn copy_to_clipboard(text: &str) -> io::Result<()> {
    let mut stderr = io::stderr().lock();
    stderr.write_all(osc52_sequence(text).as_bytes())?;
    stderr.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_wraps_base64_payload() {
        assert_eq!(osc52_sequence("ls -la"), "\x1b]52;c;bHMgLWxh\x07");
    }

    #[test]
    fn test_empty_text_still_produces_sequence() {
        assert_eq!(osc52_sequence(""), "\x1b]52;c;\x07");
    }

    #[test]
    fn test_multiline_command_is_encoded_whole() {
        let seq = osc52_sequence("echo a &&\necho b");
        assert!(seq.starts_with("\x1b]52;c;"));
        assert!(!seq.contains('\n'));
    }
}
