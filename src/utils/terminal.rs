//! Output sanitization for corpus text
//!
//! The corpus file is produced externally, so verse text and surah names are
//! treated as untrusted before they reach a terminal. ANSI escape sequences and
//! C0/C1 control characters (other than tab and newline) are removed.
//! Unicode format characters such as the right-to-left mark are kept, since
//! Arabic and Urdu text legitimately carries them.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// CSI (`ESC [ ... letter`) and two-byte (`ESC letter`) escape sequences
static ESCAPE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x1b\[[0-9;?]*[A-Za-z]|\x1b[@-Z\\-_]").expect("escape pattern is valid")
});

/// Strip escape sequences and control characters from text bound for the terminal
///
/// # Examples
///
/// ```
/// use quran_explorer::utils::terminal::sanitize_for_terminal;
///
/// assert_eq!(sanitize_for_terminal("\x1b[31mAl-Fatiha\x1b[0m"), "Al-Fatiha");
/// ```
pub fn sanitize_for_terminal(text: &str) -> Cow<'_, str> {
    if !text.chars().any(|ch| ch.is_control() && ch != '\t' && ch != '\n') {
        return Cow::Borrowed(text);
    }

    let without_escapes = ESCAPE_RE.replace_all(text, "");
    Cow::Owned(
        without_escapes
            .chars()
            .filter(|&ch| !ch.is_control() || ch == '\t' || ch == '\n')
            .collect(),
    )
}
