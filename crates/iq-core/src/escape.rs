//! POSIX shell quoting.

/// Quote `input` as a single POSIX shell word.
///
/// The whole string goes inside single quotes, where the shell expands
/// nothing. An embedded `'` cannot appear inside single quotes, so each
/// one becomes `'\''`: close the quoted run, emit an escaped quote, reopen.
///
/// ```
/// use iq_core::escape;
///
/// assert_eq!(escape("a b $HOME"), "'a b $HOME'");
/// assert_eq!(escape("foo ' bar"), r"'foo '\'' bar'");
/// ```
pub fn escape(input: &str) -> String {
    let quotes = input.matches('\'').count();
    let mut out = String::with_capacity(input.len() + 2 + quotes * 3);
    out.push('\'');
    for ch in input.chars() {
        if ch == '\'' {
            out.push_str("'\\''");
        } else {
            out.push(ch);
        }
    }
    out.push('\'');
    out
}
