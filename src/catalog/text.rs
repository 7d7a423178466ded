//! Line and token helpers shared by the loader, the commands and the shell.

/// Field separator used by data files and by the prerequisite prompt.
pub const DELIMITER: char = ',';

/// Token meaning "no prerequisites" when entered interactively.
pub const NONE_SENTINEL: &str = "NONE";

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Strips spaces, tabs and line endings from both ends.
pub fn trim(s: &str) -> &str {
    s.trim_matches(is_blank)
}

/// Splits on `delimiter` and trims every token. Empty tokens are kept so
/// callers can decide what an empty field means.
pub fn split_fields(line: &str, delimiter: char) -> Vec<String> {
    line.split(delimiter).map(|t| trim(t).to_string()).collect()
}

/// Trims and uppercases a course identifier.
pub fn normalize_id(raw: &str) -> String {
    trim(raw).to_ascii_uppercase()
}

pub fn is_none_sentinel(token: &str) -> bool {
    normalize_id(token) == NONE_SENTINEL
}
