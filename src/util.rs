/// File-name part of a program path: everything after the last path
/// separator (`/`, or `\` on Windows).
#[must_use]
pub fn exec_file_name(path: &str) -> &str {
    let sep = if cfg!(windows) { '\\' } else { '/' };
    path.rsplit(sep).next().unwrap_or(path)
}

/// Option name with every leading `-` removed, so `-name` and `--name`
/// resolve identically.
#[must_use]
pub fn strip_leading_dashes(token: &str) -> &str {
    token.trim_start_matches('-')
}

/// Drop one optional `0x`/`0X` prefix from a hexadecimal literal.
#[must_use]
pub fn trim_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s)
}
