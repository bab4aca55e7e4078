// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shell-style `$NAME` / `${NAME}` substitution.
//!
//! Expansion is pure: the variable source is passed in as a closure, so callers
//! decide whether names resolve against the process environment or a fixed map.

/// Characters that form a one-character variable name after `$`.
fn is_special_var(c: char) -> bool {
    matches!(c, '*' | '#' | '$' | '@' | '!' | '?' | '-') || c.is_ascii_digit()
}

fn is_name_char(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}

/// Reads the variable name that follows a `$`.
///
/// Returns the name and the number of bytes consumed after the `$`. An empty
/// name with a non-zero width is malformed syntax whose bytes are dropped; an
/// empty name with zero width means the `$` is literal.
fn shell_name(s: &str) -> (&str, usize) {
    let mut chars = s.chars();
    match chars.next() {
        Some('{') => {
            let rest = &s[1..];
            let mut inner = rest.chars();
            if let (Some(c), Some('}')) = (inner.next(), inner.next()) {
                if is_special_var(c) {
                    return (&rest[..c.len_utf8()], 2 + c.len_utf8());
                }
            }
            match rest.find('}') {
                Some(0) => ("", 2),
                Some(end) => (&rest[..end], end + 2),
                None => ("", 1),
            }
        }
        Some(c) if is_special_var(c) => (&s[..c.len_utf8()], c.len_utf8()),
        _ => {
            let end = s
                .char_indices()
                .find(|(_, c)| !is_name_char(*c))
                .map(|(i, _)| i)
                .unwrap_or(s.len());
            (&s[..end], end)
        }
    }
}

/// Replaces every `$NAME` and `${NAME}` in `input` with `lookup(NAME)`.
///
/// Unset variables expand to the empty string. A `$` not followed by a name is
/// kept as-is; `${}` is removed.
///
/// # Examples
///
/// ```
/// use dotcfg::domain::expand::expand;
///
/// let env = |name: &str| (name == "USER").then(|| "alice".to_string());
/// assert_eq!(expand("home/${USER}/x", env), "home/alice/x");
/// assert_eq!(expand("$USER-$MISSING!", env), "alice-!");
/// assert_eq!(expand("cost: 5$", env), "cost: 5$");
/// ```
pub fn expand<F>(input: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];
        let (name, width) = shell_name(after);
        if !name.is_empty() {
            out.push_str(&lookup(name).unwrap_or_default());
        } else if width == 0 {
            out.push('$');
        }
        rest = &after[width..];
    }

    out.push_str(rest);
    out
}

/// Extracts the variable name from a reference such as `$NAME`, `${NAME}` or
/// `NAME`.
///
/// One leading `$` is stripped, then a `{...}` pair is removed when it wraps the
/// whole remainder. Anything else is returned untouched.
///
/// # Examples
///
/// ```
/// use dotcfg::domain::expand::env_name;
///
/// assert_eq!(env_name("${PASSWORD}"), "PASSWORD");
/// assert_eq!(env_name("$PASSWORD"), "PASSWORD");
/// assert_eq!(env_name("{PASSWORD}"), "PASSWORD");
/// assert_eq!(env_name("PASSWORD"), "PASSWORD");
/// ```
pub fn env_name(reference: &str) -> &str {
    let name = reference.strip_prefix('$').unwrap_or(reference);
    name.strip_prefix('{')
        .and_then(|inner| inner.strip_suffix('}'))
        .unwrap_or(name)
}
