//! Git remote URL → canonical repo URI.
//!
//! Recognized shapes:
//! - `[user@]host:path` (SCP-like)
//! - `ssh://[user@]host[:port]/path`
//! - `http[s]://[user[:pass]@]host[:port]/path`
//! - any other `scheme://` prefix, stripped best-effort
//! - `host/path` (already canonical, returned unchanged)
//!
//! Output is `host/path` with no scheme, credentials, port or trailing
//! `.git`. Case is preserved.

const SCHEME_SEPARATOR: &str = "://";

/// Derive the canonical repo URI for a git remote URL.
///
/// Never fails: unrecognized input passes through with whatever could be
/// confidently stripped.
pub fn canonicalize(remote_url: &str) -> String {
    let url = remote_url.trim();

    let (host, path) = match strip_scheme(url) {
        Some(rest) => split_authority(strip_userinfo(rest)),
        None => split_scp(url),
    };

    join(host, normalize_path(path))
}

/// Remove a leading `scheme://`, if the text before `://` looks like a scheme.
fn strip_scheme(url: &str) -> Option<&str> {
    let (scheme, rest) = url.split_once(SCHEME_SEPARATOR)?;
    let valid = scheme
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    valid.then_some(rest)
}

/// Drop `user@` or `user:pass@` ahead of the host.
///
/// Only an `@` before the first `/` counts as user-info.
fn strip_userinfo(s: &str) -> &str {
    let head_end = s.find('/').unwrap_or(s.len());
    match s[..head_end].rfind('@') {
        Some(at) => &s[at + 1..],
        None => s,
    }
}

/// Split `host[:port]/path` (scheme already removed).
fn split_authority(s: &str) -> (&str, &str) {
    let (authority, path) = match s.find('/') {
        Some(slash) => s.split_at(slash),
        None => (s, ""),
    };
    (strip_port(authority), path)
}

/// Split the scheme-less forms: `[user@]host:path`, `host:port/path` or
/// `host/path`.
///
/// The host ends at the first `:` or `/`; only that part may carry `user@`.
/// A segment after `:` made only of digits up to the next `/` is a port;
/// anything else starts the path.
fn split_scp(s: &str) -> (&str, &str) {
    let slash = s.find('/').unwrap_or(s.len());
    match s.find(':') {
        Some(colon) if colon < slash => {
            let host = strip_user(&s[..colon]);
            let after = &s[colon + 1..];
            let segment_end = after.find('/').unwrap_or(after.len());
            if is_port(&after[..segment_end]) {
                (host, &after[segment_end..])
            } else {
                (host, after)
            }
        }
        _ => {
            let (host, path) = s.split_at(slash);
            (strip_user(host), path)
        }
    }
}

fn strip_user(host: &str) -> &str {
    host.rsplit_once('@').map_or(host, |(_, host)| host)
}

fn strip_port(authority: &str) -> &str {
    match authority.rsplit_once(':') {
        Some((host, port)) if port.is_empty() || is_port(port) => host,
        _ => authority,
    }
}

fn is_port(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn normalize_path(path: &str) -> &str {
    let path = path.trim_matches('/');
    path.strip_suffix(".git")
        .unwrap_or(path)
        .trim_end_matches('/')
}

fn join(host: &str, path: &str) -> String {
    match (host.is_empty(), path.is_empty()) {
        (_, true) => host.to_string(),
        (true, false) => path.to_string(),
        (false, false) => format!("{}/{}", host, path),
    }
}
