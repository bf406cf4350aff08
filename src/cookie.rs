//! Cookie-carrier mechanics: capture-and-strip on the way in, `Set-Cookie`
//! rendering on the way out.
//!
//! The cookie protocol has no delete operation, so removal is synthesized:
//! any `Cookie` line holding the credential cookie is rebuilt from all of its
//! *other* pairs, and lines without it are preserved byte-for-byte.

use http::header::{HeaderMap, HeaderValue, InvalidHeaderValue, COOKIE};

use crate::config::Config;
use crate::credential::EncodedCredential;

/// Captures the named cookie's value and strips it from the request headers.
///
/// Returns the empty credential when the cookie is absent, leaving the
/// headers untouched. The captured value is taken as-is: the credential
/// cookie is written by this filter and already holds canonical form.
pub(crate) fn extract(headers: &mut HeaderMap, name: &str) -> EncodedCredential {
    let mut found: Option<String> = None;
    let mut kept: Vec<HeaderValue> = Vec::new();

    for value in headers.get_all(COOKIE) {
        let line = match value.to_str() {
            Ok(line) => line,
            // Lines that are not valid UTF-8 cannot hold our cookie; keep
            // them verbatim.
            Err(_) => {
                kept.push(value.clone());
                continue;
            }
        };

        let (captured, survivors) = strip_pair(line, name);
        match captured {
            None => kept.push(value.clone()),
            Some(captured_value) => {
                if found.is_none() {
                    found = Some(captured_value);
                }
                if !survivors.is_empty() {
                    // Joining surviving pairs of an already-valid header
                    // value cannot produce an invalid one; dropping the
                    // whole line is the fail-closed alternative.
                    if let Ok(rebuilt) = HeaderValue::from_str(&survivors) {
                        kept.push(rebuilt);
                    }
                }
            }
        }
    }

    let Some(found) = found else {
        return EncodedCredential::empty();
    };

    headers.remove(COOKIE);
    for value in kept {
        headers.append(COOKIE, value);
    }

    EncodedCredential::from_cookie_value(&found)
}

/// Renders the `Set-Cookie` header that persists a credential at the client.
///
/// `Path` falls back to `/` when unconfigured; `Domain` is omitted when empty
/// (host-only cookie). The cookie is always `Secure`, `HttpOnly`, and
/// `SameSite=Strict` so it never travels over plaintext, into scripts, or on
/// cross-site requests.
pub(crate) fn render_set_cookie(
    config: &Config,
    credential: &EncodedCredential,
) -> Result<HeaderValue, InvalidHeaderValue> {
    let path = if config.cookie_path.is_empty() {
        "/"
    } else {
        config.cookie_path.as_str()
    };

    let mut line = format!(
        "{}={}; Path={}",
        config.cookie_name,
        credential.as_str(),
        path
    );
    if !config.cookie_domain.is_empty() {
        line.push_str("; Domain=");
        line.push_str(&config.cookie_domain);
    }
    line.push_str("; Secure; HttpOnly; SameSite=Strict");

    HeaderValue::from_str(&line)
}

/// Splits one `Cookie` line into the target cookie's value (if present) and
/// the re-joined remainder.
fn strip_pair(line: &str, name: &str) -> (Option<String>, String) {
    let mut captured = None;
    let mut survivors: Vec<&str> = Vec::new();

    for pair in line.split(';') {
        let trimmed = pair.trim();
        if trimmed.is_empty() {
            continue;
        }
        match trimmed.split_once('=') {
            Some((key, value)) if key == name => {
                if captured.is_none() {
                    captured = Some(value.to_string());
                }
            }
            _ => survivors.push(trimmed),
        }
    }

    (captured, survivors.join("; "))
}
