use std::fmt;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

/// The HTTP Basic authentication scheme prefix, including its trailing space.
pub const BASIC_PREFIX: &str = "Basic ";

/// A base64-encoded `username:password` pair in canonical, prefix-free form.
///
/// `EncodedCredential` is the single currency in which credentials move
/// between carriers (header, query parameter, cookie). Every constructor
/// produces the canonical form (the `Basic ` scheme prefix stripped, however
/// many times a client managed to stack it), so that two credentials are
/// equal exactly when their canonical strings are byte-equal.
///
/// The empty credential is a distinguished state meaning "not present in this
/// carrier"; it is never a valid encoding.
///
/// # Security Properties
///
/// - `Debug` output never contains the encoded value
/// - The raw string is reachable only through the explicit
///   [`as_str`](Self::as_str) accessor
///
/// # Examples
///
/// ```
/// use auth_relay::EncodedCredential;
///
/// let cred = EncodedCredential::encode("testusername", "testpassword");
/// assert_eq!(cred.as_str(), "dGVzdHVzZXJuYW1lOnRlc3RwYXNzd29yZA==");
/// assert_eq!(cred.with_prefix(), "Basic dGVzdHVzZXJuYW1lOnRlc3RwYXNzd29yZA==");
///
/// // Debug output is redacted
/// assert_eq!(format!("{:?}", cred), "EncodedCredential([REDACTED])");
/// ```
// BREAKING CHANGE WARNING: This field MUST remain private. Constructing an
// EncodedCredential from an arbitrary string without normalization breaks the
// canonical-form equality invariant.
#[derive(Clone, PartialEq, Eq)]
pub struct EncodedCredential(String);

impl EncodedCredential {
    /// Returns the empty credential, denoting absence from a carrier.
    pub const fn empty() -> Self {
        Self(String::new())
    }

    /// Encodes a username and password into canonical form.
    ///
    /// The payload is the UTF-8 bytes of `username + ":" + password`,
    /// standard-base64 encoded. A missing password is represented by the
    /// empty string and encodes identically to one. Deterministic; no error
    /// conditions.
    pub fn encode(username: &str, password: &str) -> Self {
        Self(BASE64.encode(format!("{username}:{password}")))
    }

    /// Normalizes a raw carrier value into canonical form.
    ///
    /// Strips a leading `Basic ` (case-sensitive, single trailing space)
    /// repeatedly until none remains, covering clients that send zero
    /// prefixes as well as ones that double-prefix. An empty input yields
    /// the empty credential.
    pub fn normalize(raw: &str) -> Self {
        let mut canonical = raw;
        while let Some(stripped) = canonical.strip_prefix(BASIC_PREFIX) {
            canonical = stripped;
        }
        Self(canonical.to_string())
    }

    /// Wraps a cookie value as a credential without re-normalization.
    ///
    /// The cookie carrier is written by this filter and holds canonical form
    /// by construction.
    pub(crate) fn from_cookie_value(raw: &str) -> Self {
        Self(raw.to_string())
    }

    /// Returns the wire form with exactly one `Basic ` prefix prepended.
    ///
    /// Used only when writing into the Authorization header. Normalizing the
    /// result round-trips to the original canonical value.
    pub fn with_prefix(&self) -> String {
        format!("{BASIC_PREFIX}{}", self.0)
    }

    /// Returns the canonical encoded string.
    ///
    /// This is raw credential material; callers must not let it reach log
    /// output below Debug verbosity.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if this credential denotes absence from its carrier.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// BREAKING CHANGE WARNING: Debug MUST NOT print the encoded value. Request
// credentials routinely end up in error context and trace output (CWE-532).
impl fmt::Debug for EncodedCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("EncodedCredential(<empty>)")
        } else {
            f.write_str("EncodedCredential([REDACTED])")
        }
    }
}
