use std::fmt;
use std::ops::Deref;
use zeroize::Zeroize;

/// A sensitive string that must never be logged, cloned, or deserialized.
///
/// - not `Clone`
/// - `Debug` / `Display` never print the real content
/// - memory is zeroed on drop and on replacement
///
/// Serialization is only possible through [`expose_secret`], which a
/// request body has to opt into field by field.
#[derive(Default)]
pub struct SecretString {
    inner: String,
}

impl SecretString {
    /// Create a new SecretString.
    pub fn new(value: String) -> Self {
        Self { inner: value }
    }

    /// Borrow the inner secret as &str.
    pub fn expose(&self) -> &str {
        &self.inner
    }

    /// Replace the secret, zeroing the previous value.
    pub fn replace(&mut self, value: String) {
        self.inner.zeroize();
        self.inner = value;
    }

    /// Copy the secret into a new, independently zeroed value.
    pub fn duplicate(&self) -> Self {
        Self::new(self.inner.clone())
    }
}

/// `serialize_with` helper for fields that must reach the wire.
pub fn expose_secret<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(secret.expose())
}

/* ===========================
 * Trait implementations
 * ===========================
 */

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl Deref for SecretString {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.expose()
    }
}

impl From<&str> for SecretString {
    fn from(value: &str) -> Self {
        Self::new(value.to_string())
    }
}

impl Drop for SecretString {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}
