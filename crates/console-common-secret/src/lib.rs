//! Credential handling.
//!
//! Access keys and secret keys handed to the admin service travel through the
//! console wrapped in [`Secret`], so they cannot end up in logs, debug output
//! or JSON responses by accident.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Placeholder written wherever a secret would otherwise be rendered.
pub const REDACTED: &str = "[REDACTED]";

/// A secret value that is redacted in logs and debug output.
///
/// # Example
///
/// ```rust
/// use console_common_secret::Secret;
///
/// let secret_key = Secret::new("minio123".to_string());
/// assert_eq!(secret_key.to_string(), "[REDACTED]");
/// assert_eq!(format!("{:?}", secret_key), "Secret([REDACTED])");
///
/// // Explicit access required
/// assert_eq!(secret_key.expose(), "minio123");
/// ```
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Secret<T: Zeroize>(T);

impl<T: Zeroize> Secret<T> {
    /// Create a new secret.
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Expose the secret value.
    ///
    /// Only the code that hands the credential to the admin service should
    /// need this.
    pub fn expose(&self) -> &T {
        &self.0
    }

    /// Consume and return the inner value, leaving a zeroed default behind.
    pub fn into_inner(mut self) -> T
    where
        T: Default,
    {
        std::mem::take(&mut self.0)
    }
}

impl<T: Zeroize> fmt::Display for Secret<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl<T: Zeroize> fmt::Debug for Secret<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secret({})", REDACTED)
    }
}

impl<T: Zeroize + Default> Default for Secret<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Zeroize + PartialEq> PartialEq for Secret<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: Zeroize + Eq> Eq for Secret<T> {}

impl From<String> for Secret<String> {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Secret<String> {
    fn from(value: &str) -> Self {
        Self::new(value.to_string())
    }
}

impl Secret<String> {
    /// True when no credential was supplied.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// Serde: Deserialize normally, but serialize as redacted
impl<'de, T: Zeroize + Deserialize<'de>> Deserialize<'de> for Secret<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Secret::new)
    }
}

impl<T: Zeroize> Serialize for Secret<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        REDACTED.serialize(serializer)
    }
}

/// Type alias for a secret string.
pub type SecretString = Secret<String>;

/// Serialize the inner value instead of the placeholder.
///
/// For records that are sent to the admin service and must carry the real
/// credential:
///
/// ```rust
/// use console_common_secret::SecretString;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Login {
///     #[serde(serialize_with = "console_common_secret::serialize_exposed")]
///     secret_key: SecretString,
/// }
///
/// let login = Login { secret_key: "minio123".into() };
/// assert_eq!(serde_json::to_string(&login).unwrap(), r#"{"secret_key":"minio123"}"#);
/// ```
pub fn serialize_exposed<T, S>(secret: &Secret<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Zeroize + Serialize,
    S: Serializer,
{
    secret.expose().serialize(serializer)
}
