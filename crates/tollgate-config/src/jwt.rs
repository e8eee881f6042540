use anyhow::{Context, Result, bail};
use data_encoding::BASE64;
use std::env;

/// Token signing key, decoded from a base64 secret at startup.
///
/// Loaded once in `main` and shared read-only across all requests. A missing
/// or malformed `JWT_SECRET` is a fatal startup error; the process must not
/// begin serving with a bad key.
#[derive(Clone, Debug)]
pub struct JwtConfig {
    /// Raw HMAC key bytes. Never mutated after load.
    pub secret: Vec<u8>,
}

impl JwtConfig {
    pub fn from_env() -> Result<Self> {
        let encoded = env::var("JWT_SECRET").context("JWT_SECRET must be set")?;
        Self::from_encoded(&encoded)
    }

    /// Decodes a base64-encoded secret into raw key bytes.
    pub fn from_encoded(encoded: &str) -> Result<Self> {
        let secret = BASE64
            .decode(encoded.trim().as_bytes())
            .context("JWT_SECRET must be valid base64")?;
        if secret.is_empty() {
            bail!("JWT_SECRET must not be empty");
        }
        Ok(Self { secret })
    }

    /// Builds a config directly from raw key bytes. Intended for tests.
    pub fn from_secret(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_encoding::BASE64;

    #[test]
    fn test_from_encoded_valid() {
        let encoded = BASE64.encode(b"a-signing-key-of-reasonable-length");
        let config = JwtConfig::from_encoded(&encoded).unwrap();
        assert_eq!(config.secret, b"a-signing-key-of-reasonable-length");
    }

    #[test]
    fn test_from_encoded_trims_whitespace() {
        let encoded = format!("  {}\n", BASE64.encode(b"key-bytes"));
        let config = JwtConfig::from_encoded(&encoded).unwrap();
        assert_eq!(config.secret, b"key-bytes");
    }

    #[test]
    fn test_from_encoded_rejects_bad_base64() {
        assert!(JwtConfig::from_encoded("not!!valid@@base64").is_err());
    }

    #[test]
    fn test_from_encoded_rejects_empty() {
        assert!(JwtConfig::from_encoded("").is_err());
    }
}
