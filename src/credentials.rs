use std::env;
use std::fmt;

use serde::Deserialize;

use crate::error::{SignError, SignResult};

const ENV_CONSUMER_KEY: &str = "TWITTER_CONSUMER_KEY";
const ENV_CONSUMER_SECRET: &str = "TWITTER_CONSUMER_SECRET";
const ENV_ACCESS_TOKEN: &str = "TWITTER_ACCESS_TOKEN";
const ENV_ACCESS_TOKEN_SECRET: &str = "TWITTER_ACCESS_TOKEN_SECRET";

/// The four credential strings of an OAuth 1.0a client that already holds
/// an access token.
///
/// Immutable once built. The secrets never appear in `Debug` output; the
/// `Deserialize` impl lets host applications keep credentials in their own
/// config files. Validation happens on construction and again when a signer
/// is built, so a deserialized value with empty fields is still caught
/// before it can sign anything.
#[derive(Clone, Deserialize)]
pub struct Credentials {
    consumer_key: String,
    consumer_secret: String,
    access_token: String,
    access_token_secret: String,
}

impl Credentials {
    /// Builds a credential set, rejecting any empty field.
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        access_token: impl Into<String>,
        access_token_secret: impl Into<String>,
    ) -> SignResult<Self> {
        let credentials = Credentials {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            access_token: access_token.into(),
            access_token_secret: access_token_secret.into(),
        };
        credentials.validate()?;
        Ok(credentials)
    }

    /// Reads `TWITTER_CONSUMER_KEY`, `TWITTER_CONSUMER_SECRET`,
    /// `TWITTER_ACCESS_TOKEN` and `TWITTER_ACCESS_TOKEN_SECRET`.
    ///
    /// An unset variable is reported the same way as an empty one, naming
    /// the credential field rather than the variable.
    pub fn from_env() -> SignResult<Self> {
        Credentials::new(
            env::var(ENV_CONSUMER_KEY).unwrap_or_default(),
            env::var(ENV_CONSUMER_SECRET).unwrap_or_default(),
            env::var(ENV_ACCESS_TOKEN).unwrap_or_default(),
            env::var(ENV_ACCESS_TOKEN_SECRET).unwrap_or_default(),
        )
    }

    pub(crate) fn validate(&self) -> SignResult<()> {
        let fields = [
            ("consumer_key", &self.consumer_key),
            ("consumer_secret", &self.consumer_secret),
            ("access_token", &self.access_token),
            ("access_token_secret", &self.access_token_secret),
        ];
        for &(name, value) in fields.iter() {
            if value.is_empty() {
                return Err(SignError::MissingField(name.to_owned()));
            }
        }
        Ok(())
    }

    pub fn consumer_key(&self) -> &str {
        &self.consumer_key
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub(crate) fn consumer_secret(&self) -> &str {
        &self.consumer_secret
    }

    pub(crate) fn access_token_secret(&self) -> &str {
        &self.access_token_secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"<redacted>")
            .field("access_token", &self.access_token)
            .field("access_token_secret", &"<redacted>")
            .finish()
    }
}
