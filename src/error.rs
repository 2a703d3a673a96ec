use thiserror::Error;

/// Errors produced while preparing or issuing a signed request.
///
/// Signing itself cannot fail once its inputs pass validation:
/// percent-encoding is total over UTF-8 strings and HMAC-SHA1 accepts keys
/// of any length. Every variant here points at an input the caller controls
/// or, behind the `client` feature, at the network.
#[derive(Debug, Error)]
pub enum SignError {
    /// A credential or protocol field was empty where a value is required.
    #[error("missing required field: {0}")]
    MissingField(String),

    /// The base URL could not be parsed, or carries parts that must be
    /// passed separately (query string, fragment).
    #[error("invalid base URL `{url}`: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The HTTP method is not one the signer will sign.
    #[error("unsupported HTTP method `{0}`")]
    UnsupportedMethod(String),

    /// The request could not be sent, or the server answered with a
    /// non-success status.
    #[cfg(feature = "client")]
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not the JSON document it claimed to be.
    #[cfg(feature = "client")]
    #[error("malformed JSON response: {0}")]
    ResponseParse(#[from] serde_json::Error),
}

/// Result type alias for signing operations.
pub type SignResult<T> = Result<T, SignError>;

#[cfg(test)]
mod tests {
    use super::SignError;

    #[test]
    fn display_names_the_offending_field() {
        let err = SignError::MissingField("consumer_key".to_owned());
        assert_eq!(err.to_string(), "missing required field: consumer_key");
    }

    #[test]
    fn display_carries_url_and_reason() {
        let err = SignError::InvalidBaseUrl {
            url: "ftp://example.com".to_owned(),
            reason: "unsupported scheme `ftp`".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "invalid base URL `ftp://example.com`: unsupported scheme `ftp`"
        );
    }
}
