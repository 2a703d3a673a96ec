use crate::credentials::Credentials;
use crate::encode::percent_encode;

/// The only signature method this crate produces.
pub const OAUTH_SIGNATURE_METHOD: &str = "HMAC-SHA1";
/// Protocol version advertised in every request.
pub const OAUTH_VERSION: &str = "1.0";

pub(crate) const OAUTH_PARAM_KEY_CONSUMER_KEY: &str = "oauth_consumer_key";
pub(crate) const OAUTH_PARAM_KEY_NONCE: &str = "oauth_nonce";
pub(crate) const OAUTH_PARAM_KEY_SIGNATURE: &str = "oauth_signature";
pub(crate) const OAUTH_PARAM_KEY_SIGNATURE_METHOD: &str = "oauth_signature_method";
pub(crate) const OAUTH_PARAM_KEY_TIMESTAMP: &str = "oauth_timestamp";
pub(crate) const OAUTH_PARAM_KEY_TOKEN: &str = "oauth_token";
pub(crate) const OAUTH_PARAM_KEY_VERSION: &str = "oauth_version";

/// The request-specific `oauth_*` values generated for one signing pass.
///
/// `oauth_signature_method` and `oauth_version` are fixed for the whole
/// crate ([`OAUTH_SIGNATURE_METHOD`], [`OAUTH_VERSION`]) and are therefore
/// not stored here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolParams {
    pub consumer_key: String,
    pub nonce: String,
    pub timestamp: String,
    pub token: String,
}

impl ProtocolParams {
    pub(crate) fn from_credentials(
        credentials: &Credentials,
        nonce: String,
        timestamp: i64,
    ) -> Self {
        ProtocolParams {
            consumer_key: credentials.consumer_key().to_owned(),
            nonce,
            timestamp: timestamp.to_string(),
            token: credentials.access_token().to_owned(),
        }
    }

    /// The six signed protocol pairs. `oauth_signature` is absent: it is
    /// derived from the string these pairs feed into.
    pub(crate) fn pairs(&self) -> [(&'static str, &str); 6] {
        [
            (OAUTH_PARAM_KEY_CONSUMER_KEY, &self.consumer_key),
            (OAUTH_PARAM_KEY_NONCE, &self.nonce),
            (OAUTH_PARAM_KEY_SIGNATURE_METHOD, OAUTH_SIGNATURE_METHOD),
            (OAUTH_PARAM_KEY_TIMESTAMP, &self.timestamp),
            (OAUTH_PARAM_KEY_TOKEN, &self.token),
            (OAUTH_PARAM_KEY_VERSION, OAUTH_VERSION),
        ]
    }
}

/// Normalizes the protocol and query parameters into the canonical string
/// that gets signed.
///
/// Names and values are percent-encoded first; the encoded pairs are then
/// sorted by name, ties broken by value, and joined as `name=value` with
/// `&` (RFC 5849 section 3.4.1.3.2). The order of operations is visible in
/// the output: `c@` encodes to `c%40`, which sorts before `c2`, while the
/// raw forms would sort the other way. The sort compares (name, value)
/// pairs, not the concatenated `name=value` text. Duplicate names are all
/// kept, and the order the caller supplied never shows through.
pub fn canonicalize(oauth: &ProtocolParams, query: &[(String, String)]) -> String {
    let mut encoded: Vec<(String, String)> = Vec::with_capacity(6 + query.len());
    for &(name, value) in oauth.pairs().iter() {
        encoded.push((
            percent_encode(name).to_string(),
            percent_encode(value).to_string(),
        ));
    }
    for (name, value) in query {
        encoded.push((
            percent_encode(name).to_string(),
            percent_encode(value).to_string(),
        ));
    }
    encoded.sort();
    let pairs: Vec<String> = encoded
        .iter()
        .map(|(name, value)| format!("{}={}", name, value))
        .collect();
    pairs.join("&")
}

/// Renders the query parameters as the query string the request is sent
/// with: percent-encoded, joined with `&`, in the order supplied. Protocol
/// parameters travel in the `Authorization` header, never here.
pub fn query_string(query: &[(String, String)]) -> String {
    let pairs: Vec<String> = query
        .iter()
        .map(|(name, value)| format!("{}={}", percent_encode(name), percent_encode(value)))
        .collect();
    pairs.join("&")
}
