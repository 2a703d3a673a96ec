use chrono::Utc;
use url::Url;
use uuid::Uuid;

use crate::credentials::Credentials;
use crate::error::{SignError, SignResult};
use crate::header::authorization_header;
use crate::params::{canonicalize, query_string, ProtocolParams};
use crate::signature::{hmac_sha1_signature, signature_base_string};

const SUPPORTED_METHODS: [&str; 7] = ["GET", "HEAD", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"];

/// Source of the per-request `oauth_nonce` value.
///
/// The default implementation draws random v4 UUIDs. Substituting a fixed
/// source makes a whole signing run reproducible, which is how the tests
/// below pin known signatures.
pub trait NonceSource {
    fn nonce(&self) -> String;
}

/// Nonces from the `uuid` crate's v4 generator, rendered without hyphens.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidNonce;

impl NonceSource for UuidNonce {
    fn nonce(&self) -> String {
        Uuid::new_v4().to_simple().to_string()
    }
}

/// Everything a transport needs to issue one signed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    /// Uppercased HTTP method.
    pub method: String,
    /// The base URL exactly as it was signed.
    pub base_url: String,
    /// Encoded query string in the caller's parameter order, possibly empty.
    pub query_string: String,
    /// Complete `Authorization` header value.
    pub authorization_header: String,
}

impl SignedRequest {
    /// The URL to fetch: the base URL, plus `?` and the query string when
    /// there is one.
    pub fn request_url(&self) -> String {
        if self.query_string.is_empty() {
            self.base_url.clone()
        } else {
            format!("{}?{}", self.base_url, self.query_string)
        }
    }
}

/// Signs requests against one fixed credential set.
///
/// Construction validates the credentials, so a built signer can always
/// produce a header for valid request inputs. The signer holds no other
/// state; one instance can sign any number of requests.
#[derive(Debug, Clone)]
pub struct RequestSigner<N = UuidNonce> {
    credentials: Credentials,
    nonces: N,
}

impl RequestSigner<UuidNonce> {
    /// Builds a signer that draws random UUID nonces.
    pub fn new(credentials: Credentials) -> SignResult<Self> {
        RequestSigner::with_nonce_source(credentials, UuidNonce)
    }
}

impl<N: NonceSource> RequestSigner<N> {
    /// Like [`RequestSigner::new`], with a caller-chosen nonce source.
    pub fn with_nonce_source(credentials: Credentials, nonces: N) -> SignResult<Self> {
        credentials.validate()?;
        Ok(RequestSigner { credentials, nonces })
    }

    /// Signs one request, generating a fresh nonce and the current Unix
    /// timestamp for it.
    pub fn sign_request<I, K, V>(
        &self,
        method: &str,
        base_url: &str,
        query: I,
    ) -> SignResult<SignedRequest>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let nonce = self.nonces.nonce();
        let timestamp = Utc::now().timestamp();
        self.sign_prepared(method, base_url, query, &nonce, timestamp)
    }

    /// The deterministic half of [`RequestSigner::sign_request`]: the same
    /// signing pass, but nonce and timestamp come from the caller. Fixed
    /// inputs give a byte-identical [`SignedRequest`].
    pub fn sign_prepared<I, K, V>(
        &self,
        method: &str,
        base_url: &str,
        query: I,
        nonce: &str,
        timestamp: i64,
    ) -> SignResult<SignedRequest>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let method = validate_method(method)?;
        validate_base_url(base_url)?;
        let query: Vec<(String, String)> = query
            .into_iter()
            .map(|(name, value)| (name.as_ref().to_owned(), value.as_ref().to_owned()))
            .collect();

        let oauth =
            ProtocolParams::from_credentials(&self.credentials, nonce.to_owned(), timestamp);
        let canonical = canonicalize(&oauth, &query);
        let base_string = signature_base_string(&method, base_url, &canonical);
        let signature = hmac_sha1_signature(
            &base_string,
            self.credentials.consumer_secret(),
            self.credentials.access_token_secret(),
        );
        let authorization = authorization_header(&oauth, &signature)?;
        tracing::debug!("signed {} {} with nonce {}", method, base_url, oauth.nonce);

        Ok(SignedRequest {
            method,
            base_url: base_url.to_owned(),
            query_string: query_string(&query),
            authorization_header: authorization,
        })
    }
}

fn validate_method(method: &str) -> SignResult<String> {
    let upper = method.to_ascii_uppercase();
    if SUPPORTED_METHODS.contains(&upper.as_str()) {
        Ok(upper)
    } else {
        Err(SignError::UnsupportedMethod(method.to_owned()))
    }
}

// The URL is signed verbatim, so anything that would change its meaning
// when reassembled (an embedded query, a fragment) is rejected up front
// instead of silently producing a signature the server will refuse.
fn validate_base_url(base_url: &str) -> SignResult<()> {
    let invalid = |reason: String| SignError::InvalidBaseUrl {
        url: base_url.to_owned(),
        reason,
    };
    let parsed = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(format!("unsupported scheme `{}`", other))),
    }
    if parsed.query().is_some() {
        return Err(invalid(
            "query parameters must be passed separately".to_owned(),
        ));
    }
    if parsed.fragment().is_some() {
        return Err(invalid("fragments cannot be signed".to_owned()));
    }
    Ok(())
}
