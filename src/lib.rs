//! OAuth 1.0a request signing for Twitter-style HTTP APIs.
//!
//! This crate builds the `Authorization: OAuth ...` header for the
//! signed-request flow where the client already holds an access token:
//! HMAC-SHA1 over the RFC 5849 signature base string, with the method,
//! base URL and query parameters all folded in. The output is a
//! [`SignedRequest`] that any HTTP transport can send; the default
//! `client` feature bundles a blocking `reqwest` transport ([`ApiClient`])
//! that issues GET requests and parses the JSON they return.
//!
//! ```no_run
//! use tweetsign::{Credentials, RequestSigner};
//!
//! # fn main() -> Result<(), tweetsign::SignError> {
//! let credentials = Credentials::from_env()?;
//! let signer = RequestSigner::new(credentials)?;
//! let signed = signer.sign_request(
//!     "GET",
//!     "https://api.twitter.com/1.1/statuses/user_timeline.json",
//!     vec![("screen_name", "rustlang"), ("count", "5")],
//! )?;
//! // Hand these to the transport of your choice.
//! println!("GET {}", signed.request_url());
//! println!("Authorization: {}", signed.authorization_header);
//! # Ok(())
//! # }
//! ```
//!
//! The intermediate steps (percent-encoding, parameter canonicalization,
//! base-string assembly, header rendering) are exported individually for
//! callers that need to interoperate with or debug another OAuth stack.

mod credentials;
mod encode;
mod error;
mod header;
mod params;
mod signature;
mod signer;

#[cfg(feature = "client")]
mod client;

pub use crate::credentials::Credentials;
pub use crate::encode::percent_encode;
pub use crate::error::{SignError, SignResult};
pub use crate::header::authorization_header;
pub use crate::params::{
    canonicalize, query_string, ProtocolParams, OAUTH_SIGNATURE_METHOD, OAUTH_VERSION,
};
pub use crate::signature::{hmac_sha1_signature, signature_base_string, signing_key};
pub use crate::signer::{NonceSource, RequestSigner, SignedRequest, UuidNonce};

#[cfg(feature = "client")]
pub use crate::client::ApiClient;
