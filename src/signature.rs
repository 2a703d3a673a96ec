use hmac::{Hmac, Mac};
use sha1::Sha1;

use crate::encode::percent_encode;

type HmacSha1 = Hmac<Sha1>;

/// Builds the signature base string: `METHOD&encode(url)&encode(params)`.
///
/// The method is uppercased here as well, so a caller that skipped
/// validation still cannot produce a base string with a lowercase verb.
/// `base_url` goes in exactly as given and `canonical_params` must already
/// be normalized; all three parts are percent-encoded as wholes before the
/// `&` join, which is what turns the inner `=` and `&` of the parameter
/// string into `%3D` and `%26`.
pub fn signature_base_string(method: &str, base_url: &str, canonical_params: &str) -> String {
    format!(
        "{}&{}&{}",
        percent_encode(&method.to_ascii_uppercase()),
        percent_encode(base_url),
        percent_encode(canonical_params)
    )
}

/// Derives the HMAC key: `encode(consumer_secret)&encode(token_secret)`.
///
/// Both secrets are encoded even when they are plain ASCII, and the `&` is
/// kept even if a secret were empty, per RFC 5849 section 3.4.2.
pub fn signing_key(consumer_secret: &str, token_secret: &str) -> String {
    format!(
        "{}&{}",
        percent_encode(consumer_secret),
        percent_encode(token_secret)
    )
}

/// Signs `base_string` with HMAC-SHA1 under the derived key and returns the
/// base64 of the 20-byte digest (standard alphabet, padded).
pub fn hmac_sha1_signature(
    base_string: &str,
    consumer_secret: &str,
    token_secret: &str,
) -> String {
    let key = signing_key(consumer_secret, token_secret);
    // NOTE: HMAC-SHA1 accepts keys of any length, so new_varkey cannot fail.
    let mut mac = HmacSha1::new_varkey(key.as_bytes()).expect("HMAC accepts keys of any length");
    mac.input(base_string.as_bytes());
    let digest = mac.result().code();
    base64::encode(&digest)
}
