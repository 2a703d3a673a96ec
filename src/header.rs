use crate::encode::percent_encode;
use crate::error::{SignError, SignResult};
use crate::params::{
    ProtocolParams, OAUTH_PARAM_KEY_CONSUMER_KEY, OAUTH_PARAM_KEY_NONCE, OAUTH_PARAM_KEY_SIGNATURE,
    OAUTH_PARAM_KEY_SIGNATURE_METHOD, OAUTH_PARAM_KEY_TIMESTAMP, OAUTH_PARAM_KEY_TOKEN,
    OAUTH_PARAM_KEY_VERSION, OAUTH_SIGNATURE_METHOD, OAUTH_VERSION,
};

const OAUTH_HEADER_SCHEME: &str = "OAuth";

/// Renders the `Authorization` header value for a signed request.
///
/// The seven fields appear in a fixed order regardless of how the values
/// were produced: consumer key, nonce, signature, signature method,
/// timestamp, token, version. Keys go in bare (they are all unreserved
/// already); every value is percent-encoded and double-quoted, with `", "`
/// between fields. An empty value means the request was assembled wrong,
/// so the whole header is refused rather than emitted with a hole in it.
pub fn authorization_header(oauth: &ProtocolParams, signature: &str) -> SignResult<String> {
    let fields: [(&str, &str); 7] = [
        (OAUTH_PARAM_KEY_CONSUMER_KEY, &oauth.consumer_key),
        (OAUTH_PARAM_KEY_NONCE, &oauth.nonce),
        (OAUTH_PARAM_KEY_SIGNATURE, signature),
        (OAUTH_PARAM_KEY_SIGNATURE_METHOD, OAUTH_SIGNATURE_METHOD),
        (OAUTH_PARAM_KEY_TIMESTAMP, &oauth.timestamp),
        (OAUTH_PARAM_KEY_TOKEN, &oauth.token),
        (OAUTH_PARAM_KEY_VERSION, OAUTH_VERSION),
    ];
    let mut rendered = Vec::with_capacity(fields.len());
    for &(name, value) in fields.iter() {
        if value.is_empty() {
            return Err(SignError::MissingField(name.to_owned()));
        }
        rendered.push(format!("{}=\"{}\"", name, percent_encode(value)));
    }
    Ok(format!("{} {}", OAUTH_HEADER_SCHEME, rendered.join(", ")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photos_params() -> ProtocolParams {
        ProtocolParams {
            consumer_key: "dpf43f3p2l4k3l03".to_owned(),
            nonce: "kllo9940pd9333jh".to_owned(),
            timestamp: "1191242096".to_owned(),
            token: "nnch734d00sl2jdk".to_owned(),
        }
    }

    #[test]
    fn renders_all_seven_fields_in_fixed_order() {
        let header =
            authorization_header(&photos_params(), "tR3+Ty81lMeYAr/Fid0kMTYa/WM=").unwrap();
        assert_eq!(
            header,
            "OAuth oauth_consumer_key=\"dpf43f3p2l4k3l03\", \
             oauth_nonce=\"kllo9940pd9333jh\", \
             oauth_signature=\"tR3%2BTy81lMeYAr%2FFid0kMTYa%2FWM%3D\", \
             oauth_signature_method=\"HMAC-SHA1\", \
             oauth_timestamp=\"1191242096\", \
             oauth_token=\"nnch734d00sl2jdk\", \
             oauth_version=\"1.0\""
        );
    }

    #[test]
    fn signature_value_is_percent_encoded() {
        let header = authorization_header(&photos_params(), "a+b/c=").unwrap();
        assert!(header.contains("oauth_signature=\"a%2Bb%2Fc%3D\""));
        assert!(!header.contains("a+b/c="));
    }

    #[test]
    fn refuses_empty_fields_by_name() {
        let mut params = photos_params();
        params.token = String::new();
        match authorization_header(&params, "sig") {
            Err(SignError::MissingField(name)) => assert_eq!(name, "oauth_token"),
            other => panic!("expected MissingField, got {:?}", other),
        }
        match authorization_header(&photos_params(), "") {
            Err(SignError::MissingField(name)) => assert_eq!(name, "oauth_signature"),
            other => panic!("expected MissingField, got {:?}", other),
        }
    }
}
