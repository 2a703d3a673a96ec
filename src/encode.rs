use percent_encoding::{utf8_percent_encode, AsciiSet, PercentEncode, NON_ALPHANUMERIC};

// https://tools.ietf.org/html/rfc5849#section-3.6
//
// * Text values are first encoded as UTF-8 octets per [RFC3629] if
//   they are not already.
// * The values are then escaped using the [RFC3986] percent-encoding
//   (%XX) mechanism:
//   * Characters in the unreserved character set as defined by
//     [RFC3986], Section 2.3 (ALPHA, DIGIT, "-", ".", "_", "~") MUST
//     NOT be encoded.
//   * All other characters MUST be encoded.
//   * The two hexadecimal characters used to represent encoded
//     characters MUST be uppercase.
const OAUTH_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encodes `input` against the OAuth unreserved set.
///
/// Works on the UTF-8 bytes of the input, so any string is encodable and
/// this never fails. Multi-byte characters come out as one uppercase `%XX`
/// triplet per byte. The same encoder is applied everywhere a value crosses
/// into protocol text; encoding twice is always a bug in the caller.
pub fn percent_encode(input: &str) -> PercentEncode<'_> {
    utf8_percent_encode(input, OAUTH_ENCODE_SET)
}

#[cfg(test)]
mod tests {
    use super::percent_encode;

    // https://developer.twitter.com/en/docs/authentication/oauth-1-0a/percent-encoding-parameters
    #[test]
    fn twitter_documented_examples() {
        assert_eq!(
            percent_encode("Ladies + Gentlemen").to_string(),
            "Ladies%20%2B%20Gentlemen"
        );
        assert_eq!(
            percent_encode("An encoded string!").to_string(),
            "An%20encoded%20string%21"
        );
        assert_eq!(
            percent_encode("Dogs, Cats & Mice").to_string(),
            "Dogs%2C%20Cats%20%26%20Mice"
        );
        assert_eq!(percent_encode("\u{2603}").to_string(), "%E2%98%83");
    }

    #[test]
    fn unreserved_characters_pass_through() {
        let unreserved = "ABCXYZabcxyz0123456789-._~";
        assert_eq!(percent_encode(unreserved).to_string(), unreserved);
    }

    #[test]
    fn hex_digits_are_uppercase() {
        assert_eq!(percent_encode("/?=&+").to_string(), "%2F%3F%3D%26%2B");
    }

    #[test]
    fn multibyte_characters_encode_every_byte() {
        // U+30C6 is three octets in UTF-8
        assert_eq!(percent_encode("\u{30c6}").to_string(), "%E3%83%86");
    }
}
