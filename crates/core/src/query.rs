//! Query-string parsing with percent-decoding.

use httpfinger_common::{FingerError, FingerResult};

/// One decoded `name=value` parameter. Values are raw bytes: a
/// percent-sequence may decode to any octet, not just valid UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParam {
    pub name: Vec<u8>,
    pub value: Vec<u8>,
}

/// Parse `name=value&name=value...` into decoded parameters, in source
/// order. Duplicate names are preserved, a parameter without `=` gets an
/// empty value, and `+` decodes to a space.
///
/// A malformed percent-sequence (non-hex digit, or truncated at the end
/// of the string) fails the whole parse; no default is substituted.
pub fn parse_query(query: &str) -> FingerResult<Vec<QueryParam>> {
    let bytes = query.as_bytes();
    let mut params = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let mut name = Vec::new();
        while i < bytes.len() && bytes[i] != b'=' && bytes[i] != b'&' {
            name.push(bytes[i]);
            i += 1;
        }
        let mut value = Vec::new();
        if i < bytes.len() && bytes[i] == b'=' {
            i += 1;
            while i < bytes.len() && bytes[i] != b'&' {
                value.push(bytes[i]);
                i += 1;
            }
        }
        params.push(QueryParam {
            name: percent_decode(&name)?,
            value: percent_decode(&value)?,
        });
        if i < bytes.len() && bytes[i] == b'&' {
            i += 1;
        }
    }

    Ok(params)
}

/// Decode `+` to space and `%XX` to the corresponding byte.
fn percent_decode(encoded: &[u8]) -> FingerResult<Vec<u8>> {
    let mut decoded = Vec::with_capacity(encoded.len());
    let mut i = 0;

    while i < encoded.len() {
        match encoded[i] {
            b'%' => {
                let (hi, lo) = match (encoded.get(i + 1), encoded.get(i + 2)) {
                    (Some(hi), Some(lo)) => (hex_value(*hi), hex_value(*lo)),
                    _ => {
                        return Err(FingerError::PercentEncoding(
                            String::from_utf8_lossy(encoded).into_owned(),
                        ))
                    }
                };
                match (hi, lo) {
                    (Some(hi), Some(lo)) => decoded.push(hi << 4 | lo),
                    _ => {
                        return Err(FingerError::PercentEncoding(
                            String::from_utf8_lossy(encoded).into_owned(),
                        ))
                    }
                }
                i += 3;
            }
            b'+' => {
                decoded.push(b' ');
                i += 1;
            }
            byte => {
                decoded.push(byte);
                i += 1;
            }
        }
    }

    Ok(decoded)
}

fn hex_value(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}
