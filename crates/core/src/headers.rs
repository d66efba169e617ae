//! Header order and value signatures.
//!
//! The order signature captures which headers are present, in what order,
//! and whether their names are canonically cased. The value signature
//! classifies the values of a fixed set of headers, either through the
//! lexicon tables or through the stable hash. Both signatures preserve
//! input header order.

use std::collections::HashMap;

use httpfinger_common::Lexicons;
use tracing::debug;

use crate::hash::hash_hex;

/// Encode the headers into `"<order signature>|<value signature>"`.
pub fn header_fingerprint(headers: &[String], lexicons: &Lexicons) -> String {
    format!(
        "{}|{}",
        order_signature(headers, lexicons),
        value_signature(headers, lexicons)
    )
}

/// One token per header line, joined with `,`: the header-name code from
/// the lexicon (prefixed with `!` when the name is not canonically cased)
/// or the hash of the original-case name when unknown.
pub fn order_signature(headers: &[String], lexicons: &Lexicons) -> String {
    let tokens: Vec<String> = headers
        .iter()
        .map(|line| {
            let name = line.split(':').next().unwrap_or(line);
            match lexicons.header_names.get(&name.to_lowercase()) {
                Some(code) if is_case_canonical(name) => code.clone(),
                Some(code) => format!("!{code}"),
                None => hash_hex(name.as_bytes()),
            }
        })
        .collect();
    tokens.join(",")
}

/// A header name is canonically cased when every hyphen-separated segment
/// starts with a non-lowercase character: `Accept-Language` is canonical,
/// `accept-Language` is not.
fn is_case_canonical(name: &str) -> bool {
    name.split('-')
        .all(|segment| !segment.chars().next().is_some_and(|c| c.is_lowercase()))
}

/// One token per classified header, joined with `/`. Headers outside the
/// classified set contribute nothing.
pub fn value_signature(headers: &[String], lexicons: &Lexicons) -> String {
    let tokens: Vec<String> = headers
        .iter()
        .filter(|line| line.contains(':'))
        .filter_map(|line| encode_header_value(line, lexicons))
        .collect();
    tokens.join("/")
}

fn encode_header_value(line: &str, lexicons: &Lexicons) -> Option<String> {
    let name_lower = line.split(':').next().unwrap_or("").to_lowercase();
    // A classified header whose name is missing from the lexicon cannot be
    // coded; it degrades to an unclassified one.
    let code = lexicons.header_names.get(name_lower.as_str())?;
    let table = match name_lower.as_str() {
        "connection" => &lexicons.connection,
        "accept-encoding" => &lexicons.accept_encoding,
        "content-encoding" => &lexicons.content_encoding,
        "cache-control" => &lexicons.cache_control,
        "te" => &lexicons.te,
        "accept-charset" => &lexicons.accept_charset,
        "accept" => &lexicons.accept,
        "content-type" => {
            return Some(encode_content_type(line, code, lexicons));
        }
        "accept-language" => {
            // The raw value is hashed as-is, leading space included.
            let value = raw_value(line);
            return Some(format!("{code}:{}", hash_hex(value.as_bytes())));
        }
        "user-agent" => {
            let value = trimmed_value(line);
            return Some(format!("{code}:{}", hash_hex(value.as_bytes())));
        }
        _ => return None,
    };
    Some(encode_table_value(line, code, table))
}

/// Table-driven encoding shared by most classified headers.
///
/// Compound values carrying a quality parameter, an empty token, or a
/// token absent from the table collapse to the hash of the whole value.
fn encode_table_value(line: &str, code: &str, table: &HashMap<String, String>) -> String {
    let value = trimmed_value(line);

    if value.contains(',') {
        if value.contains(";q=") || value.contains("; q=") {
            // Compound values with quality parameters are not tokenized.
            return format!("{code}:{}", hash_hex(value.as_bytes()));
        }
        let mut token_codes = Vec::new();
        for token in value.split(',') {
            let token = token.strip_prefix(' ').unwrap_or(token);
            match table.get(token) {
                Some(token_code) if !token.is_empty() => token_codes.push(token_code.as_str()),
                _ => {
                    debug!(header = %line, "unknown header value");
                    return format!("{code}:{}", hash_hex(value.as_bytes()));
                }
            }
        }
        return format!("{code}:{}", token_codes.join(","));
    }

    match table.get(value) {
        Some(token_code) => format!("{code}:{token_code}"),
        None => {
            debug!(header = %line, "unknown header value");
            format!("{code}:{}", hash_hex(value.as_bytes()))
        }
    }
}

/// Content-Type has two extra rules applied per value before the table
/// lookup: a value with a `boundary=` parameter collapses the entire
/// field to the hash of the boundary substring, and any other value with
/// parameters contributes its own hash as a token.
fn encode_content_type(line: &str, code: &str, lexicons: &Lexicons) -> String {
    let value = trimmed_value(line);

    if value.contains(',') {
        let mut token_codes = Vec::new();
        for token in value.split(',') {
            let token = token.strip_prefix(' ').unwrap_or(token);
            if token.contains(';') {
                if let Some(pos) = token.find("boundary=") {
                    return format!("{code}:{}", hash_hex(token[pos..].as_bytes()));
                }
                token_codes.push(hash_hex(token.as_bytes()));
            } else {
                match lexicons.content_type.get(token) {
                    Some(token_code) => token_codes.push(token_code.clone()),
                    None => {
                        debug!(header = %line, "unknown Content-Type value");
                        token_codes.push(hash_hex(token.as_bytes()));
                    }
                }
            }
        }
        return format!("{code}:{}", token_codes.join(","));
    }

    if value.contains(';') {
        if let Some(pos) = value.find("boundary=") {
            return format!("{code}:{}", hash_hex(value[pos..].as_bytes()));
        }
        return format!("{code}:{}", hash_hex(value.as_bytes()));
    }

    match lexicons.content_type.get(value) {
        Some(token_code) => format!("{code}:{token_code}"),
        None => {
            debug!(header = %line, "unknown Content-Type value");
            format!("{code}:{}", hash_hex(value.as_bytes()))
        }
    }
}

/// Everything after the first `:`.
fn raw_value(line: &str) -> &str {
    match line.find(':') {
        Some(pos) => &line[pos + 1..],
        None => "",
    }
}

/// Everything after the first `:`, with one leading space stripped.
fn trimmed_value(line: &str) -> &str {
    let value = raw_value(line);
    value.strip_prefix(' ').unwrap_or(value)
}
