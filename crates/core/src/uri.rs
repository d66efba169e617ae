//! URI metrics: length magnitude, directory statistics, file extension,
//! and query statistics, encoded as the first seven fingerprint fields.

use httpfinger_common::{FingerResult, Lexicons};

use crate::query::parse_query;

/// Directory statistics derived from the URI path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectoryData {
    /// Path segments after the leading separator is stripped.
    pub count: usize,
    /// Mean segment length in bytes, 0.0 when there are no segments.
    pub avg_size: f64,
}

/// Query statistics derived from the raw query string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryData {
    /// Byte length of the raw query string.
    pub size: usize,
    /// Number of `name=value` pairs.
    pub count: usize,
    /// Mean decoded-value length in bytes, 0.0 when there are no pairs.
    pub avg_size: f64,
}

/// Encode a URI into the seven-field URI portion of the fingerprint:
/// `log10len|dircount|diravglog|ext|querysizelog|querycount|queryavglog`.
///
/// URIs of one byte or less short-circuit to `"0.0||||||"`. Numeric fields
/// carry exactly one decimal digit; fields without a defined value stay
/// empty rather than reading `0` or `0.0`.
pub fn uri_fingerprint(uri: &str, lexicons: &Lexicons) -> FingerResult<String> {
    if uri.len() <= 1 {
        return Ok(format!("{}||||||", log10_len(uri.len())));
    }

    let (path, query) = decompose(uri);

    let dir_data = directory_data(path);
    let dir_avg_log = if dir_data.count > 0 && dir_data.avg_size > 0.0 {
        format_fixed(dir_data.avg_size.log10())
    } else {
        String::new()
    };

    let ext = extension(path)
        .filter(|ext| lexicons.extensions.contains(*ext))
        .unwrap_or("");

    let (query_size_log, query_count, query_avg_log) = match query {
        None => (String::new(), String::new(), String::new()),
        Some(query) => {
            let data = query_data(query)?;
            if data.count == 0 {
                (String::new(), String::new(), String::new())
            } else {
                let avg_log = if data.avg_size > 0.0 {
                    format_fixed(data.avg_size.log10())
                } else {
                    String::new()
                };
                (
                    format_fixed((data.size as f64).log10()),
                    data.count.to_string(),
                    avg_log,
                )
            }
        }
    };

    Ok(format!(
        "{}|{}|{}|{}|{}|{}|{}",
        log10_len(uri.len()),
        dir_data.count,
        dir_avg_log,
        ext,
        query_size_log,
        query_count,
        query_avg_log
    ))
}

/// Split a URI into its path and query substrings.
///
/// The fragment is discarded; the query is everything after the first `?`.
/// Returning `None` for the query distinguishes "no query component" from
/// an empty one. An absolute URI loses its `scheme://authority` prefix; a
/// URI whose authority is not followed by a path decomposes to an empty
/// path.
pub fn decompose(uri: &str) -> (&str, Option<&str>) {
    let without_fragment = match uri.find('#') {
        Some(pos) => &uri[..pos],
        None => uri,
    };
    let (base, query) = match without_fragment.find('?') {
        Some(pos) => (&without_fragment[..pos], Some(&without_fragment[pos + 1..])),
        None => (without_fragment, None),
    };
    let path = match base.find("://") {
        Some(pos) => {
            let after_scheme = &base[pos + 3..];
            match after_scheme.find('/') {
                Some(slash) => &after_scheme[slash..],
                None => "",
            }
        }
        None => base,
    };
    (path, query)
}

fn directory_data(path: &str) -> DirectoryData {
    // The first split element is always empty for a rooted path.
    let segments: Vec<&str> = path.split('/').skip(1).collect();
    let count = segments.len();
    if count == 0 {
        return DirectoryData { count, avg_size: 0.0 };
    }
    let total: usize = segments.iter().map(|segment| segment.len()).sum();
    DirectoryData {
        count,
        avg_size: total as f64 / count as f64,
    }
}

fn query_data(query: &str) -> FingerResult<QueryData> {
    let params = parse_query(query)?;
    let count = params.len();
    if count == 0 {
        return Ok(QueryData {
            size: query.len(),
            count,
            avg_size: 0.0,
        });
    }
    let total: usize = params.iter().map(|param| param.value.len()).sum();
    Ok(QueryData {
        size: query.len(),
        count,
        avg_size: total as f64 / count as f64,
    })
}

/// The last path segment's extension, without the leading dot. A dot at
/// the start of the segment does not begin an extension.
fn extension(path: &str) -> Option<&str> {
    let last = path.rsplit('/').next().unwrap_or("");
    match last.rfind('.') {
        Some(0) | None => None,
        Some(pos) => Some(&last[pos + 1..]).filter(|ext| !ext.is_empty()),
    }
}

fn log10_len(len: usize) -> String {
    if len == 0 {
        return format_fixed(0.0);
    }
    format_fixed((len as f64).log10())
}

fn format_fixed(value: f64) -> String {
    format!("{value:.1}")
}
