//! Method, version, and payload encoders.

/// First two characters of the method, case preserved. A method shorter
/// than two characters is returned as-is.
pub fn method_fingerprint(method: &str) -> String {
    method.chars().take(2).collect()
}

/// `"9"` when no version was declared (the HTTP/0.9 convention — such
/// requests carry no version token at all), otherwise the first character.
pub fn version_fingerprint(version: &str) -> String {
    match version.chars().next() {
        Some(c) => c.to_string(),
        None => "9".to_string(),
    }
}

/// Three fields: payload presence marker, Shannon entropy of the byte
/// distribution, and length magnitude. An empty or absent payload leaves
/// all three empty.
pub fn payload_fingerprint(payload: Option<&str>) -> String {
    let data = match payload {
        Some(payload) if !payload.is_empty() => payload.as_bytes(),
        _ => return "||".to_string(),
    };
    format!(
        "A|{:.1}|{:.1}",
        entropy(data),
        (data.len() as f64).log10()
    )
}

/// Shannon entropy in bits: `-sum(p_i * log2(p_i))` over the byte-value
/// frequencies of the input.
fn entropy(data: &[u8]) -> f64 {
    let mut counts = [0usize; 256];
    for byte in data {
        counts[usize::from(*byte)] += 1;
    }
    let len = data.len() as f64;
    let sum: f64 = counts
        .iter()
        .filter(|count| **count > 0)
        .map(|count| {
            let p = *count as f64 / len;
            p * p.log2()
        })
        .sum();
    // A single-symbol payload would otherwise round to negative zero.
    // The trailing `+ 0.0` normalizes the sign of zero (IEEE-754:
    // -0.0 + 0.0 == +0.0) so the result is stable across opt profiles,
    // where `max` alone can preserve a negative zero in debug builds.
    (-sum).max(0.0) + 0.0
}
