//! Deterministic fingerprinting of HTTP requests.
//!
//! A fingerprint is a single pipe-delimited string of 14 fields that
//! summarizes the shape of one request without storing its payload:
//!
//! - **URI metrics** (7 fields) -- length magnitude, directory count and
//!   mean size, file extension, query size/count/mean-value-size.
//! - **Method and version** (2 fields) -- two-letter method code and a
//!   one-digit version code.
//! - **Header signatures** (2 fields) -- header order (names, order, and
//!   case canonicality) and header values (classified through the lexicon
//!   tables or hashed).
//! - **Payload summary** (3 fields) -- presence marker, Shannon entropy,
//!   and length magnitude.
//!
//! Tokens the lexicon tables do not know are identified by a stable
//! 32-bit FNV-1a hash, so unknown values degrade deterministically
//! instead of failing. The only hard per-request failure is malformed
//! percent-encoding in the query string.
//!
//! Fingerprint computations are pure and synchronous: the engine holds
//! only shared read-only tables and may be used from any number of
//! threads at once.

pub mod hash;
pub mod headers;
pub mod query;
pub mod report;
pub mod scalars;
pub mod uri;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use httpfinger_common::{FingerConfig, FingerResult, Lexicons, ReportMode};

/// One HTTP request, as consumed by the fingerprint engine.
///
/// Header lines keep their raw `"Name: value"` form and their original
/// order; both are significant. An empty payload and an absent payload
/// are equivalent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpRequest {
    pub uri: String,
    pub method: String,
    /// Empty when the request declared no version (HTTP/0.9).
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub headers: Vec<String>,
    #[serde(default)]
    pub payload: Option<String>,
}

/// The fingerprint engine: lexicon tables plus a report mode.
///
/// Cheap to construct once the tables exist; safe to share across
/// threads.
#[derive(Debug, Clone)]
pub struct Fingerprinter {
    lexicons: Arc<Lexicons>,
    report_mode: ReportMode,
}

impl Fingerprinter {
    pub fn new(lexicons: Arc<Lexicons>, report_mode: ReportMode) -> Self {
        Self {
            lexicons,
            report_mode,
        }
    }

    /// Engine over the builtin lexicon tables.
    pub fn builtin(report_mode: ReportMode) -> Self {
        Self::new(Lexicons::builtin(), report_mode)
    }

    /// Build an engine from a validated runtime configuration, loading
    /// lexicon tables from the configured directory when one is set.
    pub fn from_config(config: &FingerConfig) -> FingerResult<Self> {
        let lexicons = match &config.lexicon_dir {
            Some(dir) => Arc::new(Lexicons::load_dir(dir)?),
            None => Lexicons::builtin(),
        };
        Ok(Self::new(lexicons, config.report_mode))
    }

    /// Compute the fingerprint of one request.
    ///
    /// The composed output always carries 14 fields; the configured
    /// report mode then decides which of them keep their values.
    pub fn fingerprint(&self, request: &HttpRequest) -> FingerResult<String> {
        let composed = format!(
            "{}|{}|{}|{}|{}",
            uri::uri_fingerprint(&request.uri, &self.lexicons)?,
            scalars::method_fingerprint(&request.method),
            scalars::version_fingerprint(&request.version),
            headers::header_fingerprint(&request.headers, &self.lexicons),
            scalars::payload_fingerprint(request.payload.as_deref()),
        );
        Ok(report::apply_report_mode(&composed, self.report_mode))
    }
}
