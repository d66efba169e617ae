use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;

use once_cell::sync::Lazy;
use tracing::info;

use crate::error::{FingerError, FingerResult};

/// One code table per header kind, plus the extension allow-list.
///
/// Tables map protocol tokens (case-sensitive, as they appear on the wire)
/// to short codes. Codes are unique within a table but may repeat across
/// tables. Instances are immutable once built and can be shared freely
/// across concurrent fingerprint computations.
#[derive(Debug, Clone, Default)]
pub struct Lexicons {
    /// Lower-cased header name -> order-signature code.
    pub header_names: HashMap<String, String>,
    pub accept: HashMap<String, String>,
    pub content_type: HashMap<String, String>,
    pub accept_charset: HashMap<String, String>,
    pub accept_encoding: HashMap<String, String>,
    pub connection: HashMap<String, String>,
    pub content_encoding: HashMap<String, String>,
    pub cache_control: HashMap<String, String>,
    pub te: HashMap<String, String>,
    /// File extensions reported in the URI fingerprint; anything else is
    /// suppressed to an empty field.
    pub extensions: HashSet<String>,
}

/// Table artifacts compiled into the library. Parsing happens once, on
/// first access.
static BUILTIN: Lazy<Arc<Lexicons>> = Lazy::new(|| {
    let lexicons = Lexicons::from_sources(&[
        ("headerslow.json", include_str!("../../../configs/headerslow.json")),
        ("accept.json", include_str!("../../../configs/accept.json")),
        ("content-type.json", include_str!("../../../configs/content-type.json")),
        ("accept-charset.json", include_str!("../../../configs/accept-charset.json")),
        ("accept-encoding.json", include_str!("../../../configs/accept-encoding.json")),
        ("connection.json", include_str!("../../../configs/connection.json")),
        ("content-encoding.json", include_str!("../../../configs/content-encoding.json")),
        ("cache-control.json", include_str!("../../../configs/cache-control.json")),
        ("te.json", include_str!("../../../configs/te.json")),
        ("extensions.json", include_str!("../../../configs/extensions.json")),
    ])
    .expect("builtin lexicon tables are valid");
    Arc::new(lexicons)
});

impl Lexicons {
    /// The builtin tables shipped with the library, shared process-wide.
    pub fn builtin() -> Arc<Lexicons> {
        Arc::clone(&BUILTIN)
    }

    /// Load all tables from a directory of JSON artifacts.
    ///
    /// Every artifact must be present and well-formed; a missing file, a
    /// parse failure, or a duplicated code within a table is fatal. The
    /// engine never runs with a partially loaded table set.
    pub fn load_dir(dir: &Path) -> FingerResult<Self> {
        let mut sources = Vec::new();
        for name in [
            "headerslow.json",
            "accept.json",
            "content-type.json",
            "accept-charset.json",
            "accept-encoding.json",
            "connection.json",
            "content-encoding.json",
            "cache-control.json",
            "te.json",
            "extensions.json",
        ] {
            let content = std::fs::read_to_string(dir.join(name))?;
            sources.push((name, content));
        }
        let borrowed: Vec<(&str, &str)> = sources
            .iter()
            .map(|(name, content)| (*name, content.as_str()))
            .collect();
        let lexicons = Self::from_sources(&borrowed)?;
        info!(
            dir = %dir.display(),
            header_names = lexicons.header_names.len(),
            extensions = lexicons.extensions.len(),
            "loaded lexicon tables"
        );
        Ok(lexicons)
    }

    fn from_sources(sources: &[(&str, &str)]) -> FingerResult<Self> {
        let mut lexicons = Lexicons::default();
        for (name, content) in sources {
            match *name {
                "headerslow.json" => lexicons.header_names = parse_table(name, content)?,
                "accept.json" => lexicons.accept = parse_table(name, content)?,
                "content-type.json" => lexicons.content_type = parse_table(name, content)?,
                "accept-charset.json" => lexicons.accept_charset = parse_table(name, content)?,
                "accept-encoding.json" => lexicons.accept_encoding = parse_table(name, content)?,
                "connection.json" => lexicons.connection = parse_table(name, content)?,
                "content-encoding.json" => lexicons.content_encoding = parse_table(name, content)?,
                "cache-control.json" => lexicons.cache_control = parse_table(name, content)?,
                "te.json" => lexicons.te = parse_table(name, content)?,
                "extensions.json" => {
                    let list: Vec<String> = serde_json::from_str(content)?;
                    lexicons.extensions = list.into_iter().collect();
                }
                other => {
                    return Err(FingerError::Lexicon(format!(
                        "unknown lexicon artifact '{other}'"
                    )))
                }
            }
        }
        Ok(lexicons)
    }
}

/// Parse one token -> code table, enforcing code uniqueness within it.
fn parse_table(name: &str, content: &str) -> FingerResult<HashMap<String, String>> {
    let table: HashMap<String, String> = serde_json::from_str(content)?;
    let mut seen: HashMap<&str, &str> = HashMap::with_capacity(table.len());
    for (token, code) in &table {
        if let Some(previous) = seen.insert(code.as_str(), token.as_str()) {
            return Err(FingerError::Lexicon(format!(
                "{name}: code '{code}' assigned to both '{previous}' and '{token}'"
            )));
        }
    }
    Ok(table)
}
