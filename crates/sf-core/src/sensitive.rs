//! Sensitive-attribute registry.
//!
//! Users may list Terraform attributes whose values must never show up in
//! logs, one reference per line, in `~/.snowflake/sensitive`:
//!
//! ```text
//! snowflake_user.service_account.password
//! data.snowflake_database.analytics.comment
//! ```
//!
//! The file is read once, on first use, and is read-only afterwards. Lines
//! that do not look like a reference are ignored. If the file cannot be read
//! the registry is empty and masking is off.

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Lookup seam used by the client to decide whether to mask SQL.
pub trait SensitiveAttributes: Send + Sync {
    /// `resource` is the Terraform type, e.g. `snowflake_user`.
    fn is_sensitive(&self, resource: &str, name: &str, attribute: &str) -> bool;

    /// True when any attribute of the resource (or data source) type is listed.
    fn has_sensitive_attributes(&self, resource: &str) -> bool;
}

impl<T: SensitiveAttributes + ?Sized> SensitiveAttributes for &T {
    fn is_sensitive(&self, resource: &str, name: &str, attribute: &str) -> bool {
        (**self).is_sensitive(resource, name, attribute)
    }

    fn has_sensitive_attributes(&self, resource: &str) -> bool {
        (**self).has_sensitive_attributes(resource)
    }
}

/// One parsed line of the registry file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensitiveAttribute {
    pub datasource: bool,
    pub kind: String,
    pub name: String,
    pub attribute: String,
}

impl SensitiveAttribute {
    /// `snowflake_<kind>`
    pub fn resource_type(&self) -> String {
        format!("snowflake_{}", self.kind)
    }

    pub fn parse(line: &str) -> Option<Self> {
        let caps = reference_regex().captures(line.trim())?;
        Some(Self {
            datasource: caps.get(1).is_some(),
            kind: caps[2].to_string(),
            name: caps[3].to_string(),
            attribute: caps[4].to_string(),
        })
    }
}

static REFERENCE_RE: OnceLock<Regex> = OnceLock::new();

fn reference_regex() -> &'static Regex {
    REFERENCE_RE.get_or_init(|| {
        Regex::new(r"^(data\.)?snowflake_([a-z0-9_]+)\.([A-Za-z0-9_-]+)\.([A-Za-z0-9_]+)$")
            .expect("valid regex")
    })
}

/// File-backed registry, loaded lazily on first lookup.
#[derive(Debug, Default)]
pub struct SensitiveRegistry {
    path: Option<PathBuf>,
    entries: OnceLock<Vec<SensitiveAttribute>>,
}

impl SensitiveRegistry {
    /// Registry backed by `path`; nothing is read until the first lookup.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            entries: OnceLock::new(),
        }
    }

    /// Registry over in-memory lines, parsed eagerly.
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        let entries = OnceLock::new();
        let _ = entries.set(parse_lines(lines));
        Self {
            path: None,
            entries,
        }
    }

    /// `~/.snowflake/sensitive`
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".snowflake").join("sensitive"))
    }

    /// Process-wide registry over the default path.
    pub fn global() -> &'static SensitiveRegistry {
        static GLOBAL: OnceLock<SensitiveRegistry> = OnceLock::new();
        GLOBAL.get_or_init(|| match Self::default_path() {
            Some(path) => Self::from_path(path),
            None => Self::default(),
        })
    }

    pub fn entries(&self) -> &[SensitiveAttribute] {
        self.entries
            .get_or_init(|| self.path.as_deref().map(load_file).unwrap_or_default())
    }
}

fn parse_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<SensitiveAttribute> {
    lines
        .into_iter()
        .filter_map(SensitiveAttribute::parse)
        .collect()
}

fn load_file(path: &Path) -> Vec<SensitiveAttribute> {
    if !path.exists() {
        return Vec::new();
    }
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let entries = parse_lines(content.lines());
            log::debug!(
                "Loaded {} sensitive attribute(s) from {}",
                entries.len(),
                path.display()
            );
            entries
        }
        Err(e) => {
            log::warn!(
                "Cannot read sensitive attributes from {}: {} (masking disabled)",
                path.display(),
                e
            );
            Vec::new()
        }
    }
}

impl SensitiveAttributes for SensitiveRegistry {
    fn is_sensitive(&self, resource: &str, name: &str, attribute: &str) -> bool {
        self.entries().iter().any(|e| {
            e.resource_type() == resource && e.name == name && e.attribute == attribute
        })
    }

    fn has_sensitive_attributes(&self, resource: &str) -> bool {
        self.entries().iter().any(|e| e.resource_type() == resource)
    }
}

/// Registry that never masks.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSensitiveAttributes;

impl SensitiveAttributes for NoSensitiveAttributes {
    fn is_sensitive(&self, _resource: &str, _name: &str, _attribute: &str) -> bool {
        false
    }

    fn has_sensitive_attributes(&self, _resource: &str) -> bool {
        false
    }
}

#[cfg(test)]
#[path = "sensitive_test.rs"]
mod tests;
