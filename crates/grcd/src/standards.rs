//! Compliance standard catalog and resolver.
//!
//! The catalog is authored in code, built once at process start, and never
//! mutated. Matching is exact equality on the lowercased, trimmed input
//! against canonical keys and aliases - no substring or fuzzy matching.

use grc_common::LookupError;
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// One recognized regulatory standard.
pub struct StandardEntry {
    /// Canonical lookup key, always lowercase.
    pub key: &'static str,
    /// Human-readable name used in knowledge keys and prompts.
    pub full_name: &'static str,
    /// Alternate spellings and abbreviations, lowercase.
    pub aliases: &'static [&'static str],
}

static CATALOG: Lazy<Vec<StandardEntry>> = Lazy::new(|| {
    let catalog = vec![
        StandardEntry {
            key: "iso 27001",
            full_name: "ISO/IEC 27001",
            aliases: &["iso 27001", "iso27001", "iso/iec 27001"],
        },
        StandardEntry {
            key: "nist 800-53",
            full_name: "NIST Special Publication 800-53",
            aliases: &["nist 800-53", "nist sp 800-53", "nist 80053"],
        },
        StandardEntry {
            key: "soc 2",
            full_name: "Service Organization Control 2",
            aliases: &["soc 2", "soc2"],
        },
        StandardEntry {
            key: "gdpr",
            full_name: "General Data Protection Regulation",
            aliases: &["gdpr"],
        },
        StandardEntry {
            key: "hipaa",
            full_name: "Health Insurance Portability and Accountability Act",
            aliases: &["hipaa"],
        },
        StandardEntry {
            key: "pci dss",
            full_name: "Payment Card Industry Data Security Standard",
            aliases: &["pci dss", "pci-dss", "pci"],
        },
        StandardEntry {
            key: "ccpa",
            full_name: "California Consumer Privacy Act",
            aliases: &["ccpa"],
        },
        StandardEntry {
            key: "nist 800-171",
            full_name: "NIST Special Publication 800-171",
            aliases: &["nist 800-171", "nist sp 800-171", "nist 800171"],
        },
    ];
    assert_unique_aliases(&catalog);
    catalog
});

/// Catalog-authoring constraint: an alias must not belong to two entries,
/// otherwise resolution order would become significant. An entry listing its
/// own canonical key among its aliases is fine.
fn assert_unique_aliases(catalog: &[StandardEntry]) {
    let mut seen = HashSet::new();
    for entry in catalog {
        let mut names: HashSet<&str> = entry.aliases.iter().copied().collect();
        names.insert(entry.key);
        for name in names {
            if !seen.insert(name) {
                panic!("duplicate alias '{}' in standards catalog", name);
            }
        }
    }
}

fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Resolve a free-text standard name or alias to its full name.
///
/// Fails with `UnrecognizedStandard` carrying the original input; that is a
/// client-facing rejection, not a server fault.
pub fn resolve(input: &str) -> Result<&'static str, LookupError> {
    let normalized = normalize(input);
    for entry in CATALOG.iter() {
        if normalized == entry.key || entry.aliases.contains(&normalized.as_str()) {
            return Ok(entry.full_name);
        }
    }
    Err(LookupError::UnrecognizedStandard(input.to_string()))
}

/// Full names of every standard in the catalog, for display.
pub fn known_standards() -> Vec<&'static str> {
    CATALOG.iter().map(|e| e.full_name).collect()
}
