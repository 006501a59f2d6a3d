//! Fragment generation over the enriched entry list

use std::collections::HashSet;

use serde::Serialize;

use crate::generator::formats::{clash, surge};
use crate::models::{ConvertedEntry, FragmentConfig, TargetFormat};

/// Rendered configuration text for one conversion call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFragments {
    /// Group declaration enumerating every identifier
    pub group_fragment: String,
    /// One provider mapping / group line per entry, in entry order
    pub per_entry_fragments: Vec<String>,
    /// `group_fragment` followed by all per-entry fragments
    pub combined: String,
}

/// Render both fragment views for an entry list
///
/// Total over its domain: an empty entry list yields a group declaration
/// with no members and an empty fragment vector. Calling twice with the
/// same arguments produces byte-identical output.
pub fn generate(
    entries: &[ConvertedEntry],
    target: TargetFormat,
    config: &FragmentConfig,
) -> GeneratedFragments {
    let identifiers = disambiguate_identifiers(entries);

    let group_fragment = match target {
        TargetFormat::ClashProvider => clash::render_group(&identifiers),
        TargetFormat::SurgeGroup => surge::render_section_header(),
    };

    let per_entry_fragments: Vec<String> = entries
        .iter()
        .zip(identifiers.iter())
        .map(|(entry, identifier)| match target {
            TargetFormat::ClashProvider => {
                clash::render_provider(identifier, &entry.converted_url, config)
            }
            TargetFormat::SurgeGroup => surge::render_group_line(identifier, &entry.converted_url),
        })
        .collect();

    let mut combined = group_fragment.clone();
    for fragment in &per_entry_fragments {
        combined.push_str(fragment);
    }

    GeneratedFragments {
        group_fragment,
        per_entry_fragments,
        combined,
    }
}

/// Make the derived identifiers pairwise distinct for this call
///
/// Walks the entries in order; a name already taken gets a `-2`, `-3`, …
/// suffix until it is free. Identifiers are used as configuration keys, so
/// two entries sharing a host (or the derivation fallback) must never
/// render under the same name.
fn disambiguate_identifiers(entries: &[ConvertedEntry]) -> Vec<String> {
    let mut assigned: HashSet<String> = HashSet::with_capacity(entries.len());
    let mut identifiers = Vec::with_capacity(entries.len());

    for entry in entries {
        let mut candidate = entry.identifier.clone();
        let mut suffix = 2u32;
        while assigned.contains(&candidate) {
            candidate = format!("{}-{}", entry.identifier, suffix);
            suffix += 1;
        }
        assigned.insert(candidate.clone());
        identifiers.push(candidate);
    }

    identifiers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::convert_entries;

    fn entries_for(urls: &[&str], target: TargetFormat) -> Vec<ConvertedEntry> {
        let urls: Vec<String> = urls.iter().map(|u| u.to_string()).collect();
        convert_entries(&urls, "https://tool.example", target)
    }

    #[test]
    fn test_disambiguate_shared_hosts() {
        let entries = entries_for(
            &[
                "https://a.example/sub",
                "https://a.example/sub2",
                "https://a.example/sub3",
            ],
            TargetFormat::ClashProvider,
        );
        assert_eq!(
            disambiguate_identifiers(&entries),
            vec!["a.example", "a.example-2", "a.example-3"]
        );
    }

    #[test]
    fn test_disambiguate_leaves_distinct_names_alone() {
        let entries = entries_for(
            &["https://a.example/sub", "https://b.example/sub"],
            TargetFormat::SurgeGroup,
        );
        assert_eq!(disambiguate_identifiers(&entries), vec!["a.example", "b.example"]);
    }

    #[test]
    fn test_disambiguate_suffix_chain_skips_taken_names() {
        // A literal "a.example-2" host occupies the first suffix candidate
        let entries = entries_for(
            &[
                "https://a.example/sub",
                "https://a.example-2/sub",
                "https://a.example/sub2",
            ],
            TargetFormat::ClashProvider,
        );
        assert_eq!(
            disambiguate_identifiers(&entries),
            vec!["a.example", "a.example-2", "a.example-3"]
        );
    }
}
