//! Dedup key derivation for organization names.
//!
//! Sources publish the same organization under varying suffixes ("Maury
//! County Public Schools" vs "Maury County Schools"), casing, and
//! whitespace. The key strips all of that so records describing the same
//! organization merge across sources.

/// Trailing words stripped from a name when deriving its dedup key.
/// A name's suffix is the longest trailing run of these qualifiers;
/// intermediate words ("Maury County **Public** Schools") stay covered
/// because the whole run is removed, not just the final word.
const KEY_SUFFIX_WORDS: &[&str] = &[
    "school", "schools", "district", "system", "public", "county", "city",
];

/// Derive the canonical dedup key for an organization name.
///
/// Lower-cases, strips the single longest trailing run of district-qualifier
/// words, collapses whitespace runs, and trims. Idempotent:
/// `normalize_key(normalize_key(x)) == normalize_key(x)`.
///
/// An empty or all-qualifier name yields the empty string; that is a valid
/// (if useless) key, not an error — filtering degenerate names is the
/// upstream collector's job.
pub fn normalize_key(name: &str) -> String {
    let lowered = name.to_lowercase();
    let mut words: Vec<&str> = lowered.split_whitespace().collect();
    while let Some(last) = words.last() {
        if KEY_SUFFIX_WORDS.contains(last) {
            words.pop();
        } else {
            break;
        }
    }
    words.join(" ")
}

/// Hyphenated slug of a dedup key, used as the record `id`.
pub fn key_slug(key: &str) -> String {
    key.replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            normalize_key("Wilson County Schools"),
            normalize_key("wilson county schools")
        );
    }

    #[test]
    fn test_suffix_variants_share_a_key() {
        assert_eq!(normalize_key("Maury County Public Schools"), "maury");
        assert_eq!(normalize_key("Maury County Schools"), "maury");
        assert_eq!(normalize_key("Maury County"), "maury");
    }

    #[test]
    fn test_listed_suffixes() {
        assert_eq!(normalize_key("Franklin School District"), "franklin");
        assert_eq!(normalize_key("Oak Ridge Schools"), "oak ridge");
        assert_eq!(normalize_key("Kingsport City Schools"), "kingsport");
        assert_eq!(normalize_key("Harpeth Valley School"), "harpeth valley");
        assert_eq!(normalize_key("Jackson-Madison County School System"), "jackson-madison");
    }

    #[test]
    fn test_non_suffix_words_survive() {
        // "house" is not a qualifier, so stripping stops there.
        assert_eq!(normalize_key("White House City Schools"), "white house");
        assert_eq!(normalize_key("Vanderbilt University"), "vanderbilt university");
    }

    #[test]
    fn test_whitespace_collapse() {
        assert_eq!(normalize_key("  Wilson   County\tSchools "), "wilson");
    }

    #[test]
    fn test_idempotence() {
        for name in [
            "Maury County Public Schools",
            "Metro Nashville Public Schools",
            "Unknown Academy of Nowhere",
            "White House City Schools",
            "",
            "   ",
        ] {
            let once = normalize_key(name);
            assert_eq!(normalize_key(&once), once, "not idempotent for {name:?}");
        }
    }

    #[test]
    fn test_degenerate_names() {
        assert_eq!(normalize_key(""), "");
        assert_eq!(normalize_key("School District"), "");
    }

    #[test]
    fn test_key_slug() {
        assert_eq!(key_slug("oak ridge"), "oak-ridge");
        assert_eq!(key_slug("maury"), "maury");
    }
}
