//! Search-term filter stage.

use crate::types::Record;

/// Whether any column of `record` contains `needle`.
///
/// `needle` must already be lowercased.
pub fn matches(record: &Record, needle: &str) -> bool {
    needle.is_empty()
        || record
            .search_text()
            .iter()
            .any(|value| value.to_lowercase().contains(needle))
}

/// Records whose id, name, email or role contains `term`, ignoring case.
///
/// An empty term keeps every record. Order follows the input.
pub fn filter<'a>(records: &'a [Record], term: &str) -> Vec<&'a Record> {
    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|record| matches(record, &needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<Record> {
        vec![
            Record::new(1, "Alice", "a@x", "Admin"),
            Record::new(2, "Bob", "b@x", "User"),
            Record::new(12, "Carol", "carol@bobcorp.io", "User"),
        ]
    }

    fn names(found: &[&Record]) -> Vec<String> {
        found.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn test_empty_term_matches_all() {
        let records = records();
        assert_eq!(filter(&records, "").len(), 3);
    }

    #[test]
    fn test_case_insensitive_substring_any_column() {
        let records = records();
        assert_eq!(names(&filter(&records, "BOB")), vec!["Bob", "Carol"]);
        assert_eq!(names(&filter(&records, "admin")), vec!["Alice"]);
    }

    #[test]
    fn test_matches_id_text() {
        let records = records();
        assert_eq!(names(&filter(&records, "1")), vec!["Alice", "Carol"]);
    }

    #[test]
    fn test_no_word_matching() {
        let records = records();
        assert!(filter(&records, "alice admin").is_empty());
    }
}
