use super::dictionary::HeaderDictionary;
use crate::record::Record;
use log::{debug, trace};

/// Renames sheet headers to the canonical keys forms expect
#[derive(Debug, Clone, Default)]
pub struct FieldMapper {
    dictionary: HeaderDictionary,
}

impl FieldMapper {
    pub fn new(dictionary: HeaderDictionary) -> Self {
        Self { dictionary }
    }

    pub fn dictionary(&self) -> &HeaderDictionary {
        &self.dictionary
    }

    /// Canonical key for one header: the dictionary entry for the trimmed
    /// label, or the trimmed label lowercased when there is none.
    pub fn canonical_key(&self, header: &str) -> String {
        let header = header.trim();
        match self.dictionary.get(header) {
            Some(key) => key.to_string(),
            None => header.to_lowercase(),
        }
    }

    /// Rename every key of `record`; values pass through untouched.
    ///
    /// When two headers land on the same canonical key the later one wins.
    pub fn normalize(&self, record: &Record) -> Record {
        let mut normalized = Record::new();
        for (header, value) in record.iter() {
            let key = self.canonical_key(header);
            trace!("Header '{}' -> '{}'", header, key);
            if let Some(previous) = normalized.insert(key.clone(), value) {
                debug!(
                    "Header '{}' overwrote earlier value '{}' for key '{}'",
                    header, previous, key
                );
            }
        }
        normalized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dictionary_and_fallback() {
        let mapper = FieldMapper::default();
        let record: Record = [("ת.ז.", "123"), (" שם משפחה ", "כהן"), ("Foo Bar", "x")]
            .into_iter()
            .collect();

        let normalized = mapper.normalize(&record);
        let expected: Record = [("id", "123"), ("lastName", "כהן"), ("foo bar", "x")]
            .into_iter()
            .collect();
        assert_eq!(normalized, expected);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let mapper = FieldMapper::default();
        // "Email" has no entry; fallback lowercases it to the same key anyway
        assert_eq!(mapper.canonical_key("Email"), "email");
        assert_eq!(mapper.canonical_key("ID"), "id");
        assert_eq!(mapper.canonical_key("City"), "city");
    }

    #[test]
    fn test_idempotent_on_canonical_input() {
        let mapper = FieldMapper::new(HeaderDictionary::empty());
        let record: Record = [("id", "1"), ("city", "Haifa")].into_iter().collect();

        let once = mapper.normalize(&record);
        let twice = mapper.normalize(&once);
        assert_eq!(once, record);
        assert_eq!(twice, record);
    }

    #[test]
    fn test_later_synonym_overwrites() {
        let mapper = FieldMapper::default();
        let record: Record = [("טלפון", "04-1234567"), ("טלפון נייד", "050-1234567")]
            .into_iter()
            .collect();

        let normalized = mapper.normalize(&record);
        assert_eq!(normalized.len(), 1);
        assert_eq!(normalized.get("phone"), Some("050-1234567"));
    }

    #[test]
    fn test_injected_dictionary() {
        let dictionary: HeaderDictionary = [("Teudat Zehut", "id")].into_iter().collect();
        let mapper = FieldMapper::new(dictionary);
        assert_eq!(mapper.canonical_key("Teudat Zehut"), "id");
        assert_eq!(mapper.canonical_key("ת.ז."), "ת.ז.");
    }
}
