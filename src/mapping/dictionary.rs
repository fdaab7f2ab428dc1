//! Header label → canonical field key dictionary

use std::collections::HashMap;

/// Built-in header labels as they appear in the member sheet
const BUILTIN_HEADERS: &[(&str, &str)] = &[
    // Member
    ("תעודת זהות", "id"),
    ("ת.ז.", "id"),
    ("id", "id"),
    ("שם משפחה", "lastName"),
    ("שם פרטי", "firstName"),
    ("שנת לידה", "birthYear"),
    ("שם האב", "fatherName"),
    ("רחוב", "street"),
    ("מספר בית", "houseNumber"),
    ("עיר", "city"),
    ("טלפון", "phone"),
    ("טלפון נייד", "phone"),
    ("אימייל", "email"),
    ("דואר אלקטרוני", "email"),
    ("email", "email"),
    // Spouse / partner
    ("תעודת זהות בן זוג", "partnerId"),
    ("ת.ז. בן זוג", "partnerId"),
    ("שם משפחה בן זוג", "partnerLastName"),
    ("שם פרטי בן זוג", "partnerFirstName"),
    ("שנת לידה בן זוג", "partnerBirthYear"),
    ("שם האב בן זוג", "partnerFatherName"),
    ("טלפון בן זוג", "partnerPhone"),
    ("אימייל בן זוג", "partnerEmail"),
    // Payment card
    ("מספר אשראי", "creditCard"),
    ("תוקף אשראי", "creditExpiry"),
    ("שם בעל הכרטיס", "cardHolderName"),
    ("תעודת זהות בעל הכרטיס", "cardHolderId"),
];

/// Exact, case-sensitive lookup table from header label to canonical key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderDictionary {
    entries: HashMap<String, String>,
}

impl HeaderDictionary {
    /// A dictionary with no entries; every header falls back to its lowercased form
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn insert(&mut self, header: impl Into<String>, key: impl Into<String>) {
        self.entries.insert(header.into(), key.into());
    }

    pub fn remove(&mut self, header: &str) -> Option<String> {
        self.entries.remove(header)
    }

    pub fn get(&self, header: &str) -> Option<&str> {
        self.entries.get(header).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by header label
    pub fn entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<_> = self
            .entries
            .iter()
            .map(|(h, k)| (h.as_str(), k.as_str()))
            .collect();
        entries.sort();
        entries
    }
}

impl Default for HeaderDictionary {
    fn default() -> Self {
        BUILTIN_HEADERS.iter().copied().collect()
    }
}

impl<H: Into<String>, K: Into<String>> FromIterator<(H, K)> for HeaderDictionary {
    fn from_iter<I: IntoIterator<Item = (H, K)>>(iter: I) -> Self {
        let mut dictionary = Self::empty();
        dictionary.extend(iter);
        dictionary
    }
}

impl<H: Into<String>, K: Into<String>> Extend<(H, K)> for HeaderDictionary {
    fn extend<I: IntoIterator<Item = (H, K)>>(&mut self, iter: I) {
        for (header, key) in iter {
            self.insert(header, key);
        }
    }
}
