//! Curated synonym table for forum vocabulary.
//!
//! Maps a term to the list of synonyms that should be injected into an
//! expanded query. The mapping is directed: `rules` may expand to
//! `regulations` without `regulations` carrying the full list back.

use ahash::AHashMap;

use crate::error::{ParlanceError, Result};

/// Directed synonym mapping keyed by lowercased term.
///
/// The builtin table covers the domains forum users actually search for:
/// rules and policies, classes, housing, student groups, and the
/// problem/solution vocabulary of support threads.
#[derive(Debug, Clone)]
pub struct SynonymTable {
    entries: AHashMap<String, Vec<String>>,
}

impl SynonymTable {
    /// Create an empty synonym table.
    pub fn empty() -> Self {
        SynonymTable {
            entries: AHashMap::new(),
        }
    }

    /// Create a table from `(term, synonyms)` pairs.
    ///
    /// Terms and synonyms are lowercased and trimmed. Empty synonyms are
    /// dropped, and a later pair for the same term replaces the earlier one.
    pub fn from_entries<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<S>)>,
        S: Into<String>,
    {
        let mut table = Self::empty();
        for (term, synonyms) in pairs {
            table.insert(term, synonyms);
        }
        table
    }

    /// Create the builtin table of curated forum synonyms.
    pub fn builtin() -> Self {
        let entries: Vec<(&str, Vec<&str>)> = vec![
            (
                "rules",
                vec![
                    "regulations",
                    "directives",
                    "guidelines",
                    "policies",
                    "standards",
                    "laws",
                    "norms",
                    "principles",
                    "code",
                    "requirements",
                    "bylaws",
                    "ordinances",
                    "mandate",
                    "protocol",
                ],
            ),
            (
                "regulations",
                vec![
                    "rules",
                    "directives",
                    "guidelines",
                    "policies",
                    "laws",
                    "ordinances",
                ],
            ),
            (
                "directives",
                vec!["rules", "regulations", "guidelines", "orders", "instructions"],
            ),
            (
                "guidelines",
                vec!["rules", "regulations", "directives", "standards", "protocols"],
            ),
            (
                "policies",
                vec!["rules", "regulations", "guidelines", "procedures", "protocols"],
            ),
            (
                "classroom",
                vec![
                    "class",
                    "room",
                    "lecture",
                    "hall",
                    "course",
                    "lectureroom",
                    "auditorium",
                ],
            ),
            (
                "class",
                vec!["classroom", "course", "lecture", "lesson", "session"],
            ),
            (
                "hostel",
                vec![
                    "dormitory",
                    "dorm",
                    "residence",
                    "accommodation",
                    "lodging",
                    "housing",
                    "quarters",
                ],
            ),
            (
                "dormitory",
                vec!["hostel", "dorm", "residence", "housing"],
            ),
            ("dorm", vec!["dormitory", "hostel", "residence"]),
            (
                "society",
                vec![
                    "community",
                    "association",
                    "organization",
                    "group",
                    "club",
                    "collective",
                ],
            ),
            (
                "community",
                vec!["society", "group", "association", "collective"],
            ),
            (
                "problem",
                vec![
                    "issue",
                    "trouble",
                    "difficulty",
                    "challenge",
                    "concern",
                    "matter",
                ],
            ),
            ("issue", vec!["problem", "trouble", "matter", "concern"]),
            (
                "solution",
                vec!["fix", "answer", "resolution", "workaround", "remedy", "cure"],
            ),
            ("fix", vec!["solution", "repair", "remedy", "resolve"]),
            (
                "error",
                vec!["mistake", "bug", "glitch", "fault", "defect", "flaw"],
            ),
            ("help", vec!["assist", "support", "aid", "guide", "advise"]),
            (
                "question",
                vec!["query", "inquiry", "ask", "doubt", "request"],
            ),
        ];

        let mut table = Self::empty();
        for (term, synonyms) in entries {
            table.insert(term, synonyms);
        }
        table
    }

    /// Load a synonym table from a JSON file.
    ///
    /// The JSON file should contain an object mapping each term to an array
    /// of its synonyms.
    ///
    /// Example format:
    /// ```json
    /// {
    ///   "rules": ["regulations", "guidelines"],
    ///   "hostel": ["dormitory", "dorm"]
    /// }
    /// ```
    pub fn load_from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ParlanceError::synonym(format!("Failed to read synonym file '{path}': {e}"))
        })?;

        let raw: AHashMap<String, Vec<String>> = serde_json::from_str(&content).map_err(|e| {
            ParlanceError::synonym(format!("Failed to parse synonym JSON from '{path}': {e}"))
        })?;

        Ok(Self::from_entries(raw))
    }

    /// Insert a term with its synonyms, replacing any existing entry.
    pub fn insert<S: Into<String>>(&mut self, term: S, synonyms: Vec<S>) {
        let term = term.into().trim().to_lowercase();
        if term.is_empty() {
            return;
        }
        let synonyms: Vec<String> = synonyms
            .into_iter()
            .map(|s| s.into().trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();
        self.entries.insert(term, synonyms);
    }

    /// Look up the synonyms for a term. Lookup is case-insensitive.
    pub fn lookup(&self, term: &str) -> Option<&[String]> {
        self.entries
            .get(&term.trim().to_lowercase())
            .map(|v| v.as_slice())
    }

    /// Check whether the table has an entry for the given term.
    pub fn contains(&self, term: &str) -> bool {
        self.entries.contains_key(&term.trim().to_lowercase())
    }

    /// Get the number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SynonymTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_builtin_table() {
        let table = SynonymTable::builtin();

        assert_eq!(table.len(), 19);

        let rules = table.lookup("rules").unwrap();
        assert_eq!(rules.len(), 14);
        assert!(rules.contains(&"regulations".to_string()));
        assert!(rules.contains(&"bylaws".to_string()));

        let hostel = table.lookup("hostel").unwrap();
        assert_eq!(hostel[0], "dormitory");
    }

    #[test]
    fn test_directed_mapping() {
        let table = SynonymTable::builtin();

        // "rules" expands to fourteen terms, the reverse entry stays short.
        assert_eq!(table.lookup("rules").unwrap().len(), 14);
        assert_eq!(table.lookup("regulations").unwrap().len(), 6);
        assert!(table.lookup("bylaws").is_none());
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let table = SynonymTable::builtin();

        assert!(table.lookup("Rules").is_some());
        assert!(table.lookup("  HOSTEL  ").is_some());
        assert!(table.contains("Question"));
        assert!(!table.contains("wormhole"));
    }

    #[test]
    fn test_insert_normalizes() {
        let mut table = SynonymTable::empty();
        table.insert("  WiFi ", vec!["wireless", "  ", "Network"]);

        let synonyms = table.lookup("wifi").unwrap();
        assert_eq!(synonyms, &["wireless".to_string(), "network".to_string()]);
    }

    #[test]
    fn test_insert_replaces_existing() {
        let mut table = SynonymTable::empty();
        table.insert("lab", vec!["laboratory"]);
        table.insert("lab", vec!["workshop"]);

        assert_eq!(table.lookup("lab").unwrap(), &["workshop".to_string()]);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_empty_table() {
        let table = SynonymTable::empty();
        assert!(table.is_empty());
        assert!(table.lookup("rules").is_none());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"{{"mess": ["canteen", "cafeteria"], "Gym": ["gymnasium"]}}"#
        )
        .unwrap();

        let table = SynonymTable::load_from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.lookup("mess").unwrap(),
            &["canteen".to_string(), "cafeteria".to_string()]
        );
        assert_eq!(table.lookup("gym").unwrap(), &["gymnasium".to_string()]);
    }

    #[test]
    fn test_load_from_file_rejects_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"["not", "an", "object"]"#).unwrap();

        let result = SynonymTable::load_from_file(file.path().to_str().unwrap());
        assert!(result.is_err());
    }
}
