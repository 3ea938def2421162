//! Keyword tables for the heuristic risk estimator.
//!
//! Each condition owns a fixed, ordered list of lowercase trigger phrases.
//! Lists may overlap ("blurred vision", "fatigue") because symptoms do.
//! The list length is the denominator of the scoring formula, so the
//! reference sizes (12, 12, 14) are part of the contract.

use crate::models::Condition;

pub const DIABETES_KEYWORDS: &[&str] = &[
    "thirst",
    "urination",
    "hunger",
    "weight loss",
    "fatigue",
    "blurred vision",
    "sugar",
    "glucose",
    "insulin",
    "family history",
    "diabetes",
    "overweight",
];

pub const HYPERTENSION_KEYWORDS: &[&str] = &[
    "headache",
    "dizziness",
    "blurred vision",
    "nosebleed",
    "shortness of breath",
    "chest pain",
    "blood pressure",
    "salt",
    "sodium",
    "stress",
    "alcohol",
    "smoking",
];

pub const DEPRESSION_KEYWORDS: &[&str] = &[
    "sad",
    "hopeless",
    "depressed",
    "interest",
    "pleasure",
    "sleep",
    "energy",
    "fatigue",
    "appetite",
    "concentration",
    "worthless",
    "thoughts",
    "suicide",
    "anxiety",
];

/// Trigger phrases for one condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordTable {
    pub condition: Condition,
    pub keywords: &'static [&'static str],
}

impl KeywordTable {
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Phrases present in `text` as case-insensitive substrings, in table order.
    ///
    /// No word boundary is required ("sugar" matches "sugary") and each
    /// phrase is reported once however often it occurs.
    pub fn matches(&self, text: &str) -> KeywordMatch {
        let normalized = text.to_lowercase();
        let matched = self
            .keywords
            .iter()
            .copied()
            .filter(|kw| normalized.contains(&kw.to_lowercase()))
            .collect();
        KeywordMatch {
            condition: self.condition,
            matched,
        }
    }
}

/// Result of scanning one text against one [`KeywordTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordMatch {
    pub condition: Condition,
    pub matched: Vec<&'static str>,
}

impl KeywordMatch {
    pub fn count(&self) -> usize {
        self.matched.len()
    }
}

/// One keyword table per condition, in [`Condition::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordTables {
    tables: [KeywordTable; 3],
}

/// Reference tables.
pub static REFERENCE_TABLES: KeywordTables = KeywordTables {
    tables: [
        KeywordTable {
            condition: Condition::Diabetes,
            keywords: DIABETES_KEYWORDS,
        },
        KeywordTable {
            condition: Condition::Hypertension,
            keywords: HYPERTENSION_KEYWORDS,
        },
        KeywordTable {
            condition: Condition::Depression,
            keywords: DEPRESSION_KEYWORDS,
        },
    ],
};

impl KeywordTables {
    pub fn new(
        diabetes: &'static [&'static str],
        hypertension: &'static [&'static str],
        depression: &'static [&'static str],
    ) -> Self {
        Self {
            tables: [
                KeywordTable {
                    condition: Condition::Diabetes,
                    keywords: diabetes,
                },
                KeywordTable {
                    condition: Condition::Hypertension,
                    keywords: hypertension,
                },
                KeywordTable {
                    condition: Condition::Depression,
                    keywords: depression,
                },
            ],
        }
    }

    pub fn table(&self, condition: Condition) -> &KeywordTable {
        &self.tables[condition.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeywordTable> {
        self.tables.iter()
    }

    /// Scan `text` against every table.
    pub fn scan(&self, text: &str) -> [KeywordMatch; 3] {
        Condition::ALL.map(|c| self.table(c).matches(text))
    }
}

impl Default for KeywordTables {
    fn default() -> Self {
        REFERENCE_TABLES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_table_sizes() {
        assert_eq!(REFERENCE_TABLES.table(Condition::Diabetes).len(), 12);
        assert_eq!(REFERENCE_TABLES.table(Condition::Hypertension).len(), 12);
        assert_eq!(REFERENCE_TABLES.table(Condition::Depression).len(), 14);
    }

    #[test]
    fn tables_are_lowercase() {
        for table in REFERENCE_TABLES.iter() {
            for kw in table.keywords {
                assert_eq!(*kw, kw.to_lowercase(), "keyword {kw} not lowercase");
            }
        }
    }

    #[test]
    fn overlapping_phrases_count_in_both_sets() {
        let [diabetes, hypertension, depression] = REFERENCE_TABLES.scan("Blurred vision and fatigue");
        assert_eq!(diabetes.matched, vec!["fatigue", "blurred vision"]);
        assert_eq!(hypertension.matched, vec!["blurred vision"]);
        assert_eq!(depression.matched, vec!["fatigue"]);
    }

    #[test]
    fn substring_match_without_word_boundary() {
        let m = REFERENCE_TABLES.table(Condition::Diabetes).matches("I crave sugary drinks");
        assert_eq!(m.matched, vec!["sugar"]);
    }

    #[test]
    fn repeated_keyword_counts_once() {
        let table = REFERENCE_TABLES.table(Condition::Hypertension);
        let once = table.matches("I get a headache");
        let thrice = table.matches("headache, headache, HEADACHE");
        assert_eq!(once.count(), 1);
        assert_eq!(thrice.count(), 1);
    }

    #[test]
    fn case_insensitive() {
        let m = REFERENCE_TABLES.table(Condition::Hypertension).matches("HIGH BLOOD PRESSURE");
        assert_eq!(m.count(), 1);
    }

    #[test]
    fn empty_text_matches_nothing() {
        for m in REFERENCE_TABLES.scan("") {
            assert_eq!(m.count(), 0);
        }
    }

    #[test]
    fn custom_tables() {
        static D: &[&str] = &["a"];
        static H: &[&str] = &[];
        static P: &[&str] = &["b", "c"];
        let tables = KeywordTables::new(D, H, P);
        assert!(tables.table(Condition::Hypertension).is_empty());
        assert_eq!(tables.table(Condition::Depression).matches("abc").count(), 2);
    }
}
