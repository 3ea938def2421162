use std::sync::LazyLock;

use regex::Regex;

use crate::models::Condition;

/// A compiled per-condition percentage pattern.
pub struct RiskPattern {
    pub condition: Condition,
    pub regex: Regex,
}

/// `<condition>` then the shortest run of characters up to the first
/// `<digits>%`, case-insensitive.
///
/// The span between the name and the percentage is unbounded within a
/// line, so in long answers the number can belong to an unrelated
/// sentence. The span never contains a line terminator (`\n`, `\r`,
/// U+2028, U+2029), which keeps a match on one line.
static RISK_PATTERNS: LazyLock<Vec<RiskPattern>> = LazyLock::new(|| {
    Condition::ALL
        .iter()
        .map(|&condition| RiskPattern {
            condition,
            regex: risk_regex(condition.as_str()),
        })
        .collect()
});

/// Enumeration markers: a number followed by a period, a bullet, or a hyphen.
pub static ENUMERATION_DELIMITER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+\.|•|-").expect("Invalid enumeration regex"));

/// Any character except a line terminator.
const SAME_LINE: &str = r"[^\n\r\x{2028}\x{2029}]";

fn risk_regex(name: &str) -> Regex {
    Regex::new(&format!(r"(?i){}{SAME_LINE}*?([0-9]+)%", regex::escape(name)))
        .expect("Invalid risk regex pattern")
}

/// Pattern for `condition`.
pub fn risk_pattern(condition: Condition) -> &'static RiskPattern {
    &RISK_PATTERNS[condition.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_pattern_per_condition_in_order() {
        for c in Condition::ALL {
            assert_eq!(risk_pattern(c).condition, c);
        }
    }

    #[test]
    fn pattern_captures_first_percentage_after_name() {
        let caps = risk_pattern(Condition::Diabetes)
            .regex
            .captures("Diabetes risk: 42%, later 80%")
            .unwrap();
        assert_eq!(&caps[1], "42");
    }

    #[test]
    fn pattern_does_not_cross_lines() {
        let re = &risk_pattern(Condition::Depression).regex;
        assert!(re.captures("Depression: low\nOverall 30%").is_none());
    }

    #[test]
    fn pattern_stops_at_carriage_return_and_unicode_separators() {
        let re = &risk_pattern(Condition::Diabetes).regex;
        for text in [
            "Diabetes: unknown\rOverall 42%",
            "Diabetes: unknown\u{2028}Overall 42%",
            "Diabetes: unknown\u{2029}Overall 42%",
            "Diabetes: unknown\r\nOverall 42%",
        ] {
            assert!(re.captures(text).is_none(), "matched across a line break: {text:?}");
        }
        assert_eq!(&re.captures("Diabetes\t(type 2): 42%").unwrap()[1], "42");
    }

    #[test]
    fn delimiter_splits_markers() {
        let parts: Vec<&str> = ENUMERATION_DELIMITER.split("1. a • b - c 12. d").collect();
        assert_eq!(parts, vec!["", " a ", " b ", " c ", " d"]);
    }
}
