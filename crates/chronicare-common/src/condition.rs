//! Keyword matcher — resolves free text to a canonical chronic condition.
//!
//! Matching is a linear substring scan over [`KEYWORD_RULES`] in table order;
//! the first rule whose pattern occurs in the normalized input wins.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical chronic condition labels understood by the advisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    Diabetes,
    Hypertension,
    Asthma,
    Arthritis,
    #[serde(rename = "Heart Disease")]
    HeartDisease,
    #[serde(rename = "COPD")]
    Copd,
    #[serde(rename = "Chronic Kidney Disease")]
    ChronicKidneyDisease,
    Obesity,
}

impl Condition {
    /// Display label, also used as the dataset lookup key.
    pub fn label(self) -> &'static str {
        match self {
            Condition::Diabetes             => "Diabetes",
            Condition::Hypertension         => "Hypertension",
            Condition::Asthma               => "Asthma",
            Condition::Arthritis            => "Arthritis",
            Condition::HeartDisease         => "Heart Disease",
            Condition::Copd                 => "COPD",
            Condition::ChronicKidneyDisease => "Chronic Kidney Disease",
            Condition::Obesity              => "Obesity",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A lowercase substring pattern and the condition it resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordRule {
    pub pattern: &'static str,
    pub condition: Condition,
}

const fn rule(pattern: &'static str, condition: Condition) -> KeywordRule {
    KeywordRule { pattern, condition }
}

/// Fixed rule table. Order is significant: the first five rules are the
/// advisor's core vocabulary, the rest extend it to the other bundled conditions.
pub const KEYWORD_RULES: &[KeywordRule] = &[
    rule("diabetes",            Condition::Diabetes),
    rule("high blood pressure", Condition::Hypertension),
    rule("hypertension",        Condition::Hypertension),
    rule("heart disease",       Condition::HeartDisease),
    rule("cardiovascular",      Condition::HeartDisease),
    rule("blood sugar",         Condition::Diabetes),
    rule("coronary",            Condition::HeartDisease),
    rule("asthma",              Condition::Asthma),
    rule("arthritis",           Condition::Arthritis),
    rule("joint pain",          Condition::Arthritis),
    rule("copd",                Condition::Copd),
    rule("emphysema",           Condition::Copd),
    rule("kidney disease",      Condition::ChronicKidneyDisease),
    rule("obesity",             Condition::Obesity),
];

/// Trim surrounding whitespace and lowercase.
pub fn normalize_input(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Resolve free text to a condition, or `None` if no rule matches.
pub fn match_condition(input: &str) -> Option<Condition> {
    let normalized = normalize_input(input);
    if normalized.is_empty() {
        return None;
    }
    KEYWORD_RULES
        .iter()
        .find(|r| normalized.contains(r.pattern))
        .map(|r| r.condition)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diabetes_any_case_and_whitespace() {
        for input in ["diabetes", "  DIABETES  ", "I have Type 2 Diabetes", "\tdiabetes\n"] {
            assert_eq!(match_condition(input), Some(Condition::Diabetes), "input: {:?}", input);
        }
    }

    #[test]
    fn test_high_blood_pressure_is_case_insensitive() {
        assert_eq!(match_condition("HIGH BLOOD PRESSURE"), Some(Condition::Hypertension));
        assert_eq!(match_condition("my doctor says high blood pressure"), Some(Condition::Hypertension));
    }

    #[test]
    fn test_no_keyword_is_no_match() {
        assert_eq!(match_condition("headache and a runny nose"), None);
        assert_eq!(match_condition("pressure"), None);
    }

    #[test]
    fn test_empty_input_is_no_match() {
        assert_eq!(match_condition(""), None);
        assert_eq!(match_condition("   "), None);
    }

    #[test]
    fn test_first_rule_in_table_order_wins() {
        // "hypertension" precedes "asthma" in the table regardless of input position
        assert_eq!(match_condition("asthma and hypertension"), Some(Condition::Hypertension));
        assert_eq!(match_condition("high blood pressure and diabetes"), Some(Condition::Diabetes));
    }

    #[test]
    fn test_cardiovascular_is_heart_disease() {
        assert_eq!(match_condition("cardiovascular problems"), Some(Condition::HeartDisease));
        assert_eq!(match_condition("CARDIOVASCULAR"), Some(Condition::HeartDisease));
    }

    #[test]
    fn test_core_rules_precede_extended_rules() {
        assert_eq!(match_condition("heart disease and asthma"), Some(Condition::HeartDisease));
        assert_eq!(match_condition("arthritis and cardiovascular trouble"), Some(Condition::HeartDisease));
        let core: Vec<&str> = KEYWORD_RULES.iter().take(5).map(|r| r.pattern).collect();
        assert_eq!(core, ["diabetes", "high blood pressure", "hypertension", "heart disease", "cardiovascular"]);
    }

    #[test]
    fn test_rule_patterns_are_lowercase() {
        for r in KEYWORD_RULES {
            assert_eq!(r.pattern, r.pattern.to_lowercase(), "pattern {:?} would never match", r.pattern);
        }
    }

    #[test]
    fn test_every_condition_is_reachable() {
        let all = [
            Condition::Diabetes, Condition::Hypertension, Condition::Asthma,
            Condition::Arthritis, Condition::HeartDisease, Condition::Copd,
            Condition::ChronicKidneyDisease, Condition::Obesity,
        ];
        for c in all {
            assert!(KEYWORD_RULES.iter().any(|r| r.condition == c), "{} has no keyword", c);
        }
    }

    #[test]
    fn test_serialized_name_is_label() {
        let json = serde_json::to_string(&Condition::ChronicKidneyDisease).unwrap();
        assert_eq!(json, "\"Chronic Kidney Disease\"");
    }

    #[test]
    fn test_label_display() {
        assert_eq!(Condition::HeartDisease.to_string(), "Heart Disease");
        assert_eq!(Condition::Copd.label(), "COPD");
    }
}
