//! Keyword rule table mapping free text to a response intent.
//!
//! Rules are evaluated top to bottom and the first rule with a matching
//! keyword wins. Emergency detection is always the first rule so that
//! safety-relevant phrases are never shadowed by a broader category.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::error::CoreError;

/// What the user is asking about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Emergency,
    Medicine,
    MentalHealth,
    Symptom,
    Tips,
    Analysis,
    Greeting,
    /// Nothing matched.
    General,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Emergency => "emergency",
            Self::Medicine => "medicine",
            Self::MentalHealth => "mental_health",
            Self::Symptom => "symptom",
            Self::Tips => "tips",
            Self::Analysis => "analysis",
            Self::Greeting => "greeting",
            Self::General => "general",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single keyword-set predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    intent: Intent,
    keywords: Vec<String>,
}

impl Rule {
    /// Create a rule. Keywords are stored case-folded.
    pub fn new<I, S>(intent: Intent, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            intent,
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn intent(&self) -> Intent {
        self.intent
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Returns the first keyword contained in already case-folded text.
    fn matched_keyword(&self, folded: &str) -> Option<&str> {
        self.keywords
            .iter()
            .map(String::as_str)
            .find(|k| folded.contains(k))
    }
}

/// Ordered list of rules, evaluated top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    /// Build a custom table.
    ///
    /// The first rule must detect emergencies, every rule needs at least one
    /// non-empty keyword and `General` is reserved for the fallback.
    pub fn new(rules: Vec<Rule>) -> Result<Self, CoreError> {
        match rules.first() {
            Some(rule) if rule.intent == Intent::Emergency => {}
            Some(rule) => {
                return Err(CoreError::InvalidRuleTable(format!(
                    "first rule must be emergency, got {}",
                    rule.intent
                )))
            }
            None => {
                return Err(CoreError::InvalidRuleTable(
                    "table has no rules".to_string(),
                ))
            }
        }

        if let Some(rule) = rules
            .iter()
            .find(|r| r.keywords.is_empty() || r.keywords.iter().any(|k| k.is_empty()))
        {
            return Err(CoreError::InvalidRuleTable(format!(
                "rule for {} has an empty keyword set or keyword",
                rule.intent
            )));
        }

        if rules.iter().any(|r| r.intent == Intent::General) {
            return Err(CoreError::InvalidRuleTable(
                "general is the fallback and cannot have a rule".to_string(),
            ));
        }

        Ok(Self { rules })
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Classify raw user text. Returns `General` when no rule matches.
    pub fn classify(&self, text: &str) -> Intent {
        let folded = text.to_lowercase();

        for rule in &self.rules {
            if let Some(keyword) = rule.matched_keyword(&folded) {
                debug!(intent = %rule.intent, keyword = keyword, "Classified input");
                return rule.intent;
            }
        }

        debug!("No rule matched, using general intent");
        Intent::General
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self {
            rules: vec![
                Rule::new(
                    Intent::Emergency,
                    ["chest pain", "heart attack", "can't breathe", "emergency"],
                ),
                Rule::new(Intent::Medicine, ["medicine", "pill", "dose", "doing with"]),
                Rule::new(
                    Intent::MentalHealth,
                    ["stress", "anxious", "depressed", "sad", "worried"],
                ),
                Rule::new(Intent::Symptom, ["unwell", "sick", "fever", "pain"]),
                Rule::new(Intent::Tips, ["tip", "advice", "health", "personalized"]),
                Rule::new(Intent::Analysis, ["pattern", "analyze", "report", "how am i"]),
                Rule::new(
                    Intent::Greeting,
                    ["hello", "hi", "hey", "good morning", "good evening"],
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chest_pain_is_emergency() {
        let table = RuleTable::default();
        assert_eq!(table.classify("chest pain"), Intent::Emergency);
        assert_eq!(table.classify("What should I do for CHEST PAIN?"), Intent::Emergency);
    }

    #[test]
    fn test_emergency_wins_over_every_other_keyword() {
        let table = RuleTable::default();
        let others = [
            "medicine", "pill", "stress", "sad", "fever", "pain", "tip", "health", "pattern",
            "how am i", "hello", "hi",
        ];
        for other in others {
            for emergency in ["chest pain", "heart attack", "can't breathe", "emergency"] {
                let before = format!("{} {}", other, emergency);
                let after = format!("{} {}", emergency, other);
                assert_eq!(table.classify(&before), Intent::Emergency, "{}", before);
                assert_eq!(table.classify(&after), Intent::Emergency, "{}", after);
            }
        }
    }

    #[test]
    fn test_medicine_question_beats_analysis() {
        let table = RuleTable::default();
        assert_eq!(
            table.classify("how am I doing with my medicines?"),
            Intent::Medicine
        );
    }

    #[test]
    fn test_priority_order_between_categories() {
        let table = RuleTable::default();
        assert_eq!(table.classify("I feel stressed and anxious"), Intent::MentalHealth);
        assert_eq!(table.classify("I'm feeling unwell today"), Intent::Symptom);
        assert_eq!(table.classify("sad and sick"), Intent::MentalHealth);
        assert_eq!(table.classify("Give me personalized health tips"), Intent::Tips);
        assert_eq!(table.classify("Analyze my health patterns"), Intent::Tips);
        assert_eq!(table.classify("show me a weekly report"), Intent::Analysis);
        assert_eq!(table.classify("Good morning!"), Intent::Greeting);
    }

    #[test]
    fn test_substring_matching() {
        let table = RuleTable::default();
        // "hi" is contained in "this".
        assert_eq!(table.classify("is this working"), Intent::Greeting);
        assert_eq!(table.classify("back pain"), Intent::Symptom);
    }

    #[test]
    fn test_unmatched_falls_back_to_general() {
        let table = RuleTable::default();
        assert_eq!(table.classify("what's the weather"), Intent::General);
        assert_eq!(table.classify(""), Intent::General);
    }

    #[test]
    fn test_custom_table_requires_emergency_first() {
        let err = RuleTable::new(vec![
            Rule::new(Intent::Greeting, ["hello"]),
            Rule::new(Intent::Emergency, ["emergency"]),
        ])
        .unwrap_err();
        assert!(matches!(err, CoreError::InvalidRuleTable(_)));

        assert!(RuleTable::new(Vec::new()).is_err());
        assert!(RuleTable::new(vec![Rule::new(Intent::Emergency, Vec::<&str>::new())]).is_err());
        assert!(RuleTable::new(vec![
            Rule::new(Intent::Emergency, ["stroke"]),
            Rule::new(Intent::General, ["anything"]),
        ])
        .is_err());
    }

    #[test]
    fn test_custom_table_keywords_are_case_folded() {
        let table = RuleTable::new(vec![
            Rule::new(Intent::Emergency, ["Stroke"]),
            Rule::new(Intent::Medicine, ["Insulin"]),
        ])
        .unwrap();
        assert_eq!(table.classify("possible STROKE symptoms"), Intent::Emergency);
        assert_eq!(table.classify("insulin timing"), Intent::Medicine);
        assert_eq!(table.classify("hello"), Intent::General);
    }
}
