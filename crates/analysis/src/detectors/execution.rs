use founderos_core::{
    ActivityLog, BALANCED_APPROACH_CONFIDENCE, EXECUTION_DRIVEN_CONFIDENCE, EXECUTION_DRIVEN_RATIO,
    EXECUTION_KEYWORDS, EXECUTION_MIN_LOGS, EXECUTION_UNKNOWN_CONFIDENCE, PLANNING_KEYWORDS,
    PREPARATION_LOOP_CONFIDENCE, PREPARATION_LOOP_RATIO, PatternType,
};

use crate::PatternSignal;
use crate::labels::{BALANCED_APPROACH, EXECUTION_DRIVEN, PREPARATION_LOOP, UNKNOWN};

/// Which intents a single log body expresses. Both may be set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntentHits {
    pub planning: bool,
    pub execution: bool,
}

/// Decides whether a log body talks about planning, executing, or both.
pub trait IntentClassifier: Send + Sync {
    fn classify(&self, content: &str) -> IntentHits;
}

/// Case-insensitive substring match against two keyword lists.
///
/// Crude: "I won't ship" still counts as shipping.
#[derive(Debug, Clone)]
pub struct KeywordClassifier {
    planning: Vec<String>,
    execution: Vec<String>,
}

impl KeywordClassifier {
    #[must_use]
    pub fn new<P, E>(planning: P, execution: E) -> Self
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        let lower = |w: &str| w.to_lowercase();
        Self {
            planning: planning.into_iter().map(|w| lower(w.as_ref())).collect(),
            execution: execution.into_iter().map(|w| lower(w.as_ref())).collect(),
        }
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new(PLANNING_KEYWORDS, EXECUTION_KEYWORDS)
    }
}

impl IntentClassifier for KeywordClassifier {
    fn classify(&self, content: &str) -> IntentHits {
        let content = content.to_lowercase();
        IntentHits {
            planning: self.planning.iter().any(|w| content.contains(w.as_str())),
            execution: self.execution.iter().any(|w| content.contains(w.as_str())),
        }
    }
}

/// Number of logs expressing each intent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntentCounts {
    pub planning: usize,
    pub execution: usize,
}

impl IntentCounts {
    #[must_use]
    pub const fn total(&self) -> usize {
        self.planning + self.execution
    }

    /// Execution share of all intent hits, `None` when nothing matched.
    #[must_use]
    #[allow(clippy::cast_precision_loss, reason = "log counts are small")]
    pub fn execution_ratio(&self) -> Option<f64> {
        let total = self.total();
        (total > 0).then(|| self.execution as f64 / total as f64)
    }
}

#[must_use]
pub fn count_intents(logs: &[ActivityLog], classifier: &dyn IntentClassifier) -> IntentCounts {
    logs.iter().fold(IntentCounts::default(), |mut counts, log| {
        let hits = classifier.classify(&log.content);
        counts.planning += usize::from(hits.planning);
        counts.execution += usize::from(hits.execution);
        counts
    })
}

/// Classify execution style with the default keyword lists.
#[must_use]
pub fn detect_execution(logs: &[ActivityLog]) -> PatternSignal {
    detect_execution_with(logs, &KeywordClassifier::default())
}

/// Classify execution style from the share of execution-flavoured logs.
///
/// Order independent. Every log counts, timestamped or not.
#[must_use]
pub fn detect_execution_with(
    logs: &[ActivityLog],
    classifier: &dyn IntentClassifier,
) -> PatternSignal {
    let counts = count_intents(logs, classifier);
    let ratio = match counts.execution_ratio() {
        Some(ratio) if logs.len() >= EXECUTION_MIN_LOGS => ratio,
        _ => {
            return PatternSignal::new(
                PatternType::Execution,
                UNKNOWN,
                "Not enough signal yet to tell planning from execution.",
                EXECUTION_UNKNOWN_CONFIDENCE,
            );
        },
    };

    if ratio > EXECUTION_DRIVEN_RATIO {
        PatternSignal::new(
            PatternType::Execution,
            EXECUTION_DRIVEN,
            format!(
                "{:.0}% of your intent signals describe shipping work.",
                ratio * 100.0
            ),
            EXECUTION_DRIVEN_CONFIDENCE,
        )
    } else if ratio < PREPARATION_LOOP_RATIO {
        PatternSignal::new(
            PatternType::Execution,
            PREPARATION_LOOP,
            format!(
                "Planning dominates: {} planning signals against {} execution signals.",
                counts.planning, counts.execution
            ),
            PREPARATION_LOOP_CONFIDENCE,
        )
    } else {
        PatternSignal::new(
            PatternType::Execution,
            BALANCED_APPROACH,
            "Your updates mix planning and execution.",
            BALANCED_APPROACH_CONFIDENCE,
        )
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use founderos_core::LogType;

    use super::*;
    use crate::detectors::test_support::log_at;

    fn logs(contents: &[&str]) -> Vec<ActivityLog> {
        let now = Utc::now();
        contents
            .iter()
            .enumerate()
            .map(|(i, c)| {
                log_at("p", c, LogType::Update, now - Duration::minutes(i64::try_from(i).unwrap()))
            })
            .collect()
    }

    #[test]
    fn keyword_match_is_case_insensitive_substring() {
        let hits = KeywordClassifier::default().classify("Shipped the DEPLOYMENT after planning");
        assert_eq!(hits, IntentHits { planning: true, execution: true });
    }

    #[test]
    fn fewer_than_three_logs_is_unknown() {
        let signal = detect_execution(&logs(&["ship it", "ship it again"]));
        assert_eq!(signal.label, UNKNOWN);
        assert!((signal.confidence - 0.2).abs() < f64::EPSILON);
    }

    #[test]
    fn no_keyword_hits_is_unknown() {
        let signal = detect_execution(&logs(&["coffee", "lunch", "nap"]));
        assert_eq!(signal.label, UNKNOWN);
    }

    #[test]
    fn mostly_shipping_is_execution_driven() {
        let signal = detect_execution(&logs(&["shipped v2", "fixed login", "deployed api"]));
        assert_eq!(signal.label, EXECUTION_DRIVEN);
        assert!((signal.confidence - 0.9).abs() < f64::EPSILON);
    }

    #[test]
    fn mostly_planning_is_preparation_loop() {
        let signal = detect_execution(&logs(&[
            "researching competitors",
            "thinking about pricing",
            "maybe pivot",
            "study the market",
        ]));
        assert_eq!(signal.label, PREPARATION_LOOP);
        assert!((signal.confidence - 0.85).abs() < f64::EPSILON);
    }

    #[test]
    fn mixed_intents_is_balanced_approach() {
        let signal = detect_execution(&logs(&["plan the launch", "ship landing page", "misc"]));
        assert_eq!(signal.label, BALANCED_APPROACH);
        assert!((signal.confidence - 0.7).abs() < f64::EPSILON);
    }

    #[test]
    fn result_is_independent_of_log_order() {
        let mut input = logs(&["plan roadmap", "ship a", "ship b", "code c", "consider d"]);
        let forward = detect_execution(&input);
        input.reverse();
        assert_eq!(detect_execution(&input), forward);
    }

    #[test]
    fn custom_classifier_replaces_keywords() {
        struct AlwaysPlanning;
        impl IntentClassifier for AlwaysPlanning {
            fn classify(&self, _content: &str) -> IntentHits {
                IntentHits { planning: true, execution: false }
            }
        }
        let signal = detect_execution_with(&logs(&["ship", "ship", "ship"]), &AlwaysPlanning);
        assert_eq!(signal.label, PREPARATION_LOOP);
    }
}
