//! Maps the four current patterns onto the builder-mode taxonomy.

use chrono::{DateTime, Utc};
use founderos_core::{BuilderProfile, Pattern, PatternType};
use serde::Serialize;

use crate::labels::{
    BALANCED_STYLE, BURST_BUILDER, CONTEXT_OVERLOAD, CONTEXT_SWITCHING, DEEP_FOCUS,
    DEEP_FOCUS_BUILDER, EXECUTION_DRIVEN, EXTERNAL_BLOCKER, HIGH_FRICTION, HIGH_VELOCITY_BUILDER,
    MINIMAL_FRICTION, MOMENTUM_DECAY, OVERPLANNING, PLANNER, PREPARATION_LOOP, REACTIVE_BUILDER,
    SHIPPER, STALLED_BUILDER, STEADY_BUILDER, STRONG_MOMENTUM,
};

/// Profile fields derived from patterns, not yet bound to a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileTraits {
    pub builder_mode: String,
    pub dominant_pattern: String,
    pub execution_style: String,
    pub friction_type: String,
    pub summary_label: String,
}

impl ProfileTraits {
    #[must_use]
    pub fn into_profile(self, user_id: &str, now: DateTime<Utc>) -> BuilderProfile {
        BuilderProfile {
            user_id: user_id.to_owned(),
            builder_mode: self.builder_mode,
            dominant_pattern: self.dominant_pattern,
            execution_style: self.execution_style,
            friction_type: self.friction_type,
            summary_label: self.summary_label,
            updated_at: now,
        }
    }
}

/// Current label per pattern type. The first pattern of a type wins.
#[derive(Debug, Default, Clone, Copy)]
struct Labels<'a> {
    momentum: Option<&'a str>,
    focus: Option<&'a str>,
    execution: Option<&'a str>,
    friction: Option<&'a str>,
}

impl<'a> Labels<'a> {
    fn from_patterns(patterns: &'a [Pattern]) -> Self {
        let mut labels = Self::default();
        for p in patterns {
            let slot = match p.pattern_type {
                PatternType::Momentum => &mut labels.momentum,
                PatternType::Focus => &mut labels.focus,
                PatternType::Execution => &mut labels.execution,
                PatternType::Friction => &mut labels.friction,
            };
            slot.get_or_insert(p.pattern_label.as_str());
        }
        labels
    }
}

/// Classify a profile from the current patterns.
///
/// Returns `None` when there are no patterns: nothing to classify yet.
/// Confidence ties for the dominant pattern go to the earliest in `patterns`.
#[must_use]
pub fn classify_profile(patterns: &[Pattern]) -> Option<ProfileTraits> {
    let dominant = dominant_pattern(patterns)?;
    let labels = Labels::from_patterns(patterns);

    let builder_mode = builder_mode(&labels);
    let execution_style = execution_style(&labels);
    Some(ProfileTraits {
        builder_mode: builder_mode.to_owned(),
        dominant_pattern: format!("{} ({})", dominant.pattern_label, dominant.pattern_type),
        execution_style: execution_style.to_owned(),
        friction_type: friction_type(&labels).to_owned(),
        summary_label: format!("{builder_mode} • {execution_style}"),
    })
}

fn builder_mode(labels: &Labels<'_>) -> &'static str {
    match (labels.momentum, labels.focus, labels.friction) {
        (Some(STRONG_MOMENTUM), Some(DEEP_FOCUS), _) => DEEP_FOCUS_BUILDER,
        (Some(STRONG_MOMENTUM), Some(CONTEXT_SWITCHING), _) => BURST_BUILDER,
        (Some(STRONG_MOMENTUM), _, _) => HIGH_VELOCITY_BUILDER,
        (Some(MOMENTUM_DECAY), _, _) => REACTIVE_BUILDER,
        (_, _, Some(HIGH_FRICTION)) => STALLED_BUILDER,
        _ => STEADY_BUILDER,
    }
}

fn execution_style(labels: &Labels<'_>) -> &'static str {
    match labels.execution {
        Some(EXECUTION_DRIVEN) => SHIPPER,
        Some(PREPARATION_LOOP) => PLANNER,
        _ => BALANCED_STYLE,
    }
}

fn friction_type(labels: &Labels<'_>) -> &'static str {
    if labels.friction != Some(HIGH_FRICTION) {
        return MINIMAL_FRICTION;
    }
    if labels.focus == Some(CONTEXT_SWITCHING) {
        CONTEXT_OVERLOAD
    } else if labels.execution == Some(PREPARATION_LOOP) {
        OVERPLANNING
    } else {
        EXTERNAL_BLOCKER
    }
}

/// Highest confidence wins; the first maximum is kept on ties.
fn dominant_pattern(patterns: &[Pattern]) -> Option<&Pattern> {
    patterns.iter().fold(None, |best: Option<&Pattern>, p| match best {
        Some(b) if !(p.confidence_score > b.confidence_score || b.confidence_score.is_nan()) => {
            Some(b)
        },
        _ => Some(p),
    })
}
