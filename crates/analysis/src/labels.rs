//! Label vocabulary shared by detectors, the profile classifier and drift.

// Pattern labels
pub const CALIBRATING: &str = "Calibrating";
pub const STRONG_MOMENTUM: &str = "Strong Momentum";
pub const MOMENTUM_DECAY: &str = "Momentum Decay";
pub const DEEP_FOCUS: &str = "Deep Focus";
pub const CONTEXT_SWITCHING: &str = "Context Switching";
pub const BALANCED: &str = "Balanced";
pub const UNKNOWN: &str = "Unknown";
pub const EXECUTION_DRIVEN: &str = "Execution-Driven";
pub const PREPARATION_LOOP: &str = "Preparation Loop";
pub const BALANCED_APPROACH: &str = "Balanced Approach";
pub const HIGH_FRICTION: &str = "High Friction";
pub const SMOOTH_FLOW: &str = "Smooth Flow";

// Builder modes
pub const DEEP_FOCUS_BUILDER: &str = "Deep Focus Builder";
pub const BURST_BUILDER: &str = "Burst Builder";
pub const HIGH_VELOCITY_BUILDER: &str = "High Velocity Builder";
pub const REACTIVE_BUILDER: &str = "Reactive Builder";
pub const STALLED_BUILDER: &str = "Stalled Builder";
pub const STEADY_BUILDER: &str = "Steady Builder";

// Execution styles
pub const SHIPPER: &str = "Shipper";
pub const PLANNER: &str = "Planner";
pub const BALANCED_STYLE: &str = "Balanced";

// Friction types
pub const MINIMAL_FRICTION: &str = "Minimal";
pub const CONTEXT_OVERLOAD: &str = "Context Overload";
pub const OVERPLANNING: &str = "Overplanning";
pub const EXTERNAL_BLOCKER: &str = "External Blocker";
