//! Count-up animation for `.counter` elements

/// Total length of a count-up
pub const COUNTER_DURATION_MS: f64 = 3000.0;
/// Assumed frame length (60 fps)
pub const FRAME_MS: f64 = 16.0;
/// Visible fraction that starts a counter
pub const COUNTER_THRESHOLD: f64 = 0.5;

/// Result of one counter frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterStep {
    /// Still counting; show this text and request another frame
    Running(String),
    /// Finished; show this text and stop
    Done(String),
}

/// A counter climbing from 0 to `target` in fixed per-frame increments
#[derive(Debug, Clone)]
pub struct Counter {
    target: f64,
    suffix: String,
    increment: f64,
    current: f64,
}

impl Counter {
    pub fn new(target: f64, suffix: impl Into<String>) -> Self {
        Self {
            target,
            suffix: suffix.into(),
            increment: target / (COUNTER_DURATION_MS / FRAME_MS),
            current: 0.0,
        }
    }

    /// Build from `data-target` / `data-suffix`; a missing or unparsable
    /// target counts as 0
    pub fn from_attributes(target: Option<&str>, suffix: Option<&str>) -> Self {
        let target = target
            .and_then(|t| t.trim().parse::<f64>().ok())
            .filter(|t| t.is_finite())
            .unwrap_or(0.0);
        Self::new(target, suffix.unwrap_or_default())
    }

    /// Advance one frame
    pub fn step(&mut self) -> CounterStep {
        self.current += self.increment;
        if self.current < self.target {
            CounterStep::Running(format!("{}{}", self.current.ceil(), self.suffix))
        } else {
            CounterStep::Done(format!("{}{}", self.target, self.suffix))
        }
    }
}
