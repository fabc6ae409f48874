//! Gesture recognizers report values accumulated since the gesture began; surface edits are
//! incremental. These trackers convert one into the other.

use crate::foundation::core::Vec2;

/// Lifecycle phase reported with each recognizer update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    /// First update of a gesture.
    Began,
    /// Intermediate update.
    Changed,
    /// Final update; the gesture completed.
    Ended,
    /// The gesture was aborted; its last update must not be applied.
    Cancelled,
}

/// Converts cumulative pan translation into per-update deltas for `drag_layer`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanTracker {
    last: Vec2,
}

impl PanTracker {
    /// Tracker at rest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one update and return the translation to apply since the previous one.
    ///
    /// `Began` only records the starting translation and moves nothing.
    pub fn update(&mut self, phase: GesturePhase, cumulative: Vec2) -> Vec2 {
        match phase {
            GesturePhase::Began => {
                self.last = cumulative;
                Vec2::ZERO
            }
            GesturePhase::Changed => {
                let delta = cumulative - self.last;
                self.last = cumulative;
                delta
            }
            GesturePhase::Ended => {
                let delta = cumulative - self.last;
                self.last = Vec2::ZERO;
                delta
            }
            GesturePhase::Cancelled => {
                self.last = Vec2::ZERO;
                Vec2::ZERO
            }
        }
    }
}

/// Converts cumulative pinch scale into per-update factors for `pinch_layer`.
///
/// Equivalent to resetting the recognizer's scale to `1.0` after every applied step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchTracker {
    last: f64,
}

impl Default for PinchTracker {
    fn default() -> Self {
        Self { last: 1.0 }
    }
}

impl PinchTracker {
    /// Tracker at rest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one update and return the multiplicative factor since the previous one.
    ///
    /// Non-finite or non-positive scales yield `1.0`.
    pub fn update(&mut self, phase: GesturePhase, cumulative: f64) -> f64 {
        if phase == GesturePhase::Cancelled {
            self.last = 1.0;
            return 1.0;
        }
        if phase == GesturePhase::Began {
            self.last = 1.0;
        }
        if !cumulative.is_finite() || cumulative <= 0.0 {
            return 1.0;
        }
        let factor = cumulative / self.last;
        self.last = if phase == GesturePhase::Ended {
            1.0
        } else {
            cumulative
        };
        factor
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interaction/gesture.rs"]
mod tests;
