use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Piecewise-linear lift curve: |angle of attack| in degrees → lift coefficient.
///
/// Keys are `(angle_deg, coefficient)` pairs sorted by angle. Outside the keyed
/// range the curve holds its end values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LiftCurve {
    keys: Vec<(f64, f64)>,
}

impl LiftCurve {
    /// Builds a curve from keys, sorting them by angle.
    pub fn new(mut keys: Vec<(f64, f64)>) -> Self {
        if keys.is_empty() {
            warn!("Lift curve has no keys, lift will always be zero");
        }
        keys.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self { keys }
    }

    /// Straight line from `(start_angle, start_value)` to `(end_angle, end_value)`.
    pub fn linear(start_angle: f64, start_value: f64, end_angle: f64, end_value: f64) -> Self {
        Self::new(vec![(start_angle, start_value), (end_angle, end_value)])
    }

    pub fn keys(&self) -> &[(f64, f64)] {
        &self.keys
    }

    /// Lowest and highest keyed angle.
    pub fn domain(&self) -> Option<(f64, f64)> {
        Some((self.keys.first()?.0, self.keys.last()?.0))
    }

    /// Whether the keyed range covers `[0, max_angle]`.
    pub fn covers(&self, max_angle: f64) -> bool {
        self.domain()
            .is_some_and(|(lo, hi)| lo <= 0.0 && hi >= max_angle)
    }

    /// Deserialized curves keep file order, so this can be false.
    pub(crate) fn is_sorted(&self) -> bool {
        self.keys.windows(2).all(|w| w[0].0 <= w[1].0)
    }

    pub fn evaluate(&self, angle: f64) -> f64 {
        let (first, last) = match (self.keys.first(), self.keys.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return 0.0,
        };

        if angle <= first.0 {
            return first.1;
        }
        if angle >= last.0 {
            return last.1;
        }

        for pair in self.keys.windows(2) {
            let (a0, c0) = pair[0];
            let (a1, c1) = pair[1];
            if angle <= a1 {
                let span = a1 - a0;
                if span <= 0.0 {
                    return c1;
                }
                let t = (angle - a0) / span;
                return c0 + (c1 - c0) * t;
            }
        }
        last.1
    }
}

impl Default for LiftCurve {
    fn default() -> Self {
        Self::linear(0.0, 0.0, 15.0, 1.0)
    }
}
