//! Two-arm hinge for exploring the triangle inequality.
//!
//! A fixed base runs from the left pivot to the right pivot. Each pivot
//! carries an arm whose length comes from a slider and whose angle comes from
//! dragging its tip. The arms close into a triangle when their tips meet.
//! That is possible only if the arms together are longer than the base.
//!
//! Everything except the five inputs (two lengths, two angles, the base) is
//! derived on read. There are no discrete states beyond the
//! `can_form_triangle` / `is_formed` pair.

#[cfg(test)]
#[path = "hinge_test.rs"]
mod hinge_test;

use kernel::Point;
use kernel::relation::display_length;
use serde::{Deserialize, Serialize};

use crate::consts::{
    ARM_LENGTH_MAX, ARM_LENGTH_MIN, HINGE_BASE_LENGTH, HINGE_ORIGIN, INITIAL_LEFT_ARM_ANGLE_DEG,
    INITIAL_LEFT_ARM_LENGTH, INITIAL_RIGHT_ARM_ANGLE_DEG, INITIAL_RIGHT_ARM_LENGTH, SNAP_THRESHOLD,
};
use crate::input::Arm;

/// Slider domain and snap tolerance for a hinge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HingeLimits {
    pub arm_min: f64,
    pub arm_max: f64,
    pub snap_threshold: f64,
}

impl Default for HingeLimits {
    fn default() -> Self {
        Self { arm_min: ARM_LENGTH_MIN, arm_max: ARM_LENGTH_MAX, snap_threshold: SNAP_THRESHOLD }
    }
}

/// Coarse hinge status shown to the learner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HingeStatus {
    /// The arms are too short to ever meet.
    CannotForm,
    /// The arms could meet but the tips are apart.
    Open,
    /// The tips meet within the snap threshold.
    Formed,
}

/// The inequality `|a - b| < c < a + b` in display units, where `a` is the
/// right arm, `b` the left arm and `c` the base.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HingeReadout {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub difference: f64,
    pub sum: f64,
    pub difference_holds: bool,
    pub sum_holds: bool,
    pub status: HingeStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hinge {
    base_length: f64,
    origin: Point,
    left_length: f64,
    right_length: f64,
    left_angle_deg: f64,
    right_angle_deg: f64,
    limits: HingeLimits,
}

impl Default for Hinge {
    fn default() -> Self {
        Self::new(HingeLimits::default())
    }
}

impl Hinge {
    #[must_use]
    pub fn new(limits: HingeLimits) -> Self {
        Self {
            base_length: HINGE_BASE_LENGTH,
            origin: HINGE_ORIGIN,
            left_length: INITIAL_LEFT_ARM_LENGTH.clamp(limits.arm_min, limits.arm_max),
            right_length: INITIAL_RIGHT_ARM_LENGTH.clamp(limits.arm_min, limits.arm_max),
            left_angle_deg: INITIAL_LEFT_ARM_ANGLE_DEG,
            right_angle_deg: INITIAL_RIGHT_ARM_ANGLE_DEG,
            limits,
        }
    }

    /// Restore the initial arm lengths and angles, keeping the limits.
    pub fn reset(&mut self) {
        *self = Self::new(self.limits);
    }

    #[must_use]
    pub fn base_length(&self) -> f64 {
        self.base_length
    }

    #[must_use]
    pub fn limits(&self) -> HingeLimits {
        self.limits
    }

    #[must_use]
    pub fn pivot(&self, arm: Arm) -> Point {
        match arm {
            Arm::Left => self.origin,
            Arm::Right => self.origin + Point::new(self.base_length, 0.0),
        }
    }

    #[must_use]
    pub fn arm_length(&self, arm: Arm) -> f64 {
        match arm {
            Arm::Left => self.left_length,
            Arm::Right => self.right_length,
        }
    }

    #[must_use]
    pub fn arm_angle_deg(&self, arm: Arm) -> f64 {
        match arm {
            Arm::Left => self.left_angle_deg,
            Arm::Right => self.right_angle_deg,
        }
    }

    /// Set an arm length from the slider, clamped to the slider domain.
    ///
    /// Returns the length actually applied. Non-finite input is ignored.
    pub fn set_arm_length(&mut self, arm: Arm, value: f64) -> f64 {
        if !value.is_finite() {
            return self.arm_length(arm);
        }
        let len = value.clamp(self.limits.arm_min, self.limits.arm_max);
        match arm {
            Arm::Left => self.left_length = len,
            Arm::Right => self.right_length = len,
        }
        len
    }

    /// Point the arm at `pointer` (model coordinates), swinging it around its
    /// pivot. The length is unchanged.
    pub fn drag_arm_angle(&mut self, arm: Arm, pointer: Point) -> f64 {
        let d = pointer - self.pivot(arm);
        self.set_arm_angle_deg(arm, d.y.atan2(d.x).to_degrees());
        self.arm_angle_deg(arm)
    }

    /// Set an arm angle directly, in degrees. Non-finite input is ignored.
    pub fn set_arm_angle_deg(&mut self, arm: Arm, angle: f64) {
        if !angle.is_finite() {
            return;
        }
        match arm {
            Arm::Left => self.left_angle_deg = angle,
            Arm::Right => self.right_angle_deg = angle,
        }
    }

    #[must_use]
    pub fn tip(&self, arm: Arm) -> Point {
        let rad = self.arm_angle_deg(arm).to_radians();
        self.pivot(arm) + Point::new(rad.cos(), rad.sin()) * self.arm_length(arm)
    }

    /// Distance between the two arm tips.
    #[must_use]
    pub fn gap(&self) -> f64 {
        self.tip(Arm::Left).distance(self.tip(Arm::Right))
    }

    #[must_use]
    pub fn can_form_triangle(&self) -> bool {
        self.left_length + self.right_length > self.base_length
    }

    #[must_use]
    pub fn is_formed(&self) -> bool {
        self.can_form_triangle() && self.gap() < self.limits.snap_threshold
    }

    #[must_use]
    pub fn status(&self) -> HingeStatus {
        if self.is_formed() {
            HingeStatus::Formed
        } else if self.can_form_triangle() {
            HingeStatus::Open
        } else {
            HingeStatus::CannotForm
        }
    }

    /// The inequality chain as the learner sees it: each length is rounded to
    /// display units first, then compared.
    #[must_use]
    pub fn readout(&self) -> HingeReadout {
        let a = display_length(self.right_length);
        let b = display_length(self.left_length);
        let c = display_length(self.base_length);
        let difference = (a - b).abs();
        let sum = a + b;
        HingeReadout {
            a,
            b,
            c,
            difference,
            sum,
            difference_holds: difference < c,
            sum_holds: sum > c,
            status: self.status(),
        }
    }
}
