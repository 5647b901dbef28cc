use bevy::prelude::*;
use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

/// Force/torque accumulator for one rigid body.
///
/// Sub-models push contributions during a step; the integrator sums them once
/// into `net_force` (world frame) and `net_moment` (body frame).
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct PhysicsComponent {
    pub mass: f64,
    pub inertia: Matrix3<f64>,
    pub inertia_inv: Matrix3<f64>,
    pub net_force: Vector3<f64>,
    pub net_moment: Vector3<f64>,
    pub forces: Vec<Force>,
    pub moments: Vec<Moment>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Force {
    pub vector: Vector3<f64>,
    pub frame: ReferenceFrame,
    pub category: ForceCategory,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Moment {
    pub vector: Vector3<f64>,
    pub frame: ReferenceFrame,
    pub category: ForceCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ReferenceFrame {
    Body,
    Inertial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForceCategory {
    Propulsive,
    Aerodynamic,
    Control,
    Stabilization,
    Gravitational,
}

impl Force {
    pub fn body(vector: Vector3<f64>, category: ForceCategory) -> Self {
        Self {
            vector,
            frame: ReferenceFrame::Body,
            category,
        }
    }

    pub fn inertial(vector: Vector3<f64>, category: ForceCategory) -> Self {
        Self {
            vector,
            frame: ReferenceFrame::Inertial,
            category,
        }
    }
}

impl Moment {
    pub fn body(vector: Vector3<f64>, category: ForceCategory) -> Self {
        Self {
            vector,
            frame: ReferenceFrame::Body,
            category,
        }
    }
}

impl PhysicsComponent {
    pub fn new(mass: f64, inertia: Matrix3<f64>) -> Self {
        let inertia_inv = inertia.try_inverse().unwrap_or_else(|| {
            error!("Inertia matrix is not invertible, angular response disabled");
            Matrix3::zeros()
        });
        Self {
            mass,
            inertia,
            inertia_inv,
            net_force: Vector3::zeros(),
            net_moment: Vector3::zeros(),
            forces: Vec::new(),
            moments: Vec::new(),
        }
    }

    pub fn add_force(&mut self, force: Force) {
        self.forces.push(force);
    }

    pub fn add_moment(&mut self, moment: Moment) {
        self.moments.push(moment);
    }

    pub fn clear_forces(&mut self) {
        self.forces.clear();
        self.moments.clear();
        self.net_force = Vector3::zeros();
        self.net_moment = Vector3::zeros();
    }

    /// Sum of the submitted forces of one category, in the frame they were submitted in.
    pub fn force_sum(&self, category: ForceCategory, frame: ReferenceFrame) -> Vector3<f64> {
        self.forces
            .iter()
            .filter(|f| f.category == category && f.frame == frame)
            .map(|f| f.vector)
            .sum()
    }

    /// Sum of the submitted body-frame moments of one category.
    pub fn moment_sum(&self, category: ForceCategory) -> Vector3<f64> {
        self.moments
            .iter()
            .filter(|m| m.category == category)
            .map(|m| m.vector)
            .sum()
    }

    /// Sum of every submitted body-frame moment.
    pub fn total_moment(&self) -> Vector3<f64> {
        self.moments.iter().map(|m| m.vector).sum()
    }
}
