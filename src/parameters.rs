//! Validated launch parameters for a flight or a convergence study.
//!
//! The parameter record is constructed once per run through a validating
//! constructor and is immutable afterwards. The integrator and the driver
//! assume already-validated input and never re-check it.

use crate::error::SimulationError;

/// Launch and discretization parameters for one convergence study.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationParameters {
    pub initial_speed: f64,    // m/s
    pub launch_angle_deg: f64, // degrees, unconstrained
    pub mass: f64,             // kg
    pub drag_coefficient: f64, // kg/s, drag force is -k·v
    pub base_step: f64,        // s
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            initial_speed: 50.0,
            launch_angle_deg: 45.0,
            mass: 1.0,
            drag_coefficient: 0.1,
            base_step: 0.1,
        }
    }
}

impl SimulationParameters {
    /// Build a validated parameter set.
    pub fn new(
        initial_speed: f64,
        launch_angle_deg: f64,
        mass: f64,
        drag_coefficient: f64,
        base_step: f64,
    ) -> Result<Self, SimulationError> {
        let params = Self {
            initial_speed,
            launch_angle_deg,
            mass,
            drag_coefficient,
            base_step,
        };
        params.validate()?;
        Ok(params)
    }

    /// Parse the five raw text fields of the input form and validate them.
    pub fn from_text(
        speed: &str,
        angle: &str,
        mass: &str,
        drag: &str,
        step: &str,
    ) -> Result<Self, SimulationError> {
        Self::new(
            parse_field("initial_speed", speed)?,
            parse_field("launch_angle_deg", angle)?,
            parse_field("mass", mass)?,
            parse_field("drag_coefficient", drag)?,
            parse_field("base_step", step)?,
        )
    }

    fn validate(&self) -> Result<(), SimulationError> {
        require_finite("initial_speed", self.initial_speed)?;
        require_finite("launch_angle_deg", self.launch_angle_deg)?;
        require_finite("mass", self.mass)?;
        require_finite("drag_coefficient", self.drag_coefficient)?;
        require_finite("base_step", self.base_step)?;

        if self.initial_speed < 0.0 {
            return Err(invalid("initial_speed", "must not be negative", self.initial_speed));
        }
        if self.mass <= 0.0 {
            return Err(invalid("mass", "must be positive", self.mass));
        }
        if self.drag_coefficient < 0.0 {
            return Err(invalid("drag_coefficient", "must not be negative", self.drag_coefficient));
        }
        if self.base_step < 0.0 {
            return Err(invalid("base_step", "must not be negative", self.base_step));
        }
        Ok(())
    }
}

fn parse_field(name: &'static str, raw: &str) -> Result<f64, SimulationError> {
    raw.trim().parse::<f64>().map_err(|_| SimulationError::InvalidParameter {
        name,
        reason: format!("`{}` is not a number", raw.trim()),
    })
}

fn require_finite(name: &'static str, value: f64) -> Result<(), SimulationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(name, "must be a finite number", value))
    }
}

fn invalid(name: &'static str, constraint: &str, value: f64) -> SimulationError {
    SimulationError::InvalidParameter {
        name,
        reason: format!("{constraint} (got {value})"),
    }
}
