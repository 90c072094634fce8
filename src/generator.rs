//! Random process-set generation.
//!
//! Produces process descriptors whose arrival and burst times hit a
//! requested mean and standard deviation *exactly* (before rounding to
//! ticks): values are drawn from a normal distribution, then shifted
//! and rescaled onto the requested moments. Priorities are drawn from a
//! Poisson distribution around a configurable center.
//!
//! This is a collaborator of the simulation engine, not part of it —
//! the engine consumes whatever descriptors it is given and contains
//! no randomness of its own.

use rand::Rng;
use rand_distr::{Distribution, Normal, Poisson};

use crate::models::ProcessSpec;
use crate::validation::{ValidationError, ValidationErrorKind};
use crate::SimError;

/// Target mean and standard deviation for a sampled attribute (ms).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanStd {
    /// Target mean (ms).
    pub mean: f64,
    /// Target standard deviation (ms, >= 0).
    pub std_dev: f64,
}

impl MeanStd {
    /// Creates a target with the given mean and standard deviation.
    pub fn new(mean: f64, std_dev: f64) -> Self {
        Self { mean, std_dev }
    }
}

/// Configuration for one generated process set.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Number of processes to generate.
    pub count: usize,
    /// Arrival time distribution target.
    pub arrival: MeanStd,
    /// Burst time distribution target.
    pub burst: MeanStd,
    /// Poisson center for priorities (> 0).
    pub priority_mean: f64,
}

impl GeneratorConfig {
    /// Creates a configuration with defaults in the original tool's
    /// ranges: arrivals around 8 ms, bursts around 13 ms, priorities
    /// around 5.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            arrival: MeanStd::new(8.0, 4.0),
            burst: MeanStd::new(13.0, 6.0),
            priority_mean: 5.0,
        }
    }

    /// Sets the arrival time target.
    pub fn with_arrival(mut self, arrival: MeanStd) -> Self {
        self.arrival = arrival;
        self
    }

    /// Sets the burst time target.
    pub fn with_burst(mut self, burst: MeanStd) -> Self {
        self.burst = burst;
        self
    }

    /// Sets the priority Poisson center.
    pub fn with_priority_mean(mut self, priority_mean: f64) -> Self {
        self.priority_mean = priority_mean;
        self
    }

    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        for (name, target) in [("arrival", &self.arrival), ("burst", &self.burst)] {
            if !target.mean.is_finite() || target.mean < 0.0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidDistribution,
                    format!("{name} mean must be finite and non-negative"),
                ));
            }
            if !target.std_dev.is_finite() || target.std_dev < 0.0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidDistribution,
                    format!("{name} standard deviation must be finite and non-negative"),
                ));
            }
        }
        if !self.priority_mean.is_finite() || self.priority_mean <= 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidDistribution,
                "priority mean must be finite and positive",
            ));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Generates a process set matching the configured targets.
///
/// IDs are `P0..Pn-1`. Arrivals are clamped at 0 and bursts at 1 tick
/// after rounding, so every generated set passes input validation.
///
/// # Errors
/// `SimError::InvalidInput` for out-of-range distribution parameters.
pub fn generate(
    config: &GeneratorConfig,
    rng: &mut impl Rng,
) -> Result<Vec<ProcessSpec>, SimError> {
    config.validate().map_err(SimError::InvalidInput)?;
    if config.count == 0 {
        return Ok(Vec::new());
    }

    let arrivals = sample_targeted(config.count, config.arrival, rng)?;
    let bursts = sample_targeted(config.count, config.burst, rng)?;
    let poisson = Poisson::new(config.priority_mean).map_err(|e| {
        SimError::InvalidInput(vec![ValidationError::new(
            ValidationErrorKind::InvalidDistribution,
            format!("priority distribution: {e}"),
        )])
    })?;

    let specs = (0..config.count)
        .map(|i| {
            let arrival_ms = arrivals[i].round().max(0.0) as i64;
            let burst_ms = bursts[i].round().max(1.0) as i64;
            let priority = poisson.sample(rng) as i32;
            ProcessSpec::new(format!("P{i}"), arrival_ms, burst_ms).with_priority(priority)
        })
        .collect();
    Ok(specs)
}

/// Draws `count` values and rescales them to hit `target` exactly.
///
/// All but the last value come from a normal distribution (clamped at
/// 0); the last is chosen to close the gap to the required sum. The
/// whole sample is then shifted and scaled onto the target mean and
/// standard deviation. With a degenerate sample (zero spread) the
/// scaling step is skipped.
fn sample_targeted(
    count: usize,
    target: MeanStd,
    rng: &mut impl Rng,
) -> Result<Vec<f64>, SimError> {
    if count == 1 {
        return Ok(vec![target.mean]);
    }

    let normal = Normal::new(target.mean, target.std_dev).map_err(|e| {
        SimError::InvalidInput(vec![ValidationError::new(
            ValidationErrorKind::InvalidDistribution,
            format!("normal distribution: {e}"),
        )])
    })?;

    let mut values: Vec<f64> = (0..count - 1)
        .map(|_| normal.sample(rng).max(0.0))
        .collect();
    let required_sum = target.mean * count as f64;
    let current_sum: f64 = values.iter().sum();
    values.push((required_sum - current_sum).max(0.0));

    let n = count as f64;
    let mean: f64 = values.iter().sum::<f64>() / n;
    let variance: f64 = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    let std_dev = variance.sqrt();

    if std_dev > f64::EPSILON {
        let scale = target.std_dev / std_dev;
        for v in &mut values {
            *v = (*v - mean) * scale + target.mean;
        }
    }
    Ok(values)
}
