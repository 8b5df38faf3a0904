//! Synthetic dataset providers.
//!
//! Each distribution owns its own [`StdRng`] and yields integer samples via
//! the [`Sampler`] trait. Seeding with the same nonzero value reproduces the
//! exact sequence; seeding with `None` pulls fresh OS entropy.

use rand::SeedableRng;
use rand::distributions::{Distribution as _, Uniform};
use rand::rngs::StdRng;
use rand_distr::{Exp, Gamma, Normal};
use tracing::{debug, warn};

use crate::error::HarnessError;

/// An integer sample stream backed by a statistical distribution.
pub trait Sampler {
    fn name(&self) -> &'static str;

    /// Re-seeds the underlying generator. `Some(seed)` is deterministic,
    /// `None` requests fresh entropy.
    fn reseed(&mut self, seed: Option<u64>);

    /// Applies the distribution's shape parameter, where it has one.
    fn set_shape(&mut self, shape: f64) -> Result<(), HarnessError>;

    /// Draws the next sample, rounded to the nearest integer.
    fn next_int(&mut self) -> i64;
}

fn fresh_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            debug!(seed, "seeding generator deterministically");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}

/// Uniform over the full `i32` range. Incompressible noise once narrowed to
/// bytes; the worst case for every codec.
pub struct UniformSampler {
    rng: StdRng,
    dist: Uniform<i32>,
}

impl Default for UniformSampler {
    fn default() -> Self {
        Self {
            rng: fresh_rng(None),
            dist: Uniform::new_inclusive(i32::MIN, i32::MAX),
        }
    }
}

impl Sampler for UniformSampler {
    fn name(&self) -> &'static str {
        "uniform"
    }

    fn reseed(&mut self, seed: Option<u64>) {
        self.rng = fresh_rng(seed);
    }

    fn set_shape(&mut self, shape: f64) -> Result<(), HarnessError> {
        // The uniform distribution has no shape parameter.
        warn!(shape, "ignoring shape parameter for uniform distribution");
        Ok(())
    }

    fn next_int(&mut self) -> i64 {
        i64::from(self.dist.sample(&mut self.rng))
    }
}

const NORMAL_MEAN: f64 = 0.0;
const NORMAL_DEFAULT_STD_DEV: f64 = 1024.0;

/// Gaussian samples around zero. Shape parameter = standard deviation.
pub struct NormalSampler {
    rng: StdRng,
    dist: Normal<f64>,
}

impl Default for NormalSampler {
    fn default() -> Self {
        Self {
            rng: fresh_rng(None),
            dist: Normal::new(NORMAL_MEAN, NORMAL_DEFAULT_STD_DEV)
                .expect("default normal parameters are valid"),
        }
    }
}

impl Sampler for NormalSampler {
    fn name(&self) -> &'static str {
        "normal"
    }

    fn reseed(&mut self, seed: Option<u64>) {
        self.rng = fresh_rng(seed);
    }

    fn set_shape(&mut self, shape: f64) -> Result<(), HarnessError> {
        // `Normal::new` tolerates a negative std dev; enforce a positive one
        // so the shape contract matches the other distributions.
        if !shape.is_finite() || shape <= 0.0 {
            return Err(HarnessError::InvalidShape {
                distribution: self.name(),
                value: shape,
            });
        }
        self.dist = Normal::new(NORMAL_MEAN, shape).map_err(|_| HarnessError::InvalidShape {
            distribution: self.name(),
            value: shape,
        })?;
        Ok(())
    }

    fn next_int(&mut self) -> i64 {
        self.dist.sample(&mut self.rng).round() as i64
    }
}

const GAMMA_DEFAULT_SHAPE: f64 = 2.0;
const GAMMA_SCALE: f64 = 2.0;

/// Gamma-distributed samples. Shape parameter = the gamma `k` parameter.
pub struct GammaSampler {
    rng: StdRng,
    dist: Gamma<f64>,
}

impl Default for GammaSampler {
    fn default() -> Self {
        Self {
            rng: fresh_rng(None),
            dist: Gamma::new(GAMMA_DEFAULT_SHAPE, GAMMA_SCALE)
                .expect("default gamma parameters are valid"),
        }
    }
}

impl Sampler for GammaSampler {
    fn name(&self) -> &'static str {
        "gamma"
    }

    fn reseed(&mut self, seed: Option<u64>) {
        self.rng = fresh_rng(seed);
    }

    fn set_shape(&mut self, shape: f64) -> Result<(), HarnessError> {
        self.dist = Gamma::new(shape, GAMMA_SCALE).map_err(|_| HarnessError::InvalidShape {
            distribution: self.name(),
            value: shape,
        })?;
        Ok(())
    }

    fn next_int(&mut self) -> i64 {
        self.dist.sample(&mut self.rng).round() as i64
    }
}

const EXP_DEFAULT_LAMBDA: f64 = 0.1;

/// Exponentially distributed samples. Shape parameter = the rate `lambda`.
pub struct ExponentialSampler {
    rng: StdRng,
    dist: Exp<f64>,
}

impl Default for ExponentialSampler {
    fn default() -> Self {
        Self {
            rng: fresh_rng(None),
            dist: Exp::new(EXP_DEFAULT_LAMBDA).expect("default exponential rate is valid"),
        }
    }
}

impl Sampler for ExponentialSampler {
    fn name(&self) -> &'static str {
        "exponential"
    }

    fn reseed(&mut self, seed: Option<u64>) {
        self.rng = fresh_rng(seed);
    }

    fn set_shape(&mut self, shape: f64) -> Result<(), HarnessError> {
        self.dist = Exp::new(shape).map_err(|_| HarnessError::InvalidShape {
            distribution: self.name(),
            value: shape,
        })?;
        Ok(())
    }

    fn next_int(&mut self) -> i64 {
        self.dist.sample(&mut self.rng).round() as i64
    }
}

// --- Registry ---

type Factory = fn() -> Box<dyn Sampler>;

const REGISTRY: &[(&str, Factory)] = &[
    ("uniform", || Box::new(UniformSampler::default())),
    ("normal", || Box::new(NormalSampler::default())),
    ("gamma", || Box::new(GammaSampler::default())),
    ("exponential", || Box::new(ExponentialSampler::default())),
];

/// Instantiates the distribution registered under `name`.
pub fn create(name: &str) -> Result<Box<dyn Sampler>, HarnessError> {
    REGISTRY
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, factory)| factory())
        .ok_or_else(|| HarnessError::UnknownDistribution(name.to_owned()))
}

/// All registered distribution names, in registration order.
pub fn names() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|(n, _)| *n)
}
