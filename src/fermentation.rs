// src/fermentation.rs

//! Simulated fermentation readings
//!
//! Produces the kind of series a hydrometer logger would record, for
//! charting a recipe before it is brewed. Gravity follows a lag phase and
//! then a logistic drop from OG to FG; temperature sits at the target with a
//! bump while fermentation is most active. Small seeded jitter keeps the
//! chart looking like measurements.

use crate::recipe::Recipe;
use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Hours before the yeast gets going
const LAG_HOURS: f64 = 12.0;
/// Hours from the end of the lag to peak activity
const PEAK_OFFSET_HOURS: f64 = 36.0;
/// Steepness of the gravity drop (per hour)
const ACTIVITY_RATE: f64 = 0.08;
/// Temperature rise at peak activity (°C)
const EXOTHERM: f64 = 1.5;
const GRAVITY_JITTER: f64 = 0.0005;
const TEMPERATURE_JITTER: f64 = 0.2;
const LAGER_TEMPERATURE: f64 = 11.0;

/// Defaults used when a recipe does not say
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FermentationDefaults {
    /// °C
    pub temperature: f64,
    pub days: u32,
    pub interval_hours: u32,
}

impl Default for FermentationDefaults {
    fn default() -> Self {
        Self {
            temperature: 19.0,
            days: 14,
            interval_hours: 6,
        }
    }
}

/// Inputs of one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FermentationProfile {
    pub og: f64,
    pub fg: f64,
    /// Target temperature (°C)
    pub temperature: f64,
    pub days: u32,
    pub interval_hours: u32,
    /// Same seed, same series; `None` draws from entropy
    pub seed: Option<u64>,
}

impl FermentationProfile {
    /// Profile for a recipe: its gravities (or style midpoints) and a lager
    /// temperature when any yeast is a lager strain
    pub fn from_recipe(recipe: &Recipe, defaults: &FermentationDefaults) -> Self {
        let og = recipe.effective_og().unwrap_or(1.050);
        let mut fg = recipe.effective_fg().unwrap_or(1.010);
        if fg >= og {
            // Assume 75% apparent attenuation
            fg = 1.0 + (og - 1.0) * 0.25;
        }

        let lager = recipe
            .yeasts
            .iter()
            .any(|y| y.yeast_type.eq_ignore_ascii_case("lager"));

        Self {
            og,
            fg,
            temperature: if lager {
                LAGER_TEMPERATURE
            } else {
                defaults.temperature
            },
            days: defaults.days,
            interval_hours: defaults.interval_hours,
            seed: None,
        }
    }
}

/// One simulated measurement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reading {
    /// Hours since pitching
    pub hour: u32,
    pub timestamp: DateTime<Utc>,
    pub gravity: f64,
    /// °C
    pub temperature: f64,
    /// Apparent ABV so far (%)
    pub abv: f64,
}

/// Simulate readings from pitching at `start` to the end of the profile
///
/// Readings are taken every `interval_hours` (minimum 1) from hour 0
/// through `days * 24`. Gravity stays within `[fg, og]` and never rises
/// between readings.
pub fn simulate(profile: &FermentationProfile, start: DateTime<Utc>) -> Vec<Reading> {
    let mut rng = match profile.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let og = profile.og;
    let fg = profile.fg.min(og);
    let interval = profile.interval_hours.max(1);
    let total_hours = profile.days.saturating_mul(24);

    let mut readings = Vec::new();
    let mut previous = og;
    let mut hour = 0u32;
    loop {
        let t = f64::from(hour);
        let raw_gravity = og - (og - fg) * attenuation(t);
        let jitter = if hour == 0 {
            0.0
        } else {
            rng.gen_range(-GRAVITY_JITTER..=GRAVITY_JITTER)
        };
        let gravity = round_to(raw_gravity + jitter, 4).min(previous).max(fg);
        previous = gravity;

        let temperature = profile.temperature
            + EXOTHERM * activity(t)
            + rng.gen_range(-TEMPERATURE_JITTER..=TEMPERATURE_JITTER);

        readings.push(Reading {
            hour,
            timestamp: start + Duration::hours(i64::from(hour)),
            gravity,
            temperature: round_to(temperature, 1),
            abv: round_to((og - gravity) * 131.25, 2),
        });

        match hour.checked_add(interval) {
            Some(next) if next <= total_hours => hour = next,
            _ => break,
        }
    }

    readings
}

fn logistic(t: f64) -> f64 {
    1.0 / (1.0 + (-ACTIVITY_RATE * (t - LAG_HOURS - PEAK_OFFSET_HOURS)).exp())
}

/// Fraction of the OG-FG drop completed at hour `t`, 0 at pitching
fn attenuation(t: f64) -> f64 {
    let base = logistic(0.0);
    ((logistic(t) - base) / (1.0 - base)).clamp(0.0, 1.0)
}

/// Relative activity at hour `t`, 1 at the steepest point of the drop
fn activity(t: f64) -> f64 {
    let l = logistic(t);
    4.0 * l * (1.0 - l)
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
