//! # Hourly Profile Synthesis
//!
//! Builds a 24-hour office-building consumption curve from a time-of-day
//! base load, a sinusoidal work-hours wave, uniform noise and rare spikes.
//!
//! Every hour consumes exactly two unit draws (noise, spike check), plus a
//! third when the spike fires. Changing this order changes every later hour
//! for the same seed.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tracing::{debug, trace};
use validator::Validate;

use super::rng::UnitDraw;
use crate::domain::{HourlyProfile, HOURLY_FLOOR_KWH, HOURS_PER_DAY};

/// Time-of-day bracket used to pick the base load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum HourBracket {
    /// 23:00-06:00
    Night,
    /// 06:00-08:00
    MorningRamp,
    /// 08:00-19:00
    WorkHours,
    /// 19:00-23:00
    Evening,
}

impl HourBracket {
    pub fn for_hour(hour: usize) -> Self {
        match hour {
            0..=5 | 23.. => HourBracket::Night,
            6..=7 => HourBracket::MorningRamp,
            8..=18 => HourBracket::WorkHours,
            _ => HourBracket::Evening,
        }
    }
}

/// Shape parameters of the synthetic curve (kWh per hour)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ProfileParams {
    #[validate(range(min = 0.0))]
    pub night_base_kwh: f64,
    /// Added on top of the night base during the morning ramp
    #[validate(range(min = 0.0))]
    pub morning_ramp_extra_kwh: f64,
    #[validate(range(min = 0.0))]
    pub work_base_kwh: f64,
    #[validate(range(min = 0.0))]
    pub evening_base_kwh: f64,
    /// Amplitude of the half-sine over work hours
    #[validate(range(min = 0.0))]
    pub work_wave_amplitude_kwh: f64,
    /// Noise spans +/- this value
    #[validate(range(min = 0.0))]
    pub noise_amplitude_kwh: f64,
    /// Probability that an hour carries a spike
    #[validate(range(min = 0.0, max = 1.0))]
    pub spike_probability: f64,
    #[validate(range(min = 0.0))]
    pub spike_min_kwh: f64,
    #[validate(range(min = 0.0))]
    pub spike_span_kwh: f64,
}

impl Default for ProfileParams {
    fn default() -> Self {
        Self {
            night_base_kwh: 6.5,
            morning_ramp_extra_kwh: 3.0,
            work_base_kwh: 16.0,
            evening_base_kwh: 10.0,
            work_wave_amplitude_kwh: 7.0,
            noise_amplitude_kwh: 1.0,
            spike_probability: 0.08,
            spike_min_kwh: 5.0,
            spike_span_kwh: 10.0,
        }
    }
}

impl ProfileParams {
    /// Base load for a given hour
    pub fn base_kwh(&self, hour: usize) -> f64 {
        match HourBracket::for_hour(hour) {
            HourBracket::Night => self.night_base_kwh,
            HourBracket::MorningRamp => self.night_base_kwh + self.morning_ramp_extra_kwh,
            HourBracket::WorkHours => self.work_base_kwh,
            HourBracket::Evening => self.evening_base_kwh,
        }
    }

    /// Deterministic work-hours wave, zero outside 08:00-18:00
    pub fn wave_kwh(&self, hour: usize) -> f64 {
        if HourBracket::for_hour(hour) != HourBracket::WorkHours {
            return 0.0;
        }
        let phase = (hour as f64 - 8.0) / 10.0;
        self.work_wave_amplitude_kwh * (phase * PI).sin()
    }
}

/// Components of one synthesized hour, kept for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HourSample {
    pub hour: usize,
    pub base_kwh: f64,
    pub wave_kwh: f64,
    pub noise_kwh: f64,
    pub spike_kwh: f64,
    /// Final value after [`HOURLY_FLOOR_KWH`]
    pub kwh: f64,
}

impl HourSample {
    pub fn is_floored(&self) -> bool {
        self.base_kwh + self.wave_kwh + self.noise_kwh + self.spike_kwh < self.kwh
    }
}

/// Turns a stream of unit draws into a 24-hour curve
#[derive(Debug, Clone, Default)]
pub struct HourlyProfileSynthesizer {
    params: ProfileParams,
}

impl HourlyProfileSynthesizer {
    pub fn new(params: ProfileParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &ProfileParams {
        &self.params
    }

    /// Synthesize a full day. `draws` should be freshly seeded.
    pub fn synthesize<D: UnitDraw + ?Sized>(&self, draws: &mut D) -> HourlyProfile {
        let mut hourly = [0.0; HOURS_PER_DAY];
        let mut spikes = 0usize;

        for (hour, slot) in hourly.iter_mut().enumerate() {
            let sample = self.sample_hour(hour, draws);
            if sample.spike_kwh > 0.0 {
                spikes += 1;
            }
            *slot = sample.kwh;
        }

        debug!(spikes, "synthesized hourly profile");
        HourlyProfile::from_array(hourly)
    }

    /// Synthesize one hour, consuming two or three draws
    pub fn sample_hour<D: UnitDraw + ?Sized>(&self, hour: usize, draws: &mut D) -> HourSample {
        let p = &self.params;
        let base_kwh = p.base_kwh(hour);
        let wave_kwh = p.wave_kwh(hour);

        let noise_kwh = (draws.next_unit_f64() - 0.5) * 2.0 * p.noise_amplitude_kwh;

        let spike_kwh = if draws.next_unit_f64() < p.spike_probability {
            p.spike_min_kwh + draws.next_unit_f64() * p.spike_span_kwh
        } else {
            0.0
        };

        let kwh = (base_kwh + wave_kwh + noise_kwh + spike_kwh).max(HOURLY_FLOOR_KWH);
        trace!(hour, bracket = %HourBracket::for_hour(hour), kwh, "sampled hour");

        HourSample {
            hour,
            base_kwh,
            wave_kwh,
            noise_kwh,
            spike_kwh,
            kwh,
        }
    }
}
