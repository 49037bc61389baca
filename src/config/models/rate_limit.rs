//! Rate limiting configuration

use super::*;
use crate::utils::error::CrptError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;

/// Rate limiting configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RateLimitConfig {
    /// Maximum submissions admitted per window
    #[serde(default = "default_capacity")]
    pub capacity: u32,
    /// Unit the window length is expressed in
    #[serde(default)]
    pub time_unit: TimeUnit,
    /// Window length, in `time_unit`s
    #[serde(default = "default_period_count")]
    pub period_count: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            time_unit: TimeUnit::default(),
            period_count: default_period_count(),
        }
    }
}

impl RateLimitConfig {
    /// `capacity` submissions per one `time_unit`
    pub fn per(time_unit: TimeUnit, capacity: u32) -> Self {
        Self {
            capacity,
            time_unit,
            period_count: 1,
        }
    }

    /// Window length
    pub fn period(&self) -> Duration {
        self.time_unit.to_duration(self.period_count)
    }

    /// Merge rate limit configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.capacity != default_capacity() {
            self.capacity = other.capacity;
        }
        if other.period_count != default_period_count() {
            self.period_count = other.period_count;
        }
        if other.time_unit != TimeUnit::default() {
            self.time_unit = other.time_unit;
        }
        self
    }
}

/// Unit of the rate limit window
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TimeUnit {
    #[serde(alias = "milliseconds")]
    Millis,
    #[default]
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl TimeUnit {
    /// Length of `count` units
    pub fn to_duration(self, count: u32) -> Duration {
        let count = u64::from(count);
        match self {
            TimeUnit::Millis => Duration::from_millis(count),
            TimeUnit::Seconds => Duration::from_secs(count),
            TimeUnit::Minutes => Duration::from_secs(count * 60),
            TimeUnit::Hours => Duration::from_secs(count * 60 * 60),
            TimeUnit::Days => Duration::from_secs(count * 24 * 60 * 60),
        }
    }
}

impl FromStr for TimeUnit {
    type Err = CrptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ms" | "millis" | "milliseconds" => Ok(TimeUnit::Millis),
            "s" | "sec" | "secs" | "second" | "seconds" => Ok(TimeUnit::Seconds),
            "m" | "min" | "minute" | "minutes" => Ok(TimeUnit::Minutes),
            "h" | "hour" | "hours" => Ok(TimeUnit::Hours),
            "d" | "day" | "days" => Ok(TimeUnit::Days),
            _ => Err(CrptError::Config(format!("Invalid time unit: {}", s))),
        }
    }
}
