//! Rest duration parsing and recovery math.
//!
//! Rest restores 10% of max HP and 15% of max MP per hour. Durations are kept
//! in whole minutes and the recovery is computed in integer arithmetic, so
//! `1h30m` restores exactly one and a half hours' worth.

use core::fmt;

/// Length of a rest, in whole minutes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RestDuration {
    minutes: u32,
}

impl RestDuration {
    pub const fn from_minutes(minutes: u32) -> Self {
        Self { minutes }
    }

    pub const fn from_hours(hours: u32) -> Self {
        Self {
            minutes: hours * 60,
        }
    }

    /// Parse a `<int>h<int>m` duration such as `2h`, `45m` or `1h30m`.
    ///
    /// Either component may be omitted but at least one must be present.
    /// Anything unparsable, including a zero total, falls back to
    /// `default_minutes`: a sloppy `/rest` still rests.
    pub fn parse_or(input: &str, default_minutes: u32) -> Self {
        Self::parse(input).unwrap_or(Self::from_minutes(default_minutes))
    }

    /// Strict form of [`parse_or`](Self::parse_or).
    pub fn parse(input: &str) -> Option<Self> {
        let mut hours: Option<u32> = None;
        let mut minutes: Option<u32> = None;
        let mut digits: Option<u32> = None;

        for ch in input.trim().chars() {
            match ch.to_ascii_lowercase() {
                '0'..='9' => {
                    let digit = ch.to_digit(10)?;
                    digits = Some(digits.unwrap_or(0).checked_mul(10)?.checked_add(digit)?);
                }
                'h' => {
                    if let Some(value) = digits.take() {
                        hours.get_or_insert(value);
                    }
                }
                'm' => {
                    if let Some(value) = digits.take() {
                        minutes.get_or_insert(value);
                    }
                }
                _ => digits = None,
            }
        }

        if hours.is_none() && minutes.is_none() {
            return None;
        }
        let total = hours
            .unwrap_or(0)
            .checked_mul(60)?
            .checked_add(minutes.unwrap_or(0))?;
        (total > 0).then_some(Self::from_minutes(total))
    }

    pub const fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn hours(&self) -> f64 {
        f64::from(self.minutes) / 60.0
    }

    pub fn to_chrono(&self) -> chrono::Duration {
        chrono::Duration::minutes(i64::from(self.minutes))
    }
}

impl fmt::Display for RestDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.minutes / 60, self.minutes % 60) {
            (0, m) => write!(f, "{m}m"),
            (h, 0) => write!(f, "{h}h"),
            (h, m) => write!(f, "{h}h{m}m"),
        }
    }
}

/// HP and MP after a rest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RestGain {
    pub hp: i32,
    pub mp: i32,
}

/// New HP/MP after resting for `duration`.
///
/// ```text
/// hp = min(max_hp, current_hp + floor(max_hp * 0.10 * hours))
/// mp = min(max_mp, current_mp + floor(max_mp * 0.15 * hours))
/// ```
pub fn compute_rest_gain(
    current_hp: i32,
    max_hp: i32,
    current_mp: i32,
    max_mp: i32,
    duration: RestDuration,
) -> RestGain {
    let minutes = i64::from(duration.minutes());
    // 10%/h = 1/600 per minute, 15%/h = 1/400 per minute
    let hp_gain = i64::from(max_hp.max(0)) * minutes / 600;
    let mp_gain = i64::from(max_mp.max(0)) * minutes / 400;

    RestGain {
        hp: (i64::from(current_hp) + hp_gain).min(i64::from(max_hp)) as i32,
        mp: (i64::from(current_mp) + mp_gain).min(i64::from(max_mp)) as i32,
    }
}
