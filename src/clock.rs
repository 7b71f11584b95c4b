/*
 *  clock.rs
 *
 *  QuadClock - four faces, one heartbeat
 *  (c) 2020-26 Stuart Hunter
 *
 *  Dial positions for the three hands
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */

use serde::{Deserialize, Serialize};

/// Units on every dial; all three hands sweep a 60-unit face
pub const DIAL_UNITS: f64 = 60.0;

/// Per-tick advance of each hand, in dial units
pub const SECOND_STEP: f64 = 1.0;
pub const MINUTE_STEP: f64 = 1.0 / 60.0;
pub const HOUR_STEP: f64 = 1.0 / 360.0;

/// Which hand of a face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandKind {
    Hour,
    Minute,
    Second,
}

impl HandKind {
    /// Slot order: hour hands first, then minute, then second
    pub const ALL: [HandKind; 3] = [HandKind::Hour, HandKind::Minute, HandKind::Second];

    pub fn name(self) -> &'static str {
        match self {
            HandKind::Hour => "hour",
            HandKind::Minute => "minute",
            HandKind::Second => "second",
        }
    }
}

impl std::fmt::Display for HandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Current dial position of each hand
///
/// The hour hand lives on the same 60-unit dial as the others and moves
/// 1/360 of a unit per tick, so it laps the face every 21600 ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockState {
    second: f64,
    minute: f64,
    hour: f64,
}

impl Default for ClockState {
    /// 6:15:00 with the hour hand at half the dial
    fn default() -> Self {
        Self { second: 0.0, minute: 15.0, hour: 30.0 }
    }
}

/// Reduce into [0, 60)
///
/// `rem_euclid` rounds tiny negative values up to the divisor itself.
fn wrap_dial(v: f64) -> f64 {
    let r = v.rem_euclid(DIAL_UNITS);
    if r >= DIAL_UNITS { 0.0 } else { r }
}

impl ClockState {
    /// Start from explicit dial positions, each reduced into [0, 60)
    pub fn new(second: f64, minute: f64, hour: f64) -> Self {
        Self {
            second: wrap_dial(second),
            minute: wrap_dial(minute),
            hour: wrap_dial(hour),
        }
    }

    /// Place the hands where a wall clock reading `hh:mm:ss` puts them
    ///
    /// Hours map onto the dial at 5 units per hour of a 12-hour face.
    pub fn from_wall_clock(hh: u32, mm: u32, ss: u32) -> Self {
        let second = f64::from(ss % 60);
        let minute = f64::from(mm % 60) + second / 60.0;
        let hour = f64::from(hh % 12) * 5.0 + minute / 12.0;
        Self::new(second, minute, hour)
    }

    pub fn second(&self) -> f64 {
        self.second
    }

    pub fn minute(&self) -> f64 {
        self.minute
    }

    pub fn hour(&self) -> f64 {
        self.hour
    }

    /// Dial position driving the given hand
    pub fn value(&self, kind: HandKind) -> f64 {
        match kind {
            HandKind::Hour => self.hour,
            HandKind::Minute => self.minute,
            HandKind::Second => self.second,
        }
    }

    /// Move every hand forward by one tick
    pub fn advance(&mut self) {
        self.second = (self.second + SECOND_STEP) % DIAL_UNITS;
        self.minute = (self.minute + MINUTE_STEP) % DIAL_UNITS;
        self.hour = (self.hour + HOUR_STEP) % DIAL_UNITS;
    }
}
