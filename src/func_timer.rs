/*
 *  func_timer.rs
 *
 *  QuadClock - four faces, one heartbeat
 *  (c) 2020-26 Stuart Hunter
 *
 *  Scope timing for frame work
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
use std::time::Instant;

use log::trace;

pub struct FrameTimer {
    name: &'static str,
    start: Instant,
}

impl FrameTimer {
    pub fn new(name: &'static str) -> Self {
        FrameTimer {
            name,
            start: Instant::now(),
        }
    }
}

// Logs when the guard goes out of scope, so early returns through `?` are timed too.
impl Drop for FrameTimer {
    fn drop(&mut self) {
        trace!("{} took {:?}", self.name, self.start.elapsed());
    }
}
