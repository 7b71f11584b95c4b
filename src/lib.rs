/*
 *  lib.rs
 *
 *  QuadClock - four faces, one heartbeat
 *  (c) 2020-26 Stuart Hunter
 *
 *  Library root: geometry, clock state, display surface and animation
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

pub mod animator;
pub mod clock;
pub mod config;
pub mod display;
pub mod func_timer;
pub mod geometry;
pub mod hands;
pub mod ticker;
pub mod vframebuf;

pub use animator::{AnimationError, ClockAnimator, SURFACE_SLOTS, SlotMap};
pub use clock::{ClockState, HandKind};
pub use geometry::{Rotate, rotate};
pub use hands::{HandSet, HandSpec, hand_vertices, make_hand};
pub use ticker::{IntervalTicker, ManualTicker, TickSource};
