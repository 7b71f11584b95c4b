/*
 *  animator.rs
 *
 *  QuadClock - four faces, one heartbeat
 *  (c) 2020-26 Stuart Hunter
 *
 *  Four-face clock animation: initial scene, per-tick redraw, run loop
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

use std::collections::BTreeMap;

use log::{debug, info};
use thiserror::Error;

use crate::clock::{ClockState, HandKind};
use crate::display::color::HexColor;
use crate::display::error::SurfaceError;
use crate::display::layout::{FACE_COUNT, FaceId, FaceLayout};
use crate::display::shapes::filled_circle;
use crate::display::traits::Surface;
use crate::func_timer::FrameTimer;
use crate::hands::HandSet;
use crate::ticker::TickSource;

/// Slots needed for four faces with three hands each
pub const SURFACE_SLOTS: usize = FACE_COUNT * (1 + HandKind::ALL.len());

#[derive(Debug, Error)]
pub enum AnimationError {
    /// The surface rejected an append, a replace or a present; fatal
    #[error("surface update failed: {0}")]
    Surface(#[from] SurfaceError),
}

/// Where each face background and hand lives on the surface
///
/// Filled in from the indices `append` hands back while the initial scene is
/// built, then only read. Hands are recorded in the order they are appended,
/// which is also the order they are replaced on every tick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotMap {
    faces: BTreeMap<FaceId, usize>,
    hands: BTreeMap<(FaceId, HandKind), usize>,
    order: Vec<(FaceId, HandKind, usize)>,
}

impl SlotMap {
    fn record_face(&mut self, face: FaceId, slot: usize) {
        self.faces.insert(face, slot);
    }

    fn record_hand(&mut self, face: FaceId, hand: HandKind, slot: usize) {
        self.hands.insert((face, hand), slot);
        self.order.push((face, hand, slot));
    }

    /// Slot of a face background
    pub fn face(&self, face: FaceId) -> Option<usize> {
        self.faces.get(&face).copied()
    }

    /// Slot of one hand on one face
    pub fn hand(&self, face: FaceId, hand: HandKind) -> Option<usize> {
        self.hands.get(&(face, hand)).copied()
    }

    /// Hand slots in update order: every hour hand, then minute, then second
    pub fn hand_slots(&self) -> &[(FaceId, HandKind, usize)] {
        &self.order
    }
}

/// Owns the clock state and keeps the surface in step with it
pub struct ClockAnimator<S: Surface> {
    surface: S,
    state: ClockState,
    layout: FaceLayout,
    hands: HandSet,
    slots: SlotMap,
    ticks: u64,
}

impl<S: Surface> ClockAnimator<S> {
    /// Build the initial scene on `surface` and show it
    ///
    /// Appends four face backgrounds, then the hour, minute and second hands
    /// of every face, in that order.
    pub fn new(
        mut surface: S,
        layout: FaceLayout,
        hands: HandSet,
        face_color: HexColor,
        state: ClockState,
    ) -> Result<Self, AnimationError> {
        let mut slots = SlotMap::default();

        for (face, origin) in layout.faces() {
            let face_shape = filled_circle(origin.x, origin.y, layout.radius, face_color, face_color);
            let slot = surface.append(face_shape)?;
            debug!("{} at ({}, {}) r={} in slot {}", face, origin.x, origin.y, layout.radius, slot);
            slots.record_face(face, slot);
        }

        for kind in HandKind::ALL {
            let spec = hands.get(kind);
            for (face, origin) in layout.faces() {
                let slot = surface.append(spec.shape(origin, state.value(kind)))?;
                slots.record_hand(face, kind, slot);
            }
        }

        surface.present()?;
        info!(
            "Clock faces ready: {} slots, hands at {:.3}/{:.3}/{:.3} (h/m/s)",
            surface.len(),
            state.hour(),
            state.minute(),
            state.second()
        );

        Ok(Self { surface, state, layout, hands, slots, ticks: 0 })
    }

    /// Advance one tick and redraw every hand
    pub fn tick(&mut self) -> Result<(), AnimationError> {
        let _timer = FrameTimer::new("clock tick");

        self.state.advance();
        for &(face, kind, slot) in self.slots.hand_slots() {
            let spec = self.hands.get(kind);
            let shape = spec.shape(self.layout.origin(face), self.state.value(kind));
            self.surface.replace(slot, shape)?;
        }
        self.surface.present()?;

        self.ticks += 1;
        debug!(
            "tick {}: h={:.4} m={:.4} s={:.0}",
            self.ticks,
            self.state.hour(),
            self.state.minute(),
            self.state.second()
        );
        Ok(())
    }

    /// Tick on every beat of `ticker`
    ///
    /// With `limit` unset this only returns on a surface failure. With a
    /// limit it returns the number of ticks run once the limit is reached.
    pub async fn run<T: TickSource>(
        &mut self,
        ticker: &mut T,
        limit: Option<u64>,
    ) -> Result<u64, AnimationError> {
        info!(
            "Animating every {:?}{}",
            ticker.period(),
            limit.map(|n| format!(" for {} ticks", n)).unwrap_or_default()
        );

        let mut done = 0u64;
        loop {
            if limit.is_some_and(|n| done >= n) {
                return Ok(done);
            }
            ticker.next_tick().await;
            self.tick()?;
            done += 1;
        }
    }

    pub fn state(&self) -> &ClockState {
        &self.state
    }

    pub fn layout(&self) -> &FaceLayout {
        &self.layout
    }

    pub fn slots(&self) -> &SlotMap {
        &self.slots
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Ticks completed since construction
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}
