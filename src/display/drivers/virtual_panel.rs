/*
 *  display/drivers/virtual_panel.rs
 *
 *  QuadClock - four faces, one heartbeat
 *  (c) 2020-26 Stuart Hunter
 *
 *  In-memory RGB panel with optional image snapshots
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

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;

use embedded_graphics::geometry::Size;
use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::{debug, info};

use crate::display::error::DisplayError;
use crate::display::traits::{DisplayCapabilities, DisplayDriver};
use crate::vframebuf::VarFrameBuf;

/// Panel that lives entirely in memory
///
/// Stands in for the physical 240x240 TFT. When a snapshot path is set each
/// flush rewrites that file as a PPM image, replaced atomically so a viewer
/// never sees a half-written frame.
#[derive(Debug)]
pub struct VirtualPanel {
    framebuffer: VarFrameBuf<Rgb888>,
    capabilities: DisplayCapabilities,
    snapshot: Option<PathBuf>,
    initialized: bool,
    flushes: u64,
}

impl VirtualPanel {
    pub fn new(width: u32, height: u32) -> Result<Self, DisplayError> {
        if width == 0 || height == 0 {
            return Err(DisplayError::InitializationFailed(format!(
                "panel size must be non-zero, got {}x{}",
                width, height
            )));
        }
        Ok(Self {
            framebuffer: VarFrameBuf::new(width, height, Rgb888::BLACK),
            capabilities: DisplayCapabilities { width, height, name: "virtual" },
            snapshot: None,
            initialized: false,
            flushes: 0,
        })
    }

    /// Write a PPM image of every flushed frame to `path`
    pub fn with_snapshot(mut self, path: impl Into<PathBuf>) -> Self {
        self.snapshot = Some(path.into());
        self
    }

    pub fn framebuffer(&self) -> &VarFrameBuf<Rgb888> {
        &self.framebuffer
    }

    /// Number of successful flushes
    pub fn flushes(&self) -> u64 {
        self.flushes
    }

    fn write_snapshot(&self, path: &PathBuf) -> Result<(), DisplayError> {
        let tmp = path.with_extension("ppm.tmp");
        {
            let mut out = BufWriter::new(File::create(&tmp)?);
            self.framebuffer.write_ppm(&mut out)?;
            out.into_inner().map_err(|e| e.into_error())?.sync_all()?;
        }
        fs::rename(&tmp, path)?;
        Ok(())
    }
}

impl DisplayDriver for VirtualPanel {
    fn capabilities(&self) -> &DisplayCapabilities {
        &self.capabilities
    }

    fn init(&mut self) -> Result<(), DisplayError> {
        self.framebuffer.clear_color(Rgb888::BLACK);
        self.initialized = true;
        info!(
            "Virtual panel {}x{} ready{}",
            self.capabilities.width,
            self.capabilities.height,
            self.snapshot
                .as_ref()
                .map(|p| format!(", snapshots to {}", p.display()))
                .unwrap_or_default()
        );
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        if !self.initialized {
            return Err(DisplayError::FlushFailed("panel not initialized".to_string()));
        }
        if let Some(path) = self.snapshot.as_ref() {
            self.write_snapshot(path)?;
            debug!("snapshot written to {}", path.display());
        }
        self.flushes += 1;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        self.framebuffer.clear_color(Rgb888::BLACK);
        self.flush()
    }
}

impl DrawTarget for VirtualPanel {
    type Color = Rgb888;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.framebuffer.draw_iter(pixels)
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.framebuffer.clear(color)
    }

    fn fill_contiguous<I>(&mut self, area: &Rectangle, colors: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Self::Color>,
    {
        self.framebuffer.fill_contiguous(area, colors)
    }
}

impl OriginDimensions for VirtualPanel {
    fn size(&self) -> Size {
        Size::new(self.capabilities.width, self.capabilities.height)
    }
}
