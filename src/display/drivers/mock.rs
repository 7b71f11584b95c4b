/*
 *  display/drivers/mock.rs
 *
 *  QuadClock - four faces, one heartbeat
 *  (c) 2020-26 Stuart Hunter
 *
 *  Mock display driver for testing without hardware
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

use embedded_graphics::prelude::*;
use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::geometry::Size;

use crate::display::error::DisplayError;
use crate::display::traits::{DisplayDriver, DisplayCapabilities};
use crate::vframebuf::VarFrameBuf;

use std::sync::{Arc, Mutex};

/// Mock display driver for testing
///
/// Records every lifecycle call in a shared state block so tests can hold
/// on to it after the driver has been moved into a surface.
#[derive(Debug, Clone)]
pub struct MockDriver {
    /// Framebuffer for drawing operations
    framebuffer: VarFrameBuf<Rgb888>,

    /// Display capabilities
    capabilities: DisplayCapabilities,

    /// Shared state for testing
    state: Arc<Mutex<MockDriverState>>,
}

/// Internal state for the mock driver (shared for inspection in tests)
#[derive(Debug, Default)]
pub struct MockDriverState {
    /// Number of times init() was called
    pub init_count: usize,

    /// Number of times flush() was called
    pub flush_count: usize,

    /// Number of times clear() was called
    pub clear_count: usize,

    /// Whether the driver is initialized
    pub is_initialized: bool,

    /// Simulate failures (for error testing)
    pub simulate_flush_failure: bool,
    pub simulate_init_failure: bool,
}

impl MockDriver {
    /// Create a mock driver with specific dimensions
    pub fn new_with_size(width: u32, height: u32) -> Result<Self, DisplayError> {
        if width == 0 || height == 0 {
            return Err(DisplayError::InitializationFailed(format!(
                "invalid mock size {}x{}", width, height
            )));
        }

        Ok(Self {
            framebuffer: VarFrameBuf::new(width, height, Rgb888::BLACK),
            capabilities: DisplayCapabilities { width, height, name: "mock" },
            state: Arc::new(Mutex::new(MockDriverState::default())),
        })
    }

    /// Get pixel at position for testing
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgb888> {
        self.framebuffer.pixel(Point::new(x as i32, y as i32))
    }

    /// Get reference to state for inspection in tests
    pub fn state(&self) -> Arc<Mutex<MockDriverState>> {
        Arc::clone(&self.state)
    }

    /// Count pixels of a given color
    pub fn count_pixels(&self, color: Rgb888) -> usize {
        self.framebuffer.count(color)
    }
}

impl DisplayDriver for MockDriver {
    fn capabilities(&self) -> &DisplayCapabilities {
        &self.capabilities
    }

    fn init(&mut self) -> Result<(), DisplayError> {
        let mut state = self.state.lock().unwrap();

        if state.simulate_init_failure {
            return Err(DisplayError::InitializationFailed("Simulated init failure".to_string()));
        }

        state.init_count += 1;
        state.is_initialized = true;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        let mut state = self.state.lock().unwrap();

        if state.simulate_flush_failure {
            return Err(DisplayError::FlushFailed("Simulated flush failure".to_string()));
        }

        state.flush_count += 1;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        {
            let mut state = self.state.lock().unwrap();
            state.clear_count += 1;
        } // Release lock before calling flush

        self.framebuffer.clear_color(Rgb888::BLACK);
        self.flush()
    }
}

impl DrawTarget for MockDriver {
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

impl OriginDimensions for MockDriver {
    fn size(&self) -> Size {
        Size::new(self.capabilities.width, self.capabilities.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::primitives::{PrimitiveStyle, Line};

    #[test]
    fn test_mock_driver_creation() {
        let driver = MockDriver::new_with_size(240, 240).unwrap();
        assert_eq!(driver.dimensions(), (240, 240));
        assert_eq!(driver.count_pixels(Rgb888::BLACK), 240 * 240);
        assert!(MockDriver::new_with_size(0, 10).is_err());
    }

    #[test]
    fn test_mock_driver_init() {
        let mut driver = MockDriver::new_with_size(16, 16).unwrap();

        let state = driver.state();
        assert_eq!(state.lock().unwrap().init_count, 0);
        assert!(!state.lock().unwrap().is_initialized);

        driver.init().unwrap();

        assert_eq!(state.lock().unwrap().init_count, 1);
        assert!(state.lock().unwrap().is_initialized);
    }

    #[test]
    fn test_mock_driver_drawing_and_clear() {
        let mut driver = MockDriver::new_with_size(16, 16).unwrap();

        Line::new(Point::new(0, 0), Point::new(10, 10))
            .into_styled(PrimitiveStyle::with_stroke(Rgb888::WHITE, 1))
            .draw(&mut driver)
            .unwrap();
        assert_eq!(driver.get_pixel(0, 0), Some(Rgb888::WHITE));

        // DisplayDriver::clear, not DrawTarget::clear
        DisplayDriver::clear(&mut driver).unwrap();
        assert_eq!(driver.count_pixels(Rgb888::WHITE), 0);
        assert_eq!(driver.state().lock().unwrap().clear_count, 1);
        assert_eq!(driver.state().lock().unwrap().flush_count, 1);
    }

    #[test]
    fn test_mock_driver_simulated_failure() {
        let mut driver = MockDriver::new_with_size(16, 16).unwrap();

        driver.state().lock().unwrap().simulate_flush_failure = true;
        assert!(driver.flush().is_err());

        driver.state().lock().unwrap().simulate_flush_failure = false;
        assert!(driver.flush().is_ok());

        driver.state().lock().unwrap().simulate_init_failure = true;
        assert!(driver.init().is_err());
    }
}
