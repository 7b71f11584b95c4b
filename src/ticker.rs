/*
 *  ticker.rs
 *
 *  QuadClock - four faces, one heartbeat
 *  (c) 2020-26 Stuart Hunter
 *
 *  Fixed-interval tick sources
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
use std::time::Duration;

use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};

/// Default animation period
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Something that paces the animation
///
/// `next_tick` resolves once per period. Implementations decide what a
/// period means: real time, tokio's paused clock, or nothing at all.
#[allow(async_fn_in_trait)]
pub trait TickSource {
    /// Wait for the next tick boundary
    async fn next_tick(&mut self);

    /// Nominal time between ticks
    fn period(&self) -> Duration;
}

/// Real-time ticker on a tokio interval
///
/// Deadlines are fixed multiples of the period from the start while frames
/// finish within a period. Once a whole tick is missed, the late tick fires
/// at once and the schedule re-bases one period after it, with no burst of
/// catch-up ticks.
pub struct IntervalTicker {
    interval: Interval,
    period: Duration,
}

impl IntervalTicker {
    /// First tick fires one `period` from now
    pub fn new(period: Duration) -> Self {
        let period = period.max(Duration::from_millis(1));
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { interval, period }
    }
}

impl TickSource for IntervalTicker {
    async fn next_tick(&mut self) {
        self.interval.tick().await;
    }

    fn period(&self) -> Duration {
        self.period
    }
}

/// Ticker that never waits; counts how often it was asked
///
/// Drives the animation as fast as the caller loops, for tests and for
/// rendering a sequence of frames offline.
#[derive(Debug, Default)]
pub struct ManualTicker {
    ticks: u64,
}

impl ManualTicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ticks handed out so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl TickSource for ManualTicker {
    async fn next_tick(&mut self) {
        self.ticks += 1;
    }

    fn period(&self) -> Duration {
        Duration::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn interval_fires_once_per_period() {
        let start = Instant::now();
        let mut ticker = IntervalTicker::new(TICK_PERIOD);

        ticker.next_tick().await;
        let first = start.elapsed();
        assert!(first >= Duration::from_secs(1) && first < Duration::from_millis(1005), "{first:?}");

        ticker.next_tick().await;
        ticker.next_tick().await;
        let third = start.elapsed();
        assert!(third >= Duration::from_secs(3) && third < Duration::from_millis(3005), "{third:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn slow_frame_does_not_shift_schedule() {
        let start = Instant::now();
        let mut ticker = IntervalTicker::new(TICK_PERIOD);

        ticker.next_tick().await;
        tokio::time::sleep(Duration::from_millis(400)).await;
        ticker.next_tick().await;
        let second = start.elapsed();
        assert!(second >= Duration::from_secs(2) && second < Duration::from_millis(2005), "{second:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn missed_tick_rebases_schedule() {
        let start = Instant::now();
        let mut ticker = IntervalTicker::new(TICK_PERIOD);

        ticker.next_tick().await;
        tokio::time::sleep(Duration::from_millis(2500)).await;

        // the 2s deadline is long gone, fires immediately
        ticker.next_tick().await;
        let late = start.elapsed();
        assert!(late >= Duration::from_millis(3500) && late < Duration::from_millis(3505), "{late:?}");

        // next one is a full period later, not back on the 4s grid
        ticker.next_tick().await;
        let rebased = start.elapsed();
        assert!(
            rebased >= Duration::from_millis(4500) && rebased < Duration::from_millis(4505),
            "{rebased:?}"
        );
    }

    #[tokio::test]
    async fn manual_ticker_counts() {
        let mut ticker = ManualTicker::new();
        for _ in 0..5 {
            ticker.next_tick().await;
        }
        assert_eq!(ticker.ticks(), 5);
        assert_eq!(ticker.period(), Duration::ZERO);
    }

    #[test]
    fn zero_period_is_clamped() {
        let rt = tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap();
        rt.block_on(async {
            let ticker = IntervalTicker::new(Duration::ZERO);
            assert_eq!(ticker.period(), Duration::from_millis(1));
        });
    }
}
