/*
 *  main.rs
 *
 *  QuadClock - four faces, one heartbeat
 *  (c) 2020-26 Stuart Hunter
 *
 *  Binary entry point: configure, build the faces, tick forever
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

use anyhow::{Context, Result};
use chrono::{Local, Timelike};
use env_logger::Env;
use log::{error, info};

use quadclock::config;
use quadclock::display::{DisplayDriver, DisplaySurface, FaceLayout, VirtualPanel};
use quadclock::{ClockAnimator, ClockState, IntervalTicker, SURFACE_SLOTS};

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let (cfg, cli) = config::load().context("loading configuration")?;

    if cli.dump_config {
        // Pretty YAML of effective config (nice for debugging)
        print!("{}", serde_yaml::to_string(&cfg)?);
        return Ok(());
    }

    env_logger::Builder::from_env(Env::default().default_filter_or(cfg.log_level()))
        .format_timestamp_secs()
        .init();

    info!("{} - four faces, one heartbeat", env!("CARGO_PKG_NAME"));
    info!("v.{} built {}", env!("CARGO_PKG_VERSION"), BUILD_DATE);

    let mut panel = VirtualPanel::new(cfg.width(), cfg.height()).context("creating panel")?;
    if let Some(path) = cfg.snapshot() {
        panel = panel.with_snapshot(path);
    }
    panel.init().context("initializing panel")?;

    let layout = FaceLayout::for_display(panel.capabilities());
    info!(
        "{}x{} panel, face radius {}, origins {:?}",
        layout.width, layout.height, layout.radius, layout.origins
    );

    let state = if cfg.wall_clock() {
        let now = Local::now();
        info!("Seeding hands from local time {}", now.format("%H:%M:%S"));
        ClockState::from_wall_clock(now.hour(), now.minute(), now.second())
    } else {
        cfg.start_state()
    };

    let surface = DisplaySurface::new(panel, SURFACE_SLOTS);
    let mut animator = ClockAnimator::new(surface, layout, cfg.hand_set(), cfg.face_color(), state)
        .context("building clock faces")?;

    let mut ticker = IntervalTicker::new(cfg.tick_period());
    match animator.run(&mut ticker, cfg.ticks()).await {
        Ok(ticks) => {
            info!("Stopped after {} ticks", ticks);
            Ok(())
        }
        Err(e) => {
            error!("Animation halted: {}", e);
            Err(anyhow::Error::new(e).context("clock animation"))
        }
    }
}
