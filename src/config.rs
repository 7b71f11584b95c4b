/*
 *  config.rs
 *
 *  QuadClock - four faces, one heartbeat
 *  (c) 2020-26 Stuart Hunter
 *
 *  Layered configuration: defaults, YAML, command line
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

use clap::{ArgAction, Parser, ValueHint};
use dirs_next::home_dir;
use serde::{Deserialize, Serialize};
use std::{fs, path::{Path, PathBuf}, time::Duration};
use thiserror::Error;

use crate::clock::{ClockState, DIAL_UNITS, HandKind};
use crate::display::color::HexColor;
use crate::hands::{HandSet, HandSpec};

pub const DEFAULT_WIDTH: u32 = 240;
pub const DEFAULT_HEIGHT: u32 = 240;
pub const DEFAULT_TICK_MS: u64 = 1000;
/// Largest accepted panel width or height
pub const MAX_DISPLAY_DIM: u32 = 8192;

/// Error type for config loading/validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Top-level app configuration. Every field is optional; unset means default.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    pub log_level: Option<String>,     // e.g., "info" | "debug"
    pub display: Option<DisplayConfig>,
    pub clock: Option<ClockConfig>,
    pub face_color: Option<HexColor>,
    pub hands: Option<HandsConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DisplayConfig {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub snapshot: Option<PathBuf>,  // PPM written after every frame
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ClockConfig {
    pub second: Option<f64>,
    pub minute: Option<f64>,
    pub hour: Option<f64>,         // 60-unit dial, 30.0 is six o'clock
    pub wall_clock: Option<bool>,  // seed from local time instead
    pub tick_ms: Option<u64>,
    pub ticks: Option<u64>,        // stop after this many ticks
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct HandsConfig {
    pub hour: Option<HandConfig>,
    pub minute: Option<HandConfig>,
    pub second: Option<HandConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct HandConfig {
    pub base: Option<u32>,
    pub length: Option<u32>,
    pub color: Option<HexColor>,
}

/// CLI overrides. All fields are Options so we can layer them over YAML.
#[derive(Debug, Parser, Clone, Default)]
#[command(name = "quadclock", version, about = "Four analog clock faces on one panel")]
pub struct Cli {
    /// Path to a YAML config file (overrides search)
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub log_level: Option<String>,
    /// shorthand for --log-level debug
    #[arg(long, action = ArgAction::SetTrue)]
    pub debug: bool,
    #[arg(long)]
    pub display_width: Option<u32>,
    #[arg(long)]
    pub display_height: Option<u32>,
    /// write a PPM image of every frame to this path
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub snapshot: Option<PathBuf>,
    /// seed the hands from local time
    #[arg(long, action = ArgAction::SetTrue)]
    pub wall_clock: bool,
    #[arg(long)]
    pub tick_ms: Option<u64>,
    /// stop after this many ticks (default: run forever)
    #[arg(long)]
    pub ticks: Option<u64>,
    /// dump fully merged config (after overrides) and exit
    #[arg(long, action = ArgAction::SetTrue)]
    pub dump_config: bool,
}

/// Public entry point: parse CLI, read YAML, merge, validate.
pub fn load() -> Result<(Config, Cli), ConfigError> {
    let cli = Cli::parse();
    let cfg = load_with(&cli)?;
    Ok((cfg, cli))
}

/// Merge and validate the layers for an already parsed command line.
pub fn load_with(cli: &Cli) -> Result<Config, ConfigError> {
    // 1) defaults (from `Default` impl)
    let mut cfg = Config::default();

    // 2) YAML file (explicit path or search)
    if let Some(p) = cli.config.as_ref() {
        if p.exists() {
            let y = read_yaml(p)?;
            merge(&mut cfg, y);
        } else {
            return Err(ConfigError::Validation(format!(
                "Config file not found: {}",
                p.display()
            )));
        }
    } else if let Some(p) = find_config_file() {
        let y = read_yaml(&p)?;
        merge(&mut cfg, y);
    }

    // 3) CLI overrides (highest precedence)
    apply_cli_overrides(&mut cfg, cli);

    // 4) Validate
    validate(&cfg)?;

    Ok(cfg)
}

/// Try common locations in order (first hit wins).
fn find_config_file() -> Option<PathBuf> {
    // XDG-style: ~/.config/quadclock/config.yaml
    if let Some(home) = home_dir() {
        let p = home.join(".config/quadclock/config.yaml");
        if p.exists() { return Some(p) }
        let p = home.join(".config/quadclock.yaml");
        if p.exists() { return Some(p) }
    }
    // project local
    for candidate in &["quadclock.yaml", "config/quadclock.yaml"] {
        let p = PathBuf::from(candidate);
        if p.exists() { return Some(p) }
    }
    None
}

fn read_yaml(path: &Path) -> Result<Config, ConfigError> {
    let s = fs::read_to_string(path)?;
    parse_yaml(&s)
}

/// Parse a YAML document into a (partial) config.
pub fn parse_yaml(s: &str) -> Result<Config, ConfigError> {
    let cfg: Config = serde_yaml::from_str(s)?;
    Ok(cfg)
}

/// Shallow merge `src` into `dst`, Option-by-Option.
pub fn merge(dst: &mut Config, src: Config) {
    // top-level
    if src.log_level.is_some()  { dst.log_level = src.log_level; }
    if src.face_color.is_some() { dst.face_color = src.face_color; }
    match (&mut dst.display, src.display) {
        (None, Some(c)) => dst.display = Some(c),
        (Some(d), Some(s)) => merge_display(d, s),
        _ => {}
    }
    match (&mut dst.clock, src.clock) {
        (None, Some(c)) => dst.clock = Some(c),
        (Some(d), Some(s)) => merge_clock(d, s),
        _ => {}
    }
    match (&mut dst.hands, src.hands) {
        (None, Some(h)) => dst.hands = Some(h),
        (Some(d), Some(s)) => {
            merge_hand(&mut d.hour, s.hour);
            merge_hand(&mut d.minute, s.minute);
            merge_hand(&mut d.second, s.second);
        }
        _ => {}
    }
}

fn merge_display(dst: &mut DisplayConfig, src: DisplayConfig) {
    if src.width.is_some()    { dst.width = src.width; }
    if src.height.is_some()   { dst.height = src.height; }
    if src.snapshot.is_some() { dst.snapshot = src.snapshot; }
}

fn merge_clock(dst: &mut ClockConfig, src: ClockConfig) {
    if src.second.is_some()     { dst.second = src.second; }
    if src.minute.is_some()     { dst.minute = src.minute; }
    if src.hour.is_some()       { dst.hour = src.hour; }
    if src.wall_clock.is_some() { dst.wall_clock = src.wall_clock; }
    if src.tick_ms.is_some()    { dst.tick_ms = src.tick_ms; }
    if src.ticks.is_some()      { dst.ticks = src.ticks; }
}

fn merge_hand(dst: &mut Option<HandConfig>, src: Option<HandConfig>) {
    match (dst.as_mut(), src) {
        (None, Some(s)) => *dst = Some(s),
        (Some(d), Some(s)) => {
            if s.base.is_some()   { d.base = s.base; }
            if s.length.is_some() { d.length = s.length; }
            if s.color.is_some()  { d.color = s.color; }
        }
        _ => {}
    }
}

fn apply_cli_overrides(cfg: &mut Config, cli: &Cli) {
    if cli.log_level.is_some() { cfg.log_level = cli.log_level.clone(); }
    if cli.debug               { cfg.log_level = Some("debug".to_string()); }

    let any_display = cli.display_width.is_some()
        || cli.display_height.is_some()
        || cli.snapshot.is_some();
    if any_display && cfg.display.is_none() {
        cfg.display = Some(DisplayConfig::default());
    }
    if let Some(display) = cfg.display.as_mut() {
        if cli.display_width.is_some()  { display.width = cli.display_width; }
        if cli.display_height.is_some() { display.height = cli.display_height; }
        if cli.snapshot.is_some()       { display.snapshot = cli.snapshot.clone(); }
    }

    let any_clock = cli.wall_clock || cli.tick_ms.is_some() || cli.ticks.is_some();
    if any_clock && cfg.clock.is_none() {
        cfg.clock = Some(ClockConfig::default());
    }
    if let Some(clock) = cfg.clock.as_mut() {
        if cli.wall_clock         { clock.wall_clock = Some(true); }
        if cli.tick_ms.is_some()  { clock.tick_ms = cli.tick_ms; }
        if cli.ticks.is_some()    { clock.ticks = cli.ticks; }
    }
}

/// Put any invariants here (required fields, ranges, etc.)
fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if let Some(display) = cfg.display.as_ref() {
        for (name, v) in [("width", display.width), ("height", display.height)] {
            if let Some(v) = v {
                if v == 0 || v > MAX_DISPLAY_DIM {
                    return Err(ConfigError::Validation(format!(
                        "display {name} must be in 1..={MAX_DISPLAY_DIM}, got {v}"
                    )));
                }
            }
        }
    }
    if let Some(clock) = cfg.clock.as_ref() {
        for (name, v) in [("second", clock.second), ("minute", clock.minute), ("hour", clock.hour)] {
            if let Some(v) = v {
                if !(0.0..DIAL_UNITS).contains(&v) {
                    return Err(ConfigError::Validation(format!(
                        "clock {name} must be in [0, 60), got {v}"
                    )));
                }
            }
        }
        if clock.tick_ms == Some(0) {
            return Err(ConfigError::Validation("clock tick_ms must be > 0".into()));
        }
    }
    if let Some(c) = cfg.face_color {
        if !c.is_valid() {
            return Err(ConfigError::Validation(format!(
                "face_color {:#X} does not fit in 24 bits",
                c.0
            )));
        }
    }
    if let Some(hands) = cfg.hands.as_ref() {
        // a hand may not reach further than the panel is wide or tall
        let max_len = cfg.width().max(cfg.height());
        let hands = [
            (HandKind::Hour, &hands.hour),
            (HandKind::Minute, &hands.minute),
            (HandKind::Second, &hands.second),
        ];
        for (kind, hand) in hands {
            let Some(hand) = hand else { continue };
            for (name, v) in [("base", hand.base), ("length", hand.length)] {
                if let Some(v) = v {
                    if v == 0 || v > max_len {
                        return Err(ConfigError::Validation(format!(
                            "{kind} hand {name} must be in 1..={max_len}, got {v}"
                        )));
                    }
                }
            }
            if let Some(c) = hand.color {
                if !c.is_valid() {
                    return Err(ConfigError::Validation(format!(
                        "{kind} hand color {:#X} does not fit in 24 bits",
                        c.0
                    )));
                }
            }
        }
    }
    Ok(())
}

// Resolved values: what the animation actually runs with.
impl Config {
    pub fn width(&self) -> u32 {
        self.display.as_ref().and_then(|d| d.width).unwrap_or(DEFAULT_WIDTH)
    }

    pub fn height(&self) -> u32 {
        self.display.as_ref().and_then(|d| d.height).unwrap_or(DEFAULT_HEIGHT)
    }

    pub fn snapshot(&self) -> Option<&Path> {
        self.display.as_ref().and_then(|d| d.snapshot.as_deref())
    }

    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or("info")
    }

    pub fn face_color(&self) -> HexColor {
        self.face_color.unwrap_or(HexColor::FACE)
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.clock.as_ref().and_then(|c| c.tick_ms).unwrap_or(DEFAULT_TICK_MS))
    }

    /// Tick limit, `None` to run forever
    pub fn ticks(&self) -> Option<u64> {
        self.clock.as_ref().and_then(|c| c.ticks)
    }

    pub fn wall_clock(&self) -> bool {
        self.clock.as_ref().and_then(|c| c.wall_clock).unwrap_or(false)
    }

    /// Starting dial positions, falling back to 6:15:00 per hand
    pub fn start_state(&self) -> ClockState {
        let default = ClockState::default();
        let clock = self.clock.clone().unwrap_or_default();
        ClockState::new(
            clock.second.unwrap_or(default.second()),
            clock.minute.unwrap_or(default.minute()),
            clock.hour.unwrap_or(default.hour()),
        )
    }

    /// Hand specs: width-derived defaults with configured fields on top
    pub fn hand_set(&self) -> HandSet {
        let mut set = HandSet::for_width(self.width());
        if let Some(hands) = self.hands.as_ref() {
            apply_hand(&mut set.hour, hands.hour.as_ref());
            apply_hand(&mut set.minute, hands.minute.as_ref());
            apply_hand(&mut set.second, hands.second.as_ref());
        }
        set
    }
}

fn apply_hand(spec: &mut HandSpec, cfg: Option<&HandConfig>) {
    let Some(cfg) = cfg else { return };
    if let Some(b) = cfg.base   { spec.base_width = b; }
    if let Some(l) = cfg.length { spec.length = l; }
    if let Some(c) = cfg.color  { spec.color = c; }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli() -> Cli {
        Cli::default()
    }

    #[test]
    fn defaults_match_reference_constants() {
        let cfg = Config::default();
        assert_eq!((cfg.width(), cfg.height()), (240, 240));
        assert_eq!(cfg.face_color(), HexColor(0x202020));
        assert_eq!(cfg.tick_period(), Duration::from_secs(1));
        assert_eq!(cfg.ticks(), None);
        assert_eq!(cfg.start_state(), ClockState::default());
        assert_eq!(cfg.hand_set(), HandSet::for_width(240));
        assert_eq!(cfg.log_level(), "info");
    }

    #[test]
    fn yaml_layers_over_defaults() {
        let y = parse_yaml(
            "display:\n  width: 320\nclock:\n  minute: 45\nhands:\n  second:\n    color: 0x00FF00\n",
        )
        .unwrap();
        let mut cfg = Config::default();
        merge(&mut cfg, y);

        assert_eq!(cfg.width(), 320);
        assert_eq!(cfg.height(), 240);
        assert_eq!(cfg.start_state(), ClockState::new(0.0, 45.0, 30.0));
        let hands = cfg.hand_set();
        assert_eq!(hands.second.color, HexColor(0x00FF00));
        assert_eq!(hands.second.length, 80);
        assert_eq!(hands.hour.length, 40);
    }

    #[test]
    fn later_layers_win_field_by_field() {
        let mut cfg = parse_yaml("clock:\n  second: 5\n  minute: 10\n").unwrap();
        merge(&mut cfg, parse_yaml("clock:\n  minute: 20\n").unwrap());
        let clock = cfg.clock.clone().unwrap();
        assert_eq!(clock.second, Some(5.0));
        assert_eq!(clock.minute, Some(20.0));
    }

    #[test]
    fn cli_overrides_yaml() {
        let mut cfg = parse_yaml("display:\n  width: 128\nclock:\n  tick_ms: 500\n").unwrap();
        let cli = Cli {
            display_width: Some(480),
            ticks: Some(10),
            wall_clock: true,
            debug: true,
            ..cli()
        };
        apply_cli_overrides(&mut cfg, &cli);
        assert_eq!(cfg.width(), 480);
        assert_eq!(cfg.ticks(), Some(10));
        assert_eq!(cfg.tick_period(), Duration::from_millis(500));
        assert!(cfg.wall_clock());
        assert_eq!(cfg.log_level(), "debug");
    }

    #[test]
    fn validation_rejects_bad_values() {
        for doc in [
            "display:\n  width: 0\n",
            "clock:\n  hour: 60\n",
            "clock:\n  second: -1\n",
            "clock:\n  tick_ms: 0\n",
            "face_color: 0x1000000\n",
            "hands:\n  minute:\n    length: 0\n",
        ] {
            let cfg = parse_yaml(doc).unwrap();
            assert!(matches!(validate(&cfg), Err(ConfigError::Validation(_))), "{doc}");
        }
        assert!(validate(&parse_yaml("clock:\n  hour: 59.5\n").unwrap()).is_ok());
    }

    #[test]
    fn validation_bounds_sizes() {
        for doc in [
            "hands:\n  second:\n    length: 3000000000\n",
            "hands:\n  hour:\n    base: 241\n",
            "display:\n  width: 8193\n",
            "display:\n  height: 4294967295\n",
        ] {
            let cfg = parse_yaml(doc).unwrap();
            assert!(matches!(validate(&cfg), Err(ConfigError::Validation(_))), "{doc}");
        }
        // hand limit follows the configured panel
        let cfg = parse_yaml("display:\n  width: 480\nhands:\n  second:\n    length: 480\n").unwrap();
        assert!(validate(&cfg).is_ok());
        assert!(validate(&parse_yaml("display:\n  width: 8192\n").unwrap()).is_ok());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let cli = Cli { config: Some(PathBuf::from("/nonexistent/quadclock.yaml")), ..cli() };
        assert!(matches!(load_with(&cli), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn explicit_file_is_loaded() {
        let path = std::env::temp_dir().join(format!("quadclock-config-{}.yaml", std::process::id()));
        fs::write(&path, "log_level: warn\ndisplay:\n  height: 200\n").unwrap();
        let cli = Cli { config: Some(path.clone()), display_width: Some(100), ..cli() };
        let cfg = load_with(&cli).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(cfg.log_level(), "warn");
        assert_eq!((cfg.width(), cfg.height()), (100, 200));
    }

    #[test]
    fn yaml_parse_errors_surface() {
        assert!(matches!(parse_yaml("display: [1, 2"), Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn round_trips_through_yaml() {
        let cfg = parse_yaml("face_color: 0x303030\nclock:\n  ticks: 3\n").unwrap();
        let text = serde_yaml::to_string(&cfg).unwrap();
        assert_eq!(parse_yaml(&text).unwrap(), cfg);
    }
}
