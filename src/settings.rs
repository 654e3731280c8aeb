// src/settings.rs

use std::ops::RangeInclusive;

use crate::star::MIN_POINT_COUNT;

/// Radius sliders move in integer ticks; the value is `tick * radius_scale`.
pub const RADIUS_TICKS: RangeInclusive<u32> = 1..=100;
pub const MAX_POINTS_RANGE: RangeInclusive<u32> = 10..=500;
pub const MAX_RADIUS_RANGE: RangeInclusive<u32> = 10..=100;

const DEFAULT_MAX_POINTS: u32 = 100;
const DEFAULT_MAX_RADIUS: u32 = 10;

/// Which parts of the scene get drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayOptions {
    pub grid: bool,
    pub fill: bool,
    pub edge: bool,
    pub point: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            grid: true,
            fill: true,
            edge: true,
            point: true,
        }
    }
}

/// Slider limits chosen in the settings window. Owned by the host, never
/// by the star.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderConfig {
    max_points: u32,
    max_radius: u32,
    radius_scale: f32,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_POINTS, DEFAULT_MAX_RADIUS)
    }
}

impl SliderConfig {
    pub fn new(max_points: u32, max_radius: u32) -> Self {
        let mut config = Self {
            max_points: DEFAULT_MAX_POINTS,
            max_radius: DEFAULT_MAX_RADIUS,
            radius_scale: 0.0,
        };
        config.set_limits(max_points, max_radius);
        config
    }

    /// Clamps both limits into their allowed ranges and re-derives the
    /// tick scale so the last tick lands on `max_radius`.
    pub fn set_limits(&mut self, max_points: u32, max_radius: u32) {
        self.max_points = max_points.clamp(*MAX_POINTS_RANGE.start(), *MAX_POINTS_RANGE.end());
        self.max_radius = max_radius.clamp(*MAX_RADIUS_RANGE.start(), *MAX_RADIUS_RANGE.end());
        self.radius_scale = self.max_radius as f32 / *RADIUS_TICKS.end() as f32;
    }

    pub fn max_points(&self) -> u32 {
        self.max_points
    }

    pub fn max_radius(&self) -> u32 {
        self.max_radius
    }

    pub fn radius_scale(&self) -> f32 {
        self.radius_scale
    }

    pub fn point_range(&self) -> RangeInclusive<u32> {
        MIN_POINT_COUNT..=self.max_points
    }

    pub fn radius_for_tick(&self, tick: u32) -> f32 {
        tick as f32 * self.radius_scale
    }

    /// Nearest tick at or below `radius`, kept inside the slider range.
    pub fn tick_for_radius(&self, radius: f32) -> u32 {
        let tick = (radius / self.radius_scale).floor().max(0.0) as u32;
        tick.clamp(*RADIUS_TICKS.start(), *RADIUS_TICKS.end())
    }

    /// Tick closest to `radius`, kept inside the slider range.
    pub fn nearest_tick_for_radius(&self, radius: f32) -> u32 {
        let tick = (radius / self.radius_scale).round().max(0.0) as u32;
        tick.clamp(*RADIUS_TICKS.start(), *RADIUS_TICKS.end())
    }

    /// Half extent of the reference grid.
    pub fn grid_size(&self) -> f32 {
        self.max_radius as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_map_last_tick_to_ten() {
        let config = SliderConfig::default();
        assert_eq!(config.max_points(), 100);
        assert_eq!(config.point_range(), 4..=100);
        assert!((config.radius_scale() - 0.1).abs() < 1e-6);
        assert!((config.radius_for_tick(100) - 10.0).abs() < 1e-5);
        assert_eq!(config.grid_size(), 10.0);
    }

    #[test]
    fn limits_are_clamped() {
        let mut config = SliderConfig::default();
        config.set_limits(1000, 1);
        assert_eq!(config.max_points(), 500);
        assert_eq!(config.max_radius(), 10);

        config.set_limits(20, 50);
        assert_eq!(config.max_points(), 20);
        assert_eq!(config.max_radius(), 50);
        assert!((config.radius_scale() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn tick_for_radius_stays_on_slider() {
        let config = SliderConfig::new(100, 50);
        assert_eq!(config.tick_for_radius(25.0), 50);
        assert_eq!(config.tick_for_radius(25.3), 50);
        assert_eq!(config.tick_for_radius(0.0), 1);
        assert_eq!(config.tick_for_radius(500.0), 100);
    }

    #[test]
    fn nearest_tick_round_trips_every_tick() {
        let config = SliderConfig::default();
        for tick in RADIUS_TICKS {
            assert_eq!(config.nearest_tick_for_radius(config.radius_for_tick(tick)), tick);
        }
        assert_eq!(config.nearest_tick_for_radius(2.46), 25);
    }

    #[test]
    fn display_options_start_enabled() {
        let options = DisplayOptions::default();
        assert!(options.grid && options.fill && options.edge && options.point);
    }
}
