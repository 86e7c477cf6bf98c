use serde::Deserialize;
use std::path::PathBuf;

/// Central simulation constants for the mock run.
///
/// The demo has no real geolocation: the start point, the rival zone, the
/// practice loop and the scores are all fixed mock data. Angles follow the
/// usual mathematical convention (degrees, counter-clockwise positive) on
/// the lon/lat plane.
pub mod sim {
    /// Mock start position (Seolleung station, Seoul).
    pub const START_LAT: f64 = 37.5045;
    pub const START_LON: f64 = 127.0489;

    /// Interval between simulated position ticks.
    pub const TICK_INTERVAL_MS: u64 = 200;

    /// Distance covered by one simulated step, in degrees.
    pub const STEP_DEGREES: f64 = 0.0001;

    /// Steps per side of the rectangular practice loop.
    pub const STEPS_PER_SIDE: u32 = 15;

    /// Rotation applied to every movement vector of the loop.
    pub const ROUTE_ROTATION_DEG: f64 = 20.0;

    /// Rotation of the rival zone about the start point.
    pub const RIVAL_ROTATION_DEG: f64 = 15.0;

    /// Rival zone score while the zone is intact.
    pub const RIVAL_SCORE: u32 = 1500;

    /// Rival zone score once territory has been ceded.
    pub const RIVAL_SCORE_CEDED: u32 = 1250;

    /// Score displayed at the centre of a freshly claimed territory.
    pub const CLAIM_SCORE: u32 = 9;

    /// Minimum number of distinct path points that can close into a ring.
    pub const MIN_RING_POINTS: usize = 3;
}

fn default_interval_ms() -> u64 {
    sim::TICK_INTERVAL_MS
}
fn default_route_rotation() -> f64 {
    sim::ROUTE_ROTATION_DEG
}
fn default_rival_rotation() -> f64 {
    sim::RIVAL_ROTATION_DEG
}
fn default_fast() -> bool {
    false
}
fn default_verbose() -> bool {
    false
}

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    #[serde(default)]
    pub steps: Option<u32>,
    #[serde(default = "default_route_rotation")]
    pub route_rotation: f64,
    #[serde(default = "default_rival_rotation")]
    pub rival_rotation: f64,
    #[serde(default = "default_fast")]
    pub fast: bool,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
    #[serde(default)]
    pub output: Option<PathBuf>,
}

impl FileConfig {
    pub fn load() -> Option<Self> {
        let config_paths = get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("terrarun.toml"));
    paths.push(PathBuf::from(".terrarun.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("terrarun").join("config.toml"));
        paths.push(config_dir.join("terrarun.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".terrarun.toml"));
        paths.push(home.join(".config").join("terrarun").join("config.toml"));
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_partial_config() {
        let config: FileConfig = toml::from_str("interval_ms = 50\nfast = true").unwrap();
        assert_eq!(config.interval_ms, 50);
        assert!(config.fast);
        assert_eq!(config.lat, None);
        assert_eq!(config.route_rotation, sim::ROUTE_ROTATION_DEG);
        assert_eq!(config.rival_rotation, sim::RIVAL_ROTATION_DEG);
    }

    #[test]
    fn test_parse_empty_config() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config.interval_ms, sim::TICK_INTERVAL_MS);
        assert_eq!(config.steps, None);
        assert!(!config.verbose);
    }
}
