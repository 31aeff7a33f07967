use crate::domain::{
    AuthorizationAccuracy, AuthorizationStatus, BeaconConstraint, Coordinate, DeviceCapabilities,
    Region,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

const DEFAULT_BEACON_UUID: Uuid = Uuid::from_u128(0x212d2900_6c5b_4c9a_a8e1_8bdf3cbaf105);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Region offered by the region monitoring section.
    pub region: Region,
    /// Beacon constraint offered by the beacon ranging section.
    pub beacon: BeaconConstraint,
    pub simulator: SimulatorConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            region: Region::new("london", Coordinate::new(51.50998, -0.1337), 100.0),
            beacon: BeaconConstraint::new(DEFAULT_BEACON_UUID),
            simulator: SimulatorConfig::default(),
        }
    }
}

/// Behaviour of the simulated location service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Interval between periodic updates of running sessions.
    pub tick_interval_ms: u64,
    /// Distance walked between two position updates, in meters.
    pub step_meters: f64,
    /// Status reported when authorization is requested.
    pub authorization: AuthorizationStatus,
    pub accuracy: AuthorizationAccuracy,
    /// Where the simulated device starts.
    pub origin: Coordinate,
    pub capabilities: DeviceCapabilities,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 1000,
            step_meters: 25.0,
            authorization: AuthorizationStatus::AuthorizedWhenInUse,
            accuracy: AuthorizationAccuracy::Full,
            origin: Coordinate::new(51.5, -0.13),
            capabilities: DeviceCapabilities::all(),
        }
    }
}

/// Loads the config from its default location, falling back to defaults when the
/// file is missing or unreadable.
pub fn load_config() -> AppConfig {
    let path = config_path();
    match load_config_from(&path) {
        Ok(Some(config)) => config,
        Ok(None) => AppConfig::default(),
        Err(err) => {
            log::warn!("Ignoring config at {}: {:#}", path.display(), err);
            AppConfig::default()
        }
    }
}

/// Reads the config at `path`. Returns `Ok(None)` when the file does not exist.
pub fn load_config_from(path: &Path) -> Result<Option<AppConfig>> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(err).with_context(|| format!("Failed to read {}", path.display()));
        }
    };
    let config = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(Some(config))
}

pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;
    std::fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}

pub fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var("LOCATION_REDUX_CONFIG_PATH") {
        return PathBuf::from(path);
    }

    app_data_dir().join("config.toml")
}

fn app_data_dir() -> PathBuf {
    if let Ok(path) = std::env::var("LOCATION_REDUX_DATA_HOME") {
        return PathBuf::from(path);
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = home::home_dir() {
            return home
                .join("Library")
                .join("Application Support")
                .join("LocationRedux");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("LocationRedux");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("location-redux");
        }
        if let Some(home) = home::home_dir() {
            return home.join(".config").join("location-redux");
        }
    }

    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".location-redux")
}
