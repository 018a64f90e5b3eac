use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::core::{NavResult, DEFAULT_PRESSURE_MBAR, DEFAULT_TEMPERATURE_C};
use crate::fix::SolverSettings;
use crate::reduction::Observer;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Values applied to observers that do not set their own
    pub observer: ObserverDefaults,
    /// Fix solver tolerances
    pub solver: SolverSettings,
    /// Report output settings
    pub output: OutputConfig,
    /// Enable debug logging
    pub debug_logging: bool,
}

/// Observer defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObserverDefaults {
    /// Height of eye above the sea (m)
    pub height_of_eye_m: f64,
    /// Index correction (arc-minutes)
    pub index_error_arcmin: f64,
    /// Elevation above sea level (m)
    pub elevation_m: f64,
    /// Air temperature (°C)
    pub temperature_c: f64,
    /// Air pressure (mbar)
    pub pressure_mbar: f64,
}

/// Report output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Decimal places for intercepts and distances
    pub precision: usize,
}

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Invalid parameter value
    InvalidParameter { parameter: String, value: String, reason: String },
    /// Configuration file I/O error
    IoError { message: String },
    /// JSON serialization/deserialization error
    SerializationError { message: String },
}

/// Configuration validation result
#[derive(Debug)]
pub struct ValidationResult {
    /// Whether configuration is valid
    pub is_valid: bool,
    /// Validation errors
    pub errors: Vec<ConfigError>,
    /// Validation warnings
    pub warnings: Vec<String>,
}

/// Loads, validates and saves the configuration
pub struct ConfigurationManager {
    config: NavConfig,
    config_file_path: Option<String>,
    is_modified: bool,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            observer: ObserverDefaults::default(),
            solver: SolverSettings::default(),
            output: OutputConfig::default(),
            debug_logging: false,
        }
    }
}

impl Default for ObserverDefaults {
    fn default() -> Self {
        Self {
            height_of_eye_m: 0.0,
            index_error_arcmin: 0.0,
            elevation_m: 0.0,
            temperature_c: DEFAULT_TEMPERATURE_C,
            pressure_mbar: DEFAULT_PRESSURE_MBAR,
        }
    }
}

impl ObserverDefaults {
    /// Observer at `lat_deg`/`lon_deg` with these defaults applied
    pub fn observer(&self, lat_deg: f64, lon_deg: f64) -> NavResult<Observer> {
        Ok(Observer::new(lat_deg, lon_deg)
            .with_height_of_eye(self.height_of_eye_m)?
            .with_index_error(self.index_error_arcmin)
            .with_elevation(self.elevation_m)
            .with_weather(self.temperature_c, self.pressure_mbar))
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            precision: 2,
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(ConfigError::InvalidParameter {
                parameter: "output.format".to_string(),
                value: other.to_string(),
                reason: "Output format must be text, json or csv".to_string(),
            }),
        }
    }
}

impl ConfigurationManager {
    /// Create a new configuration manager with default settings
    pub fn new() -> Self {
        Self {
            config: NavConfig::default(),
            config_file_path: None,
            is_modified: false,
        }
    }

    /// Create configuration manager and load from file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut manager = Self::new();
        manager.load_from_file(path)?;
        Ok(manager)
    }

    /// Get current configuration
    pub fn get_config(&self) -> &NavConfig {
        &self.config
    }

    /// Replace the configuration after validation
    pub fn update_config(&mut self, config: NavConfig) -> Result<(), ConfigError> {
        let validation = self.validate_config(&config)?;
        if let Some(error) = validation.errors.into_iter().next() {
            return Err(error);
        }

        self.config = config;
        self.is_modified = true;
        Ok(())
    }

    /// Load configuration from JSON file
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content = fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
            message: format!("Failed to read config file '{}': {}", path_str, e),
        })?;

        let config: NavConfig =
            serde_json::from_str(&content).map_err(|e| ConfigError::SerializationError {
                message: format!("Failed to parse config file '{}': {}", path_str, e),
            })?;

        // Validate before applying
        let validation = self.validate_config(&config)?;
        if let Some(error) = validation.errors.into_iter().next() {
            return Err(error);
        }

        self.config = config;
        self.config_file_path = Some(path_str);
        self.is_modified = false;
        Ok(())
    }

    /// Save configuration to JSON file
    pub fn save_to_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content =
            serde_json::to_string_pretty(&self.config).map_err(|e| ConfigError::SerializationError {
                message: format!("Failed to serialize config: {}", e),
            })?;

        fs::write(&path, content).map_err(|e| ConfigError::IoError {
            message: format!("Failed to write config file '{}': {}", path_str, e),
        })?;

        self.config_file_path = Some(path_str);
        self.is_modified = false;
        Ok(())
    }

    /// Save to the currently loaded file path
    pub fn save(&mut self) -> Result<(), ConfigError> {
        if let Some(path) = self.config_file_path.clone() {
            self.save_to_file(path)
        } else {
            Err(ConfigError::IoError {
                message: "No file path set for saving configuration".to_string(),
            })
        }
    }

    /// Check if configuration has been modified since last save
    pub fn is_modified(&self) -> bool {
        self.is_modified
    }

    /// Update height of eye; returns the previous value
    pub fn set_height_of_eye(&mut self, height_of_eye_m: f64) -> Result<f64, ConfigError> {
        let old_value = self.config.observer.height_of_eye_m;

        if !height_of_eye_m.is_finite() || height_of_eye_m < 0.0 {
            return Err(ConfigError::InvalidParameter {
                parameter: "observer.height_of_eye_m".to_string(),
                value: height_of_eye_m.to_string(),
                reason: "Height of eye must be zero or positive".to_string(),
            });
        }

        self.config.observer.height_of_eye_m = height_of_eye_m;
        self.is_modified = true;
        Ok(old_value)
    }

    pub fn get_height_of_eye(&self) -> f64 {
        self.config.observer.height_of_eye_m
    }

    /// Update index correction (arc-minutes); returns the previous value
    pub fn set_index_error(&mut self, index_error_arcmin: f64) -> Result<f64, ConfigError> {
        let old_value = self.config.observer.index_error_arcmin;

        if !index_error_arcmin.is_finite() || index_error_arcmin.abs() > 60.0 {
            return Err(ConfigError::InvalidParameter {
                parameter: "observer.index_error_arcmin".to_string(),
                value: index_error_arcmin.to_string(),
                reason: "Index error must be within one degree".to_string(),
            });
        }

        self.config.observer.index_error_arcmin = index_error_arcmin;
        self.is_modified = true;
        Ok(old_value)
    }

    pub fn get_index_error(&self) -> f64 {
        self.config.observer.index_error_arcmin
    }

    /// Update solver tolerances; returns the previous settings
    pub fn set_solver(&mut self, solver: SolverSettings) -> Result<SolverSettings, ConfigError> {
        let mut errors = Vec::new();
        validate_solver(&solver, &mut errors, &mut Vec::new());
        if let Some(error) = errors.into_iter().next() {
            return Err(error);
        }

        let old_value = self.config.solver;
        self.config.solver = solver;
        self.is_modified = true;
        Ok(old_value)
    }

    pub fn set_output_format(&mut self, format: OutputFormat) -> OutputFormat {
        let old_value = self.config.output.format;
        self.config.output.format = format;
        self.is_modified = true;
        old_value
    }

    /// Validate configuration
    pub fn validate_config(&self, config: &NavConfig) -> Result<ValidationResult, ConfigError> {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        let observer = &config.observer;
        if !observer.height_of_eye_m.is_finite() || observer.height_of_eye_m < 0.0 {
            errors.push(ConfigError::InvalidParameter {
                parameter: "observer.height_of_eye_m".to_string(),
                value: observer.height_of_eye_m.to_string(),
                reason: "Height of eye must be zero or positive".to_string(),
            });
        } else if observer.height_of_eye_m > 30.0 {
            warnings.push("Height of eye above 30 m; dip approximation loses accuracy".to_string());
        }

        if !observer.index_error_arcmin.is_finite() || observer.index_error_arcmin.abs() > 60.0 {
            errors.push(ConfigError::InvalidParameter {
                parameter: "observer.index_error_arcmin".to_string(),
                value: observer.index_error_arcmin.to_string(),
                reason: "Index error must be within one degree".to_string(),
            });
        } else if observer.index_error_arcmin.abs() > 10.0 {
            warnings.push("Index error above 10' suggests the sextant needs adjustment".to_string());
        }

        if observer.pressure_mbar <= 0.0 {
            errors.push(ConfigError::InvalidParameter {
                parameter: "observer.pressure_mbar".to_string(),
                value: observer.pressure_mbar.to_string(),
                reason: "Pressure must be positive".to_string(),
            });
        } else if !(900.0..=1100.0).contains(&observer.pressure_mbar) {
            warnings.push("Unusual sea-level pressure; check refraction inputs".to_string());
        }

        if !(-40.0..=50.0).contains(&observer.temperature_c) {
            warnings.push("Unusual air temperature; check refraction inputs".to_string());
        }

        validate_solver(&config.solver, &mut errors, &mut warnings);

        if config.output.precision > 10 {
            warnings.push("Output precision above 10 decimals adds no information".to_string());
        }

        Ok(ValidationResult {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        })
    }
}

impl Default for ConfigurationManager {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_solver(solver: &SolverSettings, errors: &mut Vec<ConfigError>, warnings: &mut Vec<String>) {
    if !(solver.ap_tolerance_arcmin > 0.0) {
        errors.push(ConfigError::InvalidParameter {
            parameter: "solver.ap_tolerance_arcmin".to_string(),
            value: solver.ap_tolerance_arcmin.to_string(),
            reason: "Assumed position tolerance must be positive".to_string(),
        });
    } else if solver.ap_tolerance_arcmin > 1.0 {
        warnings.push("Assumed position tolerance above 1' lets unrelated plots be crossed".to_string());
    }

    if !(solver.min_crossing_angle_deg > 0.0 && solver.min_crossing_angle_deg < 90.0) {
        errors.push(ConfigError::InvalidParameter {
            parameter: "solver.min_crossing_angle_deg".to_string(),
            value: solver.min_crossing_angle_deg.to_string(),
            reason: "Minimum crossing angle must be between 0 and 90 degrees".to_string(),
        });
    } else if solver.min_crossing_angle_deg > 30.0 {
        warnings.push("Minimum crossing angle above 30° rejects many usable fixes".to_string());
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidParameter { parameter, value, reason } => {
                write!(f, "Invalid parameter '{}' = '{}': {}", parameter, value, reason)
            }
            ConfigError::IoError { message } => {
                write!(f, "I/O error: {}", message)
            }
            ConfigError::SerializationError { message } => {
                write!(f, "Serialization error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("celnav_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_default_config() {
        let config = NavConfig::default();
        assert_eq!(config.observer.temperature_c, 20.0);
        assert_eq!(config.observer.pressure_mbar, 1010.0);
        assert_eq!(config.solver.ap_tolerance_arcmin, 0.1);
        assert_eq!(config.solver.min_crossing_angle_deg, 1.0);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(!config.debug_logging);
    }

    #[test]
    fn test_configuration_manager_creation() {
        let manager = ConfigurationManager::new();
        assert_eq!(manager.get_config(), &NavConfig::default());
        assert!(!manager.is_modified());
        let validation = manager.validate_config(manager.get_config()).unwrap();
        assert!(validation.is_valid);
        assert!(validation.warnings.is_empty());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: NavConfig =
            serde_json::from_str(r#"{"observer": {"height_of_eye_m": 1.8}, "output": {"format": "csv"}}"#)
                .unwrap();
        assert_eq!(config.observer.height_of_eye_m, 1.8);
        assert_eq!(config.observer.pressure_mbar, 1010.0);
        assert_eq!(config.output.format, OutputFormat::Csv);
        assert_eq!(config.output.precision, 2);
        assert_eq!(config.solver, SolverSettings::default());
    }

    #[test]
    fn test_config_serialization() {
        let mut manager = ConfigurationManager::new();
        manager.set_height_of_eye(1.8).unwrap();
        manager.set_index_error(3.6).unwrap();
        manager.set_output_format(OutputFormat::Json);
        assert!(manager.is_modified());

        let path = temp_path("round_trip");
        manager.save_to_file(&path).unwrap();
        assert!(!manager.is_modified());

        let loaded = ConfigurationManager::from_file(&path).unwrap();
        assert_eq!(loaded.get_config(), manager.get_config());
        assert_eq!(loaded.get_height_of_eye(), 1.8);
        assert_eq!(loaded.get_index_error(), 3.6);

        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_save_without_path() {
        let mut manager = ConfigurationManager::new();
        assert!(matches!(manager.save(), Err(ConfigError::IoError { .. })));
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let path = temp_path("invalid");
        fs::write(&path, r#"{"solver": {"min_crossing_angle_deg": 95.0}}"#).unwrap();
        let err = ConfigurationManager::from_file(&path).err().unwrap();
        assert!(matches!(err, ConfigError::InvalidParameter { ref parameter, .. } if parameter == "solver.min_crossing_angle_deg"));

        fs::write(&path, "not json").unwrap();
        assert!(matches!(
            ConfigurationManager::from_file(&path),
            Err(ConfigError::SerializationError { .. })
        ));
        let _ = fs::remove_file(&path);

        assert!(matches!(
            ConfigurationManager::from_file(temp_path("missing")),
            Err(ConfigError::IoError { .. })
        ));
    }

    #[test]
    fn test_runtime_adjustment() {
        let mut manager = ConfigurationManager::new();
        assert_eq!(manager.set_height_of_eye(2.5).unwrap(), 0.0);
        assert_eq!(manager.set_height_of_eye(3.0).unwrap(), 2.5);
        assert!(manager.set_height_of_eye(-1.0).is_err());
        assert_eq!(manager.get_height_of_eye(), 3.0);

        assert!(manager.set_index_error(75.0).is_err());
        assert_eq!(manager.set_index_error(-2.0).unwrap(), 0.0);

        let strict = SolverSettings {
            ap_tolerance_arcmin: 0.05,
            min_crossing_angle_deg: 10.0,
        };
        assert_eq!(manager.set_solver(strict).unwrap(), SolverSettings::default());
        assert_eq!(manager.get_config().solver, strict);

        let invalid = SolverSettings {
            ap_tolerance_arcmin: 0.0,
            ..strict
        };
        assert!(manager.set_solver(invalid).is_err());
        assert_eq!(manager.get_config().solver, strict);
    }

    #[test]
    fn test_validation_warnings() {
        let manager = ConfigurationManager::new();
        let mut config = NavConfig::default();
        config.observer.height_of_eye_m = 45.0;
        config.observer.index_error_arcmin = 12.0;
        config.solver.min_crossing_angle_deg = 40.0;
        let validation = manager.validate_config(&config).unwrap();
        assert!(validation.is_valid);
        assert_eq!(validation.warnings.len(), 3);

        config.observer.pressure_mbar = 0.0;
        let validation = manager.validate_config(&config).unwrap();
        assert!(!validation.is_valid);
        assert_eq!(validation.errors.len(), 1);
    }

    #[test]
    fn test_observer_defaults_applied() {
        let defaults = ObserverDefaults {
            height_of_eye_m: 1.8,
            index_error_arcmin: 3.6,
            temperature_c: 27.0,
            ..ObserverDefaults::default()
        };
        let observer = defaults.observer(-8.25, -105.35).unwrap();
        assert!((observer.index_error.degrees() - 0.06).abs() < 1e-12);
        assert!((observer.dip().degrees() + 0.0293 * 1.8_f64.sqrt()).abs() < 1e-12);
        assert_eq!(observer.temperature_c, 27.0);
        assert_eq!(observer.pressure_mbar, 1010.0);
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
