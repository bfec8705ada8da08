//! Configuration management for the geometry codec
use std::path::Path;

use config::Config;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

/// Default upper bound on the number of parameter pairs in one feature.
///
/// Keeps a hostile command count from reserving gigabytes of command
/// records while leaving room for very detailed features.
pub const DEFAULT_MAX_POINTS: u32 = 1 << 20;

/// Limits applied while decoding a feature's geometry.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct CodecConfig {
    /// Maximum number of MoveTo/LineTo parameter pairs a single feature may
    /// declare.
    pub max_points: u32,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self { max_points: DEFAULT_MAX_POINTS }
    }
}

impl CodecConfig {
    /// Initializing the configuration from defaults, an optional config
    /// file and the environment, in increasing order of precedence.
    ///
    /// Environment variables use the `TILEGEOM` prefix, so `max_points` is
    /// read from `TILEGEOM_MAX_POINTS`.
    pub fn new(config_path: Option<impl AsRef<Path>>) -> Result<Self, ConfigError> {
        let env = Environment::with_prefix("TILEGEOM")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true);

        let mut cfg_builder = Config::builder();
        cfg_builder = cfg_builder.set_default("max_points", DEFAULT_MAX_POINTS as i64)?;

        if let Some(path) = config_path {
            cfg_builder = cfg_builder.add_source(File::from(path.as_ref()));
        }
        cfg_builder = cfg_builder.add_source(env);

        let cfg = cfg_builder.build()?;
        let settings: CodecConfig = cfg.try_deserialize()?;

        settings.validate()?;

        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_points == 0 {
            return Err(ConfigError::Message(
                "[codec] max_points must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}
