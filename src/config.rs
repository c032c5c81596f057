use std::path::Path;
use std::time::Duration;

use crate::error::ConfigError;
use crate::sequencing;

/// Game timing and sound settings, loadable from TOML.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Time between the starts of two playback pulses.
    pub step_interval_ms: u64,
    /// Delay into each pulse after which input re-opens.
    pub reopen_after_ms: u64,
    /// Accept picks once input re-opens mid-pulse. When false, picks are
    /// only accepted after the whole sequence has played.
    pub input_during_pulse: bool,
    /// Tone length in transport notation ("8n", "4n.", "8t").
    pub tone_length: String,
    /// Tempo used to turn `tone_length` into seconds.
    pub tempo_bpm: f64,
    /// MIDI velocity of every tone.
    pub velocity: u8,
    /// Master output gain in [0, 1].
    pub volume: f32,
    /// Size of the synth's voice pool.
    pub voices: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            step_interval_ms: 2000,
            reopen_after_ms: 1000,
            input_during_pulse: true,
            tone_length: "8n".to_string(),
            tempo_bpm: 120.0,
            velocity: 100,
            volume: 0.3,
            voices: 4,
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.step_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "step_interval_ms must be > 0".into(),
            ));
        }
        // Input must re-open inside the pulse, before the next one starts
        if self.reopen_after_ms >= self.step_interval_ms {
            return Err(ConfigError::Validation(
                "reopen_after_ms must be < step_interval_ms".into(),
            ));
        }
        if let Err(err) = self.tone_length.parse::<sequencing::Duration>() {
            return Err(ConfigError::Validation(format!("tone_length: {err}")));
        }
        if !(self.tempo_bpm.is_finite() && self.tempo_bpm > 0.0) {
            return Err(ConfigError::Validation("tempo_bpm must be > 0".into()));
        }
        if self.velocity > 127 {
            return Err(ConfigError::Validation(
                "velocity must be in [0, 127]".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.volume) {
            return Err(ConfigError::Validation("volume must be in [0, 1]".into()));
        }
        if self.voices == 0 {
            return Err(ConfigError::Validation("voices must be > 0".into()));
        }
        Ok(())
    }

    pub fn step_interval(&self) -> Duration {
        Duration::from_millis(self.step_interval_ms)
    }

    pub fn reopen_after(&self) -> Duration {
        Duration::from_millis(self.reopen_after_ms)
    }

    /// Parsed tone length; falls back to an eighth note if unparsable.
    pub fn tone_duration(&self) -> sequencing::Duration {
        self.tone_length
            .parse()
            .unwrap_or(sequencing::Duration::EIGHTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.step_interval(), Duration::from_secs(2));
        assert_eq!(config.reopen_after(), Duration::from_secs(1));
        assert_eq!(config.tone_duration(), sequencing::Duration::EIGHTH);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: GameConfig = toml::from_str("volume = 0.5\nvoices = 8\n").unwrap();
        assert_eq!(config.volume, 0.5);
        assert_eq!(config.voices, 8);
        assert_eq!(config.step_interval_ms, 2000);
        assert!(config.input_during_pulse);
    }

    #[test]
    fn test_reopen_must_fall_inside_pulse() {
        let config = GameConfig {
            step_interval_ms: 1000,
            reopen_after_ms: 1000,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(msg)) if msg.contains("reopen_after_ms")
        ));
    }

    #[test]
    fn test_rejects_bad_values() {
        let bad = [
            GameConfig {
                step_interval_ms: 0,
                ..GameConfig::default()
            },
            GameConfig {
                tone_length: "eighth".into(),
                ..GameConfig::default()
            },
            GameConfig {
                tempo_bpm: 0.0,
                ..GameConfig::default()
            },
            GameConfig {
                volume: 1.5,
                ..GameConfig::default()
            },
            GameConfig {
                voices: 0,
                ..GameConfig::default()
            },
            GameConfig {
                velocity: 200,
                ..GameConfig::default()
            },
            GameConfig {
                tone_length: "2147483648n.".into(),
                ..GameConfig::default()
            },
        ];
        for config in bad {
            assert!(config.validate().is_err(), "{config:?} should be rejected");
        }
    }

    #[test]
    fn test_load_missing_file() {
        let err = GameConfig::load(Path::new("/nonexistent/simon.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));
    }
}
