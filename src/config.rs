//! Configuration — optional defaults loaded from ~/.vpal/config.yaml.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::midi::EncoderOptions;

/// User defaults for rendering and for the names written into MIDI files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VpalConfig {
    /// Tempo in BPM when none is given on the command line.
    pub tempo: u32,
    /// Number of times to play the score when none is given.
    pub repeat: u32,
    pub sequence_name: String,
    pub track_name: String,
    pub instrument_name: String,
}

impl Default for VpalConfig {
    fn default() -> Self {
        let names = EncoderOptions::default();
        Self {
            tempo: 120,
            repeat: 1,
            sequence_name: names.sequence_name,
            track_name: names.track_name,
            instrument_name: names.instrument_name,
        }
    }
}

/// Get the standard config file path.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".vpal").join("config.yaml"))
}

impl VpalConfig {
    /// Load config from the standard path (~/.vpal/config.yaml).
    /// Returns None if the file doesn't exist or can't be parsed.
    pub fn load() -> Option<Self> {
        let path = config_path()?;
        let content = std::fs::read_to_string(path).ok()?;
        serde_yaml::from_str(&content).ok()
    }

    /// Load config from an explicit path, reporting any failure.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Meta event names for the MIDI encoder.
    pub fn encoder_options(&self) -> EncoderOptions {
        EncoderOptions {
            sequence_name: self.sequence_name.clone(),
            track_name: self.track_name.clone(),
            instrument_name: self.instrument_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_config() {
        let config = VpalConfig::default();
        assert_eq!(config.tempo, 120);
        assert_eq!(config.repeat, 1);
        assert_eq!(config.encoder_options(), EncoderOptions::default());
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config: VpalConfig = serde_yaml::from_str("tempo: 90\n").unwrap();
        assert_eq!(config.tempo, 90);
        assert_eq!(config.repeat, 1);
        assert_eq!(config.track_name, "Percussion");
    }

    #[test]
    fn full_yaml_config() {
        let yaml = r#"
tempo: 140
repeat: 4
sequence_name: Street Beat
track_name: Mouth
instrument_name: Beatbox
"#;
        let config: VpalConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.repeat, 4);
        let names = config.encoder_options();
        assert_eq!(names.sequence_name, "Street Beat");
        assert_eq!(names.instrument_name, "Beatbox");
    }

    #[test]
    fn serialize_deserialize() {
        let config = VpalConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: VpalConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "tempo: 75\nrepeat: 2").unwrap();
        let config = VpalConfig::load_from(file.path()).unwrap();
        assert_eq!(config.tempo, 75);
        assert_eq!(config.repeat, 2);
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = VpalConfig::load_from(&dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn load_from_bad_yaml_is_yaml_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "tempo: [fast]").unwrap();
        let err = VpalConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, Error::Yaml(_)));
    }

    #[test]
    fn standard_path_is_under_home() {
        let path = config_path().unwrap();
        assert!(path.ends_with(".vpal/config.yaml"));
        assert_eq!(path.parent().and_then(|p| p.parent()), dirs::home_dir().as_deref());
    }
}
