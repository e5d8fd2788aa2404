//! Vision (image input) settings of a conversational agent.

use serde::{Deserialize, Serialize};

use crate::defaults::{MAX_NUMBER_LIMITS, MIN_NUMBER_LIMITS};
use crate::error::ConfigError;

/// Image resolution the model receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    /// Full-resolution tiles in addition to the low-res overview
    #[default]
    High,
    /// A single low-resolution version of the image
    Low,
}

/// How end users may supply images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferMethod {
    /// Upload from the local machine
    LocalFile,
    /// Paste a public image URL
    RemoteUrl,
}

/// Vision settings stored in the shared debug configuration.
///
/// `enable` is the only field the vision panel reads; the rest is owned by
/// the parameter editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisionConfig {
    /// Whether the agent accepts image inputs
    #[serde(default = "crate::defaults::bool_false", alias = "enabled")]
    pub enable: bool,

    /// Maximum number of images per message
    #[serde(default = "crate::defaults::number_limits")]
    pub number_limits: u32,

    /// Resolution sent to the model
    #[serde(default)]
    pub detail: Resolution,

    /// Accepted upload methods
    #[serde(default = "crate::defaults::transfer_methods")]
    pub transfer_methods: Vec<TransferMethod>,
}

impl Default for VisionConfig {
    fn default() -> Self {
        Self {
            enable: crate::defaults::bool_false(),
            number_limits: crate::defaults::number_limits(),
            detail: Resolution::default(),
            transfer_methods: crate::defaults::transfer_methods(),
        }
    }
}

impl VisionConfig {
    /// Check field values that serde alone cannot enforce.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_NUMBER_LIMITS..=MAX_NUMBER_LIMITS).contains(&self.number_limits) {
            return Err(ConfigError::Validation(format!(
                "vision_config.number_limits must be between {MIN_NUMBER_LIMITS} and {MAX_NUMBER_LIMITS}, got {}",
                self.number_limits
            )));
        }
        if self.transfer_methods.is_empty() {
            return Err(ConfigError::Validation(
                "vision_config.transfer_methods must list at least one method".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether end users may upload images from disk.
    pub fn allows_local_upload(&self) -> bool {
        self.transfer_methods.contains(&TransferMethod::LocalFile)
    }

    /// Whether end users may paste image URLs.
    pub fn allows_remote_url(&self) -> bool {
        self.transfer_methods.contains(&TransferMethod::RemoteUrl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_disabled() {
        let config = VisionConfig::default();
        assert!(!config.enable);
        assert_eq!(config.number_limits, 2);
        assert_eq!(config.detail, Resolution::High);
        assert!(config.allows_local_upload());
        assert!(config.allows_remote_url());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_enabled_alias_is_accepted() {
        let config: VisionConfig =
            serde_yaml_ng::from_str("enabled: true\n").expect("Failed to parse vision config");
        assert!(config.enable);
        assert_eq!(config.number_limits, 2);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = "enable: true\ndetail: low\ntransfer_methods: [remote_url]\n";
        let config: VisionConfig =
            serde_yaml_ng::from_str(yaml).expect("Failed to parse vision config");
        assert!(config.enable);
        assert_eq!(config.detail, Resolution::Low);
        assert!(!config.allows_local_upload());
        assert!(config.allows_remote_url());
    }

    #[test]
    fn test_number_limits_out_of_range_is_rejected() {
        let config = VisionConfig {
            number_limits: 0,
            ..VisionConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(msg)) if msg.contains("number_limits")
        ));

        let config = VisionConfig {
            number_limits: MAX_NUMBER_LIMITS + 1,
            ..VisionConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_transfer_methods_is_rejected() {
        let config = VisionConfig {
            transfer_methods: Vec::new(),
            ..VisionConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(msg)) if msg.contains("transfer_methods")
        ));
    }
}
