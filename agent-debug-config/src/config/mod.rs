//! The debug configuration document.
//!
//! # Sub-modules
//!
//! - [`persistence`]: `impl DebugConfiguration` methods for load/save and path resolution

pub mod persistence;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::vision::VisionConfig;

/// Shared configuration surfaced to every panel of the debug view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebugConfiguration {
    /// Image input settings
    #[serde(default)]
    pub vision_config: VisionConfig,
}

impl DebugConfiguration {
    /// Validate every section of the document.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.vision_config.validate()
    }
}
