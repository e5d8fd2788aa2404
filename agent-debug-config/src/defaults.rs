//! Default value functions for configuration.
//!
//! Used as `#[serde(default = "crate::defaults::...")]` attributes so a
//! partially written YAML file still deserializes into a complete document.

use crate::vision::TransferMethod;

/// Smallest accepted image count per message.
pub const MIN_NUMBER_LIMITS: u32 = 1;

/// Largest accepted image count per message.
pub const MAX_NUMBER_LIMITS: u32 = 6;

pub fn bool_false() -> bool {
    false
}

pub fn number_limits() -> u32 {
    2
}

pub fn transfer_methods() -> Vec<TransferMethod> {
    vec![TransferMethod::LocalFile, TransferMethod::RemoteUrl]
}
