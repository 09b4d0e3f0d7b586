//! Startup configuration, built once in `main` and passed down by reference.

use crate::{
    matcher::ReportMode,
    renderer::validation::{should_enable_validation_layers, VALIDATION_LAYER},
    util::VkExtensionName,
};
use std::{borrow::Cow, ffi::CStr};

/// Everything the bootstrap sequence needs to know up front.
#[derive(Clone, Debug)]
pub struct BootstrapConfig {
    pub window: WindowConfig,
    pub application_name: Cow<'static, CStr>,
    pub engine_name: Cow<'static, CStr>,
    pub validation: ValidationConfig,
    /// Whether the extension and layer checks print what they found.
    pub report_mode: ReportMode,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationConfig {
    pub enabled: bool,
    /// Layers that must be present when validation is enabled.
    pub layers: Vec<VkExtensionName>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Vulkan".to_owned(),
            width: 800,
            height: 600,
            resizable: false,
        }
    }
}

impl ValidationConfig {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            layers: vec![VALIDATION_LAYER],
        }
    }
}

impl BootstrapConfig {
    /// Configuration for the current build: validation and verbose reports in
    /// debug builds, neither in release builds.
    pub fn from_build() -> Self {
        Self::with_validation(should_enable_validation_layers())
    }

    /// Default configuration with validation explicitly on or off.
    pub fn with_validation(enabled: bool) -> Self {
        Self {
            window: WindowConfig::default(),
            application_name: Cow::Borrowed(c"Hello Triangle"),
            engine_name: Cow::Borrowed(c"No Engine"),
            validation: ValidationConfig::new(enabled),
            report_mode: if enabled {
                ReportMode::Verbose
            } else {
                ReportMode::Silent
            },
        }
    }
}
