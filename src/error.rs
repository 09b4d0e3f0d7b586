use ash::vk;
use thiserror::Error;

/// Reasons the bootstrap sequence can stop before the window loop starts.
///
/// None of these are recoverable; `main` turns them into an exit code.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("Required instance extensions are not available: {missing}")]
    ExtensionUnavailable { missing: String },
    #[error("Validation layers requested, but not available: {missing}")]
    ValidationLayerUnavailable { missing: String },
    #[error("Failed to create Vulkan instance: [{0:?}] {0}")]
    InstanceCreationFailed(vk::Result),
    #[error("Error while querying {what}: {source}")]
    Query {
        what: &'static str,
        #[source]
        source: vk::Result,
    },
}
