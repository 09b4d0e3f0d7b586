//! Functions for creating Vulkan instances.

use super::validation::debug_messenger_info;
use crate::util::VkExtensionName;
use ash::{extensions::ext as vk_ext, vk, Entry, Instance};
use color_eyre::{
    eyre::{eyre, Context},
    Result,
};
use std::ffi::CStr;
use tracing::debug;

/// Everything needed to create an instance, once the requested extensions
/// and layers are known to be available.
#[derive(Clone, Copy, Debug)]
pub struct InstanceRequest<'a> {
    pub application_name: &'a CStr,
    pub application_version: u32,
    pub engine_name: &'a CStr,
    pub engine_version: u32,
    pub api_version: u32,
    /// Passed to the driver verbatim, in this order.
    pub extensions: &'a [VkExtensionName],
    pub layers: &'a [VkExtensionName],
    /// Hook validation messages up to [`tracing`]. Needs the debug-utils
    /// extension in `extensions`.
    pub debug_messenger: bool,
}

/// The graphics API, as far as bootstrapping an instance is concerned.
///
/// The queries must not have side effects on the host.
pub trait GraphicsApi {
    type Instance;

    /// Every instance extension the host offers.
    fn available_extensions(&self) -> Result<Vec<VkExtensionName>, vk::Result>;

    /// Every instance layer the host offers.
    fn available_layers(&self) -> Result<Vec<VkExtensionName>, vk::Result>;

    fn create_instance(&self, request: &InstanceRequest<'_>) -> Result<Self::Instance, vk::Result>;

    fn destroy_instance(&self, instance: Self::Instance);
}

/// [`GraphicsApi`] backed by the system's Vulkan loader.
pub struct AshGraphicsApi {
    entry: Entry,
}

/// A live Vulkan instance, plus the debug messenger attached to it (if any).
pub struct AshInstance {
    instance: Instance,
    messenger: Option<(vk_ext::DebugUtils, vk::DebugUtilsMessengerEXT)>,
}

impl AshInstance {
    #[inline]
    pub fn handle(&self) -> &Instance {
        &self.instance
    }
}

impl AshGraphicsApi {
    /// Load the Vulkan library.
    #[tracing::instrument(level = "DEBUG", name = "AshGraphicsApi::load")]
    pub fn load() -> Result<Self> {
        debug!("Loading instance of Vulkan library");
        let entry = unsafe { Entry::load() }
            .map_err(|e| eyre!("{e}"))
            .wrap_err("Error loading Vulkan library")?;

        Ok(Self { entry })
    }
}

impl GraphicsApi for AshGraphicsApi {
    type Instance = AshInstance;

    fn available_extensions(&self) -> Result<Vec<VkExtensionName>, vk::Result> {
        Ok(self
            .entry
            .enumerate_instance_extension_properties(None)?
            .iter()
            .map(|e| VkExtensionName::from(e.extension_name))
            .collect())
    }

    fn available_layers(&self) -> Result<Vec<VkExtensionName>, vk::Result> {
        Ok(self
            .entry
            .enumerate_instance_layer_properties()?
            .iter()
            .map(|l| VkExtensionName::from(l.layer_name))
            .collect())
    }

    #[tracing::instrument(level = "DEBUG", name = "AshGraphicsApi::create_instance", skip_all)]
    fn create_instance(&self, request: &InstanceRequest<'_>) -> Result<AshInstance, vk::Result> {
        let app_info = vk::ApplicationInfo::builder()
            .application_name(request.application_name)
            .application_version(request.application_version)
            .engine_name(request.engine_name)
            .engine_version(request.engine_version)
            .api_version(request.api_version);

        let extensions = request
            .extensions
            .iter()
            .map(VkExtensionName::as_ptr)
            .collect::<Vec<_>>();
        let layers = request
            .layers
            .iter()
            .map(VkExtensionName::as_ptr)
            .collect::<Vec<_>>();

        let mut debug_info = debug_messenger_info();

        let mut instance_info = vk::InstanceCreateInfo::builder()
            .application_info(&app_info)
            .enabled_layer_names(&layers)
            .enabled_extension_names(&extensions);

        // Also catches messages from instance creation and destruction
        if request.debug_messenger {
            instance_info = instance_info.push_next(&mut debug_info);
        }

        let instance = unsafe { self.entry.create_instance(&instance_info, None)? };

        let messenger = if request.debug_messenger {
            let debug_utils = vk_ext::DebugUtils::new(&self.entry, &instance);
            match unsafe { debug_utils.create_debug_utils_messenger(&debug_info, None) } {
                Ok(messenger) => Some((debug_utils, messenger)),
                Err(e) => {
                    unsafe { instance.destroy_instance(None) };
                    return Err(e);
                }
            }
        } else {
            None
        };

        Ok(AshInstance {
            instance,
            messenger,
        })
    }

    #[tracing::instrument(level = "DEBUG", name = "AshGraphicsApi::destroy_instance", skip_all)]
    fn destroy_instance(&self, instance: AshInstance) {
        unsafe {
            if let Some((debug_utils, messenger)) = instance.messenger {
                debug_utils.destroy_debug_utils_messenger(messenger, None);
            }

            instance.instance.destroy_instance(None);
        }
    }
}
