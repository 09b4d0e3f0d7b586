//! Instance extensions this app asks for.

use crate::util::VkExtensionName;
use ash::{extensions::ext as vk_ext, vk};
use lazy_static::lazy_static;
use raw_window_handle::HasRawWindowHandle;
use std::ffi::CStr;

lazy_static! {
    /// Requested on top of the windowing extensions when validation is on, so
    /// that validation messages can be routed to our logs.
    pub static ref DEBUG_EXTENSION: VkExtensionName =
        VkExtensionName::from_cstr(vk_ext::DebugUtils::name());
}

/// Instance extensions the platform needs for presenting to `window`, in the
/// order the platform reports them.
pub(crate) fn surface_extensions(
    window: &dyn HasRawWindowHandle,
) -> Result<Vec<VkExtensionName>, vk::Result> {
    let names = ash_window::enumerate_required_extensions(window)?;

    Ok(names
        .iter()
        .map(|name| VkExtensionName::from_cstr(unsafe { CStr::from_ptr(*name) }))
        .collect())
}
