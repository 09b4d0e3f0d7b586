//! Hooks connecting Vulkan's validation API to [`tracing`]

use crate::util::VkExtensionName;
use ash::vk;
use std::{ffi::CStr, os::raw::c_void};
use tracing::{debug, error, trace, warn};

/// Returns true if Vulkan validation layers should be enabled.
///
/// Decided by the build alone: true iff `debug_assertions` is enabled.
#[inline]
pub fn should_enable_validation_layers() -> bool {
    cfg!(debug_assertions)
}

/// The Khronos validation layer bundle, required whenever validation is on.
pub const VALIDATION_LAYER: VkExtensionName =
    VkExtensionName::from_bytes(b"VK_LAYER_KHRONOS_validation\0");

/// Severities and message types the debug messenger subscribes to.
pub(crate) fn debug_messenger_info() -> vk::DebugUtilsMessengerCreateInfoEXT {
    type DebugSeverity = vk::DebugUtilsMessageSeverityFlagsEXT;
    type DebugMsgType = vk::DebugUtilsMessageTypeFlagsEXT;

    vk::DebugUtilsMessengerCreateInfoEXT::builder()
        .message_severity(
            DebugSeverity::VERBOSE
                | DebugSeverity::INFO
                | DebugSeverity::WARNING
                | DebugSeverity::ERROR,
        )
        .message_type(DebugMsgType::GENERAL | DebugMsgType::VALIDATION | DebugMsgType::PERFORMANCE)
        .pfn_user_callback(Some(vk_debug_callback))
        .build()
}

/// Called whenever a validation layer has a message to output.
pub(crate) extern "system" fn vk_debug_callback(
    severity: vk::DebugUtilsMessageSeverityFlagsEXT,
    typ: vk::DebugUtilsMessageTypeFlagsEXT,
    data: *const vk::DebugUtilsMessengerCallbackDataEXT,
    _: *mut c_void,
) -> vk::Bool32 {
    let data = if data.is_null() {
        return vk::FALSE;
    } else {
        unsafe { *data }
    };
    let message_id = unsafe {
        if data.p_message_id_name.is_null() {
            CStr::from_bytes_with_nul_unchecked(b"<undefined id>\0")
        } else {
            CStr::from_ptr(data.p_message_id_name)
        }
    }
    .to_string_lossy();
    let message = unsafe {
        if data.p_message.is_null() {
            CStr::from_bytes_with_nul_unchecked(b"<undefined message>\0")
        } else {
            CStr::from_ptr(data.p_message)
        }
    }
    .to_string_lossy();

    if severity >= vk::DebugUtilsMessageSeverityFlagsEXT::ERROR {
        error!({"type" = ?typ, id = %message_id}, "{}", message);
    } else if severity >= vk::DebugUtilsMessageSeverityFlagsEXT::WARNING {
        warn!({"type" = ?typ, id = %message_id}, "{}", message);
    } else if severity >= vk::DebugUtilsMessageSeverityFlagsEXT::INFO {
        debug!({"type" = ?typ, id = %message_id}, "{}", message);
    } else {
        trace!({"type" = ?typ, id = %message_id}, "{}", message);
    }

    vk::FALSE
}
