//! Small helper types shared across the crate.

use ash::vk;
use std::{
    ffi::CStr,
    fmt,
    hash::{Hash, Hasher},
    os::raw::c_char,
};

/// A fixed-size, nul-terminated name of a Vulkan extension or layer.
///
/// Vulkan reports these as `[c_char; 256]` arrays, so this type stores them
/// the same way and can hand out pointers for create-info structs without
/// allocating.
///
/// Two names are equal if their bytes up to the first nul are equal. Whatever
/// the driver left after the terminator is ignored.
#[derive(Clone, Copy)]
pub struct VkExtensionName([c_char; vk::MAX_EXTENSION_NAME_SIZE]);

impl VkExtensionName {
    /// Build a name from a nul-terminated byte string.
    ///
    /// Usable in `const` items. Panics if the input isn't nul-terminated or
    /// doesn't fit.
    pub const fn from_bytes(bytes: &[u8]) -> Self {
        assert!(
            !bytes.is_empty() && bytes[bytes.len() - 1] == 0,
            "extension name must be nul-terminated"
        );
        assert!(
            bytes.len() <= vk::MAX_EXTENSION_NAME_SIZE,
            "extension name is too long"
        );

        let mut name = [0 as c_char; vk::MAX_EXTENSION_NAME_SIZE];
        let mut i = 0;
        while i < bytes.len() {
            name[i] = bytes[i] as c_char;
            i += 1;
        }

        Self(name)
    }

    /// Copy a name out of a C string. Names that don't fit are truncated.
    pub fn from_cstr(s: &CStr) -> Self {
        let mut name = [0 as c_char; vk::MAX_EXTENSION_NAME_SIZE];
        for (dst, src) in name
            .iter_mut()
            .zip(s.to_bytes().iter().take(vk::MAX_EXTENSION_NAME_SIZE - 1))
        {
            *dst = *src as c_char;
        }
        Self(name)
    }

    #[inline]
    pub fn as_ptr(&self) -> *const c_char {
        self.0.as_ptr()
    }

    /// The name's bytes, not including the terminator.
    pub fn as_bytes(&self) -> &[u8] {
        self.as_cstr().to_bytes()
    }

    pub fn as_cstr(&self) -> &CStr {
        // every constructor leaves at least one nul inside the array.
        // c_char and u8 have the same size and alignment
        let bytes = unsafe {
            std::slice::from_raw_parts(self.0.as_ptr().cast::<u8>(), vk::MAX_EXTENSION_NAME_SIZE)
        };
        CStr::from_bytes_until_nul(bytes).unwrap_or_default()
    }

    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(self.as_bytes()).into_owned()
    }
}

impl From<[c_char; vk::MAX_EXTENSION_NAME_SIZE]> for VkExtensionName {
    fn from(raw: [c_char; vk::MAX_EXTENSION_NAME_SIZE]) -> Self {
        // Don't trust the driver to have terminated the name
        let mut name = raw;
        name[vk::MAX_EXTENSION_NAME_SIZE - 1] = 0;
        Self(name)
    }
}

impl PartialEq for VkExtensionName {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for VkExtensionName {}

impl Hash for VkExtensionName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl fmt::Display for VkExtensionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

impl fmt::Debug for VkExtensionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.to_string_lossy())
    }
}

/// Join a list of names into a single comma-separated string for messages.
pub fn join_names<'a, I>(names: I) -> String
where
    I: IntoIterator<Item = &'a VkExtensionName>,
{
    names
        .into_iter()
        .map(VkExtensionName::to_string_lossy)
        .collect::<Vec<_>>()
        .join(", ")
}
