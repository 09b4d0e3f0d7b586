pub mod extensions;
pub mod instance;
pub mod validation;
