//! Bootstrap property derivation for resolved resources.

mod host;
mod loader;
mod properties;

pub use host::local_host_name;
pub use loader::{PropertyLoader, SOURCE_NAME, build_properties};
pub use properties::{
    CONFIG_IMPORT, CONFIG_LABEL, CONFIG_NAME, CONFIG_PROFILE, HOST_NAME, PropertySource,
};
