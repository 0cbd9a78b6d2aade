//! Local host identity.

use crate::error::{Error, Result};

/// Resolve the name of the local host.
///
/// # Errors
///
/// Returns [`Error::HostResolution`] when the OS cannot supply a host name
/// or the name is not valid UTF-8. There is no fallback value; the caller
/// must treat this as fatal for the load that requested it.
pub fn local_host_name() -> Result<String> {
    let name = hostname::get().map_err(|err| Error::host_resolution(err.to_string()))?;

    name.into_string()
        .map_err(|name| Error::host_resolution(format!("host name is not valid UTF-8: {name:?}")))
}
