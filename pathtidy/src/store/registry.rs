//! Registry-backed environment store.
//!
//! Values are read raw: `REG_EXPAND_SZ` data is returned without expansion so
//! that placeholder references reach the expander verbatim.

use super::{EnvironmentStore, Scope};
use crate::error::{Error, Result};

/// Reads environment values from the Windows registry.
///
/// On other platforms every read fails with [`Error::EnvironmentLookup`].
#[derive(Debug, Default, Clone, Copy)]
pub struct RegistryStore;

impl RegistryStore {
    /// Create a registry store.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[cfg(windows)]
impl EnvironmentStore for RegistryStore {
    fn read_value(&self, scope: Scope, name: &str) -> Result<String> {
        log::debug!(
            "reading {name} from {}\\{}",
            scope.hive_name(),
            scope.key_path()
        );
        windows_impl::read_string(scope, name)
    }
}

#[cfg(not(windows))]
impl EnvironmentStore for RegistryStore {
    fn read_value(&self, scope: Scope, name: &str) -> Result<String> {
        Err(Error::EnvironmentLookup {
            scope: Some(scope),
            name: name.to_string(),
            reason: "registry is only available on Windows (use a snapshot file)".into(),
        })
    }
}

/// Decode registry string data, rejecting invalid UTF-16.
#[cfg_attr(not(windows), allow(dead_code))]
fn decode_wide(scope: Scope, name: &str, data: &[u16]) -> Result<String> {
    String::from_utf16(data).map_err(|_| Error::EnvironmentLookup {
        scope: Some(scope),
        name: name.to_string(),
        reason: "value is not valid Unicode".into(),
    })
}

#[cfg(windows)]
#[allow(unsafe_code)]
mod windows_impl {
    use super::{decode_wide, Error, Result, Scope};
    use windows::core::PCWSTR;
    use windows::Win32::Foundation::{
        ERROR_ACCESS_DENIED, ERROR_FILE_NOT_FOUND, ERROR_MORE_DATA, ERROR_SUCCESS, WIN32_ERROR,
    };
    use windows::Win32::System::Registry::{
        RegCloseKey, RegGetValueW, RegOpenKeyExW, HKEY, HKEY_CURRENT_USER, HKEY_LOCAL_MACHINE,
        KEY_QUERY_VALUE, REG_VALUE_TYPE, RRF_NOEXPAND, RRF_RT_REG_EXPAND_SZ, RRF_RT_REG_SZ,
    };

    /// Attempts made when the value grows between the size probe and the read.
    const READ_ATTEMPTS: usize = 3;

    /// Closes the key when dropped.
    struct OpenKey(HKEY);

    impl Drop for OpenKey {
        fn drop(&mut self) {
            let _ = unsafe { RegCloseKey(self.0) };
        }
    }

    fn to_wide(s: &str) -> Vec<u16> {
        let mut wide: Vec<u16> = s.encode_utf16().collect();
        wide.push(0);
        wide
    }

    fn lookup_error(scope: Scope, name: &str, status: WIN32_ERROR, what: &str) -> Error {
        let reason = match status {
            ERROR_FILE_NOT_FOUND => format!("{what} not found"),
            ERROR_ACCESS_DENIED => "access denied".to_string(),
            other => format!("registry status {}", other.0),
        };
        Error::EnvironmentLookup {
            scope: Some(scope),
            name: name.to_string(),
            reason,
        }
    }

    fn open_key(scope: Scope, name: &str) -> Result<OpenKey> {
        let hive = match scope {
            Scope::User => HKEY_CURRENT_USER,
            Scope::Machine => HKEY_LOCAL_MACHINE,
        };
        let wide_path = to_wide(scope.key_path());
        let mut key = HKEY::default();
        let status = unsafe {
            RegOpenKeyExW(
                hive,
                PCWSTR(wide_path.as_ptr()),
                Some(0),
                KEY_QUERY_VALUE,
                &mut key,
            )
        };
        if status != ERROR_SUCCESS {
            return Err(lookup_error(scope, name, status, "key"));
        }
        Ok(OpenKey(key))
    }

    pub(super) fn read_string(scope: Scope, name: &str) -> Result<String> {
        let key = open_key(scope, name)?;
        let value_name = to_wide(name);
        let flags = RRF_RT_REG_SZ | RRF_RT_REG_EXPAND_SZ | RRF_NOEXPAND;

        for _ in 0..READ_ATTEMPTS {
            let mut value_type = REG_VALUE_TYPE(0);
            let mut size_bytes: u32 = 0;
            let status = unsafe {
                RegGetValueW(
                    key.0,
                    PCWSTR::null(),
                    PCWSTR(value_name.as_ptr()),
                    flags,
                    Some(&mut value_type),
                    None,
                    Some(&mut size_bytes),
                )
            };
            if status != ERROR_SUCCESS {
                return Err(lookup_error(scope, name, status, "value"));
            }

            let mut buffer: Vec<u16> = vec![0u16; (size_bytes as usize / 2).max(1)];
            let status = unsafe {
                RegGetValueW(
                    key.0,
                    PCWSTR::null(),
                    PCWSTR(value_name.as_ptr()),
                    flags,
                    Some(&mut value_type),
                    Some(buffer.as_mut_ptr().cast()),
                    Some(&mut size_bytes),
                )
            };
            if status == ERROR_MORE_DATA {
                continue;
            }
            if status != ERROR_SUCCESS {
                return Err(lookup_error(scope, name, status, "value"));
            }

            // size_bytes includes the terminating null
            let char_len = (size_bytes as usize / 2).saturating_sub(1);
            buffer.truncate(char_len);
            return decode_wide(scope, name, &buffer);
        }

        Err(Error::EnvironmentLookup {
            scope: Some(scope),
            name: name.to_string(),
            reason: "value kept changing while being read".into(),
        })
    }
}
