//! Registry access helpers - thin wrapper over winreg.

use crate::domain::{Hive, RegAction, RegEdit, Result};

pub trait RegistryStore {
    fn read_dword(&self, hive: Hive, key: &str, value: &str) -> Result<Option<u32>>;
    fn read_string(&self, hive: Hive, key: &str, value: &str) -> Result<Option<String>>;
    fn set_dword(&self, hive: Hive, key: &str, value: &str, data: u32) -> Result<()>;
    fn set_string(&self, hive: Hive, key: &str, value: &str, data: &str) -> Result<()>;
    /// Missing keys or values are not an error.
    fn delete_value(&self, hive: Hive, key: &str, value: &str) -> Result<()>;
    /// Missing keys are not an error.
    fn delete_tree(&self, hive: Hive, key: &str) -> Result<()>;
}

pub fn apply_edit(store: &dyn RegistryStore, edit: &RegEdit) -> Result<()> {
    match edit.action {
        RegAction::Dword(data) => store.set_dword(edit.hive, edit.key, edit.value, data),
        RegAction::String(data) => store.set_string(edit.hive, edit.key, edit.value, data),
        RegAction::DeleteValue => store.delete_value(edit.hive, edit.key, edit.value),
        RegAction::DeleteTree => store.delete_tree(edit.hive, edit.key),
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRegistry;

#[cfg(windows)]
mod imp {
    use super::{RegistryStore, SystemRegistry};
    use crate::domain::{AppError, Hive, Result};
    use std::io;
    use winreg::enums::*;
    use winreg::{RegKey, HKEY};

    fn predef(hive: Hive) -> RegKey {
        let hkey: HKEY = match hive {
            Hive::CurrentUser => HKEY_CURRENT_USER,
            Hive::LocalMachine => HKEY_LOCAL_MACHINE,
        };
        RegKey::predef(hkey)
    }

    fn registry_error(hive: Hive, key: &str, e: io::Error) -> AppError {
        if e.kind() == io::ErrorKind::PermissionDenied {
            AppError::PermissionDenied(format!("{}\\{}", hive.short_name(), key))
        } else {
            AppError::Registry(format!("{}\\{}: {}", hive.short_name(), key, e))
        }
    }

    fn missing_ok<T>(result: io::Result<T>) -> io::Result<Option<T>> {
        match result {
            Ok(v) => Ok(Some(v)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    impl SystemRegistry {
        fn read<T: winreg::types::FromRegValue>(
            &self,
            hive: Hive,
            key: &str,
            value: &str,
        ) -> Result<Option<T>> {
            let Some(subkey) =
                missing_ok(predef(hive).open_subkey(key)).map_err(|e| registry_error(hive, key, e))?
            else {
                return Ok(None);
            };
            missing_ok(subkey.get_value::<T, _>(value)).map_err(|e| registry_error(hive, key, e))
        }

        fn create(&self, hive: Hive, key: &str) -> Result<RegKey> {
            predef(hive)
                .create_subkey(key)
                .map(|(key, _)| key)
                .map_err(|e| registry_error(hive, key, e))
        }
    }

    impl RegistryStore for SystemRegistry {
        fn read_dword(&self, hive: Hive, key: &str, value: &str) -> Result<Option<u32>> {
            self.read(hive, key, value)
        }

        fn read_string(&self, hive: Hive, key: &str, value: &str) -> Result<Option<String>> {
            self.read(hive, key, value)
        }

        fn set_dword(&self, hive: Hive, key: &str, value: &str, data: u32) -> Result<()> {
            self.create(hive, key)?
                .set_value(value, &data)
                .map_err(|e| registry_error(hive, key, e))
        }

        fn set_string(&self, hive: Hive, key: &str, value: &str, data: &str) -> Result<()> {
            self.create(hive, key)?
                .set_value(value, &data.to_string())
                .map_err(|e| registry_error(hive, key, e))
        }

        fn delete_value(&self, hive: Hive, key: &str, value: &str) -> Result<()> {
            let opened = missing_ok(predef(hive).open_subkey_with_flags(key, KEY_SET_VALUE))
                .map_err(|e| registry_error(hive, key, e))?;
            if let Some(subkey) = opened {
                missing_ok(subkey.delete_value(value)).map_err(|e| registry_error(hive, key, e))?;
            }
            Ok(())
        }

        fn delete_tree(&self, hive: Hive, key: &str) -> Result<()> {
            missing_ok(predef(hive).delete_subkey_all(key))
                .map(|_| ())
                .map_err(|e| registry_error(hive, key, e))
        }
    }
}

#[cfg(not(windows))]
mod imp {
    use super::{RegistryStore, SystemRegistry};
    use crate::domain::{AppError, Hive, Result};

    const WHAT: &str = "The Windows registry";

    impl RegistryStore for SystemRegistry {
        fn read_dword(&self, _: Hive, _: &str, _: &str) -> Result<Option<u32>> {
            Err(AppError::Unsupported(WHAT))
        }

        fn read_string(&self, _: Hive, _: &str, _: &str) -> Result<Option<String>> {
            Err(AppError::Unsupported(WHAT))
        }

        fn set_dword(&self, _: Hive, _: &str, _: &str, _: u32) -> Result<()> {
            Err(AppError::Unsupported(WHAT))
        }

        fn set_string(&self, _: Hive, _: &str, _: &str, _: &str) -> Result<()> {
            Err(AppError::Unsupported(WHAT))
        }

        fn delete_value(&self, _: Hive, _: &str, _: &str) -> Result<()> {
            Err(AppError::Unsupported(WHAT))
        }

        fn delete_tree(&self, _: Hive, _: &str) -> Result<()> {
            Err(AppError::Unsupported(WHAT))
        }
    }
}
