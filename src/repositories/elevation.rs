//! Elevation helpers - detect admin rights and relaunch the current executable as admin.

use crate::domain::Result;

/// Check if the current process is running with admin privileges
#[must_use]
pub fn is_admin() -> bool {
    #[cfg(windows)]
    {
        use windows::Win32::Foundation::{CloseHandle, HANDLE};
        use windows::Win32::Security::{
            GetTokenInformation, TokenElevation, TOKEN_ELEVATION, TOKEN_QUERY,
        };
        use windows::Win32::System::Threading::{GetCurrentProcess, OpenProcessToken};

        unsafe {
            let mut token = HANDLE::default();

            if OpenProcessToken(GetCurrentProcess(), TOKEN_QUERY, &raw mut token).is_err() {
                return false;
            }

            let mut elevation = TOKEN_ELEVATION::default();
            let mut return_length = 0u32;

            #[allow(clippy::cast_possible_truncation)]
            let result = GetTokenInformation(
                token,
                TokenElevation,
                Some((&raw mut elevation).cast()),
                std::mem::size_of::<TOKEN_ELEVATION>() as u32,
                &raw mut return_length,
            );

            let _ = CloseHandle(token);

            result.is_ok() && elevation.TokenIsElevated != 0
        }
    }

    #[cfg(not(windows))]
    {
        false
    }
}

/// Join arguments into a single Windows command line.
pub fn join_args<I, S>(args: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    args.into_iter()
        .map(|arg| {
            let arg = arg.as_ref();
            if arg.is_empty() || arg.contains([' ', '\t', '"']) {
                format!("\"{}\"", arg.replace('"', "\\\""))
            } else {
                arg.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Arguments for the elevated copy: the same command line without `--elevate`.
pub fn relaunch_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    args.into_iter().filter(|arg| arg != "--elevate").collect()
}

/// Start the current executable again through the UAC prompt.
pub fn run_as_admin(args: &[String]) -> Result<()> {
    #[cfg(windows)]
    {
        use crate::domain::AppError;
        use std::ffi::OsStr;
        use std::os::windows::ffi::OsStrExt;
        use windows::core::PCWSTR;
        use windows::Win32::UI::Shell::ShellExecuteW;
        use windows::Win32::UI::WindowsAndMessaging::SW_SHOW;

        fn wide(s: &OsStr) -> Vec<u16> {
            s.encode_wide().chain(std::iter::once(0)).collect()
        }

        let exe = std::env::current_exe().map_err(|e| AppError::Other(e.to_string()))?;
        let exe_wide = wide(exe.as_os_str());
        let op_wide = wide(OsStr::new("runas"));
        let params_wide = wide(OsStr::new(&join_args(args)));

        unsafe {
            let hinst = ShellExecuteW(
                None,
                PCWSTR(op_wide.as_ptr()),
                PCWSTR(exe_wide.as_ptr()),
                PCWSTR(params_wide.as_ptr()),
                PCWSTR::null(),
                SW_SHOW,
            );

            // Per docs, return value > 32 indicates success
            let rv = hinst.0 as isize;
            if rv <= 32 {
                return Err(AppError::PermissionDenied(format!(
                    "ShellExecuteW failed: code {}",
                    rv
                )));
            }
        }

        Ok(())
    }

    #[cfg(not(windows))]
    {
        let _ = args;
        Err(crate::domain::AppError::Unsupported("Restart as admin"))
    }
}
