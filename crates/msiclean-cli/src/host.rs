use anyhow::Result;

#[cfg(windows)]
pub(crate) fn is_elevated() -> Result<bool> {
    use anyhow::Context;
    use windows::Win32::Foundation::{CloseHandle, HANDLE};
    use windows::Win32::Security::{
        GetTokenInformation, TokenElevation, TOKEN_ELEVATION, TOKEN_QUERY,
    };
    use windows::Win32::System::Threading::{GetCurrentProcess, OpenProcessToken};

    struct TokenGuard(HANDLE);

    impl Drop for TokenGuard {
        fn drop(&mut self) {
            unsafe {
                let _ = CloseHandle(self.0);
            }
        }
    }

    unsafe {
        let mut token = HANDLE::default();
        OpenProcessToken(GetCurrentProcess(), TOKEN_QUERY, &mut token)
            .context("failed to open the process token")?;
        let token = TokenGuard(token);

        let mut elevation = TOKEN_ELEVATION::default();
        let mut returned = 0_u32;
        GetTokenInformation(
            token.0,
            TokenElevation,
            Some(&mut elevation as *mut TOKEN_ELEVATION as *mut core::ffi::c_void),
            std::mem::size_of::<TOKEN_ELEVATION>() as u32,
            &mut returned,
        )
        .context("failed to query the process token elevation")?;

        Ok(elevation.TokenIsElevated != 0)
    }
}

#[cfg(not(windows))]
pub(crate) fn is_elevated() -> Result<bool> {
    Ok(false)
}

#[cfg(windows)]
pub(crate) fn open_local_machine() -> Result<msiclean_registry::WindowsRegistry> {
    Ok(msiclean_registry::WindowsRegistry::local_machine())
}

#[cfg(not(windows))]
pub(crate) fn open_local_machine() -> Result<msiclean_registry::MemoryRegistry> {
    Err(anyhow::anyhow!(
        "the installer registry is available only on Windows hosts"
    ))
}
