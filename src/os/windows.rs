//! Operating system abstraction layer (Windows).
//!
//! Exposes a single function to obtain cryptographically secure random
//! bytes, via the Windows CNG `BCryptGenRandom` API.

use crate::error::Error;
use windows_sys::Win32::Security::Cryptography::{
    BCRYPT_USE_SYSTEM_PREFERRED_RNG, BCryptGenRandom,
};

/// Fills a buffer with data provided by the operating system.
///
/// # Notes
/// - No heap allocation is performed.
/// - The buffer is fully initialized on success.
pub(crate) fn sys_random(buf: &mut [u8]) -> Result<(), Error> {
    let status = unsafe {
        BCryptGenRandom(
            std::ptr::null_mut(),
            buf.as_mut_ptr(),
            buf.len() as u32,
            BCRYPT_USE_SYSTEM_PREFERRED_RNG,
        )
    };

    if status != 0 {
        return Err(Error::RandomnessFailure);
    }

    Ok(())
}
