//! Operating system abstraction layer (macOS).
//!
//! Exposes a single function to obtain cryptographically secure random
//! bytes from the system, via `arc4random_buf`.

use crate::error::Error;
use libc::arc4random_buf;

/// Fills a buffer with data provided by the operating system.
///
/// `arc4random_buf` has no error return; it blocks internally until the
/// system RNG is seeded. The `Result` here keeps this function's signature
/// uniform across platforms.
///
/// # Notes
/// - No heap allocation is performed.
/// - The buffer is fully initialized on return.
pub(crate) fn sys_random(buf: &mut [u8]) -> Result<(), Error> {
    unsafe {
        arc4random_buf(buf.as_mut_ptr() as *mut libc::c_void, buf.len());
    }

    Ok(())
}
