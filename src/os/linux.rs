//! Operating system abstraction layer (Linux).
//!
//! Exposes a single function to obtain cryptographically secure random
//! bytes from the kernel, via the `getrandom` system call.

use crate::error::Error;
use libc::{c_void, getrandom};

/// Fills a buffer with cryptographically secure random bytes from the OS.
///
/// Repeatedly calls `getrandom` until the entire buffer is filled; partial
/// reads are handled transparently, which can occur depending on kernel
/// behavior or signal interruptions.
///
/// # Notes
/// - No heap allocation is performed.
/// - The buffer is fully initialized on success.
pub(crate) fn sys_random(buf: &mut [u8]) -> Result<(), Error> {
    let mut filled = 0;

    while filled < buf.len() {
        let ret = unsafe {
            getrandom(
                buf[filled..].as_mut_ptr() as *mut c_void,
                buf.len() - filled,
                0,
            )
        };

        if ret < 0 {
            return Err(Error::RandomnessFailure);
        }

        filled += ret as usize;
    }

    Ok(())
}
