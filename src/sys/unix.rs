use libc::{F_GETFD, fcntl};

use std::io;
use std::os::fd::RawFd;

/// Checks that a descriptor refers to an open file description.
///
/// Used at monitor creation to catch handles whose descriptor has
/// already been closed before anything is programmed into a loop.
pub(crate) fn sys_check_fd(fd: RawFd) -> io::Result<()> {
    let rc = unsafe { fcntl(fd, F_GETFD) };
    if rc < 0 {
        Err(io::Error::last_os_error())
    } else {
        Ok(())
    }
}
