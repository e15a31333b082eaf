//! Whole-input slurping helpers.
//!
//! Reads a source to end of input, then hands the bytes to
//! [`parse_bytes`](crate::parse_bytes). There is no incremental parsing
//! here; the document must fit in memory.

use std::{fs::File, io::Read, path::Path, vec::Vec};

use crate::{error::Error, value::Value};

/// Reads `reader` to EOF and parses the bytes as a JSON5 document.
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails, otherwise any parse error.
pub fn parse_reader<R: Read>(mut reader: R) -> Result<Value, Error> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    crate::parse_bytes(&bytes)
}

/// Opens `path` and parses its contents as a JSON5 document.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened or read, otherwise
/// any parse error.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Value, Error> {
    parse_reader(File::open(path)?)
}

/// Reads a raw file descriptor to EOF and parses the bytes as a JSON5
/// document. The descriptor is borrowed, not closed.
///
/// # Safety
///
/// `fd` must be a valid, open file descriptor for the duration of the call.
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails, otherwise any parse error.
#[cfg(unix)]
pub unsafe fn parse_fd(fd: std::os::fd::RawFd) -> Result<Value, Error> {
    use core::mem::ManuallyDrop;
    use std::os::fd::FromRawFd;

    let file = ManuallyDrop::new(unsafe { File::from_raw_fd(fd) });
    parse_reader(&*file)
}
