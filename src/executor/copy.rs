//! Atomic file copy with metadata preservation

use crate::types::SyncError;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

/// Copy a file atomically using the write-then-rename strategy
///
/// 1. Write to a temporary `.part` file next to the destination
/// 2. Flush and sync to disk
/// 3. Preserve metadata (permissions, mtime)
/// 4. Atomic rename to the final destination
///
/// The destination's parent directory must already exist; the apply loop
/// requests it through `FileActions::ensure_dir` first.
///
/// # Returns
/// * `Ok(u64)` - Number of bytes copied
/// * `Err(SyncError)` - IO error or other failure
pub fn copy_file_preserving(src: &Path, dest: &Path) -> Result<u64, SyncError> {
    let part_path = dest.with_extension("part");

    let mut src_file = File::open(src).map_err(SyncError::Io)?;
    let mut part_file = File::create(&part_path).map_err(SyncError::Io)?;

    let mut buffer = vec![0u8; 128 * 1024];
    let mut total_bytes = 0u64;

    loop {
        let bytes_read = src_file.read(&mut buffer).map_err(SyncError::Io)?;
        if bytes_read == 0 {
            break; // EOF
        }

        part_file
            .write_all(&buffer[0..bytes_read])
            .map_err(SyncError::Io)?;
        total_bytes += bytes_read as u64;
    }

    part_file.sync_all().map_err(SyncError::Io)?;

    // Drop the file handle before rename (required on Windows)
    drop(part_file);

    let src_metadata = fs::metadata(src).map_err(SyncError::Io)?;

    fs::set_permissions(&part_path, src_metadata.permissions()).map_err(SyncError::Io)?;

    let mtime = src_metadata.modified().map_err(SyncError::Io)?;
    let filetime_mtime = filetime::FileTime::from_system_time(mtime);
    filetime::set_file_mtime(&part_path, filetime_mtime).map_err(SyncError::Io)?;

    // Atomic on POSIX systems (single syscall)
    fs::rename(&part_path, dest).map_err(SyncError::Io)?;

    Ok(total_bytes)
}
