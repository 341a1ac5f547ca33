//! Filesystem helpers for persisting artifacts dropped by emulated macros.
//!
//! Writes go through a temp file in the destination directory which is then linked into
//! place without replacing anything already there, so a half-written artifact never shows
//! up under its final name and an earlier artifact is never clobbered.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

/// Attempts at finding a free `name (N)` slot before giving up.
const MAX_COLLISION_SUFFIX: usize = 10_000;

/// The on-disk name for a file the macro referred to by `name`.
///
/// Only the part after the last `\` or `/` is kept, trimmed. Returns `None` when nothing usable
/// remains (`"C:\\temp\\"`, `".."`, ...).
pub fn dropped_file_name(name: &str) -> Option<String> {
    let base = name.rsplit(&['\\', '/'][..]).next().unwrap_or(name).trim();
    if base.is_empty() || base == "." || base == ".." {
        return None;
    }
    Some(base.to_string())
}

/// First path among `dir/name`, `dir/name (1)`, `dir/name (2)`, ... that does not exist yet.
pub fn unique_destination(dir: &Path, name: &str) -> io::Result<PathBuf> {
    let first = dir.join(name);
    if !first.exists() {
        return Ok(first);
    }
    (1..=MAX_COLLISION_SUFFIX)
        .map(|n| dir.join(format!("{name} ({n})")))
        .find(|candidate| !candidate.exists())
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("no free destination for {name} in {}", dir.display()),
            )
        })
}

/// Write `bytes` into `dir` under a collision-free version of `name`.
///
/// `dir` is created if needed. Returns the path actually written.
pub fn write_dropped_file(dir: &Path, name: &str, bytes: &[u8]) -> io::Result<PathBuf> {
    let base = dropped_file_name(name).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("unusable file name: {name:?}"),
        )
    })?;
    fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.as_file_mut().write_all(bytes)?;
    tmp.as_file_mut().flush()?;
    tmp.as_file().sync_all()?;

    // Another writer may claim the slot between the probe and the link; probe again then.
    for _ in 0..8 {
        let dest = unique_destination(dir, &base)?;
        match tmp.persist_noclobber(&dest) {
            Ok(_) => {
                let _ = sync_dir(dir);
                return Ok(dest);
            }
            Err(err) if err.error.kind() == io::ErrorKind::AlreadyExists => tmp = err.file,
            Err(err) => return Err(err.error),
        }
    }
    Err(io::Error::new(
        io::ErrorKind::AlreadyExists,
        format!("could not claim a destination for {base}"),
    ))
}

fn sync_dir(dir: &Path) -> io::Result<()> {
    // Opening a directory as a file is not supported everywhere; best-effort only.
    File::open(dir)?.sync_all()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dropped_file_name_keeps_only_the_base_name() {
        assert_eq!(
            dropped_file_name("C:\\Users\\Public\\payload.exe").as_deref(),
            Some("payload.exe")
        );
        assert_eq!(dropped_file_name("/tmp/dir/ x.vbs ").as_deref(), Some("x.vbs"));
        assert_eq!(dropped_file_name("plain").as_deref(), Some("plain"));
        assert_eq!(dropped_file_name("C:\\temp\\"), None);
        assert_eq!(dropped_file_name(".."), None);
    }

    #[test]
    fn unique_destination_appends_counter_on_collision() {
        let tmp = tempfile::tempdir().expect("temp dir");
        let dir = tmp.path();

        assert_eq!(unique_destination(dir, "a.bin").expect("dest"), dir.join("a.bin"));

        fs::write(dir.join("a.bin"), b"1").expect("write");
        assert_eq!(
            unique_destination(dir, "a.bin").expect("dest"),
            dir.join("a.bin (1)")
        );

        fs::write(dir.join("a.bin (1)"), b"2").expect("write");
        assert_eq!(
            unique_destination(dir, "a.bin").expect("dest"),
            dir.join("a.bin (2)")
        );
    }

    #[test]
    fn write_dropped_file_never_clobbers_existing_artifacts() {
        let tmp = tempfile::tempdir().expect("temp dir");
        let out = tmp.path().join("dropped");

        let first = write_dropped_file(&out, "C:\\x\\evil.exe", b"first").expect("write first");
        let second = write_dropped_file(&out, "evil.exe", b"second").expect("write second");

        assert_eq!(first, out.join("evil.exe"));
        assert_eq!(second, out.join("evil.exe (1)"));
        assert_eq!(fs::read(&first).expect("read first"), b"first");
        assert_eq!(fs::read(&second).expect("read second"), b"second");

        // No temp files left behind.
        let count = fs::read_dir(&out).expect("read_dir").count();
        assert_eq!(count, 2);
    }

    #[test]
    fn write_dropped_file_rejects_empty_names() {
        let tmp = tempfile::tempdir().expect("temp dir");
        let err = write_dropped_file(tmp.path(), "dir/", b"x").expect_err("empty base name");
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
