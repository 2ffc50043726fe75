use std::fs;
use std::io;
use std::path::Path;

/// The three filesystem primitives a golden store needs.
///
/// Implementations must behave like the host filesystem calls they stand in
/// for: `create_dir_all` is recursive and succeeds when the directory already
/// exists, `read_file` returns the whole file, and `write_file` creates or
/// truncates the target. Modes are POSIX permission bits (e.g. `0o755`).
pub trait FsHandler {
    fn create_dir_all(&self, path: &Path, mode: u32) -> io::Result<()>;
    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>>;
    fn write_file(&self, path: &Path, data: &[u8], mode: u32) -> io::Result<()>;
}

/// `FsHandler` backed by the host filesystem.
///
/// Permission modes are applied on Unix only; elsewhere they are accepted
/// and ignored, matching how `std::fs` exposes permissions per platform.
#[derive(Debug, Default, Clone, Copy)]
pub struct Storage;

impl FsHandler for Storage {
    fn create_dir_all(&self, path: &Path, mode: u32) -> io::Result<()> {
        let mut builder = fs::DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(mode);
        }
        #[cfg(not(unix))]
        let _ = mode;
        builder.create(path)
    }

    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn write_file(&self, path: &Path, data: &[u8], mode: u32) -> io::Result<()> {
        use std::io::Write;

        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(mode);
        }
        #[cfg(not(unix))]
        let _ = mode;
        let mut file = options.open(path)?;
        file.write_all(data)
    }
}
