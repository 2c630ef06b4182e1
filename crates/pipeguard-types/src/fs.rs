use camino::{Utf8Path, Utf8PathBuf};
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::sync::{Mutex, PoisonError};

/// Filesystem port.
///
/// Every call path that touches the filesystem receives an explicit
/// `&dyn Fs` instead of reaching for ambient process state: validators
/// read targets through it, the renderer writes destinations through it.
/// `OsFs` backs the real binary; `MemFs` backs tests.
pub trait Fs {
    fn read_to_string(&self, path: &Utf8Path) -> io::Result<String>;
    fn write_all(&self, path: &Utf8Path, data: &[u8]) -> io::Result<()>;
    fn exists(&self, path: &Utf8Path) -> bool;
    fn create_dir_all(&self, path: &Utf8Path) -> io::Result<()>;
}

/// The process filesystem.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsFs;

impl Fs for OsFs {
    fn read_to_string(&self, path: &Utf8Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write_all(&self, path: &Utf8Path, data: &[u8]) -> io::Result<()> {
        std::fs::write(path, data)
    }

    fn exists(&self, path: &Utf8Path) -> bool {
        path.as_std_path().exists()
    }

    fn create_dir_all(&self, path: &Utf8Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }
}

#[derive(Debug, Default)]
struct MemFsState {
    files: BTreeMap<Utf8PathBuf, Vec<u8>>,
    dirs: BTreeSet<Utf8PathBuf>,
}

/// In-memory filesystem for tests.
///
/// Paths are compared literally (no normalization); writes create parent
/// directories implicitly, like a sandboxed scratch filesystem.
#[derive(Debug, Default)]
pub struct MemFs {
    state: Mutex<MemFsState>,
}

impl MemFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw bytes of a stored file, if present. Test-assertion convenience.
    pub fn contents(&self, path: impl AsRef<Utf8Path>) -> Option<Vec<u8>> {
        self.lock().files.get(path.as_ref()).cloned()
    }

    /// Number of stored files. Test-assertion convenience.
    pub fn file_count(&self) -> usize {
        self.lock().files.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemFsState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Fs for MemFs {
    fn read_to_string(&self, path: &Utf8Path) -> io::Result<String> {
        let state = self.lock();
        let data = state
            .files
            .get(path)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("no such file: {path}")))?;
        String::from_utf8(data.clone())
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidData, format!("not utf-8: {path}")))
    }

    fn write_all(&self, path: &Utf8Path, data: &[u8]) -> io::Result<()> {
        self.lock().files.insert(path.to_owned(), data.to_vec());
        Ok(())
    }

    fn exists(&self, path: &Utf8Path) -> bool {
        let state = self.lock();
        state.files.contains_key(path)
            || state.dirs.contains(path)
            || state.files.keys().any(|file| file.starts_with(path))
    }

    fn create_dir_all(&self, path: &Utf8Path) -> io::Result<()> {
        let mut state = self.lock();
        for ancestor in path.ancestors() {
            if !ancestor.as_str().is_empty() {
                state.dirs.insert(ancestor.to_owned());
            }
        }
        Ok(())
    }
}
