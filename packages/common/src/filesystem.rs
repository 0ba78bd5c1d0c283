use crate::error::CommonError;
use crate::result::CommonResult;
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Component, Path, PathBuf};

/// File system abstraction for preparing output directories and writing
/// generated files, so the pipeline can be tested without touching disk
pub trait FileSystem {
    /// Check if a file or directory exists
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all of its missing parents
    fn create_dir_all(&self, path: &Path) -> CommonResult<()>;

    /// Recursively delete a directory
    fn remove_dir_all(&self, path: &Path) -> CommonResult<()>;

    /// Write `contents` to `path`, replacing any existing file
    fn write(&self, path: &Path, contents: &str) -> CommonResult<()>;

    /// Canonicalize a path (resolve `..` and symlinks, make absolute)
    fn canonicalize(&self, path: &Path) -> CommonResult<PathBuf>;
}

/// Real file system implementation
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> CommonResult<()> {
        std::fs::create_dir_all(path).map_err(|e| CommonError::io(path, e))
    }

    fn remove_dir_all(&self, path: &Path) -> CommonResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| CommonError::io(path, e))
    }

    fn write(&self, path: &Path, contents: &str) -> CommonResult<()> {
        std::fs::write(path, contents).map_err(|e| CommonError::io(path, e))
    }

    fn canonicalize(&self, path: &Path) -> CommonResult<PathBuf> {
        std::fs::canonicalize(path).map_err(|e| CommonError::io(path, e))
    }
}

/// In-memory file system for testing
#[derive(Default)]
pub struct MockFileSystem {
    pub dirs: RefCell<BTreeSet<PathBuf>>,
    pub files: RefCell<BTreeMap<PathBuf, String>>,

    /// Writes to this path fail with `PermissionDenied`
    pub fail_on_write: Option<PathBuf>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_dir(&self, path: impl Into<PathBuf>) {
        self.dirs.borrow_mut().insert(normalize(&path.into()));
    }

    pub fn add_file(&self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        self.files
            .borrow_mut()
            .insert(normalize(&path.into()), contents.into());
    }

    pub fn read(&self, path: &Path) -> Option<String> {
        self.files.borrow().get(&normalize(path)).cloned()
    }
}

/// Resolve `.` and `..` lexically; the mock has no symlinks
fn normalize(path: &Path) -> PathBuf {
    let mut resolved = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other.as_os_str()),
        }
    }
    resolved
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        let path = normalize(path);
        self.dirs.borrow().contains(&path) || self.files.borrow().contains_key(&path)
    }

    fn create_dir_all(&self, path: &Path) -> CommonResult<()> {
        let path = normalize(path);
        let mut dirs = self.dirs.borrow_mut();
        for ancestor in path.ancestors() {
            if !ancestor.as_os_str().is_empty() {
                dirs.insert(ancestor.to_path_buf());
            }
        }
        Ok(())
    }

    fn remove_dir_all(&self, path: &Path) -> CommonResult<()> {
        let path = normalize(path);
        self.dirs.borrow_mut().retain(|d| !d.starts_with(&path));
        self.files.borrow_mut().retain(|f, _| !f.starts_with(&path));
        Ok(())
    }

    fn write(&self, path: &Path, contents: &str) -> CommonResult<()> {
        let target = normalize(path);
        if self.fail_on_write.as_deref().map(normalize) == Some(target.clone()) {
            return Err(CommonError::io(
                path,
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "write refused"),
            ));
        }

        let parent_exists = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => self.dirs.borrow().contains(parent),
            _ => true,
        };
        if !parent_exists {
            return Err(CommonError::io(
                path,
                std::io::Error::new(std::io::ErrorKind::NotFound, "parent directory missing"),
            ));
        }

        self.files.borrow_mut().insert(target, contents.to_string());
        Ok(())
    }

    fn canonicalize(&self, path: &Path) -> CommonResult<PathBuf> {
        let resolved = normalize(path);
        if !self.exists(&resolved) {
            return Err(CommonError::io(
                path,
                std::io::Error::new(std::io::ErrorKind::NotFound, "no such path"),
            ));
        }
        Ok(resolved)
    }
}
