use std::collections::BTreeMap;
use std::io::{Error, ErrorKind};
use std::path::{Component, Path, PathBuf};

use crate::config::FileSystem;

/// In-memory config tree rooted at `/project`, with a user config dir.
pub struct MockFileSystem {
    files: BTreeMap<PathBuf, String>,
    cwd: PathBuf,
    user_dir: Option<PathBuf>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self {
            files: BTreeMap::new(),
            cwd: PathBuf::from("/project"),
            user_dir: Some(PathBuf::from("/home/user/.config/chronos-timemap")),
        }
    }

    pub fn with_file(mut self, path: impl AsRef<Path>, content: &str) -> Self {
        self.files.insert(lexical(path.as_ref()), content.to_string());
        self
    }

    pub fn in_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.cwd = path.into();
        self
    }

    pub fn with_user_dir(mut self, path: Option<PathBuf>) -> Self {
        self.user_dir = path;
        self
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        self.files
            .get(&lexical(path))
            .cloned()
            .ok_or_else(|| Error::new(ErrorKind::NotFound, "no such mock file"))
    }

    fn is_file(&self, path: &Path) -> bool {
        self.files.contains_key(&lexical(path))
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        Ok(self.cwd.clone())
    }

    fn user_config_dir(&self) -> Option<PathBuf> {
        self.user_dir.clone()
    }
}

/// Resolve `.` and `..` without consulting a real disk.
fn lexical(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}
