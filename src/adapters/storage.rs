use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new<P: Into<PathBuf>>(base_path: P) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl Storage for LocalStorage {
    fn ensure_dir(&self, path: &Path) -> Result<()> {
        let full_path = self.base_path.join(path);
        fs::create_dir_all(&full_path)?;
        Ok(())
    }

    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
        let full_path = self.base_path.join(path);
        fs::write(full_path, data)?;
        Ok(())
    }
}
