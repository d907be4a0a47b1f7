use std::io;
use std::path::{Path, PathBuf};

use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

/// Whole-file reads and writes under a configured root directory.
///
/// Names are resolved as the literal `<root>/<name>` concatenation with no
/// normalization: a name containing `..` resolves outside the root. The
/// store is cheap to clone; every connection task gets its own copy and no
/// locking coordinates concurrent access to the same file.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Literal `<root>/<name>`. Unlike `Path::join`, a leading slash in
    /// `name` does not replace the root.
    fn resolve(&self, name: &str) -> PathBuf {
        let mut path = self.root.as_os_str().to_os_string();
        path.push("/");
        path.push(name);
        PathBuf::from(path)
    }

    /// Reads the whole file. Missing and unreadable files both surface as
    /// the `io::Error`.
    pub async fn read(&self, name: &str) -> io::Result<Vec<u8>> {
        tokio::fs::read(self.resolve(name)).await
    }

    /// Creates or truncates the file and writes `data` verbatim, with
    /// permission mode 0644 on Unix.
    pub async fn write(&self, name: &str, data: &[u8]) -> io::Result<()> {
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(0o644);

        let mut file = options.open(self.resolve(name)).await?;
        file.write_all(data).await?;
        file.flush().await?;

        Ok(())
    }
}
