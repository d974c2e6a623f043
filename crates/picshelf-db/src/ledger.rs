use picshelf_core::models::UploadRecord;
use picshelf_core::AppError;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::NamedTempFile;
use tokio::sync::Mutex;

#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("Failed to read ledger {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Ledger {path} is not a valid record list: {source}")]
    Corrupt {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write ledger {path}: {message}")]
    Write { path: String, message: String },
}

pub type LedgerResult<T> = Result<T, LedgerError>;

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        AppError::Ledger(err.to_string())
    }
}

/// Repository over the JSON ledger file.
///
/// Writers are serialised through one lock held across read, prepend and
/// persist, so concurrent batches never drop each other's records. Readers
/// take no lock: every write replaces the file by rename, so a reader sees
/// either the old or the new array.
#[derive(Clone)]
pub struct LedgerRepository {
    path: Arc<PathBuf>,
    write_lock: Arc<Mutex<()>>,
}

impl LedgerRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Create the ledger as an empty array if it does not exist yet.
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    pub async fn ensure_initialized(&self) -> LedgerResult<()> {
        let _guard = self.write_lock.lock().await;

        if let Some(parent) = self.parent_dir() {
            tokio::fs::create_dir_all(&parent)
                .await
                .map_err(|e| self.write_error(e))?;
        }

        match tokio::fs::try_exists(self.path.as_path()).await {
            Ok(true) => Ok(()),
            Ok(false) => {
                self.persist(Vec::new()).await?;
                tracing::info!("Initialized empty ledger");
                Ok(())
            }
            Err(source) => Err(LedgerError::Read {
                path: self.path_string(),
                source,
            }),
        }
    }

    /// Load all records, newest first. A missing or blank file is an empty ledger.
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    pub async fn load(&self) -> LedgerResult<Vec<UploadRecord>> {
        let raw = match tokio::fs::read(self.path.as_path()).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(LedgerError::Read {
                    path: self.path_string(),
                    source,
                })
            }
        };

        if raw.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        serde_json::from_slice(&raw).map_err(|source| LedgerError::Corrupt {
            path: self.path_string(),
            source,
        })
    }

    /// Insert `records` at the front of the ledger, in the order given, and
    /// persist the whole array. Returns the new total.
    ///
    /// An empty batch writes nothing beyond creating a missing ledger.
    #[tracing::instrument(skip(self, records), fields(path = %self.path.display(), batch_size = records.len()))]
    pub async fn append_batch(&self, records: Vec<UploadRecord>) -> LedgerResult<usize> {
        if records.is_empty() {
            self.ensure_initialized().await?;
            return Ok(self.load().await?.len());
        }

        let _guard = self.write_lock.lock().await;

        let existing = self.load().await?;
        let batch_size = records.len();
        let mut all = records;
        all.extend(existing);
        let total = all.len();

        self.persist(all).await?;

        tracing::info!(batch_size, total, "Ledger updated");
        Ok(total)
    }

    /// Write `records` to a temp file beside the ledger, fsync, rename over it,
    /// then fsync the directory so the rename itself survives a crash.
    async fn persist(&self, records: Vec<UploadRecord>) -> LedgerResult<()> {
        let json = serde_json::to_vec_pretty(&records).map_err(|e| LedgerError::Write {
            path: self.path_string(),
            message: e.to_string(),
        })?;

        let path = Arc::clone(&self.path);
        let dir = self.parent_dir().unwrap_or_else(|| PathBuf::from("."));

        tokio::task::spawn_blocking(move || -> std::io::Result<()> {
            let mut tmp = NamedTempFile::new_in(&dir)?;
            tmp.write_all(&json)?;
            tmp.write_all(b"\n")?;
            tmp.as_file().sync_all()?;
            tmp.persist(path.as_path()).map_err(|e| e.error)?;
            sync_dir(&dir)
        })
        .await
        .map_err(|e| LedgerError::Write {
            path: self.path_string(),
            message: e.to_string(),
        })?
        .map_err(|e| self.write_error(e))
    }

    fn parent_dir(&self) -> Option<PathBuf> {
        self.path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
    }

    fn path_string(&self) -> String {
        self.path.display().to_string()
    }

    fn write_error(&self, e: std::io::Error) -> LedgerError {
        LedgerError::Write {
            path: self.path_string(),
            message: e.to_string(),
        }
    }
}

#[cfg(unix)]
fn sync_dir(dir: &Path) -> std::io::Result<()> {
    std::fs::File::open(dir)?.sync_all()
}

#[cfg(not(unix))]
fn sync_dir(_dir: &Path) -> std::io::Result<()> {
    Ok(())
}
