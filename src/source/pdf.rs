use super::SourceError;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::Command;
use std::time::{Duration, SystemTime};
use tempfile::{NamedTempFile, TempDir};

/// PDF text-extraction backend. The rest of the crate treats extraction
/// as a black box that yields a string or fails with a message.
pub trait PdfExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, SourceError>;

    /// Name of this backend, for diagnostics.
    fn backend_name(&self) -> &str;
}

/// Default backend: poppler's `pdftotext` run over a temporary copy of
/// the document.
pub struct PdftotextExtractor;

impl PdfExtractor for PdftotextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, SourceError> {
        let mut file = NamedTempFile::with_suffix(".pdf")
            .map_err(|e| SourceError::PdfExtraction(e.to_string()))?;
        file.write_all(bytes)
            .map_err(|e| SourceError::PdfExtraction(e.to_string()))?;

        let output = Command::new("pdftotext")
            .arg(file.path())
            .arg("-") // write extracted text to stdout
            .output()
            .map_err(|e| SourceError::PdfExtraction(format!("failed to launch: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SourceError::PdfExtraction(stderr.trim().to_string()));
        }

        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        if text.trim().is_empty() {
            return Err(SourceError::PdfExtraction(
                "no extractable text; the PDF may be scanned without OCR or corrupted".to_string(),
            ));
        }

        Ok(text)
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

/// Time source for [`PdfStore`], injected so expiry can be tested without
/// waiting on the wall clock.
pub trait Clock {
    fn now(&self) -> SystemTime;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

struct StoredPdf {
    path: PathBuf,
    stored_at: SystemTime,
}

/// Registry of uploaded PDFs kept on disk for later viewing.
///
/// Entries are keyed by the content digest and expire after `ttl`;
/// expired files are removed by an explicit [`PdfStore::sweep_expired`]
/// call rather than a background task. The backing directory is deleted
/// when the store is dropped.
pub struct PdfStore<C: Clock = SystemClock> {
    dir: TempDir,
    entries: HashMap<String, StoredPdf>,
    ttl: Duration,
    clock: C,
}

impl PdfStore<SystemClock> {
    pub fn new(ttl: Duration) -> std::io::Result<Self> {
        Self::with_clock(ttl, SystemClock)
    }
}

impl<C: Clock> PdfStore<C> {
    pub fn with_clock(ttl: Duration, clock: C) -> std::io::Result<Self> {
        Ok(Self {
            dir: TempDir::new()?,
            entries: HashMap::new(),
            ttl,
            clock,
        })
    }

    /// Store a copy of the document and return its id. Storing the same
    /// bytes twice refreshes the existing entry.
    pub fn store(&mut self, bytes: &[u8]) -> std::io::Result<String> {
        let id = format!("{:x}", Sha256::digest(bytes));
        let path = self.dir.path().join(format!("{}.pdf", id));
        fs::write(&path, bytes)?;
        self.entries.insert(
            id.clone(),
            StoredPdf {
                path,
                stored_at: self.clock.now(),
            },
        );
        Ok(id)
    }

    /// Path of a stored document, or `None` if the id is unknown or the
    /// file has already been swept.
    pub fn path(&self, id: &str) -> Option<&PathBuf> {
        self.entries.get(id).map(|entry| &entry.path)
    }

    /// Delete every entry older than the ttl. Returns the number of
    /// entries removed.
    pub fn sweep_expired(&mut self) -> usize {
        let now = self.clock.now();
        let ttl = self.ttl;
        let expired: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| {
                now.duration_since(entry.stored_at)
                    .map(|age| age > ttl)
                    .unwrap_or(false)
            })
            .map(|(id, _)| id.clone())
            .collect();

        for id in &expired {
            if let Some(entry) = self.entries.remove(id) {
                let _ = fs::remove_file(&entry.path);
            }
        }

        expired.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone)]
    struct FakeClock {
        now: Rc<Cell<SystemTime>>,
    }

    impl FakeClock {
        fn new() -> Self {
            Self {
                now: Rc::new(Cell::new(SystemTime::UNIX_EPOCH)),
            }
        }

        fn advance(&self, secs: u64) {
            self.now.set(self.now.get() + Duration::from_secs(secs));
        }
    }

    impl Clock for FakeClock {
        fn now(&self) -> SystemTime {
            self.now.get()
        }
    }

    #[test]
    fn test_store_and_retrieve() {
        let mut store = PdfStore::new(Duration::from_secs(3600)).unwrap();
        let id = store.store(b"%PDF-1.4 fake").unwrap();
        let path = store.path(&id).unwrap();
        assert_eq!(fs::read(path).unwrap(), b"%PDF-1.4 fake");
    }

    #[test]
    fn test_same_bytes_reuse_id() {
        let mut store = PdfStore::new(Duration::from_secs(3600)).unwrap();
        let a = store.store(b"%PDF-1.4 same").unwrap();
        let b = store.store(b"%PDF-1.4 same").unwrap();
        assert_eq!(a, b);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_sweep_removes_only_expired_entries() {
        let clock = FakeClock::new();
        let mut store = PdfStore::with_clock(Duration::from_secs(100), clock.clone()).unwrap();

        let old = store.store(b"%PDF old").unwrap();
        clock.advance(90);
        let fresh = store.store(b"%PDF fresh").unwrap();
        clock.advance(20); // old is 110s, fresh is 20s

        assert_eq!(store.sweep_expired(), 1);
        assert!(store.path(&old).is_none());
        let fresh_path = store.path(&fresh).unwrap().clone();
        assert!(fresh_path.exists());
    }

    #[test]
    fn test_sweep_on_fresh_store_is_noop() {
        let mut store = PdfStore::new(Duration::from_secs(3600)).unwrap();
        store.store(b"%PDF keep").unwrap();
        assert_eq!(store.sweep_expired(), 0);
        assert_eq!(store.len(), 1);
    }
}
