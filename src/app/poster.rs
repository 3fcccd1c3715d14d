// ShowBill - app/poster.rs
//
// Poster fetch lifecycle. Downloads and decodes the single poster image
// on a background thread, sending progress messages to the UI thread
// via an mpsc channel.
//
// Architecture:
//   - `PosterManager` lives on the UI thread; `run_fetch` runs on a
//     background thread.
//   - An `Arc<AtomicBool>` cancel flag stops an in-flight fetch when a
//     new show file replaces the poster URL.
//   - Decoded RGBA frames cross the channel as plain buffers; textures
//     are created on the UI side.
//
// Failure is always non-fatal: the UI renders placeholder fills when no
// poster frame ever arrives.

use crate::util::constants;
use crate::util::error::PosterError;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::time::Duration;

// =============================================================================
// Constants
// =============================================================================

/// Retry limits for transient network errors.
const MAX_RETRIES: u32 = 3;
const RETRY_DELAYS_MS: [u64; 3] = [250, 500, 1000];

// =============================================================================
// Progress messages
// =============================================================================

/// Progress messages sent from the fetch thread to the UI thread.
#[derive(Debug, Clone)]
pub enum PosterProgress {
    /// The fetch thread started working on this URL.
    Started { url: String },

    /// The poster is ready: a decoded RGBA8 frame.
    Loaded {
        width: usize,
        height: usize,
        rgba: Vec<u8>,
        from_cache: bool,
    },

    /// The fetch failed; the UI keeps its placeholder.
    Failed { error: String },
}

// =============================================================================
// PosterManager
// =============================================================================

/// Manages a poster fetch on a background thread.
pub struct PosterManager {
    /// Channel receiver for the UI to poll progress messages.
    progress_rx: Option<mpsc::Receiver<PosterProgress>>,

    /// Cancel flag shared with the background thread.
    cancel_flag: Option<Arc<AtomicBool>>,

    /// True between `start_fetch` and a terminal message.
    pub in_flight: bool,
}

impl PosterManager {
    pub fn new() -> Self {
        Self {
            progress_rx: None,
            cancel_flag: None,
            in_flight: false,
        }
    }

    /// Start fetching `url`, caching the payload under `cache_dir`.
    ///
    /// Spawns a background thread immediately; progress is sent over the
    /// channel. An already-running fetch is cancelled first.
    pub fn start_fetch(&mut self, url: String, cache_dir: PathBuf, timeout_secs: u64) {
        self.cancel();

        let (tx, rx) = mpsc::channel();
        let cancel = Arc::new(AtomicBool::new(false));

        self.progress_rx = Some(rx);
        self.cancel_flag = Some(Arc::clone(&cancel));
        self.in_flight = true;

        std::thread::spawn(move || {
            run_fetch(url, cache_dir, timeout_secs, tx, cancel);
        });

        tracing::info!("Poster fetch started");
    }

    /// Request cancellation of the running fetch.
    pub fn cancel(&mut self) {
        if let Some(flag) = &self.cancel_flag {
            flag.store(true, Ordering::SeqCst);
        }
        self.cancel_flag = None;
        self.in_flight = false;
    }

    /// Poll for progress messages without blocking. Returns all pending
    /// messages and clears `in_flight` on a terminal message.
    pub fn poll_progress(&mut self) -> Vec<PosterProgress> {
        let mut messages = Vec::new();
        if let Some(ref rx) = self.progress_rx {
            while let Ok(msg) = rx.try_recv() {
                if matches!(
                    msg,
                    PosterProgress::Loaded { .. } | PosterProgress::Failed { .. }
                ) {
                    self.in_flight = false;
                }
                messages.push(msg);
            }
        }
        messages
    }
}

impl Default for PosterManager {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Background fetch pipeline
// =============================================================================

/// Full fetch pipeline: cache probe, download with retry, decode, cache
/// write, delivery. Runs on a background thread.
fn run_fetch(
    url: String,
    cache_dir: PathBuf,
    timeout_secs: u64,
    tx: mpsc::Sender<PosterProgress>,
    cancel: Arc<AtomicBool>,
) {
    macro_rules! send {
        ($msg:expr) => {
            if tx.send($msg).is_err() {
                return; // Receiver dropped (UI closed); exit quietly.
            }
        };
    }

    macro_rules! check_cancel {
        () => {
            if cancel.load(Ordering::SeqCst) {
                tracing::debug!("Poster fetch cancelled");
                return;
            }
        };
    }

    send!(PosterProgress::Started { url: url.clone() });

    // Cache probe: reuse the stored payload when its recorded URL still
    // matches. Decode failures fall through to a fresh download.
    if let Some(bytes) = read_cache(&cache_dir, &url) {
        match decode(&bytes, &url) {
            Ok((width, height, rgba)) => {
                tracing::info!(width, height, "Poster served from cache");
                send!(PosterProgress::Loaded {
                    width,
                    height,
                    rgba,
                    from_cache: true,
                });
                return;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Cached poster is corrupt; refetching");
            }
        }
    }

    check_cancel!();

    let bytes = match download_with_retry(&url, timeout_secs, &cancel) {
        Ok(Some(bytes)) => bytes,
        Ok(None) => return, // cancelled between retries
        Err(e) => {
            tracing::warn!(error = %e, "Poster download failed");
            send!(PosterProgress::Failed {
                error: e.to_string(),
            });
            return;
        }
    };

    check_cancel!();

    let (width, height, rgba) = match decode(&bytes, &url) {
        Ok(frame) => frame,
        Err(e) => {
            tracing::warn!(error = %e, "Poster decode failed");
            send!(PosterProgress::Failed {
                error: e.to_string(),
            });
            return;
        }
    };

    // Cache write failures are logged and ignored; the frame still ships.
    if let Err(e) = write_cache(&cache_dir, &url, &bytes) {
        tracing::debug!(error = %e, "Could not write poster cache");
    }

    tracing::info!(width, height, bytes = bytes.len(), "Poster downloaded");
    send!(PosterProgress::Loaded {
        width,
        height,
        rgba,
        from_cache: false,
    });
}

/// Download the poster with capped retry for transient network errors.
/// Returns `Ok(None)` when cancelled between attempts.
fn download_with_retry(
    url: &str,
    timeout_secs: u64,
    cancel: &AtomicBool,
) -> Result<Option<Vec<u8>>, PosterError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(|e| PosterError::Request {
            url: url.to_string(),
            source: e,
        })?;

    let mut last_err: Option<PosterError> = None;

    for attempt in 0..MAX_RETRIES {
        if cancel.load(Ordering::SeqCst) {
            return Ok(None);
        }

        match download_once(&client, url) {
            Ok(bytes) => return Ok(Some(bytes)),
            Err(e @ PosterError::Request { .. }) => {
                tracing::debug!(attempt = attempt + 1, error = %e, "Transient poster fetch error, retrying");
                std::thread::sleep(Duration::from_millis(RETRY_DELAYS_MS[attempt as usize]));
                last_err = Some(e);
            }
            Err(e) => return Err(e), // HTTP status / size errors do not retry.
        }
    }

    Err(last_err.unwrap_or(PosterError::HttpStatus {
        url: url.to_string(),
        status: 0,
    }))
}

/// One download attempt with status and size checks.
fn download_once(client: &reqwest::blocking::Client, url: &str) -> Result<Vec<u8>, PosterError> {
    let response = client.get(url).send().map_err(|e| PosterError::Request {
        url: url.to_string(),
        source: e,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(PosterError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    // Reject oversized payloads before buffering when the server
    // declares a length, and again after in case it lied.
    if let Some(len) = response.content_length() {
        if len as usize > constants::MAX_POSTER_BYTES {
            return Err(PosterError::TooLarge {
                url: url.to_string(),
                size: len as usize,
                max: constants::MAX_POSTER_BYTES,
            });
        }
    }

    let bytes = response
        .bytes()
        .map_err(|e| PosterError::Request {
            url: url.to_string(),
            source: e,
        })?
        .to_vec();

    if bytes.len() > constants::MAX_POSTER_BYTES {
        return Err(PosterError::TooLarge {
            url: url.to_string(),
            size: bytes.len(),
            max: constants::MAX_POSTER_BYTES,
        });
    }

    Ok(bytes)
}

/// Decode an image payload into an RGBA8 frame.
fn decode(bytes: &[u8], url: &str) -> Result<(usize, usize, Vec<u8>), PosterError> {
    let img = image::load_from_memory(bytes).map_err(|e| PosterError::Decode {
        url: url.to_string(),
        source: e,
    })?;
    let rgba = img.to_rgba8();
    let (width, height) = (rgba.width() as usize, rgba.height() as usize);
    Ok((width, height, rgba.into_raw()))
}

// =============================================================================
// Disk cache
// =============================================================================
//
// Two files in the data directory: the raw payload and a sidecar with
// the source URL. A URL mismatch invalidates the cache.

fn read_cache(cache_dir: &Path, url: &str) -> Option<Vec<u8>> {
    let url_path = cache_dir.join(constants::POSTER_CACHE_URL_FILE);
    let img_path = cache_dir.join(constants::POSTER_CACHE_FILE);

    let cached_url = std::fs::read_to_string(&url_path).ok()?;
    if cached_url.trim() != url {
        tracing::debug!("Poster cache is for a different URL; ignoring");
        return None;
    }
    std::fs::read(&img_path).ok()
}

fn write_cache(cache_dir: &Path, url: &str, bytes: &[u8]) -> Result<(), PosterError> {
    std::fs::create_dir_all(cache_dir).map_err(|e| PosterError::Cache {
        path: cache_dir.to_path_buf(),
        source: e,
    })?;

    let img_path = cache_dir.join(constants::POSTER_CACHE_FILE);
    std::fs::write(&img_path, bytes).map_err(|e| PosterError::Cache {
        path: img_path.clone(),
        source: e,
    })?;

    let url_path = cache_dir.join(constants::POSTER_CACHE_URL_FILE);
    std::fs::write(&url_path, url).map_err(|e| PosterError::Cache {
        path: url_path,
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let url = "https://example.com/p.png";
        write_cache(dir.path(), url, b"payload").unwrap();
        assert_eq!(read_cache(dir.path(), url).as_deref(), Some(&b"payload"[..]));
    }

    #[test]
    fn test_cache_invalidated_by_url_change() {
        let dir = tempfile::tempdir().unwrap();
        write_cache(dir.path(), "https://example.com/a.png", b"payload").unwrap();
        assert!(read_cache(dir.path(), "https://example.com/b.png").is_none());
    }

    #[test]
    fn test_cache_miss_on_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_cache(dir.path(), "https://example.com/p.png").is_none());
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let err = decode(b"not an image", "https://example.com/p.png").unwrap_err();
        assert!(matches!(err, PosterError::Decode { .. }), "got {err:?}");
    }
}
