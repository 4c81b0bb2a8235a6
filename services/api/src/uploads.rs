//! Local disk storage for uploaded food images

use regex::Regex;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::{info, warn};
use unicode_normalization::UnicodeNormalization;
use uuid::Uuid;

/// Reduce a client supplied filename to a single safe path component
///
/// The name is NFKD-normalized and reduced to ASCII, so accented letters keep
/// their base letter. Path separators become whitespace, whitespace runs
/// become `_`, anything outside `[A-Za-z0-9_.-]` is dropped and
/// leading/trailing `.`/`_` are trimmed. Returns an empty string when nothing
/// survives.
pub fn sanitize_filename(filename: &str) -> String {
    static UNSAFE_CHARS: OnceLock<Regex> = OnceLock::new();
    let regex = UNSAFE_CHARS
        .get_or_init(|| Regex::new(r"[^A-Za-z0-9_.-]").expect("Failed to compile filename regex"));

    let ascii: String = filename.nfkd().filter(char::is_ascii).collect();
    let separated = ascii.replace(['/', '\\'], " ");
    let joined = separated.split_whitespace().collect::<Vec<_>>().join("_");

    regex
        .replace_all(&joined, "")
        .trim_matches(['.', '_'])
        .to_string()
}

/// Flat directory that uploads are written into
#[derive(Debug, Clone)]
pub struct UploadStorage {
    dir: PathBuf,
}

impl UploadStorage {
    /// Use `dir` as the upload directory, creating it if needed
    pub fn init(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        info!("Upload directory ready at {}", dir.display());
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write `bytes` under the sanitized form of `filename`
    ///
    /// The bytes go to a staging file first and are renamed over the target,
    /// so an existing file with the same sanitized name is replaced whole.
    pub async fn save(&self, filename: &str, bytes: &[u8]) -> io::Result<PathBuf> {
        let mut name = sanitize_filename(filename);
        if name.is_empty() {
            name = format!("upload-{}", Uuid::new_v4());
        }

        let path = self.dir.join(name);
        // Sanitized names never start with '.', so staging files cannot collide.
        let staging = self.dir.join(format!(".{}.part", Uuid::new_v4()));

        let written = match tokio::fs::write(&staging, bytes).await {
            Ok(()) => tokio::fs::rename(&staging, &path).await,
            Err(e) => Err(e),
        };
        if let Err(e) = written {
            if let Err(cleanup) = tokio::fs::remove_file(&staging).await {
                warn!("Failed to remove staging file {}: {}", staging.display(), cleanup);
            }
            return Err(e);
        }

        info!("Stored upload {} ({} bytes)", path.display(), bytes.len());

        Ok(path)
    }
}
