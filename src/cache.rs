use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::code_counter::LineCounts;
use crate::languages::Language;

const CACHE_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct CachedFile {
    version: u32,
    mtime_secs: u64,
    mtime_nanos: u32,
    size: u64,
    language: Language,
    counts: LineCounts,
}

/// On-disk store of per-file counts, invalidated by mtime and size.
pub struct FileCache {
    cache_dir: PathBuf,
}

impl FileCache {
    pub fn new(root: &Path) -> Self {
        // Linux: ~/.cache/codetally/<root-hash>/
        // macOS: ~/Library/Caches/codetally/<root-hash>/
        let cache_base = ProjectDirs::from("", "", "codetally")
            .map(|dirs| dirs.cache_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from(".codetally-cache"));
        Self::with_base(&cache_base, root)
    }

    pub fn with_base(cache_base: &Path, root: &Path) -> Self {
        let cache_dir = cache_base.join(format!("{:016x}", hash_path(root)));
        Self { cache_dir }
    }

    /// Returns the stored counts if `path` is unchanged since they were saved.
    pub fn get(&self, path: &Path, language: Language) -> Option<LineCounts> {
        let bytes = fs::read(self.cache_path(path)).ok()?;
        let (cached, _): (CachedFile, usize) =
            bincode::serde::decode_from_slice(&bytes, bincode::config::standard()).ok()?;

        if cached.version != CACHE_VERSION || cached.language != language {
            return None;
        }

        let metadata = fs::metadata(path).ok()?;
        let (mtime_secs, mtime_nanos) = system_time_to_parts(metadata.modified().ok()?);
        if cached.mtime_secs != mtime_secs
            || cached.mtime_nanos != mtime_nanos
            || cached.size != metadata.len()
        {
            return None;
        }

        Some(cached.counts)
    }

    pub fn set(&self, path: &Path, language: Language, counts: &LineCounts) -> io::Result<()> {
        let metadata = fs::metadata(path)?;
        let (mtime_secs, mtime_nanos) = system_time_to_parts(metadata.modified()?);

        let cached = CachedFile {
            version: CACHE_VERSION,
            mtime_secs,
            mtime_nanos,
            size: metadata.len(),
            language,
            counts: *counts,
        };

        let bytes = bincode::serde::encode_to_vec(&cached, bincode::config::standard())
            .map_err(io::Error::other)?;

        fs::create_dir_all(&self.cache_dir)?;
        fs::write(self.cache_path(path), bytes)
    }

    fn cache_path(&self, source_path: &Path) -> PathBuf {
        self.cache_dir
            .join(format!("{:016x}.bin", hash_path(source_path)))
    }
}

fn hash_path(path: &Path) -> u64 {
    use std::hash::{Hash, Hasher};
    let mut hasher = rustc_hash::FxHasher::default();
    path.hash(&mut hasher);
    hasher.finish()
}

fn system_time_to_parts(time: SystemTime) -> (u64, u32) {
    match time.duration_since(SystemTime::UNIX_EPOCH) {
        Ok(duration) => (duration.as_secs(), duration.subsec_nanos()),
        Err(_) => (0, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::FileCache;
    use crate::code_counter::LineCounts;
    use crate::languages::Language;
    use std::path::PathBuf;

    fn temp_dir_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time")
            .as_nanos();
        path.push(format!("{name}-{nanos}"));
        path
    }

    #[test]
    fn stores_and_reloads_counts() {
        let dir = temp_dir_path("codetally-cache");
        std::fs::create_dir_all(&dir).expect("create temp dir");
        let source = dir.join("main.py");
        std::fs::write(&source, "x = 1\n").expect("write source");

        let cache = FileCache::with_base(&dir.join("cache"), &dir);
        assert_eq!(cache.get(&source, Language::Python), None);

        let counts = LineCounts {
            total_lines: 1,
            variable_declarations: 1,
            ..LineCounts::default()
        };
        cache.set(&source, Language::Python, &counts).expect("write cache");

        assert_eq!(cache.get(&source, Language::Python), Some(counts));
        assert_eq!(cache.get(&source, Language::Java), None);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn changed_size_invalidates_entry() {
        let dir = temp_dir_path("codetally-cache-stale");
        std::fs::create_dir_all(&dir).expect("create temp dir");
        let source = dir.join("main.py");
        std::fs::write(&source, "x = 1\n").expect("write source");

        let cache = FileCache::with_base(&dir.join("cache"), &dir);
        cache
            .set(&source, Language::Python, &LineCounts::default())
            .expect("write cache");
        std::fs::write(&source, "x = 1\ny = 2\n").expect("rewrite source");

        assert_eq!(cache.get(&source, Language::Python), None);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
