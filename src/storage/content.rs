//! Read-only content index over the post directory.
//!
//! Every query re-reads the filesystem and builds fresh values; there
//! is no cache and no write path. A missing directory is the normal
//! "no content yet" state, and a single unreadable file is skipped
//! with a warning rather than failing the whole listing.

use std::fs;
use std::path::{Path, PathBuf};

use log::warn;

use crate::domain::{parse_front_matter, Post, PostMeta};

/// Queryable view of one directory of content files.
pub struct ContentStore {
    dir: PathBuf,
    extension: String,
    words_per_minute: u32,
}

impl ContentStore {
    /// Creates a store over `dir` for `*.{extension}` files.
    pub fn new(dir: impl Into<PathBuf>, extension: impl Into<String>, words_per_minute: u32) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.into(),
            words_per_minute,
        }
    }

    /// Returns the directory this store reads.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path a slug maps to; purely syntactic.
    fn post_path(&self, slug: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", slug, self.extension))
    }

    /// Content files in canonical enumeration order (ascending file
    /// name, so repeated scans are deterministic).
    fn content_files(&self) -> Vec<PathBuf> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    warn!("failed to read content dir {}: {}", self.dir.display(), e);
                }
                return Vec::new();
            }
        };

        let mut files: Vec<PathBuf> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().is_some_and(|e| e == self.extension.as_str())
            })
            .collect();

        files.sort();
        files
    }

    /// All posts, most recent first.
    ///
    /// The sort is stable and descending by parsed date, so posts
    /// sharing a date keep their enumeration order; posts without a
    /// valid date collapse to the epoch and land last.
    pub fn list_posts(&self) -> Vec<PostMeta> {
        let mut posts: Vec<PostMeta> = self
            .content_files()
            .iter()
            .filter_map(|path| self.read_meta(path))
            .collect();

        posts.sort_by(|a, b| b.sort_key().cmp(&a.sort_key()));
        posts
    }

    /// All slugs, in canonical enumeration order.
    pub fn list_slugs(&self) -> Vec<String> {
        self.content_files()
            .iter()
            .filter_map(|path| slug_of(path))
            .collect()
    }

    /// One post with its full body, or `None` when no file matches.
    pub fn get_post(&self, slug: &str) -> Option<Post> {
        let path = self.post_path(slug);
        if !path.is_file() {
            return None;
        }

        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("skipping unreadable post {}: {}", path.display(), e);
                return None;
            }
        };

        let (front, body) = parse_front_matter(&raw);
        Some(Post {
            meta: PostMeta::from_parts(slug, front, body, self.words_per_minute),
            content: body.to_string(),
        })
    }

    fn read_meta(&self, path: &Path) -> Option<PostMeta> {
        let slug = slug_of(path)?;

        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("skipping unreadable post {}: {}", path.display(), e);
                return None;
            }
        };

        let (front, body) = parse_front_matter(&raw);
        Some(PostMeta::from_parts(&slug, front, body, self.words_per_minute))
    }
}

/// Slug derivation: the file name with its extension removed.
fn slug_of(path: &Path) -> Option<String> {
    match path.file_stem().and_then(|stem| stem.to_str()) {
        Some(stem) => Some(stem.to_string()),
        None => {
            warn!("skipping post with non-UTF-8 name: {}", path.display());
            None
        }
    }
}
