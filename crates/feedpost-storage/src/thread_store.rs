//! File system storage for comment threads

use feedpost_core::comment::{Comment, CommentStore};
use feedpost_core::error::{FeedError, Result};
use feedpost_core::types::{CommentId, PostId};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Schema version written to new thread files
pub const CURRENT_SCHEMA_VERSION: &str = "1.0";

/// On-disk form of one post's thread
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadFile {
    pub schema_version: String,
    pub post_id: PostId,
    pub comments: Vec<Comment>,
}

impl ThreadFile {
    fn is_supported(&self) -> bool {
        let major = |v: &str| v.split('.').next().map(str::to_string);
        major(&self.schema_version) == major(CURRENT_SCHEMA_VERSION)
    }
}

/// Comment store persisted to a JSON file after every change
pub struct JsonCommentStore {
    path: PathBuf,
    post_id: PostId,
    comments: Vec<Comment>,
}

impl JsonCommentStore {
    /// Open the thread at `path`, starting empty if the file does not exist
    pub fn open(path: impl Into<PathBuf>, post_id: PostId) -> Result<Self> {
        let path = path.into();

        let comments = if path.exists() {
            let file = read_thread(&path)?;
            if file.post_id != post_id {
                return Err(FeedError::Validation(format!(
                    "Thread file {} belongs to post {}, not {}",
                    path.display(),
                    file.post_id,
                    post_id
                )));
            }
            info!("Loaded {} comments from {:?}", file.comments.len(), path);
            file.comments
        } else {
            debug!("No thread at {:?}, starting empty", path);
            Vec::new()
        };

        Ok(Self {
            path,
            post_id,
            comments,
        })
    }

    /// Path of the thread file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get a temporary path for atomic writes
    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "thread.json".to_string());
        self.path.with_file_name(format!(".{}.tmp", name))
    }

    /// Write the thread atomically (write to temp, then rename)
    ///
    /// The parent directory is created on the first write. The temp file
    /// never outlives a failed write.
    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
                debug!("Created thread directory: {:?}", parent);
            }
        }

        let temp_path = self.temp_path();
        if let Err(e) = self.write_temp(&temp_path) {
            let _ = fs::remove_file(&temp_path);
            return Err(e);
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            FeedError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to rename temp file: {}", e),
            ))
        })?;

        debug!("Saved {} comments to {:?}", self.comments.len(), self.path);
        Ok(())
    }

    fn write_temp(&self, temp_path: &Path) -> Result<()> {
        let file = ThreadFile {
            schema_version: CURRENT_SCHEMA_VERSION.to_string(),
            post_id: self.post_id,
            comments: self.comments.clone(),
        };

        let temp_file = fs::File::create(temp_path).map_err(|e| {
            FeedError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to create temp file: {}", e),
            ))
        })?;
        let mut writer = BufWriter::new(temp_file);
        serde_json::to_writer_pretty(&mut writer, &file)?;
        writer.flush()?;
        Ok(())
    }
}

impl CommentStore for JsonCommentStore {
    fn append(&mut self, comment: Comment) -> Result<CommentId> {
        if self.comments.iter().any(|c| c.id == comment.id) {
            return Err(FeedError::Validation(format!(
                "Comment with ID {} already exists",
                comment.id
            )));
        }

        let id = comment.id.clone();
        self.comments.push(comment);
        if let Err(e) = self.persist() {
            self.comments.pop();
            return Err(e.with_context("Failed to save comment"));
        }
        Ok(id)
    }

    fn remove_by_id(&mut self, id: &CommentId) -> Result<Comment> {
        let pos = self
            .comments
            .iter()
            .position(|c| &c.id == id)
            .ok_or_else(|| FeedError::CommentNotFound(id.to_string()))?;

        let removed = self.comments.remove(pos);
        if let Err(e) = self.persist() {
            self.comments.insert(pos, removed);
            return Err(e.with_context("Failed to save thread after delete"));
        }
        Ok(removed)
    }

    fn list(&self) -> &[Comment] {
        &self.comments
    }
}

fn read_thread(path: &Path) -> Result<ThreadFile> {
    let file = fs::File::open(path)?;
    let reader = BufReader::new(file);
    let thread: ThreadFile = serde_json::from_reader(reader)
        .map_err(|e| FeedError::from(e).with_context(format!("Failed to parse {}", path.display())))?;

    if !thread.is_supported() {
        warn!(
            "Thread {:?} has schema version {}, expected {}",
            path, thread.schema_version, CURRENT_SCHEMA_VERSION
        );
        return Err(FeedError::Validation(format!(
            "Unsupported schema version: {}",
            thread.schema_version
        )));
    }

    Ok(thread)
}

/// Directory holding one thread file per post
pub struct ThreadDir {
    dir: PathBuf,
}

impl ThreadDir {
    /// Use `dir`, creating it if needed
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        if !dir.exists() {
            fs::create_dir_all(&dir).map_err(|e| {
                FeedError::Io(std::io::Error::new(
                    e.kind(),
                    format!("Failed to create threads directory: {}", e),
                ))
            })?;
            debug!("Created threads directory: {:?}", dir);
        }
        Ok(Self { dir })
    }

    /// Platform data directory (falls back to ~/.feedpost/threads)
    pub fn default_location() -> Result<Self> {
        let dir = directories::ProjectDirs::from("com", "feedpost", "feedpost")
            .map(|dirs| dirs.data_dir().join("threads"))
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".feedpost")
                    .join("threads")
            });

        Self::new(dir)
    }

    /// Directory path
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File holding the thread of `post_id`
    pub fn thread_path(&self, post_id: PostId) -> PathBuf {
        self.dir.join(format!("post-{}.json", post_id))
    }

    /// Open the thread of `post_id`
    pub fn open(&self, post_id: PostId) -> Result<JsonCommentStore> {
        JsonCommentStore::open(self.thread_path(post_id), post_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use feedpost_core::config::ViewConfig;
    use feedpost_core::post::{Author, ContentLine, Post};
    use feedpost_core::view::PostView;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn create_test_dir() -> (ThreadDir, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let dir = ThreadDir::new(temp_dir.path().join("threads")).unwrap();
        (dir, temp_dir)
    }

    fn contents(store: &JsonCommentStore) -> Vec<String> {
        store.list().iter().map(|c| c.content.clone()).collect()
    }

    #[test]
    fn test_dir_creation() {
        let (dir, _temp) = create_test_dir();
        assert!(dir.dir().exists());
    }

    #[test]
    fn test_thread_path() {
        let (dir, _temp) = create_test_dir();
        let path = dir.thread_path(PostId(42));
        assert!(path.to_string_lossy().ends_with("post-42.json"));
    }

    #[test]
    fn test_open_missing_is_empty() {
        let (dir, _temp) = create_test_dir();
        let store = dir.open(PostId(1)).unwrap();
        assert!(store.is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_append_persists() {
        let (dir, _temp) = create_test_dir();
        let mut store = dir.open(PostId(1)).unwrap();
        store.append(Comment::new("primeiro")).unwrap();
        store.append(Comment::new("segundo")).unwrap();

        let reopened = dir.open(PostId(1)).unwrap();
        assert_eq!(contents(&reopened), vec!["primeiro", "segundo"]);
    }

    #[test]
    fn test_remove_persists() {
        let (dir, _temp) = create_test_dir();
        let mut store = dir.open(PostId(1)).unwrap();
        let first = store.append(Comment::new("igual")).unwrap();
        store.append(Comment::new("igual")).unwrap();

        store.remove_by_id(&first).unwrap();

        let reopened = dir.open(PostId(1)).unwrap();
        assert_eq!(contents(&reopened), vec!["igual"]);
        assert!(reopened.get(&first).is_none());
    }

    #[test]
    fn test_remove_unknown() {
        let (dir, _temp) = create_test_dir();
        let mut store = dir.open(PostId(1)).unwrap();
        let result = store.remove_by_id(&CommentId::new());
        assert!(matches!(result, Err(FeedError::CommentNotFound(_))));
    }

    #[test]
    fn test_atomic_write_leaves_no_temp() {
        let (dir, _temp) = create_test_dir();
        let mut store = dir.open(PostId(3)).unwrap();
        store.append(Comment::new("x")).unwrap();

        assert!(!store.temp_path().exists());
        let content = fs::read_to_string(store.path()).unwrap();
        assert!(content.contains("schemaVersion"));
        assert!(content.contains("\"postId\": 3"));
    }

    #[test]
    fn test_open_does_not_create_directories() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested/threads/post-1.json");

        let mut store = JsonCommentStore::open(&path, PostId(1)).unwrap();
        assert!(!path.parent().unwrap().exists());

        store.append(Comment::new("primeiro")).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_failed_write_rolls_back_and_cleans_temp() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("post-1.json");
        let mut store = JsonCommentStore::open(&path, PostId(1)).unwrap();

        // A non-empty directory at the target makes the rename fail
        fs::create_dir_all(path.join("blocker")).unwrap();

        let result = store.append(Comment::new("perdido"));
        assert!(result.is_err());
        assert!(store.is_empty());
        assert!(!store.temp_path().exists());
    }

    #[test]
    fn test_post_id_mismatch() {
        let (dir, _temp) = create_test_dir();
        let mut store = dir.open(PostId(1)).unwrap();
        store.append(Comment::new("x")).unwrap();

        let result = JsonCommentStore::open(dir.thread_path(PostId(1)), PostId(2));
        assert!(matches!(result, Err(FeedError::Validation(_))));
    }

    #[test]
    fn test_unsupported_schema() {
        let (dir, _temp) = create_test_dir();
        let path = dir.thread_path(PostId(1));
        fs::write(&path, r#"{"schemaVersion":"2.0","postId":1,"comments":[]}"#).unwrap();

        let result = dir.open(PostId(1));
        assert!(matches!(result, Err(FeedError::Validation(_))));
    }

    #[test]
    fn test_view_over_file_store_seeds_once() {
        let (dir, _temp) = create_test_dir();
        let post = Post {
            id: PostId(9),
            author: Author {
                name: "Ana".to_string(),
                role: "Dev".to_string(),
                avatar_url: "https://example.com/a.png".to_string(),
            },
            published_at: chrono::DateTime::parse_from_rfc3339("2024-01-10T15:30:00-03:00")
                .unwrap(),
            content: vec![ContentLine::Paragraph("Oi".to_string())],
        };

        let store = dir.open(post.id).unwrap();
        let mut view = PostView::with_store(post.clone(), store, ViewConfig::default()).unwrap();
        view.edit_draft("Salvo em disco");
        view.submit_comment().unwrap();
        drop(view);

        let store = dir.open(post.id).unwrap();
        let view = PostView::with_store(post, store, ViewConfig::default()).unwrap();
        let texts: Vec<&str> = view.comments().iter().map(|c| c.content.as_str()).collect();
        assert_eq!(texts, vec!["Post muito bacana, heim?!", "Salvo em disco"]);
    }
}
