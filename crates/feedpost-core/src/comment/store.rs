//! Comment store trait and the in-memory implementation

use super::model::Comment;
use crate::error::{FeedError, Result};
use crate::types::CommentId;
use tracing::debug;

/// Ordered holder of a post's comments
///
/// Insertion order is display order. Comments are identified by id only;
/// their text plays no part in lookup or removal.
pub trait CommentStore: Send {
    /// Append a comment at the end of the thread
    fn append(&mut self, comment: Comment) -> Result<CommentId>;

    /// Remove the comment with this id
    fn remove_by_id(&mut self, id: &CommentId) -> Result<Comment>;

    /// All comments in display order
    fn list(&self) -> &[Comment];

    /// Get a comment by ID
    fn get(&self, id: &CommentId) -> Option<&Comment> {
        self.list().iter().find(|c| &c.id == id)
    }

    /// Number of comments
    fn len(&self) -> usize {
        self.list().len()
    }

    /// Check if empty
    fn is_empty(&self) -> bool {
        self.list().is_empty()
    }
}

/// Comments held only for the lifetime of the view
#[derive(Debug, Clone, Default)]
pub struct MemoryCommentStore {
    comments: Vec<Comment>,
}

impl MemoryCommentStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `comments` in order
    pub fn with_comments(comments: Vec<Comment>) -> Self {
        Self { comments }
    }
}

impl CommentStore for MemoryCommentStore {
    fn append(&mut self, comment: Comment) -> Result<CommentId> {
        if self.comments.iter().any(|c| c.id == comment.id) {
            return Err(FeedError::Validation(format!(
                "Comment with ID {} already exists",
                comment.id
            )));
        }

        let id = comment.id.clone();
        debug!("Appending comment {}", id.short());
        self.comments.push(comment);
        Ok(id)
    }

    fn remove_by_id(&mut self, id: &CommentId) -> Result<Comment> {
        let pos = self
            .comments
            .iter()
            .position(|c| &c.id == id)
            .ok_or_else(|| FeedError::CommentNotFound(id.to_string()))?;

        debug!("Removing comment {}", id.short());
        Ok(self.comments.remove(pos))
    }

    fn list(&self) -> &[Comment] {
        &self.comments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents(store: &impl CommentStore) -> Vec<&str> {
        store.list().iter().map(|c| c.content.as_str()).collect()
    }

    #[test]
    fn test_append_preserves_order() {
        let mut store = MemoryCommentStore::new();
        store.append(Comment::new("primeiro")).unwrap();
        store.append(Comment::new("segundo")).unwrap();
        store.append(Comment::new("terceiro")).unwrap();

        assert_eq!(contents(&store), vec!["primeiro", "segundo", "terceiro"]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_duplicate_id_fails() {
        let mut store = MemoryCommentStore::new();
        let comment = Comment::new("Test");
        store.append(comment.clone()).unwrap();
        assert!(store.append(comment).is_err());
    }

    #[test]
    fn test_remove_by_id_keeps_same_text() {
        let mut store = MemoryCommentStore::new();
        let first = store.append(Comment::new("igual")).unwrap();
        store.append(Comment::new("outro")).unwrap();
        let third = store.append(Comment::new("igual")).unwrap();

        let removed = store.remove_by_id(&first).unwrap();
        assert_eq!(removed.content, "igual");
        assert_eq!(contents(&store), vec!["outro", "igual"]);
        assert!(store.get(&third).is_some());
    }

    #[test]
    fn test_remove_unknown_id() {
        let mut store = MemoryCommentStore::with_comments(vec![Comment::new("a")]);
        let result = store.remove_by_id(&CommentId::new());
        assert!(matches!(result, Err(FeedError::CommentNotFound(_))));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_empty_store() {
        let store = MemoryCommentStore::new();
        assert!(store.is_empty());
        assert!(store.get(&CommentId::new()).is_none());
    }
}
