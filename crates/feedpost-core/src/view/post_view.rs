//! Post view model
//!
//! Owns the comment thread and the draft of one post, and turns them into a
//! [`PostRender`] on demand. Every operation runs to completion
//! synchronously; a view is never shared.

use super::render::{
    BodyLine, CommentView, FormView, HeaderView, PostRender, TimeView, FORM_LABEL,
    FORM_PLACEHOLDER, SUBMIT_LABEL,
};
use crate::comment::{Comment, CommentStore, MemoryCommentStore};
use crate::config::ViewConfig;
use crate::draft::Draft;
use crate::error::{FeedError, Result};
use crate::post::{Post, PublishedDate};
use crate::types::CommentId;
use chrono::{DateTime, Utc};
use tracing::debug;

/// Interactive view over one post
pub struct PostView<S: CommentStore = MemoryCommentStore> {
    post: Post,
    published: PublishedDate,
    comments: S,
    draft: Draft,
    config: ViewConfig,
}

impl PostView<MemoryCommentStore> {
    /// Create a view with an in-memory thread and default settings
    pub fn new(post: Post) -> Self {
        Self::in_memory(post, ViewConfig::default())
    }

    /// Create a view with an in-memory thread
    pub fn in_memory(post: Post, config: ViewConfig) -> Self {
        let seed = config.seed().map(Comment::new).into_iter().collect();
        Self::assemble(post, MemoryCommentStore::with_comments(seed), config)
    }
}

impl<S: CommentStore> PostView<S> {
    /// Create a view over an existing store
    ///
    /// An empty store receives the seed comment, if one is configured.
    pub fn with_store(post: Post, mut store: S, config: ViewConfig) -> Result<Self> {
        if store.is_empty() {
            if let Some(seed) = config.seed() {
                store.append(Comment::new(seed))?;
            }
        }
        Ok(Self::assemble(post, store, config))
    }

    fn assemble(post: Post, comments: S, config: ViewConfig) -> Self {
        debug!("Opening view for post {}", post.id);
        Self {
            published: PublishedDate::new(post.published_at),
            post,
            comments,
            draft: Draft::new(),
            config,
        }
    }

    /// The post being viewed
    pub fn post(&self) -> &Post {
        &self.post
    }

    /// Memoized renderings of the publication date
    pub fn published(&self) -> &PublishedDate {
        &self.published
    }

    /// Comments in display order
    pub fn comments(&self) -> &[Comment] {
        self.comments.list()
    }

    /// The current draft
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Whether the submit control is enabled
    pub fn can_submit(&self) -> bool {
        self.draft.can_submit()
    }

    /// Replace the draft text, clearing any validation message
    pub fn edit_draft(&mut self, value: impl Into<String>) {
        self.draft.edit(value);
    }

    /// Record a failed required-field check on the draft
    pub fn reject_empty_submission(&mut self) {
        debug!("Rejected empty comment on post {}", self.post.id);
        self.draft.reject_empty(self.config.required_message.clone());
    }

    /// Publish the draft as a new comment at the end of the thread
    ///
    /// An empty draft is rejected: the validation message is set and the
    /// thread is left unchanged.
    pub fn submit_comment(&mut self) -> Result<CommentId> {
        if let Err(err) = self.draft.check_required() {
            self.reject_empty_submission();
            return Err(err);
        }

        let comment = Comment::new(self.draft.text()).with_author(self.config.commenter_name.clone());
        let id = self.comments.append(comment)?;
        self.draft.take();
        debug!("Published comment {} on post {}", id.short(), self.post.id);
        Ok(id)
    }

    /// Delete exactly the comment with this id
    pub fn delete_comment(&mut self, id: &CommentId) -> Result<Comment> {
        let removed = self
            .comments
            .remove_by_id(id)
            .map_err(|e| e.with_context("Failed to delete comment"))?;
        debug!("Deleted comment {} from post {}", id.short(), self.post.id);
        Ok(removed)
    }

    /// Header render model against `now`
    pub fn header(&self, now: &DateTime<Utc>) -> HeaderView {
        let author = &self.post.author;
        HeaderView {
            avatar_url: author.avatar_url.clone(),
            author_name: author.name.clone(),
            author_role: author.role.clone(),
            time: TimeView {
                text: self.published.relative_to(now),
                title: self.published.absolute.clone(),
                datetime: self.published.iso.clone(),
            },
        }
    }

    /// Body render model, in content order
    pub fn body(&self) -> Vec<BodyLine> {
        self.post
            .content
            .iter()
            .filter_map(BodyLine::from_content)
            .collect()
    }

    /// Comment form render model
    pub fn form(&self) -> FormView {
        FormView {
            label: FORM_LABEL.to_string(),
            placeholder: FORM_PLACEHOLDER.to_string(),
            value: self.draft.text().to_string(),
            submit_label: SUBMIT_LABEL.to_string(),
            submit_enabled: self.can_submit(),
            error_message: self.draft.error_message().map(str::to_string),
        }
    }

    /// Comment list render model against `now`
    pub fn comment_views(&self, now: &DateTime<Utc>) -> Vec<CommentView> {
        self.comments
            .list()
            .iter()
            .map(|c| CommentView {
                id: c.id.clone(),
                content: c.content.clone(),
                author: c.author.clone(),
                created: c.created_relative(now),
            })
            .collect()
    }

    /// Full render model against `now`
    pub fn render(&self, now: &DateTime<Utc>) -> PostRender {
        PostRender {
            id: self.post.id,
            header: self.header(now),
            body: self.body(),
            form: self.form(),
            comments: self.comment_views(now),
        }
    }

    /// Give the store back, e.g. to persist it
    pub fn into_store(self) -> S {
        self.comments
    }
}

impl<S: CommentStore> std::fmt::Debug for PostView<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostView")
            .field("post", &self.post.id)
            .field("comments", &self.comments.len())
            .field("draft", &self.draft)
            .finish()
    }
}

/// Whether an error means the comment id was not in the thread
pub fn is_missing_comment(err: &FeedError) -> bool {
    match err {
        FeedError::CommentNotFound(_) => true,
        FeedError::WithContext { source, .. } => is_missing_comment(source),
        _ => false,
    }
}
