//! Comments on postings, one level of replies deep.

mod repository;
mod service;
mod types;

pub use repository::CommentRepository;
pub use service::CommentService;
pub use types::{
    ChildComment, Comment, CommentUpdate, NewComment, Pagination, TopLevelComment,
    COMMENT_PAGE_SIZE,
};
