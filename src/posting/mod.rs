//! Postings: user-authored articles filed under a category.

mod repository;
mod service;
mod types;

pub use repository::PostingRepository;
pub use service::PostingService;
pub use types::{NewPosting, Posting, PostingDetail, PostingFilter, PostingSummary, PostingUpdate};
