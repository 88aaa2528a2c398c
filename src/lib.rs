//! Postings - a blog backend for postings and threaded comments.
//!
//! Authenticated users write postings under categories and comment on them.
//! Everything is served as JSON over HTTP and stored in SQLite.

pub mod auth;
pub mod comment;
pub mod config;
pub mod datetime;
pub mod db;
pub mod error;
pub mod logging;
pub mod posting;
pub mod web;

pub use config::Config;
pub use db::{Database, User};
pub use error::{PostingsError, Resource, Result};
pub use web::WebServer;
