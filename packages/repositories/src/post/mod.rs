mod create;
mod delete;
mod read;
mod update;

use models::{posts, users};

/// A post row together with its author row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostWithAuthor {
    pub post: posts::Model,
    pub author: users::Model,
}

pub struct PostRepository;
