pub mod error;
pub mod post;
pub mod user;

pub use error::RepoError;
pub use post::{PostRepository, PostWithAuthor};
pub use user::{UserRepository, UserWithPosts};
