pub mod posts;
pub mod prelude;
pub mod users;
