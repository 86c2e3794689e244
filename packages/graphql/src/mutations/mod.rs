use async_graphql::MergedObject;
mod posts;
mod users;

#[derive(MergedObject, Default)]
pub struct Mutations(users::UserMutation, posts::PostMutation);
