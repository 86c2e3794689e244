pub mod errors;
pub mod mutations;
pub mod queries;
pub mod types;

#[cfg(test)]
pub mod test_helpers;
