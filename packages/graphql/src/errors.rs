use async_graphql::SimpleObject;
use std::fmt;

#[derive(SimpleObject, Debug)]
pub struct NotFoundError {
    pub message: String,
}

#[derive(SimpleObject, Debug)]
pub struct ConstraintViolationError {
    pub message: String,
}

#[derive(SimpleObject, Debug)]
pub struct ConflictError {
    pub message: String,
}

#[derive(SimpleObject, Debug)]
pub struct InternalError {
    pub message: String,
}

impl fmt::Display for NotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message.as_str())
    }
}

impl fmt::Display for ConstraintViolationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message.as_str())
    }
}

impl fmt::Display for ConflictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message.as_str())
    }
}

impl fmt::Display for InternalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message.as_str())
    }
}
