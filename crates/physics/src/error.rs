use thiserror::Error;

use crate::types::BodyHandle;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhysicsError {
    #[error("invalid physics parameters: {0}")]
    InvalidParams(&'static str),
    #[error("no body with handle {0}")]
    UnknownBody(BodyHandle),
}
