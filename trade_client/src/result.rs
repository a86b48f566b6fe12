use crate::error::ClientError;

pub type Result<T, E = ClientError> = std::result::Result<T, E>;
