/// User ids as assigned by the upstream test API.
pub type UserId = i64;

/// Post ids as assigned by the upstream test API.
pub type PostId = i64;
