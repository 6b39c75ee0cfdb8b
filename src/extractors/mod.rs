//! Request extractors whose rejections are `AppError`, so malformed input still gets a JSON `{error}` body.

mod body;
mod id;

pub use body::JsonBody;
pub use id::IdPath;
