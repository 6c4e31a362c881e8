//! Cache domain - keying and the generic caching abstraction

mod key;
mod repository;

pub use key::{normalize_content, ContentKeyGenerator};
pub use repository::{Cache, CacheExt};

#[cfg(test)]
pub use repository::mock::MockCache;
