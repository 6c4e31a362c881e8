//! Infrastructure layer - OpenAI adapters, caching and logging

pub mod cache;
pub mod logging;
pub mod openai;
pub mod services;
