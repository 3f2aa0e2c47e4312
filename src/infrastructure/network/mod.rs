pub mod client;
pub mod http;
pub mod prompt;

// Re-export for convenience
pub use client::ChatCompletionTranslator;
pub use http::create_client;
