pub mod client;
pub mod engine;
pub mod protocol;
pub mod stream;
