pub mod download;
pub mod extract;
pub mod pipeline;
pub mod progress;
