pub mod sink;
pub mod progress;
