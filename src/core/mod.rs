pub mod filename;
pub mod format;
pub mod orchestrator;
pub mod traits;
pub mod ytdlp;
