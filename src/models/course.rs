use serde::{Deserialize, Serialize};

/// Ordered course structure as presented on the table-of-contents page.
/// Topic and video order is preserved across runs for the same course URL,
/// which keeps the numbered destination paths stable for resumption.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseIndex {
    pub topics: Vec<Topic>,
}

impl CourseIndex {
    pub fn video_count(&self) -> usize {
        self.topics.iter().map(|t| t.videos.len()).sum()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    pub title: String,
    pub videos: Vec<Video>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    pub title: String,
    /// Opaque locator resolved by the external download executable.
    pub source_url: String,
}
