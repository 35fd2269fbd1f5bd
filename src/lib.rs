pub mod config;
pub mod format;
pub mod matcher;
pub mod output;
pub mod search;
pub mod transcript;
pub mod youtube;

/// A single timed caption line
#[derive(Debug, Clone)]
pub struct Segment {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

/// Complete caption transcript for a video, chronological
#[derive(Debug, Clone)]
pub struct Transcript {
    pub video_id: String,
    pub language: String,
    pub segments: Vec<Segment>,
}

/// Watch-page URL seeked to an offset, truncated to whole seconds
pub fn watch_url_at(video_id: &str, start: f64) -> String {
    format!("https://www.youtube.com/watch?v={video_id}&t={}s", start as u64)
}
