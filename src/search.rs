use eyre::Result;
use log::{debug, error, info};

use crate::matcher::{self, KeywordSet};
use crate::output;
use crate::transcript;
use crate::youtube::{SearchQuery, YouTubeClient};

/// Everything one scan run needs beyond the clients
#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub search: SearchQuery,
    pub keywords: Vec<String>,
    pub use_regex: bool,
    pub context: usize,
}

/// Run one search and scan each hit's transcript, printing a report block
/// per video with matches. A search failure is logged and leaves nothing
/// printed; a video without a usable transcript is skipped. Videos are
/// processed strictly in API response order.
pub async fn run(yt: &YouTubeClient, http: &reqwest::Client, opts: &ScanOptions) -> Result<()> {
    let keywords = KeywordSet::compile(&opts.keywords, opts.use_regex);
    if keywords.is_empty() {
        error!("no usable keywords after compilation");
        eprintln!("No usable keywords to search for.");
        return Ok(());
    }

    let videos = match yt.search_videos(&opts.search).await {
        Ok(videos) => videos,
        Err(e) => {
            error!("video search failed: {e}");
            eprintln!("An error occurred: {e}");
            return Ok(());
        }
    };
    info!("search returned {} video(s)", videos.len());

    for video in &videos {
        let transcript = match transcript::fetch_captions(http, &video.video_id, &opts.search.language).await {
            Ok(t) => t,
            Err(e) => {
                debug!("skipping video {}: {e}", video.video_id);
                continue;
            }
        };

        let windows = matcher::scan(&transcript.segments, &keywords, opts.context);
        if windows.is_empty() {
            debug!("no keyword matches in video {}", video.video_id);
            continue;
        }

        print!("{}", output::render_video(video, &windows, &keywords));
    }

    Ok(())
}
