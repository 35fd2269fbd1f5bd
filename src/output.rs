use crate::format::{self, BOLD_BLUE, BOLD_GREEN, BOLD_YELLOW, RESET};
use crate::matcher::{KeywordSet, MatchWindow};
use crate::watch_url_at;
use crate::youtube::VideoHit;

/// Render the report block for one video with at least one match: a
/// header, then per window the time range, highlighted excerpt, and a
/// deep link seeked to the window's first segment.
pub fn render_video(video: &VideoHit, windows: &[MatchWindow], keywords: &KeywordSet) -> String {
    let mut out = String::new();

    out.push_str(&format!("\n{BOLD_BLUE}Video:{RESET} {}\n", video.title));
    out.push_str(&format!("{BOLD_BLUE}Channel:{RESET} {}\n", video.channel_title));
    out.push_str(&format!(
        "{BOLD_BLUE}Published:{RESET} {}\n\n",
        format::format_publish_date(&video.published_at)
    ));

    for window in windows {
        out.push_str(&format!(
            "{BOLD_YELLOW}Extract ({} / {}):{RESET}\n",
            format::format_time(window.first().start),
            format::format_time(window.last().start)
        ));
        out.push_str(&format::highlight(&window.joined_text(), keywords));
        out.push('\n');
        out.push_str(&format!(
            "\n{BOLD_GREEN}URL:{RESET} {}\n",
            watch_url_at(&video.video_id, window.first().start)
        ));
        out.push('\n');
        out.push_str(&"-".repeat(80));
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Segment;
    use crate::format::BOLD_RED;
    use crate::matcher;

    fn seg(text: &str, start: f64) -> Segment {
        Segment {
            text: text.to_string(),
            start,
            duration: 2.0,
        }
    }

    fn video() -> VideoHit {
        VideoHit {
            video_id: "abc123def45".to_string(),
            title: "Cats compilation".to_string(),
            channel_title: "Cat Channel".to_string(),
            published_at: "2023-01-15T10:30:00Z".to_string(),
        }
    }

    #[test]
    fn test_render_end_to_end_scenario() {
        let segments = vec![
            seg("hello world", 0.0),
            seg("find cats here", 5.0),
            seg("goodbye", 10.0),
        ];
        let keywords = matcher::KeywordSet::compile(&["cat".to_string()], false);
        let windows = matcher::scan(&segments, &keywords, 1);
        assert_eq!(windows.len(), 1);

        let out = render_video(&video(), &windows, &keywords);

        assert!(out.contains("Cats compilation"));
        assert!(out.contains("Cat Channel"));
        assert!(out.contains("15/01/2023"));
        assert!(out.contains("(0:00 / 0:10)"));
        assert!(out.contains(&format!("find {BOLD_RED}cat{RESET}s here")));
        assert!(out.contains("https://www.youtube.com/watch?v=abc123def45&t=0s"));
    }

    #[test]
    fn test_render_deep_link_uses_window_first_segment() {
        let segments = vec![seg("intro", 0.0), seg("the cat appears", 65.4), seg("outro", 70.0)];
        let keywords = matcher::KeywordSet::compile(&["cat".to_string()], false);
        let windows = matcher::scan(&segments, &keywords, 0);

        let out = render_video(&video(), &windows, &keywords);

        assert!(out.contains("(1:05 / 1:05)"));
        assert!(out.contains("&t=65s"));
    }

    #[test]
    fn test_render_one_block_per_window() {
        let segments = vec![seg("cat one", 0.0), seg("filler", 5.0), seg("cat two", 10.0)];
        let keywords = matcher::KeywordSet::compile(&["cat".to_string()], false);
        let windows = matcher::scan(&segments, &keywords, 0);
        assert_eq!(windows.len(), 2);

        let out = render_video(&video(), &windows, &keywords);

        assert_eq!(out.matches("Extract (").count(), 2);
        assert!(out.contains("&t=0s"));
        assert!(out.contains("&t=10s"));
    }
}
