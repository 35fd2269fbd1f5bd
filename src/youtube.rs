use chrono::NaiveDate;
use eyre::{Result, bail};
use log::debug;
use serde::Deserialize;

const DATA_API_BASE: &str = "https://www.googleapis.com/youtube/v3";

/// Sort orders accepted by the Data API search endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Date,
    Rating,
    #[default]
    Relevance,
    Title,
    VideoCount,
    ViewCount,
}

impl SortOrder {
    pub fn api_name(&self) -> &'static str {
        match self {
            SortOrder::Date => "date",
            SortOrder::Rating => "rating",
            SortOrder::Relevance => "relevance",
            SortOrder::Title => "title",
            SortOrder::VideoCount => "videoCount",
            SortOrder::ViewCount => "viewCount",
        }
    }
}

/// Filters forwarded to one search call
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    pub query: Option<String>,
    pub language: String,
    pub max_results: u32,
    pub channel_id: Option<String>,
    pub order: SortOrder,
    pub published_after: Option<NaiveDate>,
    pub published_before: Option<NaiveDate>,
}

/// One video returned by the search endpoint
#[derive(Debug, Clone)]
pub struct VideoHit {
    pub video_id: String,
    pub title: String,
    pub channel_title: String,
    pub published_at: String,
}

/// Typed client for the Data API v3 search endpoint. Constructed once in
/// main and passed down; the base URL can be pointed at a stand-in server.
pub struct YouTubeClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl YouTubeClient {
    pub fn new(http: reqwest::Client, api_key: String) -> Self {
        Self {
            http,
            api_key,
            base_url: DATA_API_BASE.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Search for closed-captioned videos matching the query, one page only
    pub async fn search_videos(&self, q: &SearchQuery) -> Result<Vec<VideoHit>> {
        let mut params: Vec<(&str, String)> = vec![
            ("part", "id,snippet".to_string()),
            ("type", "video".to_string()),
            ("videoCaption", "closedCaption".to_string()),
            ("relevanceLanguage", q.language.clone()),
            ("maxResults", q.max_results.to_string()),
            ("order", q.order.api_name().to_string()),
            ("key", self.api_key.clone()),
        ];
        if let Some(ref query) = q.query {
            params.push(("q", query.clone()));
        }
        if let Some(ref channel_id) = q.channel_id {
            params.push(("channelId", channel_id.clone()));
        }
        if let Some(after) = q.published_after {
            params.push(("publishedAfter", day_start_rfc3339(after)));
        }
        if let Some(before) = q.published_before {
            params.push(("publishedBefore", day_start_rfc3339(before)));
        }

        let url = format!("{}/search", self.base_url);
        debug!("GET {url} query={:?} channel={:?}", q.query, q.channel_id);

        let resp = self.http.get(&url).query(&params).send().await?;
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("search API returned {status}: {}", api_error_message(&body));
        }

        let body: SearchResponse = resp.json().await?;
        Ok(body.items.into_iter().filter_map(VideoHit::from_item).collect())
    }

    /// Resolve a channel name to its ID via a single-result channel search
    pub async fn find_channel_id(&self, channel_name: &str) -> Result<Option<String>> {
        let params = [
            ("part", "id".to_string()),
            ("type", "channel".to_string()),
            ("maxResults", "1".to_string()),
            ("q", channel_name.to_string()),
            ("key", self.api_key.clone()),
        ];

        let url = format!("{}/search", self.base_url);
        debug!("GET {url} channel-name={channel_name}");

        let resp = self.http.get(&url).query(&params).send().await?;
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("channel search returned {status}: {}", api_error_message(&body));
        }

        let body: SearchResponse = resp.json().await?;
        Ok(body.items.into_iter().find_map(|item| item.id.channel_id))
    }
}

/// Expand a date bound to the RFC 3339 instant the API expects
fn day_start_rfc3339(date: NaiveDate) -> String {
    format!("{date}T00:00:00Z")
}

/// Pull the human-readable message out of a Data API error body, falling
/// back to the raw body
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")?
                .get("message")?
                .as_str()
                .map(|s| s.to_string())
        })
        .unwrap_or_else(|| body.to_string())
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: ItemId,
    snippet: Option<Snippet>,
}

#[derive(Debug, Deserialize)]
struct ItemId {
    #[serde(rename = "videoId")]
    video_id: Option<String>,
    #[serde(rename = "channelId")]
    channel_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Snippet {
    title: Option<String>,
    #[serde(rename = "channelTitle")]
    channel_title: Option<String>,
    #[serde(rename = "publishedAt")]
    published_at: Option<String>,
}

impl VideoHit {
    fn from_item(item: SearchItem) -> Option<Self> {
        let video_id = item.id.video_id?;
        let snippet = item.snippet?;
        Some(VideoHit {
            video_id,
            title: snippet.title.unwrap_or_default(),
            channel_title: snippet.channel_title.unwrap_or_default(),
            published_at: snippet.published_at.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_order_api_names() {
        assert_eq!(SortOrder::Date.api_name(), "date");
        assert_eq!(SortOrder::Rating.api_name(), "rating");
        assert_eq!(SortOrder::Relevance.api_name(), "relevance");
        assert_eq!(SortOrder::Title.api_name(), "title");
        assert_eq!(SortOrder::VideoCount.api_name(), "videoCount");
        assert_eq!(SortOrder::ViewCount.api_name(), "viewCount");
    }

    #[test]
    fn test_day_start_rfc3339() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(day_start_rfc3339(date), "2024-03-07T00:00:00Z");
    }

    #[test]
    fn test_parse_search_response() {
        let json = r#"{
            "kind": "youtube#searchListResponse",
            "items": [
                {
                    "id": { "kind": "youtube#video", "videoId": "abc123def45" },
                    "snippet": {
                        "publishedAt": "2023-01-15T10:30:00Z",
                        "title": "A video",
                        "channelTitle": "A channel"
                    }
                }
            ]
        }"#;
        let resp: SearchResponse = serde_json::from_str(json).unwrap();
        let hits: Vec<VideoHit> = resp.items.into_iter().filter_map(VideoHit::from_item).collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].video_id, "abc123def45");
        assert_eq!(hits[0].title, "A video");
        assert_eq!(hits[0].channel_title, "A channel");
        assert_eq!(hits[0].published_at, "2023-01-15T10:30:00Z");
    }

    #[test]
    fn test_parse_search_response_skips_non_videos() {
        let json = r#"{
            "items": [
                { "id": { "kind": "youtube#channel", "channelId": "UCabc" }, "snippet": { "title": "chan" } },
                { "id": { "kind": "youtube#video", "videoId": "abc123def45" }, "snippet": { "title": "vid" } }
            ]
        }"#;
        let resp: SearchResponse = serde_json::from_str(json).unwrap();
        let hits: Vec<VideoHit> = resp.items.into_iter().filter_map(VideoHit::from_item).collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].video_id, "abc123def45");
    }

    #[test]
    fn test_parse_search_response_no_items() {
        let resp: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.items.is_empty());
    }

    #[test]
    fn test_parse_channel_id_from_response() {
        let json = r#"{
            "items": [ { "id": { "kind": "youtube#channel", "channelId": "UCBR8-60-B28hp2BmDPdntcQ" } } ]
        }"#;
        let resp: SearchResponse = serde_json::from_str(json).unwrap();
        let id = resp.items.into_iter().find_map(|item| item.id.channel_id);
        assert_eq!(id.as_deref(), Some("UCBR8-60-B28hp2BmDPdntcQ"));
    }

    #[test]
    fn test_api_error_message_extraction() {
        let body = r#"{"error": {"code": 403, "message": "quotaExceeded"}}"#;
        assert_eq!(api_error_message(body), "quotaExceeded");
    }

    #[test]
    fn test_api_error_message_raw_fallback() {
        assert_eq!(api_error_message("plain failure"), "plain failure");
    }
}
