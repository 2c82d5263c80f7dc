//! YouTube Data API v3 connector implementation
//!
//! Implements the `VideoPlatform` trait over the YouTube Data API v3.

use async_trait::async_trait;
use bridge_traits::error::Result as BridgeResult;
use bridge_traits::http::{HttpClient, HttpMethod, HttpRequest};
use bridge_traits::video::{VideoEntry, VideoPlatform};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument};

use crate::error::{Result, YouTubeError};
use crate::types::{
    PlaylistItemInsertRequest, PlaylistItemListResponse, SearchListResponse,
    SubscriptionListResponse, VideoListResponse,
};

/// YouTube Data API base URL
const YOUTUBE_API_BASE: &str = "https://www.googleapis.com/youtube/v3";

/// Maximum results per page (YouTube Data API limit)
const MAX_PAGE_SIZE: u32 = 50;

/// Per-request timeout; retry policy beyond this lives in the transport
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// YouTube Data API connector
///
/// Implements `VideoPlatform` for YouTube Data API v3.
///
/// # Features
///
/// - Paginated playlist-item and subscription listing via page tokens
/// - Channel upload search with a published-after cutoff
/// - Batch video lookup with a comma-joined id list (one request per batch)
/// - Playlist-item insertion
/// - OAuth 2.0 bearer authentication on every request
///
/// Any non-2xx response fails the call before the body is parsed.
///
/// # Example
///
/// ```ignore
/// use provider_youtube::YouTubeConnector;
/// use bridge_traits::video::VideoPlatform;
///
/// let connector = YouTubeConnector::new(http_client, access_token);
/// let (items, next_cursor) = connector.list_playlist_page("PL123", None).await?;
/// ```
pub struct YouTubeConnector {
    /// HTTP client for API requests
    http_client: Arc<dyn HttpClient>,

    /// OAuth 2.0 access token
    access_token: String,
}

impl YouTubeConnector {
    /// Create a new YouTube connector
    ///
    /// # Arguments
    ///
    /// * `http_client` - HTTP client implementation
    /// * `access_token` - OAuth 2.0 access token with the `youtube` scope
    pub fn new(http_client: Arc<dyn HttpClient>, access_token: String) -> Self {
        Self {
            http_client,
            access_token,
        }
    }

    /// Execute a GET request and parse the JSON body
    ///
    /// Fails on any non-2xx status before parsing is attempted.
    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T> {
        let request = HttpRequest::new(HttpMethod::Get, url)
            .bearer_token(&self.access_token)
            .header("Accept", "application/json")
            .timeout(REQUEST_TIMEOUT);

        let response = self.http_client.execute(request).await?;

        if !response.is_success() {
            return Err(YouTubeError::ApiError {
                status_code: response.status,
                message: response.text().unwrap_or_default(),
            });
        }

        serde_json::from_slice(&response.body)
            .map_err(|e| YouTubeError::ParseError(format!("Failed to parse response: {}", e)))
    }

    /// Execute a POST request with a JSON body, discarding the response body
    async fn post_json<B: serde::Serialize>(&self, url: String, body: &B) -> Result<()> {
        let request = HttpRequest::new(HttpMethod::Post, url)
            .bearer_token(&self.access_token)
            .json(body)?
            .timeout(REQUEST_TIMEOUT);

        let response = self.http_client.execute(request).await?;

        if !response.is_success() {
            return Err(YouTubeError::ApiError {
                status_code: response.status,
                message: response.text().unwrap_or_default(),
            });
        }

        Ok(())
    }
}

#[async_trait]
impl VideoPlatform for YouTubeConnector {
    #[instrument(skip(self), fields(playlist_id = %playlist_id))]
    async fn list_playlist_page(
        &self,
        playlist_id: &str,
        cursor: Option<String>,
    ) -> BridgeResult<(Vec<VideoEntry>, Option<String>)> {
        let mut url = format!(
            "{}/playlistItems?part=snippet,contentDetails&playlistId={}&maxResults={}",
            YOUTUBE_API_BASE,
            urlencoding::encode(playlist_id),
            MAX_PAGE_SIZE
        );

        if let Some(page_token) = cursor {
            url.push_str(&format!("&pageToken={}", urlencoding::encode(&page_token)));
        }

        let list_response: PlaylistItemListResponse = self.get_json(url).await?;

        let entries: Vec<VideoEntry> = list_response
            .items
            .into_iter()
            .map(|item| VideoEntry::new(item.content_details.video_id, item.snippet.title))
            .collect();

        debug!(count = entries.len(), "Listed playlist items page");

        Ok((entries, list_response.next_page_token))
    }

    #[instrument(skip(self))]
    async fn list_subscriptions_page(
        &self,
        cursor: Option<String>,
    ) -> BridgeResult<(Vec<String>, Option<String>)> {
        let mut url = format!(
            "{}/subscriptions?part=snippet&mine=true&maxResults={}",
            YOUTUBE_API_BASE, MAX_PAGE_SIZE
        );

        if let Some(page_token) = cursor {
            url.push_str(&format!("&pageToken={}", urlencoding::encode(&page_token)));
        }

        let list_response: SubscriptionListResponse = self.get_json(url).await?;

        let channels: Vec<String> = list_response
            .items
            .into_iter()
            .map(|item| item.snippet.resource_id.channel_id)
            .collect();

        debug!(count = channels.len(), "Listed subscriptions page");

        Ok((channels, list_response.next_page_token))
    }

    #[instrument(skip(self), fields(channel_id = %channel_id))]
    async fn search_recent(
        &self,
        channel_id: &str,
        published_after: DateTime<Utc>,
    ) -> BridgeResult<Vec<String>> {
        let url = format!(
            "{}/search?part=id&channelId={}&publishedAfter={}&type=video&maxResults={}",
            YOUTUBE_API_BASE,
            urlencoding::encode(channel_id),
            urlencoding::encode(&published_after.to_rfc3339_opts(SecondsFormat::Millis, true)),
            MAX_PAGE_SIZE
        );

        let search_response: SearchListResponse = self.get_json(url).await?;

        // Non-video hits carry no videoId and are dropped
        let video_ids: Vec<String> = search_response
            .items
            .into_iter()
            .filter_map(|item| item.id.video_id)
            .collect();

        debug!(count = video_ids.len(), "Searched recent uploads");

        Ok(video_ids)
    }

    #[instrument(skip(self, video_ids), fields(batch_size = video_ids.len()))]
    async fn get_videos(&self, video_ids: &[String]) -> BridgeResult<Vec<VideoEntry>> {
        let url = format!(
            "{}/videos?part=snippet,contentDetails&id={}",
            YOUTUBE_API_BASE,
            urlencoding::encode(&video_ids.join(","))
        );

        let video_response: VideoListResponse = self.get_json(url).await?;

        let entries: Vec<VideoEntry> = video_response
            .items
            .into_iter()
            .map(|item| VideoEntry::new(item.id, item.snippet.title))
            .collect();

        Ok(entries)
    }

    #[instrument(skip(self), fields(playlist_id = %playlist_id, video_id = %video_id))]
    async fn insert_playlist_item(&self, playlist_id: &str, video_id: &str) -> BridgeResult<()> {
        let url = format!("{}/playlistItems?part=snippet", YOUTUBE_API_BASE);
        let body = PlaylistItemInsertRequest::new(playlist_id, video_id);

        self.post_json(url, &body).await?;

        info!("Inserted video into playlist");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_traits::http::HttpResponse;
    use bytes::Bytes;
    use mockall::mock;
    use std::collections::HashMap;

    mock! {
        HttpClient {}

        #[async_trait]
        impl HttpClient for HttpClient {
            async fn execute(&self, request: HttpRequest) -> BridgeResult<HttpResponse>;
        }
    }

    fn json_response(body: &str) -> HttpResponse {
        HttpResponse {
            status: 200,
            headers: HashMap::new(),
            body: Bytes::from(body.as_bytes().to_vec()),
        }
    }

    #[tokio::test]
    async fn test_list_playlist_page_success() {
        let mut mock_http = MockHttpClient::new();

        mock_http.expect_execute().times(1).returning(|req| {
            assert!(req.url.contains("playlistId=PL123"));
            assert!(req.url.contains("maxResults=50"));
            assert!(!req.url.contains("pageToken"));
            assert!(req.headers.contains_key("Authorization"));

            Ok(json_response(
                r#"{
                    "items": [
                        {
                            "snippet": { "title": "First" },
                            "contentDetails": { "videoId": "vid1" }
                        },
                        {
                            "snippet": { "title": "Second" },
                            "contentDetails": { "videoId": "vid2" }
                        }
                    ],
                    "nextPageToken": "page2"
                }"#,
            ))
        });

        let connector = YouTubeConnector::new(Arc::new(mock_http), "test_token".to_string());
        let (entries, cursor) = connector.list_playlist_page("PL123", None).await.unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], VideoEntry::new("vid1", "First"));
        assert_eq!(cursor, Some("page2".to_string()));
    }

    #[tokio::test]
    async fn test_list_playlist_page_passes_cursor() {
        let mut mock_http = MockHttpClient::new();

        mock_http.expect_execute().times(1).returning(|req| {
            assert!(req.url.contains("pageToken=page2"));
            Ok(json_response(r#"{ "items": [] }"#))
        });

        let connector = YouTubeConnector::new(Arc::new(mock_http), "test_token".to_string());
        let (entries, cursor) = connector
            .list_playlist_page("PL123", Some("page2".to_string()))
            .await
            .unwrap();

        assert!(entries.is_empty());
        assert_eq!(cursor, None);
    }

    #[tokio::test]
    async fn test_list_subscriptions_page() {
        let mut mock_http = MockHttpClient::new();

        mock_http.expect_execute().times(1).returning(|req| {
            assert!(req.url.contains("/subscriptions"));
            assert!(req.url.contains("mine=true"));

            Ok(json_response(
                r#"{
                    "items": [
                        { "snippet": { "resourceId": { "channelId": "UC1" } } },
                        { "snippet": { "resourceId": { "channelId": "UC2" } } }
                    ],
                    "nextPageToken": "more"
                }"#,
            ))
        });

        let connector = YouTubeConnector::new(Arc::new(mock_http), "test_token".to_string());
        let (channels, cursor) = connector.list_subscriptions_page(None).await.unwrap();

        assert_eq!(channels, vec!["UC1".to_string(), "UC2".to_string()]);
        assert_eq!(cursor, Some("more".to_string()));
    }

    #[tokio::test]
    async fn test_search_recent_filters_non_videos() {
        let mut mock_http = MockHttpClient::new();

        mock_http.expect_execute().times(1).returning(|req| {
            assert!(req.url.contains("channelId=UC1"));
            assert!(req.url.contains("type=video"));
            assert!(req.url.contains("publishedAfter="));

            Ok(json_response(
                r#"{
                    "items": [
                        { "id": { "videoId": "vid1" } },
                        { "id": { "channelId": "UC-noise" } },
                        { "id": { "videoId": "vid2" } }
                    ]
                }"#,
            ))
        });

        let connector = YouTubeConnector::new(Arc::new(mock_http), "test_token".to_string());
        let cutoff = DateTime::parse_from_rfc3339("2024-06-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let ids = connector.search_recent("UC1", cutoff).await.unwrap();

        assert_eq!(ids, vec!["vid1".to_string(), "vid2".to_string()]);
    }

    #[tokio::test]
    async fn test_get_videos_joins_ids_in_one_request() {
        let mut mock_http = MockHttpClient::new();

        mock_http.expect_execute().times(1).returning(|req| {
            // Comma-joined batch, single request
            assert!(req.url.contains("id=vid1%2Cvid2"));

            Ok(json_response(
                r#"{
                    "items": [
                        { "id": "vid1", "snippet": { "title": "One" } },
                        { "id": "vid2", "snippet": { "title": "Two" } }
                    ]
                }"#,
            ))
        });

        let connector = YouTubeConnector::new(Arc::new(mock_http), "test_token".to_string());
        let entries = connector
            .get_videos(&["vid1".to_string(), "vid2".to_string()])
            .await
            .unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1], VideoEntry::new("vid2", "Two"));
    }

    #[tokio::test]
    async fn test_insert_playlist_item_posts_snippet_body() {
        let mut mock_http = MockHttpClient::new();

        mock_http.expect_execute().times(1).returning(|req| {
            assert_eq!(req.method, HttpMethod::Post);
            assert!(req.url.ends_with("/playlistItems?part=snippet"));
            assert_eq!(
                req.headers.get("Content-Type"),
                Some(&"application/json".to_string())
            );

            let body: serde_json::Value =
                serde_json::from_slice(req.body.as_ref().unwrap()).unwrap();
            assert_eq!(body["snippet"]["playlistId"], "PL123");
            assert_eq!(body["snippet"]["resourceId"]["videoId"], "vid1");
            assert_eq!(body["snippet"]["resourceId"]["kind"], "youtube#video");

            Ok(json_response("{}"))
        });

        let connector = YouTubeConnector::new(Arc::new(mock_http), "test_token".to_string());
        connector.insert_playlist_item("PL123", "vid1").await.unwrap();
    }

    #[tokio::test]
    async fn test_non_success_fails_before_parsing() {
        let mut mock_http = MockHttpClient::new();

        mock_http.expect_execute().times(1).returning(|_| {
            Ok(HttpResponse {
                status: 404,
                headers: HashMap::new(),
                body: Bytes::from("playlist not found"),
            })
        });

        let connector = YouTubeConnector::new(Arc::new(mock_http), "test_token".to_string());
        let result = connector.list_playlist_page("PL-missing", None).await;

        match result {
            Err(bridge_traits::BridgeError::RemoteStatus { status, message }) => {
                assert_eq!(status, 404);
                assert_eq!(message, "playlist not found");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
