//! TMDB now-playing client

use std::time::Duration;

use color_eyre::eyre::{eyre, Report, Result, WrapErr};
use serde::Deserialize;

use crate::domain::movie::{MovieList, MovieRecord};
use crate::infrastructure::{
    config::{ApiKey, TmdbConfig},
    movie_source::{FetchFuture, MovieSource},
};

/// Body of `GET /movie/now_playing`
#[derive(Debug, Clone, Deserialize)]
pub struct NowPlayingResponse {
    #[serde(default)]
    pub page: u32,
    pub results: Vec<MovieRecord>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

impl NowPlayingResponse {
    /// The results in response order, duplicates dropped
    pub fn into_movies(self) -> MovieList {
        self.results.into_iter().collect()
    }
}

// Error body TMDB sends alongside 4xx/5xx statuses
#[derive(Debug, Deserialize)]
struct TmdbErrorBody {
    status_message: String,
}

pub struct TmdbClient {
    http: reqwest::Client,
    base_url: String,
    api_key: ApiKey,
    language: String,
    region: Option<String>,
}

impl TmdbClient {
    pub fn new(config: &TmdbConfig) -> Result<Self> {
        let api_key = config.api_key.clone().ok_or_else(|| {
            eyre!("TMDB API key is missing: set tmdb.api_key in the config file or MARQUEE__TMDB__API_KEY")
        })?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .wrap_err("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
            language: config.language.clone(),
            region: config.region.clone(),
        })
    }

    pub fn now_playing_url(&self) -> String {
        format!("{}/movie/now_playing", self.base_url)
    }

    /// Fetches one page of now-playing results (TMDB's first page when `None`)
    pub async fn now_playing(&self, page: Option<u32>) -> Result<NowPlayingResponse> {
        let mut request = self.http.get(self.now_playing_url()).query(&[
            ("api_key", self.api_key.expose()),
            ("language", self.language.as_str()),
        ]);
        if let Some(region) = &self.region {
            request = request.query(&[("region", region)]);
        }
        if let Some(page) = page {
            request = request.query(&[("page", page)]);
        }

        log::debug!("GET {} (page {page:?})", self.now_playing_url());
        // The request URL carries the API key, keep it out of errors
        let response = request
            .send()
            .await
            .map_err(|e| Report::new(e.without_url()))
            .wrap_err("Now-playing request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<TmdbErrorBody>(&body)
                .map(|error| error.status_message)
                .unwrap_or(body);
            return Err(eyre!("TMDB returned {status}: {message}"));
        }

        let body = response
            .json::<NowPlayingResponse>()
            .await
            .map_err(|e| Report::new(e.without_url()))
            .wrap_err("Unexpected now-playing payload")?;
        log::info!(
            "Fetched now-playing page {}/{} ({} results)",
            body.page,
            body.total_pages,
            body.results.len()
        );
        Ok(body)
    }
}

impl MovieSource for TmdbClient {
    fn name(&self) -> &str {
        "tmdb"
    }

    fn fetch_now_playing(&self) -> FetchFuture<'_> {
        Box::pin(async move { Ok(self.now_playing(None).await?.into_movies()) })
    }
}

#[cfg(test)]
mod tests {
    use color_eyre::Result;
    use pretty_assertions::assert_eq;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;
    use crate::domain::movie::MovieId;

    const BODY: &str = r#"{
        "dates": { "maximum": "2024-06-01", "minimum": "2024-04-20" },
        "page": 1,
        "results": [
            { "id": 27205, "title": "Inception", "overview": "Dreams.", "backdrop_path": "/s3T.jpg",
              "poster_path": "/9gk.jpg", "release_date": "2010-07-15", "vote_average": 8.4, "vote_count": 35000 },
            { "id": 155, "title": "The Dark Knight", "overview": "Why so serious?", "backdrop_path": null,
              "release_date": "" }
        ],
        "total_pages": 1,
        "total_results": 2
    }"#;

    fn config(base_url: String) -> TmdbConfig {
        TmdbConfig {
            api_key: Some(ApiKey::new("test-key")),
            base_url,
            region: Some("US".to_string()),
            ..TmdbConfig::default()
        }
    }

    // Serves one canned HTTP response and hands back the request line
    async fn serve_once(status: &'static str, body: &'static str) -> Result<(String, tokio::task::JoinHandle<String>)> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let base_url = format!("http://{}/3", listener.local_addr()?);
        let handle = tokio::spawn(async move {
            let Ok((mut socket, _)) = listener.accept().await else {
                return String::new();
            };
            let mut buf = vec![0u8; 4096];
            let n = socket.read(&mut buf).await.unwrap_or(0);
            let request = String::from_utf8_lossy(&buf[..n]).to_string();
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = socket.write_all(response.as_bytes()).await;
            request.lines().next().unwrap_or_default().to_string()
        });
        Ok((base_url, handle))
    }

    #[test]
    fn test_parse_now_playing_payload() -> Result<()> {
        let response: NowPlayingResponse = serde_json::from_str(BODY)?;
        assert_eq!(response.total_results, 2);

        let movies = response.into_movies();
        assert_eq!(movies.len(), 2);
        assert_eq!(movies.banner().map(|m| m.id), Some(MovieId(27205)));
        assert_eq!(movies[0].release_year(), Some(2010));
        assert_eq!(movies[1].release_date, None);
        assert_eq!(movies[1].backdrop_path, None);
        Ok(())
    }

    #[test]
    fn test_missing_api_key() {
        let result = TmdbClient::new(&TmdbConfig::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_now_playing_url_trims_slash() -> Result<()> {
        let client = TmdbClient::new(&config("https://api.example.com/3/".to_string()))?;
        assert_eq!(client.now_playing_url(), "https://api.example.com/3/movie/now_playing");
        Ok(())
    }

    #[tokio::test]
    async fn test_fetch_now_playing_over_http() -> Result<()> {
        let (base_url, server) = serve_once("200 OK", BODY).await?;
        let client = TmdbClient::new(&config(base_url))?;

        let movies = client.fetch_now_playing().await?;
        let request_line = server.await?;

        assert_eq!(movies.len(), 2);
        assert!(request_line.starts_with("GET /3/movie/now_playing?"));
        assert!(request_line.contains("api_key=test-key"));
        assert!(request_line.contains("language=en-US"));
        assert!(request_line.contains("region=US"));
        Ok(())
    }

    #[tokio::test]
    async fn test_error_status_uses_tmdb_message() -> Result<()> {
        let (base_url, server) = serve_once(
            "401 Unauthorized",
            r#"{"status_code":7,"status_message":"Invalid API key: You must be granted a valid key.","success":false}"#,
        )
        .await?;
        let client = TmdbClient::new(&config(base_url))?;

        let error = client.fetch_now_playing().await.err().map(|e| format!("{e:#}"));
        server.await?;

        let error = error.unwrap_or_default();
        assert!(error.contains("401"), "unexpected error: {error}");
        assert!(error.contains("Invalid API key"));
        assert!(!error.contains("test-key"));
        Ok(())
    }
}
