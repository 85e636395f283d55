use crate::types::FetchConfig;
use anyhow::{Context, Result};
use std::future::Future;

/// Anything that can turn a URL into page HTML.
pub trait PageSource {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String>>;
}

/// HTTP page source: one GET per call, no retries.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self> {
        if config.accept_invalid_certs {
            tracing::warn!("TLS certificate validation is disabled");
        }

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client })
    }
}

impl PageSource for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to fetch page")?;

        let status = response.status();
        anyhow::ensure!(status.is_success(), "HTTP {status} for {url}");

        let bytes = response
            .bytes()
            .await
            .context("Failed to read response body")?;
        tracing::debug!(url = %url, bytes = bytes.len(), "Received HTML");

        String::from_utf8(bytes.to_vec()).context("Response body is not valid UTF-8")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Answer one request with `status` and `body`. The handle yields the raw request head.
    async fn serve_once(
        status: &'static str,
        body: &'static [u8],
    ) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut request: Vec<u8> = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            let mut response = format!(
                "HTTP/1.1 {status}\r\n\
                 Content-Type: text/html\r\n\
                 Content-Length: {}\r\n\
                 Connection: close\r\n\r\n",
                body.len()
            )
            .into_bytes();
            response.extend_from_slice(body);
            // The client may hang up early on an error status
            let _ = stream.write_all(&response).await;
            let _ = stream.shutdown().await;

            String::from_utf8_lossy(&request).into_owned()
        });

        (format!("http://{addr}/x/"), handle)
    }

    fn fetcher() -> HttpFetcher {
        HttpFetcher::new(&FetchConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_returns_utf8_body() {
        let (url, server) = serve_once("200 OK", "<p>śrī</p>".as_bytes()).await;

        let body = fetcher().fetch(&url).await.unwrap();
        assert_eq!(body, "<p>śrī</p>");
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_fetch_sends_user_agent() {
        let (url, server) = serve_once("200 OK", b"ok").await;

        fetcher().fetch(&url).await.unwrap();
        let request = server.await.unwrap().to_lowercase();
        assert!(request.starts_with("get /x/ http/1.1"));
        assert!(request.contains("user-agent: mozilla/5.0 (compatible; noi-search/1.0)"));
    }

    #[tokio::test]
    async fn test_fetch_rejects_error_status() {
        let (url, server) = serve_once("404 Not Found", b"missing").await;

        let err = fetcher().fetch(&url).await.unwrap_err();
        assert!(err.to_string().contains("HTTP 404"), "{err:#}");
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_fetch_rejects_invalid_utf8() {
        let (url, server) = serve_once("200 OK", b"\xff\xfe").await;

        let err = fetcher().fetch(&url).await.unwrap_err();
        assert!(err.to_string().contains("not valid UTF-8"), "{err:#}");
        server.await.unwrap();
    }

    #[test]
    fn test_client_builds_with_relaxed_tls() {
        let config = FetchConfig::default();
        assert!(config.accept_invalid_certs);
        assert_eq!(config.user_agent, "Mozilla/5.0 (compatible; NOI-Search/1.0)");
        assert_eq!(config.timeout, std::time::Duration::from_secs(15));
        assert!(HttpFetcher::new(&config).is_ok());
    }
}
