//! Provider Module Tests
//!
//! ## Test Scopes
//! - **Query**: Trimming and blank rejection.
//! - **DTOs**: Decoding of provider bodies, including malformed ones.
//! - **PixabayClient**: Requests against a loopback server standing in for the provider.

#[cfg(test)]
mod tests {
    use crate::config::ProviderConfig;
    use crate::provider::client::{ImageSearch, PixabayClient};
    use crate::provider::types::{Query, SearchPage};
    use axum::extract::Query as QueryParams;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use std::collections::HashMap;
    use std::net::SocketAddr;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    fn sample_body(total_hits: u64, hits: usize) -> serde_json::Value {
        let hits: Vec<serde_json::Value> = (0..hits)
            .map(|i| {
                serde_json::json!({
                    "id": i,
                    "webformatURL": format!("https://cdn.example/{}_640.jpg", i),
                    "largeImageURL": format!("https://cdn.example/{}_1280.jpg", i),
                    "tags": "cat, animal",
                    "likes": 3,
                    "views": 10,
                    "comments": 1,
                    "downloads": 7
                })
            })
            .collect();
        serde_json::json!({ "total": total_hits + 5, "totalHits": total_hits, "hits": hits })
    }

    async fn spawn_server(app: Router) -> SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        addr
    }

    fn client_for(addr: SocketAddr) -> PixabayClient {
        let mut config = ProviderConfig::with_key("test-key");
        config.base_url = format!("http://{}/api/", addr);
        config.per_page = 12;
        PixabayClient::new(config).unwrap()
    }

    // ============================================================
    // QUERY
    // ============================================================

    #[test]
    fn test_query_is_trimmed() {
        let query = Query::parse("  cats  ").unwrap();
        assert_eq!(query.as_str(), "cats");
    }

    #[test]
    fn test_blank_queries_are_rejected() {
        for raw in ["", " ", "\t\n", "     "] {
            assert!(Query::parse(raw).is_none(), "{:?} should be rejected", raw);
        }
    }

    // ============================================================
    // DTOs
    // ============================================================

    #[test]
    fn test_search_page_decodes_provider_body() {
        let page: SearchPage = serde_json::from_value(sample_body(120, 2)).unwrap();

        assert_eq!(page.total_hits, 120);
        assert_eq!(page.hits.len(), 2);
        assert_eq!(page.hits[1].webformat_url, "https://cdn.example/1_640.jpg");
        assert_eq!(page.hits[0].downloads, 7);
    }

    #[test]
    fn test_search_page_without_total_hits_fails() {
        let body = serde_json::json!({ "total": 3, "hits": [] });
        assert!(serde_json::from_value::<SearchPage>(body).is_err());
    }

    #[test]
    fn test_search_page_without_hits_fails() {
        let body = serde_json::json!({ "total": 3, "totalHits": 3 });
        assert!(serde_json::from_value::<SearchPage>(body).is_err());
    }

    // ============================================================
    // PIXABAY CLIENT
    // ============================================================

    #[test]
    fn test_page_url_encodes_query() {
        let mut config = ProviderConfig::with_key("k");
        config.base_url = "https://pixabay.com/api/".to_string();
        let client = PixabayClient::new(config).unwrap();

        let url = client.page_url(&Query::parse("red cars").unwrap(), 2);

        assert!(url.starts_with("https://pixabay.com/api/?key=k&q=red%20cars"));
        assert!(url.contains("&page=2&per_page=40"));
        assert!(url.contains("image_type=photo"));
        assert!(url.contains("safesearch=true"));
    }

    #[tokio::test]
    async fn test_fetch_page_sends_expected_params() {
        let seen: Arc<Mutex<Option<HashMap<String, String>>>> = Arc::new(Mutex::new(None));
        let seen_clone = seen.clone();

        let app = Router::new().route(
            "/api/",
            get(move |QueryParams(params): QueryParams<HashMap<String, String>>| {
                let seen = seen_clone.clone();
                async move {
                    *seen.lock().await = Some(params);
                    Json(sample_body(30, 12))
                }
            }),
        );
        let addr = spawn_server(app).await;
        let client = client_for(addr);

        let page = client
            .fetch_page(&Query::parse("cats").unwrap(), 3)
            .await
            .unwrap();

        assert_eq!(page.hits.len(), 12);
        assert_eq!(page.total_hits, 30);

        let params = seen.lock().await.clone().unwrap();
        assert_eq!(params["key"], "test-key");
        assert_eq!(params["q"], "cats");
        assert_eq!(params["page"], "3");
        assert_eq!(params["per_page"], "12");
        assert_eq!(client.per_page(), 12);
    }

    #[tokio::test]
    async fn test_fetch_page_fails_on_error_status() {
        let app = Router::new().route(
            "/api/",
            get(|| async { (StatusCode::BAD_REQUEST, "[ERROR 400] Invalid API key") }),
        );
        let addr = spawn_server(app).await;

        let result = client_for(addr)
            .fetch_page(&Query::parse("cats").unwrap(), 1)
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_fetch_page_fails_on_malformed_body() {
        let app = Router::new().route(
            "/api/",
            get(|| async { Json(serde_json::json!({ "unexpected": true })) }),
        );
        let addr = spawn_server(app).await;

        let result = client_for(addr)
            .fetch_page(&Query::parse("cats").unwrap(), 1)
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_fetch_page_rejects_page_zero() {
        let client = client_for("127.0.0.1:9".parse().unwrap());
        let result = client.fetch_page(&Query::parse("cats").unwrap(), 0).await;
        assert!(result.is_err());
    }
}
