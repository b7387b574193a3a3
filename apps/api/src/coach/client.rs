//! Investment-coach backend access.
//!
//! When `INVESTMENT_API_URL` is configured every call goes upstream first; any
//! network failure or non-2xx status is logged and answered locally instead.

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::coach::market;
use crate::coach::rebalance::{self, RebalanceError, RebalanceRequest};
use crate::coach::recommendations::{self, RecommendationRequest};

const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum CoachClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("upstream returned status {0}")]
    Status(u16),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Rebalance(#[from] RebalanceError),
}

#[derive(Clone)]
pub struct CoachClient {
    http: Client,
    base_url: Option<String>,
}

impl CoachClient {
    pub fn new(base_url: Option<String>) -> Result<Self, CoachClientError> {
        Ok(Self {
            http: Client::builder().timeout(UPSTREAM_TIMEOUT).build()?,
            base_url: base_url.map(|u| u.trim_end_matches('/').to_string()),
        })
    }

    pub async fn recommendations(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Value, CoachClientError> {
        if let Some(value) = self
            .post_upstream("/api/investment-coach/recommendations", request)
            .await
        {
            return Ok(value);
        }
        Ok(serde_json::to_value(recommendations::generate(request))?)
    }

    /// `Ok(None)` when neither upstream nor the local catalogue knows the symbol.
    /// Symbols are plain tickers; anything else is unknown without asking upstream.
    pub async fn etf_info(&self, symbol: &str) -> Result<Option<Value>, CoachClientError> {
        if symbol.is_empty() || !symbol.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Ok(None);
        }
        let path = format!("/api/investment-coach/etf/{symbol}");
        if let Some(value) = self.get_upstream(&path).await {
            return Ok(Some(value));
        }
        market::etf_info(symbol)
            .map(serde_json::to_value)
            .transpose()
            .map_err(Into::into)
    }

    pub async fn market_analysis(&self) -> Result<Value, CoachClientError> {
        if let Some(value) = self
            .get_upstream("/api/investment-coach/market-analysis")
            .await
        {
            return Ok(value);
        }
        Ok(serde_json::to_value(market::market_analysis())?)
    }

    pub async fn rebalance(&self, request: &RebalanceRequest) -> Result<Value, CoachClientError> {
        let body = serde_json::json!({
            "current_portfolio": request.current_portfolio,
            "target_allocation": request.target_allocation,
        });
        if let Some(value) = self
            .post_upstream("/api/investment-coach/rebalance", &body)
            .await
        {
            return Ok(value);
        }
        Ok(serde_json::to_value(rebalance::rebalance(request)?)?)
    }

    async fn get_upstream(&self, path: &str) -> Option<Value> {
        let base = self.base_url.as_deref()?;
        let result = Self::fetch(self.http.get(format!("{base}{path}"))).await;
        Self::log_fallback(path, result)
    }

    async fn post_upstream<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Option<Value> {
        let base = self.base_url.as_deref()?;
        let result = Self::fetch(self.http.post(format!("{base}{path}")).json(body)).await;
        Self::log_fallback(path, result)
    }

    async fn fetch(request: reqwest::RequestBuilder) -> Result<Value, CoachClientError> {
        let response = request.send().await?;
        Self::read_json(response).await
    }

    async fn read_json(response: reqwest::Response) -> Result<Value, CoachClientError> {
        let status = response.status();
        if !status.is_success() {
            return Err(CoachClientError::Status(status.as_u16()));
        }
        Ok(response.json::<Value>().await?)
    }

    fn log_fallback(path: &str, result: Result<Value, CoachClientError>) -> Option<Value> {
        match result {
            Ok(value) => {
                debug!("Upstream coach answered {path}");
                Some(value)
            }
            Err(e) => {
                warn!("Upstream coach call {path} failed, using local data: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        http::StatusCode,
        routing::{get, post},
        Json, Router,
    };
    use serde_json::json;
    use std::collections::BTreeMap;

    async fn spawn_stub() -> String {
        let app = Router::new()
            .route(
                "/api/investment-coach/recommendations",
                post(|| async { Json(json!({"success": true, "source": "upstream"})) }),
            )
            .route(
                "/api/investment-coach/market-analysis",
                get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
            )
            .route(
                "/api/investment-coach/internal",
                get(|| async { Json(json!({"leaked": true})) }),
            );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn test_local_only_generates_recommendations() {
        let client = CoachClient::new(None).unwrap();
        let value = client
            .recommendations(&RecommendationRequest::default())
            .await
            .unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["risk_level"], "medium");
        assert_eq!(value["allocation"]["total_stocks"], 85);
    }

    #[tokio::test]
    async fn test_unreachable_upstream_falls_back() {
        let client = CoachClient::new(Some("http://127.0.0.1:9".to_string())).unwrap();
        let value = client
            .recommendations(&RecommendationRequest::default())
            .await
            .unwrap();
        assert_eq!(value["risk_level"], "medium");
        assert!(value.get("source").is_none());
    }

    #[tokio::test]
    async fn test_upstream_success_is_passed_through() {
        let base = spawn_stub().await;
        let client = CoachClient::new(Some(format!("{base}/"))).unwrap();
        let value = client
            .recommendations(&RecommendationRequest::default())
            .await
            .unwrap();
        assert_eq!(value["source"], "upstream");
    }

    #[tokio::test]
    async fn test_upstream_error_status_falls_back() {
        let base = spawn_stub().await;
        let client = CoachClient::new(Some(base)).unwrap();
        let value = client.market_analysis().await.unwrap();
        assert_eq!(value["summary"]["top_sector"], "Technology");
    }

    #[tokio::test]
    async fn test_unknown_route_falls_back_for_etf_info() {
        let base = spawn_stub().await;
        let client = CoachClient::new(Some(base)).unwrap();
        let voo = client.etf_info("VOO").await.unwrap().unwrap();
        assert_eq!(voo["provider"], "Vanguard");
        assert!(client.etf_info("NOPE").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_local_rebalance_validation_error() {
        let client = CoachClient::new(None).unwrap();
        let request = RebalanceRequest {
            current_portfolio: BTreeMap::from([("VOO".to_string(), 100.0)]),
            target_allocation: BTreeMap::from([("VOO".to_string(), 50.0)]),
        };
        let err = client.rebalance(&request).await.unwrap_err();
        assert!(matches!(
            err,
            CoachClientError::Rebalance(RebalanceError::TargetSum(_))
        ));
    }

    #[tokio::test]
    async fn test_etf_symbol_cannot_reroute_upstream() {
        let base = spawn_stub().await;
        let client = CoachClient::new(Some(base)).unwrap();
        for symbol in ["../internal", "VOO?x=1", "VOO/../../internal", ""] {
            assert!(client.etf_info(symbol).await.unwrap().is_none(), "{symbol}");
        }
    }
}
