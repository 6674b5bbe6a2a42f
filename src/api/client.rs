use crate::api::models::{
    Alert, JobCard, KpiCharts, KpiOverview, NewJobCard, ScheduleEntry, Technician,
    TechnicianPerformance, TrendPoint,
};
use crate::config::WorkshopConfig;
use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// Thin client over the workshop REST API.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &WorkshopConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs.max(1)))
            .user_agent(concat!("workshop/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            token: config.token.clone().filter(|t| !t.is_empty()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn schedule_board(&self) -> Result<Vec<ScheduleEntry>> {
        self.get_list("/schedule/board").await
    }

    pub async fn technicians(&self) -> Result<Vec<Technician>> {
        self.get_list("/technicians").await
    }

    pub async fn job_cards(&self) -> Result<Vec<JobCard>> {
        self.get_list("/jobcards").await
    }

    pub async fn create_job_card(&self, job: &NewJobCard) -> Result<()> {
        self.post("/jobcards", Some(job)).await
    }

    pub async fn auto_assign(&self, job_id: i64) -> Result<()> {
        let path = format!("/jobcards/auto_assign?job_id={}", job_id);
        self.post::<()>(&path, None).await
    }

    pub async fn alerts(&self) -> Result<Vec<Alert>> {
        self.get_list("/alerts").await
    }

    pub async fn kpi_overview(&self) -> Result<KpiOverview> {
        let value = self.get_value("/kpi/overview").await?;
        if value.is_null() {
            return Ok(KpiOverview::default());
        }
        serde_json::from_value(value).map_err(|source| Error::Decode {
            path: "/kpi/overview".to_string(),
            source,
        })
    }

    pub async fn kpi_trends(&self) -> Result<Vec<TrendPoint>> {
        self.get_list("/kpi/trends").await
    }

    pub async fn technician_performance(&self) -> Result<Vec<TechnicianPerformance>> {
        self.get_list("/kpi/technician_performance").await
    }

    /// Both chart series; either failure fails the pair.
    pub async fn kpi_charts(&self) -> Result<KpiCharts> {
        let (trends, performance) =
            tokio::try_join!(self.kpi_trends(), self.technician_performance())?;
        Ok(KpiCharts { trends, performance })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let value = self.get_value(path).await?;
        Ok(decode_list(value, path))
    }

    async fn get_value(&self, path: &str) -> Result<Value> {
        debug!(path, "GET");
        let response = self
            .authorize(self.http.get(self.url(path)))
            .send()
            .await
            .map_err(|source| Error::Transport {
                path: path.to_string(),
                source,
            })?;
        let body = read_success_body(path, response).await?;
        serde_json::from_str(&body).map_err(|source| Error::Decode {
            path: path.to_string(),
            source,
        })
    }

    async fn post<B: Serialize>(&self, path: &str, body: Option<&B>) -> Result<()> {
        debug!(path, "POST");
        let mut request = self.authorize(self.http.post(self.url(path)));
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await.map_err(|source| Error::Transport {
            path: path.to_string(),
            source,
        })?;
        read_success_body(path, response).await?;
        Ok(())
    }
}

async fn read_success_body(path: &str, response: reqwest::Response) -> Result<String> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        warn!(path, %status, "API returned an error status");
        return Err(Error::Status {
            path: path.to_string(),
            status,
            body,
        });
    }
    debug!(path, %status, "response received");
    response.text().await.map_err(|source| Error::Transport {
        path: path.to_string(),
        source,
    })
}

/// Decode a list payload leniently.
///
/// A non-array body is an empty list. Elements that do not decode are
/// skipped so one bad row cannot blank the whole view.
pub fn decode_list<T: DeserializeOwned>(value: Value, path: &str) -> Vec<T> {
    let items = match value {
        Value::Array(items) => items,
        other => {
            warn!(path, kind = json_kind(&other), "expected a JSON array; treating as empty");
            return Vec::new();
        }
    };

    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                warn!(path, index, error = %e, "skipping malformed element");
                None
            }
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer, token: Option<&str>) -> ApiClient {
        let cfg = WorkshopConfig {
            api_url: format!("{}/api/", server.uri()),
            token: token.map(String::from),
            request_timeout_secs: 5,
        };
        ApiClient::new(&cfg).unwrap()
    }

    #[test]
    fn decode_list_treats_objects_as_empty() {
        let out: Vec<ScheduleEntry> = decode_list(json!({}), "/schedule/board");
        assert!(out.is_empty());
        let out: Vec<ScheduleEntry> = decode_list(json!(null), "/schedule/board");
        assert!(out.is_empty());
    }

    #[test]
    fn decode_list_skips_bad_elements() {
        let out: Vec<ScheduleEntry> = decode_list(
            json!([
                {"technician_name": "Bob", "job_id": 1},
                {"technician_name": "Eve"},
                {"technician_name": "Bob", "job_id": "x"},
                {"technician_name": "Alice", "job_id": 2}
            ]),
            "/schedule/board",
        );
        let ids: Vec<i64> = out.iter().map(|e| e.job_id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn schedule_board_decodes_array() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/schedule/board"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"technician_name": "Bob", "job_id": 11, "task_status": "completed",
                 "scheduled_time": "2024-05-02T08:00:00", "promised_delivery": "2024-05-02T10:00:00"}
            ])))
            .mount(&server)
            .await;

        let entries = client_for(&server, None).schedule_board().await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].job_id, 11);
    }

    #[tokio::test]
    async fn non_array_payload_is_empty_not_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/schedule/board"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let entries = client_for(&server, None).schedule_board().await.unwrap();
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn server_error_is_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/schedule/board"))
            .respond_with(ResponseTemplate::new(500).set_body_string("down"))
            .mount(&server)
            .await;

        let err = client_for(&server, None).schedule_board().await.unwrap_err();
        match err {
            Error::Status { status, body, .. } => {
                assert_eq!(status.as_u16(), 500);
                assert_eq!(body, "down");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_json_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/alerts"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let err = client_for(&server, None).alerts().await.unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[tokio::test]
    async fn bearer_token_is_sent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/technicians"))
            .and(header("authorization", "Bearer s3cret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"technician_id": 1, "name": "Bob", "skill_level": "senior",
                 "utilization": 42.5, "available": true}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let techs = client_for(&server, Some("s3cret")).technicians().await.unwrap();
        assert_eq!(techs[0].name, "Bob");
    }

    #[tokio::test]
    async fn create_job_card_posts_body() {
        let server = MockServer::start().await;
        let job = NewJobCard {
            customer_name: "Ada".to_string(),
            service_type: "Tyres".to_string(),
            promised_delivery_time: "2024-05-02T17:00".to_string(),
        };
        Mock::given(method("POST"))
            .and(path("/api/jobcards"))
            .and(body_json(json!({
                "customer_name": "Ada",
                "service_type": "Tyres",
                "promised_delivery_time": "2024-05-02T17:00"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"job_id": 9})))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server, None).create_job_card(&job).await.unwrap();
    }

    #[tokio::test]
    async fn auto_assign_uses_query_param() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/jobcards/auto_assign"))
            .and(query_param("job_id", "42"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server, None).auto_assign(42).await.unwrap();
    }

    #[tokio::test]
    async fn kpi_charts_fail_together() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/kpi/trends"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"date": "2024-05-01", "total_jobs": 4, "completed_jobs": 3}
            ])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/kpi/technician_performance"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        assert!(client_for(&server, None).kpi_charts().await.is_err());
    }

    #[tokio::test]
    async fn kpi_overview_defaults_missing_fields() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/kpi/overview"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"total_jobs": 12})))
            .mount(&server)
            .await;

        let overview = client_for(&server, None).kpi_overview().await.unwrap();
        assert_eq!(overview.total_jobs, 12);
        assert_eq!(overview.pending_jobs, 0);
    }
}
