use crate::api::ApiClient;
use crate::commands::print_lines;
use crate::error::Result;
use crate::schedule::board::render_text;
use tracing::debug;

pub async fn handle(client: &ApiClient, width: u16) -> Result<()> {
    print_lines(&board_lines(client, width).await?);
    Ok(())
}

async fn board_lines(client: &ApiClient, width: u16) -> Result<Vec<String>> {
    let entries = client.schedule_board().await?;
    debug!(entries = entries.len(), width, "rendering schedule board");
    Ok(render_text(&entries, width))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorkshopConfig;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn server_error_is_returned() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/schedule/board"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        let client = ApiClient::new(&WorkshopConfig {
            api_url: server.uri(),
            ..WorkshopConfig::default()
        })
        .unwrap();

        assert!(handle(&client, 80).await.is_err());
    }

    #[tokio::test]
    async fn board_reads_legacy_field_names() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/schedule/board"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "technician_name": "Bob",
                "job_id": 7,
                "car_model": "Civic",
                "service_type": "Oil change",
                "status": "planned",
                "start_time": "2024-05-02T09:00:00",
                "end_time": "2024-05-02T11:00:00"
            }])))
            .mount(&server)
            .await;
        let client = ApiClient::new(&WorkshopConfig {
            api_url: server.uri(),
            ..WorkshopConfig::default()
        })
        .unwrap();

        let lines = board_lines(&client, 26).await.unwrap();
        let bob = lines.iter().find(|l| l.starts_with("Bob")).unwrap();
        // 09:00-11:00 on a 26-cell track is four planned cells.
        assert_eq!(bob.matches('▒').count(), 4);
        assert!(lines
            .iter()
            .any(|l| l.contains("Job #7") && l.contains("planned") && l.contains("09:00 - 11:00")));
        assert!(lines.iter().any(|l| l.ends_with("Oil change / Civic")));
    }
}
