use crate::api::{timestamp, Alert, ApiClient, Severity};
use crate::commands::{print_lines, BULLET_BLUE, BULLET_RED};
use crate::error::Result;

pub async fn handle(client: &ApiClient) -> Result<()> {
    let alerts = client.alerts().await?;
    print_lines(&format_alerts(&alerts));
    Ok(())
}

pub fn format_alerts(alerts: &[Alert]) -> Vec<String> {
    if alerts.is_empty() {
        return vec!["No active alerts".to_string()];
    }
    alerts
        .iter()
        .map(|alert| {
            let bullet = match alert.severity() {
                Severity::Critical => BULLET_RED,
                Severity::Info => BULLET_BLUE,
            };
            format!(
                "{} [{}] {} ({}) {}",
                bullet,
                alert.alert_type,
                alert.message,
                timestamp::display(alert.created_at),
                alert.severity
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn critical_alerts_are_red() {
        let lines = format_alerts(&[Alert {
            alert_id: 1,
            alert_type: "Delay".to_string(),
            message: "Job 4 is late".to_string(),
            severity: "critical".to_string(),
            created_at: None,
        }]);
        assert!(lines[0].starts_with(BULLET_RED));
        assert!(lines[0].contains("[Delay] Job 4 is late"));
    }

    #[test]
    fn empty_list_has_message() {
        assert_eq!(format_alerts(&[]), vec!["No active alerts"]);
    }
}
