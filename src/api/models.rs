use crate::api::timestamp;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One technician/job assignment on the schedule board.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ScheduleEntry {
    #[serde(default)]
    pub technician_name: String,
    pub job_id: i64,
    #[serde(default)]
    pub car_model: String,
    #[serde(default)]
    pub service_type: String,
    #[serde(default, alias = "status")]
    pub task_status: String,
    #[serde(default, alias = "start_time", deserialize_with = "timestamp::lenient")]
    pub scheduled_time: Option<NaiveDateTime>,
    #[serde(default, alias = "end_time", deserialize_with = "timestamp::lenient")]
    pub promised_delivery: Option<NaiveDateTime>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Technician {
    pub technician_id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub skill_level: String,
    #[serde(default)]
    pub utilization: f64,
    #[serde(default)]
    pub available: bool,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct JobCard {
    pub job_id: i64,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub service_type: String,
    #[serde(default, deserialize_with = "timestamp::lenient")]
    pub promised_delivery_time: Option<NaiveDateTime>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub technician_id: Option<i64>,
}

impl JobCard {
    /// Only unassigned, pending jobs can be handed to the auto-assigner.
    pub fn can_auto_assign(&self) -> bool {
        self.technician_id.is_none() && self.status.trim().eq_ignore_ascii_case("pending")
    }
}

/// Create request payload
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct NewJobCard {
    pub customer_name: String,
    pub service_type: String,
    pub promised_delivery_time: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Alert {
    pub alert_id: i64,
    #[serde(default)]
    pub alert_type: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub severity: String,
    #[serde(default, deserialize_with = "timestamp::lenient")]
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Critical,
    Info,
}

impl Severity {
    pub fn from_label(label: &str) -> Self {
        if label.trim().eq_ignore_ascii_case("critical") {
            Severity::Critical
        } else {
            Severity::Info
        }
    }
}

impl Alert {
    pub fn severity(&self) -> Severity {
        Severity::from_label(&self.severity)
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct KpiOverview {
    #[serde(default)]
    pub total_jobs: u64,
    #[serde(default)]
    pub pending_jobs: u64,
    #[serde(default)]
    pub completed_jobs: u64,
    #[serde(default)]
    pub average_utilization: f64,
    #[serde(default)]
    pub on_time_completion_rate: f64,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct TrendPoint {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub total_jobs: u64,
    #[serde(default)]
    pub completed_jobs: u64,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct TechnicianPerformance {
    #[serde(default)]
    pub technician_name: String,
    #[serde(default)]
    pub jobs_completed: u64,
    #[serde(default)]
    pub average_time: f64,
}

/// Both KPI chart series; fetched together and cleared together.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KpiCharts {
    pub trends: Vec<TrendPoint>,
    pub performance: Vec<TechnicianPerformance>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UtilizationBand {
    Low,
    Moderate,
    High,
}

impl UtilizationBand {
    pub fn of(utilization: f64) -> Self {
        if utilization < 50.0 {
            UtilizationBand::Low
        } else if utilization < 80.0 {
            UtilizationBand::Moderate
        } else {
            UtilizationBand::High
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn schedule_entry_accepts_both_field_spellings() {
        let current: ScheduleEntry = serde_json::from_str(
            r#"{"technician_name":"Bob","job_id":7,"car_model":"Civic","service_type":"Oil",
                "task_status":"planned","scheduled_time":"2024-05-02T09:00:00",
                "promised_delivery":"2024-05-02T11:30:00"}"#,
        )
        .unwrap();
        let legacy: ScheduleEntry = serde_json::from_str(
            r#"{"technician_name":"Bob","job_id":7,"car_model":"Civic","service_type":"Oil",
                "status":"planned","start_time":"2024-05-02T09:00:00",
                "end_time":"2024-05-02T11:30:00"}"#,
        )
        .unwrap();
        assert_eq!(current, legacy);
        assert_eq!(current.promised_delivery.unwrap().minute(), 30);
    }

    #[test]
    fn schedule_entry_tolerates_missing_descriptive_fields() {
        let entry: ScheduleEntry = serde_json::from_str(r#"{"job_id":1,"scheduled_time":null}"#).unwrap();
        assert_eq!(entry.technician_name, "");
        assert_eq!(entry.task_status, "");
        assert_eq!(entry.scheduled_time, None);
        assert_eq!(entry.promised_delivery, None);
    }

    #[test]
    fn schedule_entry_requires_job_id() {
        assert!(serde_json::from_str::<ScheduleEntry>(r#"{"technician_name":"Bob"}"#).is_err());
    }

    #[test]
    fn auto_assign_only_for_unassigned_pending() {
        let mut job: JobCard = serde_json::from_str(r#"{"job_id":3,"status":"pending"}"#).unwrap();
        assert!(job.can_auto_assign());
        job.technician_id = Some(4);
        assert!(!job.can_auto_assign());
        job.technician_id = None;
        job.status = "completed".to_string();
        assert!(!job.can_auto_assign());
    }

    #[test]
    fn new_job_card_serializes_flat() {
        let body = NewJobCard {
            customer_name: "Ada".to_string(),
            service_type: "Brakes".to_string(),
            promised_delivery_time: "2024-05-02T17:00".to_string(),
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["customer_name"], "Ada");
        assert_eq!(value["promised_delivery_time"], "2024-05-02T17:00");
    }

    #[test]
    fn severity_and_utilization_bands() {
        assert_eq!(Severity::from_label("CRITICAL"), Severity::Critical);
        assert_eq!(Severity::from_label("warning"), Severity::Info);
        assert_eq!(UtilizationBand::of(49.9), UtilizationBand::Low);
        assert_eq!(UtilizationBand::of(50.0), UtilizationBand::Moderate);
        assert_eq!(UtilizationBand::of(80.0), UtilizationBand::High);
    }
}
