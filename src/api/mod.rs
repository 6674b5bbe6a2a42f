pub mod client;
pub mod models;
pub mod timestamp;

pub use client::ApiClient;
pub use models::{
    Alert, JobCard, KpiCharts, KpiOverview, NewJobCard, ScheduleEntry, Severity, Technician,
    TechnicianPerformance, TrendPoint, UtilizationBand,
};
