use crate::api::{ApiClient, KpiCharts, KpiOverview};
use crate::commands::print_lines;
use crate::error::Result;

pub async fn handle(client: &ApiClient) -> Result<()> {
    let (overview, charts) = tokio::try_join!(client.kpi_overview(), client.kpi_charts())?;
    print_lines(&format_kpis(&overview, &charts));
    Ok(())
}

pub fn format_kpis(overview: &KpiOverview, charts: &KpiCharts) -> Vec<String> {
    let mut out = vec![
        "Overview".to_string(),
        "────────".to_string(),
        format!("Total jobs:       {}", overview.total_jobs),
        format!("Pending jobs:     {}", overview.pending_jobs),
        format!("Completed jobs:   {}", overview.completed_jobs),
        format!("Avg utilization:  {:.1}%", overview.average_utilization),
        format!("On-time rate:     {:.1}%", overview.on_time_completion_rate),
    ];

    if !charts.trends.is_empty() {
        out.push(String::new());
        out.push("Job trends (total / completed)".to_string());
        for point in &charts.trends {
            out.push(format!(
                "  {:<12} {:>4} / {:<4}",
                point.date, point.total_jobs, point.completed_jobs
            ));
        }
    }

    if !charts.performance.is_empty() {
        out.push(String::new());
        out.push("Technician performance".to_string());
        for perf in &charts.performance {
            out.push(format!(
                "  {:<20} {:>3} jobs  {}: {:.1}h",
                perf.technician_name, perf.jobs_completed, perf.technician_name, perf.average_time
            ));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::TechnicianPerformance;

    #[test]
    fn overview_percentages_have_one_decimal() {
        let overview = KpiOverview {
            total_jobs: 10,
            pending_jobs: 3,
            completed_jobs: 7,
            average_utilization: 66.666,
            on_time_completion_rate: 90.0,
        };
        let lines = format_kpis(&overview, &KpiCharts::default());
        assert!(lines.contains(&"Avg utilization:  66.7%".to_string()));
        assert!(lines.contains(&"On-time rate:     90.0%".to_string()));
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn performance_rows_label_hours() {
        let charts = KpiCharts {
            trends: Vec::new(),
            performance: vec![TechnicianPerformance {
                technician_name: "Bob".to_string(),
                jobs_completed: 4,
                average_time: 2.5,
            }],
        };
        let lines = format_kpis(&KpiOverview::default(), &charts);
        assert!(lines.last().is_some_and(|l| l.ends_with("Bob: 2.5h")));
    }
}
