use crate::api::{ApiClient, Technician, UtilizationBand};
use crate::commands::{print_lines, BULLET_GREEN, BULLET_RED, BULLET_YELLOW};
use crate::error::Result;

pub async fn handle(client: &ApiClient) -> Result<()> {
    let technicians = client.technicians().await?;
    print_lines(&format_technicians(&technicians));
    Ok(())
}

pub fn format_technicians(technicians: &[Technician]) -> Vec<String> {
    if technicians.is_empty() {
        return vec!["No technicians found".to_string()];
    }

    let mut out = vec![format!(
        "  {:<6} {:<22} {:<14} {:>11}  {}",
        "ID", "Name", "Skill Level", "Utilization", "Status"
    )];
    for tech in technicians {
        let bullet = match UtilizationBand::of(tech.utilization) {
            UtilizationBand::Low => BULLET_GREEN,
            UtilizationBand::Moderate => BULLET_YELLOW,
            UtilizationBand::High => BULLET_RED,
        };
        out.push(format!(
            "{} {:<6} {:<22} {:<14} {:>10.0}%  {}",
            bullet,
            tech.technician_id,
            tech.name,
            tech.skill_level,
            tech.utilization,
            if tech.available { "Available" } else { "Busy" }
        ));
    }
    out
}
