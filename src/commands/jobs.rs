use crate::api::{timestamp, ApiClient, JobCard};
use crate::commands::print_lines;
use crate::error::{Error, Result};
use crate::tui::JobCardForm;
use clap::Subcommand;
use tracing::info;

#[derive(Subcommand)]
pub enum JobsCommands {
    /// List all job cards
    List,
    /// Create a new job card
    Create {
        /// Customer name
        #[arg(long)]
        customer: String,
        /// Service type
        #[arg(long)]
        service: String,
        /// Promised delivery time (YYYY-MM-DDTHH:MM, local time)
        #[arg(long)]
        delivery: String,
    },
    /// Auto-assign a pending, unassigned job to a technician
    Assign {
        /// Job ID
        job_id: i64,
    },
}

pub async fn handle(client: &ApiClient, cmd: JobsCommands) -> Result<()> {
    match cmd {
        JobsCommands::List => {
            let jobs = client.job_cards().await?;
            print_lines(&format_job_cards(&jobs));
        }
        JobsCommands::Create {
            customer,
            service,
            delivery,
        } => {
            let form = JobCardForm {
                customer_name: customer,
                service_type: service,
                promised_delivery_time: delivery,
                ..JobCardForm::default()
            };
            let body = form.to_request()?;
            client.create_job_card(&body).await?;
            info!(customer = %body.customer_name, "job card created");
            println!("Job card created successfully");
        }
        JobsCommands::Assign { job_id } => {
            let jobs = client.job_cards().await?;
            match jobs.iter().find(|job| job.job_id == job_id) {
                Some(job) if !job.can_auto_assign() => {
                    return Err(Error::Invalid(format!(
                        "Job #{} is not pending and unassigned",
                        job_id
                    )));
                }
                None => {
                    return Err(Error::Invalid(format!("Job #{} not found", job_id)));
                }
                Some(_) => {}
            }
            client.auto_assign(job_id).await?;
            info!(job_id, "job auto-assigned");
            println!("Job auto-assigned successfully");
        }
    }
    Ok(())
}

pub fn format_job_cards(jobs: &[JobCard]) -> Vec<String> {
    if jobs.is_empty() {
        return vec!["No job cards found".to_string()];
    }

    let mut out = vec![format!(
        "{:<8} {:<20} {:<18} {:<17} {:<12} {}",
        "Job ID", "Customer", "Service Type", "Delivery Time", "Status", "Technician"
    )];
    for job in jobs {
        let technician = match job.technician_id {
            Some(id) => format!("#{}", id),
            None if job.can_auto_assign() => "(auto-assign available)".to_string(),
            None => "—".to_string(),
        };
        out.push(format!(
            "{:<8} {:<20} {:<18} {:<17} {:<12} {}",
            format!("#{}", job.job_id),
            job.customer_name,
            job.service_type,
            timestamp::display(job.promised_delivery_time),
            job.status,
            technician
        ));
    }
    out
}
