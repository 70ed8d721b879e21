use crate::edition::Newsroom;
use anyhow::Result;
use tokio_cron_scheduler::{Job, JobScheduler};
use tracing::info;

/// Register one daily refresh per configured time and start the scheduler
pub async fn start_scheduler(newsroom: Newsroom, times: &[String]) -> Result<JobScheduler> {
    let scheduler = JobScheduler::new().await?;

    for time in times {
        let cron_expr = time_to_cron(time)?;
        info!("Scheduling refresh for {} UTC (cron: {})", time, cron_expr);

        let newsroom_clone = newsroom.clone();
        let job = Job::new_async(cron_expr.as_str(), move |_uuid, _l| {
            let newsroom = newsroom_clone.clone();
            Box::pin(async move {
                info!("⏰ Scheduled refresh triggered");
                newsroom.refresh().await;
            })
        })?;

        scheduler.add(job).await?;
    }

    scheduler.start().await?;
    info!("✓ Scheduler started with {} job(s)", times.len());

    Ok(scheduler)
}

/// Convert a UTC time string (HH:MM) to a daily cron expression
fn time_to_cron(time: &str) -> Result<String> {
    let parts: Vec<&str> = time.split(':').collect();
    if parts.len() != 2 {
        anyhow::bail!("Invalid time format: {}. Expected HH:MM", time);
    }

    let hour: u8 = parts[0].parse()?;
    let minute: u8 = parts[1].parse()?;
    if hour > 23 || minute > 59 {
        anyhow::bail!("Time out of range: {}", time);
    }

    // "second minute hour day month day_of_week"
    Ok(format!("0 {} {} * * *", minute, hour))
}
