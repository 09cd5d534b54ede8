use anyhow::Result;
use owo_colors::OwoColorize;

pub async fn run(account: &str) -> Result<()> {
    let calendars = agendar_google::api::list_calendars(account).await?;

    if calendars.is_empty() {
        println!("{}", "No calendars found".dimmed());
        return Ok(());
    }

    for calendar in &calendars {
        if calendar.primary {
            println!("{} {}", calendar.summary.bold(), "(primary)".dimmed());
        } else {
            println!("{}", calendar.summary);
        }
        println!("  {}", calendar.id.dimmed());
    }

    Ok(())
}
