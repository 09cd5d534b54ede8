use anyhow::Result;
use owo_colors::OwoColorize;

pub async fn run(account: &str, calendar_id: &str, event_id: &str) -> Result<()> {
    agendar_google::api::delete_event(account, calendar_id, event_id).await?;

    println!("{}", format!("Deleted: {}", event_id).green());

    Ok(())
}
