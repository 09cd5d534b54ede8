use agendar_core::config::GlobalConfig;
use anyhow::Result;
use owo_colors::OwoColorize;

pub async fn run() -> Result<()> {
    println!("Authenticating with Google...");

    // Runs the full OAuth flow and stores the session on disk
    let account_email = agendar_google::auth::authenticate().await?;

    // Remember the account so later commands don't need --account
    let mut config = GlobalConfig::load()?;
    if config.default_account.is_none() {
        config.default_account = Some(account_email.clone());
        config.save()?;
    }

    println!("Authenticated as: {}", account_email.green());
    println!("\nRun `agendar list` to see upcoming events.");

    Ok(())
}
