use colored::Colorize;
use pressflow_api::{HttpPlatformApi, PlatformApi};
use pressflow_config::CliConfig;
use pressflow_core::console::Interaction;
use pressflow_core::TerminalPrompt;

use crate::utils::Globals;

/// Store an API token after validating it against the platform
pub async fn handle(globals: &Globals) -> anyhow::Result<()> {
    let prompt = TerminalPrompt::new(globals.no_interaction);

    println!("You can create an API token in the Pressflow dashboard under");
    println!("{}", "  Account → API tokens".cyan());
    println!();

    let token = prompt.ask_hidden("API token")?;
    if token.is_empty() {
        anyhow::bail!("No token given");
    }

    let api = match globals.api_url.as_deref() {
        Some(url) => HttpPlatformApi::with_base_url(url, token.clone()),
        None => HttpPlatformApi::new(token.clone()),
    };
    let user = api.get_user().await?;

    let mut config = CliConfig::load()?;
    config.token = Some(token);
    config.save()?;

    println!();
    println!(
        "{}",
        format!("✓ Logged in as {} <{}>", user.name, user.email).green()
    );

    Ok(())
}
