use colored::Colorize;
use pressflow_api::{PlatformApi, ResourceKind};
use pressflow_core::console::CommandInput;
use pressflow_core::requirement::Fulfilled;

use crate::utils::{Globals, session};

pub async fn handle_list(globals: &Globals) -> anyhow::Result<()> {
    let session = session(globals).await?;
    let providers = session.api.get_providers(&session.team).await?;

    println!("{:<8} {}", "ID".bold(), "NAME".bold());
    for provider in providers {
        println!("{:<8} {}", provider.id, provider.name);
    }

    Ok(())
}

pub async fn handle_connect(
    globals: &Globals,
    name: Option<&str>,
    profile: Option<&str>,
) -> anyhow::Result<()> {
    let session = session(globals).await?;
    let input = CommandInput::new()
        .with_argument("name", name)
        .with_option("profile", profile);
    let ctx = session.context(input);

    let provider = ctx
        .provision(ResourceKind::CloudProvider, Fulfilled::new())
        .await?;

    session.output.success(&format!(
        "Cloud provider \"{}\" connected (id: {})",
        provider.name(),
        provider.id()
    ));

    Ok(())
}
