use colored::Colorize;
use pressflow_api::{PlatformApi, ResourceKind};
use pressflow_core::console::CommandInput;
use pressflow_core::requirement::Fulfilled;

use crate::utils::{Globals, session};

pub async fn handle_list(globals: &Globals) -> anyhow::Result<()> {
    let session = session(globals).await?;
    let teams = session.api.get_teams().await?;

    println!("{:<8} {}", "ID".bold(), "NAME".bold());
    for team in teams {
        let marker = if team.id == session.team.id { " (active)" } else { "" };
        println!("{:<8} {}{}", team.id, team.name, marker.dimmed());
    }

    Ok(())
}

pub async fn handle_create(globals: &Globals, name: Option<&str>) -> anyhow::Result<()> {
    let session = session(globals).await?;
    let input = CommandInput::new().with_argument("name", name);
    let ctx = session.context(input);

    let team = ctx.provision(ResourceKind::Team, Fulfilled::new()).await?;

    session
        .output
        .success(&format!("Team \"{}\" created (id: {})", team.name(), team.id()));
    session
        .output
        .note("Switch to it by passing --team or setting PRESSFLOW_TEAM");

    Ok(())
}
