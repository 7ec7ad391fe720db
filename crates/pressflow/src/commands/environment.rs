use colored::Colorize;
use pressflow_api::{PlatformApi, ResourceKind};
use pressflow_core::console::CommandInput;
use pressflow_core::requirement::Fulfilled;

use crate::utils::{Globals, session};

pub async fn handle_list(globals: &Globals) -> anyhow::Result<()> {
    let session = session(globals).await?;
    let project = session.project.as_ref().ok_or_else(|| {
        anyhow::anyhow!("This command must be run inside a project directory")
    })?;
    let environments = session.api.get_environments(project).await?;

    println!("{:<8} {:<16} {}", "ID".bold(), "NAME".bold(), "DOMAIN".bold());
    for environment in environments {
        println!(
            "{:<8} {:<16} {}",
            environment.id,
            environment.name,
            environment.vanity_domain.as_deref().unwrap_or("-")
        );
    }

    Ok(())
}

pub async fn handle_create(globals: &Globals, name: Option<&str>) -> anyhow::Result<()> {
    let session = session(globals).await?;
    let input = CommandInput::new().with_argument("name", name);
    let ctx = session.context(input);

    let environment = ctx
        .provision(ResourceKind::Environment, Fulfilled::new())
        .await?;

    session.output.success(&format!(
        "Environment \"{}\" created (id: {})",
        environment.name(),
        environment.id()
    ));

    Ok(())
}
