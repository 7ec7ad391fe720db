use colored::Colorize;
use pressflow_api::{PlatformApi, ResourceKind};
use pressflow_core::console::CommandInput;
use pressflow_core::requirement::Fulfilled;

use crate::utils::{Globals, session};

pub async fn handle_list(globals: &Globals) -> anyhow::Result<()> {
    let session = session(globals).await?;
    let networks = session.api.get_networks(&session.team).await?;

    println!(
        "{:<8} {:<20} {:<12} {:<12} {}",
        "ID".bold(),
        "NAME".bold(),
        "REGION".bold(),
        "STATUS".bold(),
        "NAT".bold()
    );
    for network in networks {
        println!(
            "{:<8} {:<20} {:<12} {:<12} {}",
            network.id,
            network.name,
            network.region,
            network.status.to_string(),
            if network.has_nat_gateway { "yes" } else { "no" }
        );
    }

    Ok(())
}

pub async fn handle_create(
    globals: &Globals,
    name: Option<&str>,
    provider: Option<&str>,
    region: Option<&str>,
) -> anyhow::Result<()> {
    let session = session(globals).await?;
    let input = CommandInput::new()
        .with_argument("name", name)
        .with_option("provider", provider)
        .with_option("region", region);
    let ctx = session.context(input);

    let network = ctx.provision(ResourceKind::Network, Fulfilled::new()).await?;

    session.output.success(&format!(
        "Network \"{}\" created (id: {})",
        network.name(),
        network.id()
    ));

    Ok(())
}
