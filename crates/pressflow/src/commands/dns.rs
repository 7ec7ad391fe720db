use colored::Colorize;
use pressflow_api::PlatformApi;

use crate::utils::{Globals, session};

pub async fn handle_list(globals: &Globals) -> anyhow::Result<()> {
    let session = session(globals).await?;
    let zones = session.api.get_dns_zones(&session.team).await?;

    println!("{:<8} {:<28} {}", "ID".bold(), "DOMAIN".bold(), "STATUS".bold());
    for zone in zones {
        println!("{:<8} {:<28} {}", zone.id, zone.name, zone.status.to_string());
    }

    Ok(())
}
