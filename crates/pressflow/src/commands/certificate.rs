use colored::Colorize;
use pressflow_api::PlatformApi;

use crate::utils::{Globals, session};

pub async fn handle_list(globals: &Globals) -> anyhow::Result<()> {
    let session = session(globals).await?;
    let certificates = session.api.get_certificates(&session.team).await?;

    println!(
        "{:<8} {:<28} {:<12} {}",
        "ID".bold(),
        "DOMAIN".bold(),
        "REGION".bold(),
        "STATUS".bold()
    );
    for certificate in certificates {
        println!(
            "{:<8} {:<28} {:<12} {}",
            certificate.id,
            certificate.name,
            certificate.region,
            certificate.status.to_string()
        );
    }

    Ok(())
}
