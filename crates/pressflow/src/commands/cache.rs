use colored::Colorize;
use pressflow_api::{PlatformApi, ResourceKind};
use pressflow_core::console::CommandInput;
use pressflow_core::requirement::Fulfilled;

use crate::utils::{Globals, session};

pub async fn handle_list(globals: &Globals) -> anyhow::Result<()> {
    let session = session(globals).await?;
    let caches = session.api.get_caches(&session.team).await?;

    println!(
        "{:<8} {:<20} {:<10} {:<16} {:<12} {}",
        "ID".bold(),
        "NAME".bold(),
        "ENGINE".bold(),
        "TYPE".bold(),
        "STATUS".bold(),
        "ENDPOINT".bold()
    );
    for cache in caches {
        println!(
            "{:<8} {:<20} {:<10} {:<16} {:<12} {}",
            cache.id,
            cache.name,
            cache.engine,
            cache.cache_type,
            cache.status.to_string(),
            cache.endpoint.as_deref().unwrap_or("-")
        );
    }

    Ok(())
}

pub async fn handle_create(
    globals: &Globals,
    name: Option<&str>,
    network: Option<&str>,
    engine: Option<&str>,
    cache_type: Option<&str>,
) -> anyhow::Result<()> {
    let session = session(globals).await?;
    let input = CommandInput::new()
        .with_argument("name", name)
        .with_option("network", network)
        .with_option("engine", engine)
        .with_option("type", cache_type);
    let ctx = session.context(input);

    let cache = ctx
        .provision(ResourceKind::CacheCluster, Fulfilled::new())
        .await?;

    session.output.success(&format!(
        "Cache cluster \"{}\" is being created (id: {})",
        cache.name(),
        cache.id()
    ));
    session
        .output
        .note("This can take several minutes. Check progress with \"press cache list\"");

    Ok(())
}
