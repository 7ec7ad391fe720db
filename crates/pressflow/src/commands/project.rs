use colored::Colorize;
use pressflow_api::{PlatformApi, Resource, ResourceKind};
use pressflow_config::{PROJECT_FILE, ProjectConfig};
use pressflow_core::console::CommandInput;
use pressflow_core::definition::DEFAULT_ENVIRONMENTS;
use pressflow_core::requirement::Fulfilled;

use crate::utils::{Globals, session};

pub async fn handle_list(globals: &Globals) -> anyhow::Result<()> {
    let session = session(globals).await?;
    let projects = session.api.get_projects(&session.team).await?;

    println!("{:<8} {:<24} {}", "ID".bold(), "NAME".bold(), "REGION".bold());
    for project in projects {
        println!("{:<8} {:<24} {}", project.id, project.name, project.region);
    }

    Ok(())
}

/// Create a project on the platform and write its pressflow.yml into
/// the current directory
pub async fn handle_init(
    globals: &Globals,
    name: Option<&str>,
    provider: Option<&str>,
    region: Option<&str>,
) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    if cwd.join(PROJECT_FILE).exists() {
        anyhow::bail!(
            "This directory already has a {}. Delete it first to reinitialize the project",
            PROJECT_FILE
        );
    }

    let session = session(globals).await?;
    let input = CommandInput::new()
        .with_argument("name", name)
        .with_option("provider", provider)
        .with_option("region", region);
    let ctx = session.context(input);

    let resource = ctx.provision(ResourceKind::Project, Fulfilled::new()).await?;
    let project = match resource {
        Resource::Project(project) => project,
        _ => unreachable!("project provisioning returns a project"),
    };

    let config = ProjectConfig {
        id: project.id,
        name: project.name.clone(),
        environments: DEFAULT_ENVIRONMENTS.iter().map(|e| e.to_string()).collect(),
    };
    config.save(&cwd)?;

    session.output.success(&format!(
        "Project \"{}\" created in {} (id: {})",
        project.name, project.region, project.id
    ));
    session
        .output
        .note(&format!("Wrote {}", cwd.join(PROJECT_FILE).display()));

    Ok(())
}
