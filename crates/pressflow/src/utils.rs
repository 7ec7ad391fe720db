//! Session setup shared by all commands
//!
//! Builds the pieces every command needs: an authenticated API client,
//! the console handles, the active team and — when the command runs
//! inside a project directory — the current project.

use anyhow::{Context as _, anyhow};
use pressflow_api::models::{Project, Team};
use pressflow_api::{HttpPlatformApi, PlatformApi};
use pressflow_config::{CliConfig, ProjectConfig, find_project_root};
use pressflow_core::console::{CommandInput, Interaction, Output};
use pressflow_core::{Context, TerminalPrompt};
use std::path::PathBuf;
use tracing::warn;

/// Global CLI options shared by every command
pub struct Globals {
    pub team: Option<String>,
    pub no_interaction: bool,
    pub api_url: Option<String>,
}

/// Everything a command needs to build its execution context
pub struct Session {
    pub api: HttpPlatformApi,
    pub output: Output,
    pub prompt: TerminalPrompt,
    pub team: Team,
    pub project: Option<Project>,
    pub project_dir: Option<PathBuf>,
    pub project_config: Option<ProjectConfig>,
}

impl Session {
    /// Build the execution context for one command invocation
    pub fn context(&self, input: CommandInput) -> Context<'_> {
        let mut ctx = Context::new(&self.api, input, &self.output, &self.prompt, self.team.clone());
        if let Some(project) = &self.project {
            ctx = ctx.with_project(project.clone());
        }
        if let (Some(dir), Some(config)) = (&self.project_dir, &self.project_config) {
            ctx = ctx.with_project_dir(dir.clone(), config.clone());
        }
        ctx
    }
}

/// Create the API client from the stored token
pub fn init_api(config: &CliConfig, api_url: Option<&str>) -> anyhow::Result<HttpPlatformApi> {
    let token = config
        .token
        .as_deref()
        .ok_or_else(|| anyhow!("Please authenticate using the \"login\" command first"))?;

    Ok(match api_url {
        Some(url) => HttpPlatformApi::with_base_url(url, token),
        None => HttpPlatformApi::new(token),
    })
}

/// Open a full session: API client, active team, current project
pub async fn session(globals: &Globals) -> anyhow::Result<Session> {
    let config = CliConfig::load()?;
    let api = init_api(&config, globals.api_url.as_deref())?;
    let output = Output::new();
    let prompt = TerminalPrompt::new(globals.no_interaction);

    let team = resolve_active_team(&api, &config, globals.team.as_deref(), &prompt).await?;

    let (project_dir, project_config) = match discover_project() {
        Some((dir, config)) => (Some(dir), Some(config)),
        None => (None, None),
    };

    let project = match &project_config {
        Some(config) => {
            let projects = api.get_projects(&team).await?;
            let project = projects.into_iter().find(|p| p.id == config.id);
            if project.is_none() {
                warn!(project = config.id, "pressflow.yml references an unknown project");
            }
            project
        }
        None => None,
    };

    Ok(Session {
        api,
        output,
        prompt,
        team,
        project,
        project_dir,
        project_config,
    })
}

/// Resolve the team every command operates on: the `--team` option
/// first, then the configured active team, then the only team the user
/// belongs to, then an interactive choice.
pub async fn resolve_active_team(
    api: &dyn PlatformApi,
    config: &CliConfig,
    team_arg: Option<&str>,
    prompt: &dyn Interaction,
) -> anyhow::Result<Team> {
    if let Some(identifier) = team_arg {
        let teams = api.get_teams().await?;

        if identifier.chars().all(|c| c.is_ascii_digit()) {
            let id: u64 = identifier.parse()?;
            return teams
                .into_iter()
                .find(|team| team.id == id)
                .ok_or_else(|| anyhow!("You are not a member of a team with ID {}", id));
        }

        let mut matched: Vec<Team> = teams
            .into_iter()
            .filter(|team| team.name == identifier)
            .collect();
        return match matched.len() {
            1 => Ok(matched.remove(0)),
            0 => Err(anyhow!("You are not a member of a team named \"{}\"", identifier)),
            _ => Err(anyhow!(
                "Several of your teams are named \"{}\", please use the team ID",
                identifier
            )),
        };
    }

    if let Some(id) = config.active_team {
        return Ok(api.get_team(id).await?);
    }

    let mut teams = api.get_teams().await?;
    match teams.len() {
        0 => Err(anyhow!(
            "You do not belong to any team yet. Create one with \"press team create\""
        )),
        1 => Ok(teams.remove(0)),
        _ if prompt.is_interactive() => {
            let labels: Vec<String> = teams
                .iter()
                .map(|team| format!("{} (id: {})", team.name, team.id))
                .collect();
            let index = prompt.choice("Which team should be used?", &labels)?;
            Ok(teams.remove(index))
        }
        _ => Err(anyhow!("Please specify a team with --team")),
    }
}

/// Find the enclosing project, if the command runs inside one
fn discover_project() -> Option<(PathBuf, ProjectConfig)> {
    let cwd = std::env::current_dir().ok()?;
    let root = find_project_root(&cwd).ok()?;
    let config = ProjectConfig::load(&root).ok()?;
    Some((root, config))
}

/// Resolve a database server and return it as the parent for
/// database-scoped commands
pub async fn resolve_server_context<'a>(
    ctx: &Context<'a>,
    identifier: Option<&str>,
) -> anyhow::Result<Context<'a>> {
    let server = ctx
        .resolve(
            pressflow_api::ResourceKind::DatabaseServer,
            "Which database server should be used?",
            identifier,
        )
        .await
        .context("could not resolve the database server")?;
    Ok(ctx.with_parent_resource(server))
}
