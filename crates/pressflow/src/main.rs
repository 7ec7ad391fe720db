mod commands;
mod utils;

use clap::{Parser, Subcommand};
use colored::Colorize;
use pressflow_core::CoreError;

#[derive(Parser)]
#[command(name = "press")]
#[command(about = "Deploy and manage WordPress projects on the Pressflow platform", long_about = None)]
#[command(version)]
struct Cli {
    /// Team to operate on (ID or name)
    #[arg(long, global = true, env = "PRESSFLOW_TEAM")]
    team: Option<String>,

    /// Never ask interactive questions
    #[arg(long, global = true)]
    no_interaction: bool,

    /// API base URL (for development)
    #[arg(long, global = true, hide = true, env = "PRESSFLOW_API_URL")]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Authenticate with the Pressflow platform
    Login,
    /// Manage teams
    #[command(subcommand)]
    Team(TeamCommands),
    /// Manage cloud provider connections
    #[command(subcommand)]
    Provider(ProviderCommands),
    /// Manage projects
    #[command(subcommand)]
    Project(ProjectCommands),
    /// Manage environments of the current project
    #[command(subcommand)]
    Environment(EnvironmentCommands),
    /// Manage networks
    #[command(subcommand)]
    Network(NetworkCommands),
    /// Manage databases, database servers and database users
    #[command(subcommand)]
    Database(DatabaseCommands),
    /// Manage cache clusters
    #[command(subcommand)]
    Cache(CacheCommands),
    /// Manage SSL certificates
    #[command(subcommand)]
    Certificate(CertificateCommands),
    /// Manage DNS zones
    #[command(subcommand)]
    Dns(DnsCommands),
    /// Show version information
    Version,
}

#[derive(Subcommand)]
enum TeamCommands {
    /// List the teams you belong to
    List,
    /// Create a new team
    Create {
        /// Team name
        name: Option<String>,
    },
}

#[derive(Subcommand)]
enum ProviderCommands {
    /// List the cloud provider accounts connected to the team
    List,
    /// Connect a cloud provider account to the team
    Connect {
        /// Name for the provider connection
        name: Option<String>,
        /// AWS credentials profile to use
        #[arg(long)]
        profile: Option<String>,
    },
}

#[derive(Subcommand)]
enum ProjectCommands {
    /// List the team's projects
    List,
    /// Create a project and write pressflow.yml in the current directory
    Init {
        /// Project name
        name: Option<String>,
        /// Cloud provider to deploy through (ID or name)
        #[arg(long)]
        provider: Option<String>,
        /// Region to deploy to
        #[arg(long)]
        region: Option<String>,
    },
}

#[derive(Subcommand)]
enum EnvironmentCommands {
    /// List the current project's environments
    List,
    /// Create a new environment in the current project
    Create {
        /// Environment name
        name: Option<String>,
    },
}

#[derive(Subcommand)]
enum NetworkCommands {
    /// List the team's networks
    List,
    /// Create a new network
    Create {
        /// Network name
        name: Option<String>,
        /// Cloud provider to provision into (ID or name)
        #[arg(long)]
        provider: Option<String>,
        /// Region to provision into
        #[arg(long)]
        region: Option<String>,
    },
}

#[derive(Subcommand)]
enum DatabaseCommands {
    /// Create a new database on a database server
    Create {
        /// Database name
        name: Option<String>,
        /// Database server to create the database on (ID or name)
        #[arg(long)]
        server: Option<String>,
    },
    /// List the databases on a database server
    List {
        /// Database server to list (ID or name)
        #[arg(long)]
        server: Option<String>,
    },
    /// Manage database servers
    #[command(subcommand)]
    Server(DatabaseServerCommands),
    /// Manage database users
    #[command(subcommand)]
    User(DatabaseUserCommands),
}

#[derive(Subcommand)]
enum DatabaseServerCommands {
    /// List the team's database servers
    List,
    /// Create a new database server
    Create {
        /// Database server name
        name: Option<String>,
        /// Network to provision into (ID or name)
        #[arg(long)]
        network: Option<String>,
        /// Database server type
        #[arg(long = "type")]
        server_type: Option<String>,
        /// Create a serverless database server
        #[arg(long, conflicts_with = "server_type")]
        serverless: bool,
        /// Allocated storage in GB
        #[arg(long)]
        storage: Option<u64>,
        /// Keep the database server off the public internet
        #[arg(long, conflicts_with = "public")]
        private: bool,
        /// Make the database server publicly accessible
        #[arg(long)]
        public: bool,
    },
}

#[derive(Subcommand)]
enum DatabaseUserCommands {
    /// Create a new user on a database server
    Create {
        /// Username
        username: Option<String>,
        /// Database server to create the user on (ID or name)
        #[arg(long)]
        server: Option<String>,
        /// Databases the user may access (repeatable; all when omitted)
        #[arg(long = "database")]
        databases: Vec<String>,
    },
}

#[derive(Subcommand)]
enum CacheCommands {
    /// List the team's cache clusters
    List,
    /// Create a new cache cluster
    Create {
        /// Cache cluster name
        name: Option<String>,
        /// Network to provision into (ID or name)
        #[arg(long)]
        network: Option<String>,
        /// Cache engine (redis or valkey)
        #[arg(long)]
        engine: Option<String>,
        /// Cache cluster type
        #[arg(long = "type")]
        cache_type: Option<String>,
    },
}

#[derive(Subcommand)]
enum CertificateCommands {
    /// List the team's SSL certificates
    List,
}

#[derive(Subcommand)]
enum DnsCommands {
    /// List the team's DNS zones
    List,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    // Version and login need no team, so they bypass the session setup
    if matches!(cli.command, Commands::Version) {
        println!("pressflow {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    let globals = utils::Globals {
        team: cli.team.clone(),
        no_interaction: cli.no_interaction,
        api_url: cli.api_url.clone(),
    };

    let result = run(cli, &globals).await;

    if let Err(error) = result {
        // declining a required confirmation is a deliberate abort, not
        // a failure
        if let Some(core) = error.downcast_ref::<CoreError>()
            && core.is_cancellation()
        {
            println!("{}", "Cancelled.".yellow());
            return;
        }
        eprintln!("{}", format!("✗ {}", error).red());
        std::process::exit(1);
    }
}

async fn run(cli: Cli, globals: &utils::Globals) -> anyhow::Result<()> {
    match cli.command {
        Commands::Login => commands::login::handle(globals).await,
        Commands::Team(command) => match command {
            TeamCommands::List => commands::team::handle_list(globals).await,
            TeamCommands::Create { name } => {
                commands::team::handle_create(globals, name.as_deref()).await
            }
        },
        Commands::Provider(command) => match command {
            ProviderCommands::List => commands::provider::handle_list(globals).await,
            ProviderCommands::Connect { name, profile } => {
                commands::provider::handle_connect(globals, name.as_deref(), profile.as_deref())
                    .await
            }
        },
        Commands::Project(command) => match command {
            ProjectCommands::List => commands::project::handle_list(globals).await,
            ProjectCommands::Init {
                name,
                provider,
                region,
            } => {
                commands::project::handle_init(
                    globals,
                    name.as_deref(),
                    provider.as_deref(),
                    region.as_deref(),
                )
                .await
            }
        },
        Commands::Environment(command) => match command {
            EnvironmentCommands::List => commands::environment::handle_list(globals).await,
            EnvironmentCommands::Create { name } => {
                commands::environment::handle_create(globals, name.as_deref()).await
            }
        },
        Commands::Network(command) => match command {
            NetworkCommands::List => commands::network::handle_list(globals).await,
            NetworkCommands::Create {
                name,
                provider,
                region,
            } => {
                commands::network::handle_create(
                    globals,
                    name.as_deref(),
                    provider.as_deref(),
                    region.as_deref(),
                )
                .await
            }
        },
        Commands::Database(command) => match command {
            DatabaseCommands::Create { name, server } => {
                commands::database::handle_create(globals, name.as_deref(), server.as_deref())
                    .await
            }
            DatabaseCommands::List { server } => {
                commands::database::handle_list(globals, server.as_deref()).await
            }
            DatabaseCommands::Server(command) => match command {
                DatabaseServerCommands::List => {
                    commands::database::handle_server_list(globals).await
                }
                DatabaseServerCommands::Create {
                    name,
                    network,
                    server_type,
                    serverless,
                    storage,
                    private,
                    public,
                } => {
                    commands::database::handle_server_create(
                        globals,
                        commands::database::ServerCreateArgs {
                            name,
                            network,
                            server_type,
                            serverless,
                            storage,
                            private,
                            public,
                        },
                    )
                    .await
                }
            },
            DatabaseCommands::User(command) => match command {
                DatabaseUserCommands::Create {
                    username,
                    server,
                    databases,
                } => {
                    commands::database::handle_user_create(
                        globals,
                        username.as_deref(),
                        server.as_deref(),
                        &databases,
                    )
                    .await
                }
            },
        },
        Commands::Cache(command) => match command {
            CacheCommands::List => commands::cache::handle_list(globals).await,
            CacheCommands::Create {
                name,
                network,
                engine,
                cache_type,
            } => {
                commands::cache::handle_create(
                    globals,
                    name.as_deref(),
                    network.as_deref(),
                    engine.as_deref(),
                    cache_type.as_deref(),
                )
                .await
            }
        },
        Commands::Certificate(command) => match command {
            CertificateCommands::List => commands::certificate::handle_list(globals).await,
        },
        Commands::Dns(command) => match command {
            DnsCommands::List => commands::dns::handle_list(globals).await,
        },
        Commands::Version => unreachable!("Version is handled before session setup"),
    }
}
