use colored::Colorize;
use pressflow_api::{PlatformApi, Resource, ResourceKind};
use pressflow_core::console::CommandInput;
use pressflow_core::requirement::Fulfilled;

use crate::utils::{Globals, resolve_server_context, session};

pub struct ServerCreateArgs {
    pub name: Option<String>,
    pub network: Option<String>,
    pub server_type: Option<String>,
    pub serverless: bool,
    pub storage: Option<u64>,
    pub private: bool,
    pub public: bool,
}

pub async fn handle_server_list(globals: &Globals) -> anyhow::Result<()> {
    let session = session(globals).await?;
    let servers = session.api.get_database_servers(&session.team).await?;

    println!(
        "{:<8} {:<20} {:<16} {:<12} {:<8} {}",
        "ID".bold(),
        "NAME".bold(),
        "TYPE".bold(),
        "STATUS".bold(),
        "PUBLIC".bold(),
        "ENDPOINT".bold()
    );
    for server in servers {
        println!(
            "{:<8} {:<20} {:<16} {:<12} {:<8} {}",
            server.id,
            server.name,
            server.server_type,
            server.status.to_string(),
            if server.public { "yes" } else { "no" },
            server.endpoint.as_deref().unwrap_or("-")
        );
    }

    Ok(())
}

pub async fn handle_server_create(globals: &Globals, args: ServerCreateArgs) -> anyhow::Result<()> {
    let session = session(globals).await?;
    let input = CommandInput::new()
        .with_argument("name", args.name.as_deref())
        .with_option("network", args.network.as_deref())
        .with_option("type", args.server_type.as_deref())
        .with_flag("serverless", args.serverless)
        .with_integer_option("storage", args.storage)
        .with_flag("private", args.private)
        .with_flag("public", args.public);
    let ctx = session.context(input);

    let server = ctx
        .provision(ResourceKind::DatabaseServer, Fulfilled::new())
        .await?;

    session.output.success(&format!(
        "Database server \"{}\" is being created (id: {})",
        server.name(),
        server.id()
    ));
    session
        .output
        .note("This can take several minutes. Check progress with \"press database server list\"");

    Ok(())
}

pub async fn handle_create(
    globals: &Globals,
    name: Option<&str>,
    server: Option<&str>,
) -> anyhow::Result<()> {
    let session = session(globals).await?;
    let input = CommandInput::new()
        .with_argument("name", name)
        .with_option("server", server);
    let ctx = session.context(input);

    let database = ctx.provision(ResourceKind::Database, Fulfilled::new()).await?;

    session
        .output
        .success(&format!("Database \"{}\" created", database.name()));

    Ok(())
}

pub async fn handle_list(globals: &Globals, server: Option<&str>) -> anyhow::Result<()> {
    let session = session(globals).await?;
    let ctx = session.context(CommandInput::new().with_option("server", server));
    let ctx = resolve_server_context(&ctx, server).await?;

    let server = match &ctx.parent {
        Some(Resource::DatabaseServer(server)) => server.clone(),
        _ => unreachable!("the parent resource is a database server"),
    };
    if !server.public {
        anyhow::bail!(
            "The \"{}\" database server is private, so its databases cannot be listed",
            server.name
        );
    }

    let databases = session.api.get_databases(&server).await?;
    println!("{:<8} {}", "ID".bold(), "NAME".bold());
    for database in databases {
        println!("{:<8} {}", database.id, database.name);
    }

    Ok(())
}

pub async fn handle_user_create(
    globals: &Globals,
    username: Option<&str>,
    server: Option<&str>,
    databases: &[String],
) -> anyhow::Result<()> {
    let session = session(globals).await?;
    let input = CommandInput::new()
        .with_argument("username", username)
        .with_option("server", server)
        .with_list_option("databases", databases);
    let ctx = session.context(input);
    let ctx = resolve_server_context(&ctx, server).await?;

    let resource = ctx
        .provision(ResourceKind::DatabaseUser, Fulfilled::new())
        .await?;
    let user = match resource {
        Resource::DatabaseUser(user) => user,
        _ => unreachable!("database user provisioning returns a database user"),
    };

    session
        .output
        .success(&format!("Database user \"{}\" created", user.username));
    if let Some(password) = &user.password {
        session.output.blank();
        println!("Password: {}", password.bold());
        session
            .output
            .warn("Store this password now, it will not be shown again");
    }

    Ok(())
}
