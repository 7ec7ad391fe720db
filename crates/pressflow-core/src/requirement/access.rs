//! Database name and access requirements

use async_trait::async_trait;

use super::{Fulfilled, Requirement, RequirementValue};
use crate::context::Context;
use crate::error::{CoreError, Result};

/// The name of a database to create on an already-resolved server
///
/// Databases on private servers cannot be enumerated through the API,
/// so the name must always come from the argument or a prompt.
pub struct DatabaseNameRequirement {
    argument: &'static str,
    server_dependency: &'static str,
}

impl DatabaseNameRequirement {
    pub fn new(argument: &'static str, server_dependency: &'static str) -> Self {
        Self {
            argument,
            server_dependency,
        }
    }
}

#[async_trait]
impl Requirement for DatabaseNameRequirement {
    async fn fulfill(&self, ctx: &Context<'_>, fulfilled: &Fulfilled) -> Result<RequirementValue> {
        // ordering check: the server must have been resolved first
        fulfilled.database_server(self.server_dependency)?;

        let name = match ctx.input.argument(self.argument) {
            Some(value) => value.to_string(),
            None => {
                ctx.ensure_interactive(self.argument)?;
                ctx.interaction
                    .ask("What should the database be named?", None)?
            }
        };

        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(CoreError::RequirementValidation(
                "The database name cannot be empty".to_string(),
            ));
        }

        Ok(RequirementValue::Text(name))
    }
}

/// The databases a new database user may access
///
/// An empty list means access to all databases. Public servers offer a
/// multi-choice over the server's databases; private servers cannot be
/// enumerated, so the list is typed in directly.
pub struct DatabaseAccessRequirement {
    option: &'static str,
    server_dependency: &'static str,
}

impl DatabaseAccessRequirement {
    pub fn new(option: &'static str, server_dependency: &'static str) -> Self {
        Self {
            option,
            server_dependency,
        }
    }
}

#[async_trait]
impl Requirement for DatabaseAccessRequirement {
    async fn fulfill(&self, ctx: &Context<'_>, fulfilled: &Fulfilled) -> Result<RequirementValue> {
        let server = fulfilled.database_server(self.server_dependency)?;

        if let Some(databases) = ctx.input.list_option(self.option) {
            return Ok(RequirementValue::List(databases.to_vec()));
        }

        if !ctx.interaction.is_interactive() {
            // all databases
            return Ok(RequirementValue::List(Vec::new()));
        }

        if server.public {
            if ctx
                .interaction
                .confirm("Should the user have access to all databases?", true)?
            {
                return Ok(RequirementValue::List(Vec::new()));
            }

            let databases = ctx.api.get_databases(server).await?;
            if databases.is_empty() {
                return Err(CoreError::RequirementFulfillment(format!(
                    "The \"{}\" database server has no databases to grant access to",
                    server.name
                )));
            }

            let names: Vec<String> = databases.into_iter().map(|d| d.name).collect();
            let indices = ctx
                .interaction
                .multichoice("Which databases should the user have access to?", &names)?;
            return Ok(RequirementValue::List(
                indices.into_iter().map(|i| names[i].clone()).collect(),
            ));
        }

        let answer = ctx.interaction.ask(
            "Which databases should the user have access to? (comma-separated, leave empty for all)",
            None,
        )?;
        let databases: Vec<String> = answer
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();
        Ok(RequirementValue::List(databases))
    }
}
