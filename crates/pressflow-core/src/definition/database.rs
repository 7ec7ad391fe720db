//! Database server, database and database user definitions

use async_trait::async_trait;
use pressflow_api::models::Database;
use pressflow_api::{PlatformApi, Resource, ResourceKind};

use super::{Provisionable, Resolvable, choose_resource, label_with_id};
use crate::context::Context;
use crate::error::{CoreError, Result};
use crate::requirement::{
    DatabaseAccessRequirement, DatabaseNameRequirement, DatabaseServerRequirement, Fulfilled,
    NetworkRequirement, ParentDatabaseServerRequirement, PrivateFlagRequirement, Requirement,
    ServerTypeRequirement, SlugRequirement, StorageRequirement, TextRequirement,
};

pub struct DatabaseServerDefinition;

#[async_trait]
impl Resolvable for DatabaseServerDefinition {
    async fn resolve(
        &self,
        ctx: &Context<'_>,
        question: &str,
        identifier: Option<&str>,
    ) -> Result<Resource> {
        let servers = ctx.api.get_database_servers(&ctx.team).await?;
        let candidates: Vec<Resource> = servers.into_iter().map(Resource::DatabaseServer).collect();
        choose_resource(
            ctx,
            question,
            ResourceKind::DatabaseServer,
            "database server create",
            "server",
            candidates,
            identifier,
            |resource| match resource {
                Resource::DatabaseServer(server) => format!(
                    "{} ({}, {})",
                    server.name, server.region, server.server_type
                ),
                other => label_with_id(other),
            },
        )
    }
}

#[async_trait]
impl Provisionable for DatabaseServerDefinition {
    fn requirements(&self) -> Vec<(&'static str, Box<dyn Requirement>)> {
        vec![
            (
                "name",
                Box::new(SlugRequirement::new(
                    "name",
                    "What should the database server be named?",
                )),
            ),
            ("network", Box::new(NetworkRequirement::new("network"))),
            (
                "type",
                Box::new(ServerTypeRequirement::new("type", "serverless", "network")),
            ),
            (
                "storage",
                Box::new(StorageRequirement::new(
                    "storage",
                    "type",
                    "How much storage should be allocated (in GB)?",
                    50,
                )),
            ),
            ("private", Box::new(PrivateFlagRequirement::new("network"))),
        ]
    }

    async fn provision(&self, api: &dyn PlatformApi, fulfilled: &Fulfilled) -> Result<Resource> {
        let server = api
            .create_database_server(
                fulfilled.network("network")?,
                fulfilled.text("name")?,
                fulfilled.text("type")?,
                fulfilled.integer("storage")?.map(|gb| gb as u32),
                !fulfilled.boolean("private")?,
            )
            .await?;
        Ok(Resource::DatabaseServer(server))
    }
}

pub struct DatabaseDefinition;

#[async_trait]
impl Resolvable for DatabaseDefinition {
    async fn resolve(
        &self,
        ctx: &Context<'_>,
        question: &str,
        identifier: Option<&str>,
    ) -> Result<Resource> {
        let server = match &ctx.parent {
            Some(Resource::DatabaseServer(server)) => server,
            _ => {
                return Err(CoreError::InvalidInput(
                    "A database can only be resolved on a database server".to_string(),
                ));
            }
        };

        // private servers cannot be enumerated through the API: trust
        // the given name instead of listing candidates
        if !server.public {
            return match identifier {
                Some(name) => Ok(Resource::Database(Database::unmanaged(name))),
                None => Err(CoreError::InvalidInput(format!(
                    "The \"{}\" database server is private, so the database name must be given explicitly",
                    server.name
                ))),
            };
        }

        let databases = ctx.api.get_databases(server).await?;
        let candidates: Vec<Resource> = databases.into_iter().map(Resource::Database).collect();
        choose_resource(
            ctx,
            question,
            ResourceKind::Database,
            "database create",
            "database",
            candidates,
            identifier,
            label_with_id,
        )
    }
}

#[async_trait]
impl Provisionable for DatabaseDefinition {
    fn requirements(&self) -> Vec<(&'static str, Box<dyn Requirement>)> {
        vec![
            // standalone database creation only works against servers
            // the API can reach, hence the public-only constraint
            ("server", Box::new(DatabaseServerRequirement::public_only("server"))),
            ("name", Box::new(DatabaseNameRequirement::new("name", "server"))),
        ]
    }

    async fn provision(&self, api: &dyn PlatformApi, fulfilled: &Fulfilled) -> Result<Resource> {
        let database = api
            .create_database(fulfilled.database_server("server")?, fulfilled.text("name")?)
            .await?;
        Ok(Resource::Database(database))
    }
}

pub struct DatabaseUserDefinition;

#[async_trait]
impl Provisionable for DatabaseUserDefinition {
    fn requirements(&self) -> Vec<(&'static str, Box<dyn Requirement>)> {
        vec![
            ("server", Box::new(ParentDatabaseServerRequirement)),
            (
                "username",
                Box::new(TextRequirement::new(
                    "username",
                    "What should the database user be named?",
                )),
            ),
            (
                "databases",
                Box::new(DatabaseAccessRequirement::new("databases", "server")),
            ),
        ]
    }

    async fn provision(&self, api: &dyn PlatformApi, fulfilled: &Fulfilled) -> Result<Resource> {
        let user = api
            .create_database_user(
                fulfilled.database_server("server")?,
                fulfilled.text("username")?,
                fulfilled.list("databases")?,
            )
            .await?;
        Ok(Resource::DatabaseUser(user))
    }
}
