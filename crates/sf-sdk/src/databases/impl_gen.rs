// @generated by sf-gen from the Databases definition. Do not edit.
#![allow(unused_imports)]

use super::dto_gen::*;
use super::interface_gen::*;
use crate::client::{Call, Client};
use crate::error::SdkResult;
use async_trait::async_trait;
use sf_core::{Context, ObjectIdentifier};

#[derive(Debug, Clone)]
pub struct DatabasesImpl {
    client: Client,
}

impl DatabasesImpl {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Databases for DatabasesImpl {
    async fn create(&self, ctx: &Context, request: &CreateDatabaseRequest) -> SdkResult<()> {
        let opts = request.to_opts();
        let call = Call::new("CreateDatabase", Some(opts.name.fully_qualified_name()));
        self.client.exec_options(ctx, call, Some(&opts)).await.map(|_| ())
    }

    async fn alter(&self, ctx: &Context, request: &AlterDatabaseRequest) -> SdkResult<()> {
        let opts = request.to_opts();
        let call = Call::new("AlterDatabase", Some(opts.name.fully_qualified_name()));
        self.client.exec_options(ctx, call, Some(&opts)).await.map(|_| ())
    }

    async fn drop(&self, ctx: &Context, request: &DropDatabaseRequest) -> SdkResult<()> {
        let opts = request.to_opts();
        let call = Call::new("DropDatabase", Some(opts.name.fully_qualified_name()));
        self.client.exec_options(ctx, call, Some(&opts)).await.map(|_| ())
    }

    async fn undrop(&self, ctx: &Context, request: &UndropDatabaseRequest) -> SdkResult<()> {
        let opts = request.to_opts();
        let call = Call::new("UndropDatabase", Some(opts.name.fully_qualified_name()));
        self.client.exec_options(ctx, call, Some(&opts)).await.map(|_| ())
    }

    async fn show(&self, ctx: &Context, request: &ShowDatabaseRequest) -> SdkResult<Vec<Database>> {
        let opts = request.to_opts();
        let call = Call::new("ShowDatabase", None);
        self.client.query_options(ctx, call, Some(&opts)).await
    }

    async fn describe(&self, ctx: &Context, request: &DescribeDatabaseRequest) -> SdkResult<Vec<DatabaseDetails>> {
        let opts = request.to_opts();
        let call = Call::new("DescribeDatabase", Some(opts.name.fully_qualified_name()));
        self.client.query_options(ctx, call, Some(&opts)).await
    }
}
