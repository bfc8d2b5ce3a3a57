// @generated by sf-gen from the Roles definition. Do not edit.
#![allow(unused_imports)]

use super::dto_gen::*;
use super::interface_gen::*;
use crate::client::{Call, Client};
use crate::error::SdkResult;
use async_trait::async_trait;
use sf_core::{Context, ObjectIdentifier};

#[derive(Debug, Clone)]
pub struct RolesImpl {
    client: Client,
}

impl RolesImpl {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Roles for RolesImpl {
    async fn create(&self, ctx: &Context, request: &CreateRoleRequest) -> SdkResult<()> {
        let opts = request.to_opts();
        let call = Call::new("CreateRole", Some(opts.name.fully_qualified_name()));
        self.client.exec_options(ctx, call, Some(&opts)).await.map(|_| ())
    }

    async fn alter(&self, ctx: &Context, request: &AlterRoleRequest) -> SdkResult<()> {
        let opts = request.to_opts();
        let call = Call::new("AlterRole", Some(opts.name.fully_qualified_name()));
        self.client.exec_options(ctx, call, Some(&opts)).await.map(|_| ())
    }

    async fn drop(&self, ctx: &Context, request: &DropRoleRequest) -> SdkResult<()> {
        let opts = request.to_opts();
        let call = Call::new("DropRole", Some(opts.name.fully_qualified_name()));
        self.client.exec_options(ctx, call, Some(&opts)).await.map(|_| ())
    }

    async fn show(&self, ctx: &Context, request: &ShowRoleRequest) -> SdkResult<Vec<Role>> {
        let opts = request.to_opts();
        let call = Call::new("ShowRole", None);
        self.client.query_options(ctx, call, Some(&opts)).await
    }

    async fn grant(&self, ctx: &Context, request: &GrantRoleRequest) -> SdkResult<()> {
        let opts = request.to_opts();
        let call = Call::new("GrantRole", Some(opts.name.fully_qualified_name()));
        self.client.exec_options(ctx, call, Some(&opts)).await.map(|_| ())
    }

    async fn revoke(&self, ctx: &Context, request: &RevokeRoleRequest) -> SdkResult<()> {
        let opts = request.to_opts();
        let call = Call::new("RevokeRole", Some(opts.name.fully_qualified_name()));
        self.client.exec_options(ctx, call, Some(&opts)).await.map(|_| ())
    }
}
