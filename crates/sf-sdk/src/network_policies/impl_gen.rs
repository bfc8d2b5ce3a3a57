// @generated by sf-gen from the NetworkPolicies definition. Do not edit.
#![allow(unused_imports)]

use super::dto_gen::*;
use super::interface_gen::*;
use crate::client::{Call, Client};
use crate::error::SdkResult;
use async_trait::async_trait;
use sf_core::{Context, ObjectIdentifier};

#[derive(Debug, Clone)]
pub struct NetworkPoliciesImpl {
    client: Client,
}

impl NetworkPoliciesImpl {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl NetworkPolicies for NetworkPoliciesImpl {
    async fn create(&self, ctx: &Context, request: &CreateNetworkPolicyRequest) -> SdkResult<()> {
        let opts = request.to_opts();
        let call = Call::new("CreateNetworkPolicy", Some(opts.name.fully_qualified_name()));
        self.client.exec_options(ctx, call, Some(&opts)).await.map(|_| ())
    }

    async fn alter(&self, ctx: &Context, request: &AlterNetworkPolicyRequest) -> SdkResult<()> {
        let opts = request.to_opts();
        let call = Call::new("AlterNetworkPolicy", Some(opts.name.fully_qualified_name()));
        self.client.exec_options(ctx, call, Some(&opts)).await.map(|_| ())
    }

    async fn drop(&self, ctx: &Context, request: &DropNetworkPolicyRequest) -> SdkResult<()> {
        let opts = request.to_opts();
        let call = Call::new("DropNetworkPolicy", Some(opts.name.fully_qualified_name()));
        self.client.exec_options(ctx, call, Some(&opts)).await.map(|_| ())
    }

    async fn show(&self, ctx: &Context, request: &ShowNetworkPolicyRequest) -> SdkResult<Vec<NetworkPolicy>> {
        let opts = request.to_opts();
        let call = Call::new("ShowNetworkPolicy", None);
        self.client.query_options(ctx, call, Some(&opts)).await
    }

    async fn describe(&self, ctx: &Context, request: &DescribeNetworkPolicyRequest) -> SdkResult<Vec<NetworkPolicyProperty>> {
        let opts = request.to_opts();
        let call = Call::new("DescribeNetworkPolicy", Some(opts.name.fully_qualified_name()));
        self.client.query_options(ctx, call, Some(&opts)).await
    }
}
