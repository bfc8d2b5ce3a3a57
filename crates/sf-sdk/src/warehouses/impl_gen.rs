// @generated by sf-gen from the Warehouses definition. Do not edit.
#![allow(unused_imports)]

use super::dto_gen::*;
use super::interface_gen::*;
use crate::client::{Call, Client};
use crate::error::SdkResult;
use async_trait::async_trait;
use sf_core::{Context, ObjectIdentifier};

#[derive(Debug, Clone)]
pub struct WarehousesImpl {
    client: Client,
}

impl WarehousesImpl {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Warehouses for WarehousesImpl {
    async fn create(&self, ctx: &Context, request: &CreateWarehouseRequest) -> SdkResult<()> {
        let opts = request.to_opts();
        let call = Call::new("CreateWarehouse", Some(opts.name.fully_qualified_name()));
        self.client.exec_options(ctx, call, Some(&opts)).await.map(|_| ())
    }

    async fn alter(&self, ctx: &Context, request: &AlterWarehouseRequest) -> SdkResult<()> {
        let opts = request.to_opts();
        let call = Call::new("AlterWarehouse", Some(opts.name.fully_qualified_name()));
        self.client.exec_options(ctx, call, Some(&opts)).await.map(|_| ())
    }

    async fn drop(&self, ctx: &Context, request: &DropWarehouseRequest) -> SdkResult<()> {
        let opts = request.to_opts();
        let call = Call::new("DropWarehouse", Some(opts.name.fully_qualified_name()));
        self.client.exec_options(ctx, call, Some(&opts)).await.map(|_| ())
    }

    async fn show(&self, ctx: &Context, request: &ShowWarehouseRequest) -> SdkResult<Vec<Warehouse>> {
        let opts = request.to_opts();
        let call = Call::new("ShowWarehouse", None);
        self.client.query_options(ctx, call, Some(&opts)).await
    }

    async fn describe(&self, ctx: &Context, request: &DescribeWarehouseRequest) -> SdkResult<Vec<WarehouseDetails>> {
        let opts = request.to_opts();
        let call = Call::new("DescribeWarehouse", Some(opts.name.fully_qualified_name()));
        self.client.query_options(ctx, call, Some(&opts)).await
    }
}
