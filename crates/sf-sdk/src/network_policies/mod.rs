//! Network policies restricting client IP ranges.

mod dto_gen;
mod impl_gen;
mod interface_gen;
mod options_gen;
mod validations_gen;

pub use dto_gen::*;
pub use impl_gen::*;
pub use interface_gen::*;
pub use options_gen::*;

use crate::error::{SdkError, SdkResult};
use sf_core::{AccountObjectIdentifier, Context, ObjectIdentifier};

impl NetworkPoliciesImpl {
    /// The single network policy named `id`, or [`SdkError::ObjectNotFound`].
    pub async fn show_by_id(
        &self,
        ctx: &Context,
        id: &AccountObjectIdentifier,
    ) -> SdkResult<NetworkPolicy> {
        let request = ShowNetworkPolicyRequest::new();
        self.show(ctx, &request)
            .await?
            .into_iter()
            .find(|row| row.name == id.name())
            .ok_or_else(|| SdkError::not_found("ShowNetworkPolicyByID", id.fully_qualified_name()))
    }
}


#[cfg(test)]
#[path = "network_policies_test.rs"]
mod tests;
