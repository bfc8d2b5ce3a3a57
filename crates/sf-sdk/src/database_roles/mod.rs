//! Database roles: roles scoped to a single database.

mod dto_gen;
mod impl_gen;
mod interface_gen;
mod options_gen;
mod validations_gen;

pub use dto_gen::*;
pub use impl_gen::*;
pub use interface_gen::*;
pub use options_gen::*;

use crate::common::Like;
use crate::error::{SdkError, SdkResult};
use sf_core::{Context, DatabaseObjectIdentifier, ObjectIdentifier};

impl DatabaseRolesImpl {
    /// The single database role named `id`, or [`SdkError::ObjectNotFound`].
    pub async fn show_by_id(
        &self,
        ctx: &Context,
        id: &DatabaseObjectIdentifier,
    ) -> SdkResult<DatabaseRole> {
        let request = ShowDatabaseRoleRequest::new(id.database_id()).with_like(Like::new(id.name()));
        self.show(ctx, &request)
            .await?
            .into_iter()
            .find(|row| row.name == id.name())
            .ok_or_else(|| SdkError::not_found("ShowDatabaseRoleByID", id.fully_qualified_name()))
    }
}


#[cfg(test)]
#[path = "database_roles_test.rs"]
mod tests;
