//! Checked-in definitions of every generated object family.

mod database_roles;
mod databases;
mod network_policies;
mod roles;
mod warehouses;

use crate::model::Interface;

pub use database_roles::database_roles;
pub use databases::databases;
pub use network_policies::network_policies;
pub use roles::roles;
pub use warehouses::warehouses;

/// All definitions, in generation order.
pub fn all() -> Vec<Interface> {
    vec![
        database_roles(),
        databases(),
        network_policies(),
        roles(),
        warehouses(),
    ]
}
