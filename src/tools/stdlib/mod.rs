//! Core operations registered by [`Namespace::new`](crate::tools::Namespace::new)

pub mod arithmetic;
pub mod io_basic;
pub mod sequences;
pub mod type_predicates;

use crate::tools::Namespace;

/// Register all core operations
pub fn register_all(namespace: &mut Namespace) {
    arithmetic::register(namespace);
    io_basic::register(namespace);
    sequences::register(namespace);
    type_predicates::register(namespace);
}
