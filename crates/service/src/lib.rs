//! Service layer providing the login workflow.
//! - Independent of the web framework; the HTTP crate only maps errors to statuses.
//! - Persistence and token signing are reached through traits so they can be swapped in tests.

pub mod auth;
