//! Service layer: one function per API operation on top of `models`.
//! - Each function runs one statement (two reads for the init payload).
//! - Store errors are returned with the store's message intact.

pub mod errors;
pub mod init_service;
pub mod business_service;
pub mod officer_service;
pub mod customer_service;
#[cfg(test)]
pub mod test_support;
