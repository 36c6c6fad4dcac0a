pub mod identity;
pub mod identity_store;
