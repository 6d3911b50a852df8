pub mod customer;
pub mod ping;
