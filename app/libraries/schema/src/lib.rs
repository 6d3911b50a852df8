pub mod customer;
pub mod filter;
pub mod value;
