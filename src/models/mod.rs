mod customer;

pub use customer::{Customer, CustomerFields, CustomerPayload};
