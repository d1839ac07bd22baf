mod customer;

pub use customer::{validate_customer, FieldViolation};
