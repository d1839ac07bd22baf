mod clientes;
mod health_check;

pub use clientes::*;
pub use health_check::*;
