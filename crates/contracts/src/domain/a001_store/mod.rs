pub mod aggregate;

pub use aggregate::{Store, StoreId};
