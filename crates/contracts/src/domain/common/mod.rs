//! Types shared by every record of the inventory backend

pub mod aggregate_id;

pub use aggregate_id::AggregateId;
pub(crate) use aggregate_id::numeric_id;
