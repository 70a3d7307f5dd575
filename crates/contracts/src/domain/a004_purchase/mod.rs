pub mod aggregate;
pub mod dto;

pub use aggregate::{Detail, DetailId, Purchase, PurchaseId};
pub use dto::{
    DetailCreate, DetailUpdate, PurchaseCreate, PurchaseRangeQuery, PurchaseScope, SortOrder,
    DEFAULT_RANGE_LIMIT,
};
