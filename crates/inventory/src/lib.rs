//! Inventory module.
//!
//! Append-only, insertion-ordered store of catalog products. Every operation
//! reports its outcome as text lines through a [`Report`] sink.

pub mod inventory;
pub mod report;

pub use inventory::{
    ADDED_SUFFIX, DETAILS_HEADER, INVENTORY_HEADER, Inventory, NOT_FOUND,
};
pub use report::{MemoryReport, Report, StdoutReport};
