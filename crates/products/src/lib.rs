//! Products catalog module.
//!
//! Hardware product variants and the creators that hand them to an inventory.
//! Pure data + formatting; no IO.

pub mod creator;
pub mod product;

pub use creator::{HardDriveCreator, MotherboardCreator, ProcessorCreator, ProductCreator};
pub use product::{
    Describe, HardDrive, Motherboard, Processor, Product, ProductInfo, ProductKind,
};
