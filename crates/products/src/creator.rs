//! Product creators.
//!
//! Each creator wraps one pre-built variant and hands it over unchanged. The
//! indirection adds no behavior; [`Product`] is itself a creator, which is the
//! direct-construction path.

use crate::product::{HardDrive, Motherboard, Processor, Product};

/// Uniform "produce a product" capability.
///
/// `create` consumes the creator, so the wrapped instance moves out as-is.
pub trait ProductCreator {
    fn create(self) -> Product;
}

impl ProductCreator for Product {
    fn create(self) -> Product {
        self
    }
}

#[derive(Debug, Clone)]
pub struct MotherboardCreator {
    motherboard: Motherboard,
}

impl MotherboardCreator {
    pub fn new(motherboard: Motherboard) -> Self {
        Self { motherboard }
    }
}

impl ProductCreator for MotherboardCreator {
    fn create(self) -> Product {
        Product::Motherboard(self.motherboard)
    }
}

#[derive(Debug, Clone)]
pub struct ProcessorCreator {
    processor: Processor,
}

impl ProcessorCreator {
    pub fn new(processor: Processor) -> Self {
        Self { processor }
    }
}

impl ProductCreator for ProcessorCreator {
    fn create(self) -> Product {
        Product::Processor(self.processor)
    }
}

#[derive(Debug, Clone)]
pub struct HardDriveCreator {
    hard_drive: HardDrive,
}

impl HardDriveCreator {
    pub fn new(hard_drive: HardDrive) -> Self {
        Self { hard_drive }
    }
}

impl ProductCreator for HardDriveCreator {
    fn create(self) -> Product {
        Product::HardDrive(self.hard_drive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::{ProductInfo, ProductKind};
    use partcat_core::Price;

    fn hard_drive() -> HardDrive {
        HardDrive {
            info: ProductInfo::new("HDD001", "Seagate Barracuda", Price::from_minor(5000, 2)),
            capacity: 1000,
            rotation_speed: 7200,
            interface_type: "SATA".to_string(),
        }
    }

    #[test]
    fn creator_returns_wrapped_instance_unchanged() {
        let product = HardDriveCreator::new(hard_drive()).create();
        assert_eq!(product.kind(), ProductKind::HardDrive);
        assert_eq!(product, Product::HardDrive(hard_drive()));
    }

    #[test]
    fn motherboard_creator_yields_motherboard() {
        let board = Motherboard {
            info: ProductInfo::new("MB001", "ASUS ROG Strix", Price::from_minor(15000, 2)),
            socket_type: "AM4".to_string(),
            processor_count: 1,
            ram_type: "DDR4".to_string(),
            bus_frequency: "3200 MHz".to_string(),
        };
        let product = MotherboardCreator::new(board.clone()).create();
        assert_eq!(product, Product::Motherboard(board));
    }

    #[test]
    fn product_is_its_own_creator() {
        let product = Product::from(hard_drive());
        assert_eq!(product.clone().create(), product);
    }
}
