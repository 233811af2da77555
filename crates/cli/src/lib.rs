//! Demo wiring: builds the sample catalog and walks it through an inventory.

use rust_decimal::Decimal;

use partcat_core::Price;
use partcat_inventory::{Inventory, Report};
use partcat_products::{
    HardDrive, HardDriveCreator, Motherboard, MotherboardCreator, Processor, ProcessorCreator,
    ProductInfo,
};

/// Part number looked up at the end of the demo.
pub const DEMO_LOOKUP: &str = "CPU001";

/// The three sample products used by the demo.
pub fn sample_products() -> (Motherboard, Processor, HardDrive) {
    let motherboard = Motherboard {
        info: ProductInfo::new("MB001", "ASUS ROG Strix", Price::from_minor(15000, 2)),
        socket_type: "AM4".to_string(),
        processor_count: 1,
        ram_type: "DDR4".to_string(),
        bus_frequency: "3200 MHz".to_string(),
    };

    let processor = Processor {
        info: ProductInfo::new("CPU001", "AMD Ryzen 5", Price::from_minor(20000, 2)),
        socket_type: "AM4".to_string(),
        core_count: 6,
        clock_speed: Decimal::new(36, 1),
        process_technology: "7 nm".to_string(),
    };

    let hard_drive = HardDrive {
        info: ProductInfo::new("HDD001", "Seagate Barracuda", Price::from_minor(5000, 2)),
        capacity: 1000,
        rotation_speed: 7200,
        interface_type: "SATA".to_string(),
    };

    (motherboard, processor, hard_drive)
}

/// Add the sample products through their creators, list the inventory, then
/// show the details of [`DEMO_LOOKUP`]. Returns the populated inventory.
pub fn run<R: Report>(report: R) -> Inventory<R> {
    let (motherboard, processor, hard_drive) = sample_products();

    let mut inventory = Inventory::new(report);
    inventory.add_product(MotherboardCreator::new(motherboard));
    inventory.add_product(ProcessorCreator::new(processor));
    inventory.add_product(HardDriveCreator::new(hard_drive));

    let listed = inventory.show_inventory().count();
    tracing::info!(listed, "inventory listed");

    let found = inventory.show_product_details(DEMO_LOOKUP).is_some();
    tracing::info!(part_number = DEMO_LOOKUP, found, "details shown");

    inventory
}
