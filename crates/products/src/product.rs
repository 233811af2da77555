use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use partcat_core::{Entity, PartNumber, Price};

/// Human-readable, labeled description of a catalog entry.
pub trait Describe {
    fn describe(&self) -> String;
}

/// Product variant discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductKind {
    Motherboard,
    Processor,
    HardDrive,
}

impl ProductKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ProductKind::Motherboard => "motherboard",
            ProductKind::Processor => "processor",
            ProductKind::HardDrive => "hard_drive",
        }
    }
}

impl core::fmt::Display for ProductKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields shared by every product variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInfo {
    pub part_number: PartNumber,
    pub name: String,
    pub price: Price,
}

impl ProductInfo {
    pub fn new(part_number: impl Into<PartNumber>, name: impl Into<String>, price: Price) -> Self {
        Self {
            part_number: part_number.into(),
            name: name.into(),
            price,
        }
    }
}

impl Describe for ProductInfo {
    fn describe(&self) -> String {
        format!(
            "Part number: {}, Product: {}, Price: {}",
            self.part_number, self.name, self.price
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Motherboard {
    pub info: ProductInfo,
    pub socket_type: String,
    pub processor_count: u32,
    pub ram_type: String,
    /// Free text, e.g. "3200 MHz".
    pub bus_frequency: String,
}

impl Describe for Motherboard {
    fn describe(&self) -> String {
        format!(
            "{}, Socket: {}, Processor count: {}, RAM type: {}, Bus frequency: {}",
            self.info.describe(),
            self.socket_type,
            self.processor_count,
            self.ram_type,
            self.bus_frequency
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Processor {
    pub info: ProductInfo,
    pub socket_type: String,
    pub core_count: u32,
    /// GHz.
    pub clock_speed: Decimal,
    pub process_technology: String,
}

impl Describe for Processor {
    fn describe(&self) -> String {
        format!(
            "{}, Socket: {}, Core count: {}, Clock speed: {} GHz, Process technology: {}",
            self.info.describe(),
            self.socket_type,
            self.core_count,
            self.clock_speed,
            self.process_technology
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardDrive {
    pub info: ProductInfo,
    /// GB.
    pub capacity: u32,
    /// RPM.
    pub rotation_speed: u32,
    pub interface_type: String,
}

impl Describe for HardDrive {
    fn describe(&self) -> String {
        format!(
            "{}, Capacity: {} GB, Rotation speed: {} RPM, Interface: {}",
            self.info.describe(),
            self.capacity,
            self.rotation_speed,
            self.interface_type
        )
    }
}

/// A catalog entry: one of the closed set of hardware variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Product {
    Motherboard(Motherboard),
    Processor(Processor),
    HardDrive(HardDrive),
}

impl Product {
    pub fn kind(&self) -> ProductKind {
        match self {
            Product::Motherboard(_) => ProductKind::Motherboard,
            Product::Processor(_) => ProductKind::Processor,
            Product::HardDrive(_) => ProductKind::HardDrive,
        }
    }

    pub fn info(&self) -> &ProductInfo {
        match self {
            Product::Motherboard(p) => &p.info,
            Product::Processor(p) => &p.info,
            Product::HardDrive(p) => &p.info,
        }
    }

    pub fn part_number(&self) -> &PartNumber {
        &self.info().part_number
    }

    pub fn name(&self) -> &str {
        &self.info().name
    }

    pub fn price(&self) -> Price {
        self.info().price
    }
}

impl Describe for Product {
    fn describe(&self) -> String {
        match self {
            Product::Motherboard(p) => p.describe(),
            Product::Processor(p) => p.describe(),
            Product::HardDrive(p) => p.describe(),
        }
    }
}

impl Entity for Product {
    type Id = PartNumber;

    fn id(&self) -> &Self::Id {
        self.part_number()
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.describe())
    }
}

impl From<Motherboard> for Product {
    fn from(value: Motherboard) -> Self {
        Product::Motherboard(value)
    }
}

impl From<Processor> for Product {
    fn from(value: Processor) -> Self {
        Product::Processor(value)
    }
}

impl From<HardDrive> for Product {
    fn from(value: HardDrive) -> Self {
        Product::HardDrive(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn motherboard() -> Motherboard {
        Motherboard {
            info: ProductInfo::new("MB001", "ASUS ROG Strix", Price::from_minor(15000, 2)),
            socket_type: "AM4".to_string(),
            processor_count: 1,
            ram_type: "DDR4".to_string(),
            bus_frequency: "3200 MHz".to_string(),
        }
    }

    fn processor() -> Processor {
        Processor {
            info: ProductInfo::new("CPU001", "AMD Ryzen 5", Price::from_minor(20000, 2)),
            socket_type: "AM4".to_string(),
            core_count: 6,
            clock_speed: Decimal::new(36, 1),
            process_technology: "7 nm".to_string(),
        }
    }

    fn hard_drive() -> HardDrive {
        HardDrive {
            info: ProductInfo::new("HDD001", "Seagate Barracuda", Price::from_minor(5000, 2)),
            capacity: 1000,
            rotation_speed: 7200,
            interface_type: "SATA".to_string(),
        }
    }

    /// Asserts each needle occurs in `haystack`, strictly after the previous one.
    fn assert_in_order(haystack: &str, needles: &[&str]) {
        let mut from = 0;
        for needle in needles {
            match haystack[from..].find(needle) {
                Some(pos) => from += pos + needle.len(),
                None => panic!("{needle:?} missing or out of order in {haystack:?}"),
            }
        }
    }

    #[test]
    fn motherboard_description_is_labeled() {
        assert_eq!(
            motherboard().describe(),
            "Part number: MB001, Product: ASUS ROG Strix, Price: 150.00, Socket: AM4, \
             Processor count: 1, RAM type: DDR4, Bus frequency: 3200 MHz"
        );
    }

    #[test]
    fn processor_description_is_labeled() {
        assert_eq!(
            processor().describe(),
            "Part number: CPU001, Product: AMD Ryzen 5, Price: 200.00, Socket: AM4, \
             Core count: 6, Clock speed: 3.6 GHz, Process technology: 7 nm"
        );
    }

    #[test]
    fn hard_drive_description_is_labeled() {
        assert_eq!(
            hard_drive().describe(),
            "Part number: HDD001, Product: Seagate Barracuda, Price: 50.00, Capacity: 1000 GB, \
             Rotation speed: 7200 RPM, Interface: SATA"
        );
    }

    #[test]
    fn product_delegates_to_variant() {
        let product = Product::from(processor());
        assert_eq!(product.describe(), processor().describe());
        assert_eq!(product.to_string(), processor().describe());
        assert_eq!(product.kind(), ProductKind::Processor);
        assert_eq!(product.part_number(), "CPU001");
        assert_eq!(product.id(), "CPU001");
        assert_eq!(product.name(), "AMD Ryzen 5");
        assert_eq!(product.price().to_string(), "200.00");
    }

    #[test]
    fn serializes_with_kind_tag() {
        let value = serde_json::to_value(Product::from(hard_drive())).unwrap();
        assert_eq!(value["kind"], "hard_drive");
        assert_eq!(value["info"]["part_number"], "HDD001");
        assert_eq!(value["capacity"], 1000);

        let back: Product = serde_json::from_value(value).unwrap();
        assert_eq!(back, Product::from(hard_drive()));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 128,
            ..ProptestConfig::default()
        })]

        /// Property: every declared field appears in the description, base
        /// fields first, then variant fields in declaration order.
        #[test]
        fn processor_description_lists_fields_in_order(
            part in "[A-Z]{2,4}[0-9]{3}",
            name in "[A-Za-z][A-Za-z ]{0,15}",
            cents in 0i64..10_000_000,
            socket in "[A-Z0-9]{2,6}",
            cores in 1u32..256,
            tenths in 1i64..100,
            tech in "[0-9]{1,2} nm",
        ) {
            let cpu = Processor {
                info: ProductInfo::new(part.clone(), name.clone(), Price::from_minor(cents, 2)),
                socket_type: socket.clone(),
                core_count: cores,
                clock_speed: Decimal::new(tenths, 1),
                process_technology: tech.clone(),
            };
            let price = Price::from_minor(cents, 2).to_string();
            let clock = Decimal::new(tenths, 1).to_string();
            let cores = cores.to_string();

            assert_in_order(
                &cpu.describe(),
                &[&part, &name, &price, &socket, &cores, &clock, &tech],
            );
        }

        #[test]
        fn motherboard_description_lists_fields_in_order(
            part in "MB[0-9]{3}",
            name in "[A-Za-z][A-Za-z ]{0,15}",
            cents in 0i64..10_000_000,
            socket in "[A-Z0-9]{2,6}",
            processors in 1u32..8,
            ram in "DDR[2-5]",
            bus in "[0-9]{3,4} MHz",
        ) {
            let board = Motherboard {
                info: ProductInfo::new(part.clone(), name.clone(), Price::from_minor(cents, 2)),
                socket_type: socket.clone(),
                processor_count: processors,
                ram_type: ram.clone(),
                bus_frequency: bus.clone(),
            };
            let price = Price::from_minor(cents, 2).to_string();
            let processors = processors.to_string();

            assert_in_order(
                &board.describe(),
                &[&part, &name, &price, &socket, &processors, &ram, &bus],
            );
        }

        #[test]
        fn hard_drive_description_lists_fields_in_order(
            part in "[A-Z]{3}[0-9]{3}",
            capacity in 1u32..100_000,
            rpm in 1u32..20_000,
            iface in "SATA|SAS|NVMe|IDE",
        ) {
            let drive = HardDrive {
                info: ProductInfo::new(part.clone(), "Drive", Price::ZERO),
                capacity,
                rotation_speed: rpm,
                interface_type: iface.clone(),
            };
            let capacity = format!("{capacity} GB");
            let rpm = format!("{rpm} RPM");

            assert_in_order(&drive.describe(), &[&part, "Drive", &capacity, &rpm, &iface]);
        }
    }
}
