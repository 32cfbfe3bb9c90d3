//! Bangalore delivery addresses for realistic fixtures.

use route_sequencer::{DeliveryStop, Position, StopStatus};

/// A named delivery address with coordinates.
#[derive(Debug, Clone)]
pub struct Address {
    pub name: &'static str,
    pub street: &'static str,
    pub phone: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Address {
    pub const fn new(
        name: &'static str,
        street: &'static str,
        phone: &'static str,
        lat: f64,
        lng: f64,
    ) -> Self {
        Self {
            name,
            street,
            phone,
            lat,
            lng,
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.lat, self.lng)
    }

    /// Pending stop with the given id.
    pub fn stop(&self, id: &str) -> DeliveryStop {
        DeliveryStop::new(id, self.position())
            .with_name(self.name)
            .with_address(self.street)
            .with_phone(self.phone)
    }
}

/// Central Bangalore, used as the depot.
pub const DEPOT: Position = Position::new(12.9716, 77.5946);

pub const CUSTOMERS: &[Address] = &[
    Address::new("Rahul Sharma", "42, Richmond Road, Bangalore, 560025", "+91 98765 43210", 12.9647, 77.6082),
    Address::new("Priya Patel", "121, MG Road, Bangalore, 560001", "+91 87654 32109", 12.9758, 77.6065),
    Address::new("Vikram Malhotra", "78, Indiranagar 100ft Road, Bangalore, 560038", "+91 76543 21098", 12.9784, 77.6408),
    Address::new("Ananya Desai", "22, Koramangala 5th Block, Bangalore, 560095", "+91 65432 10987", 12.9340, 77.6155),
    Address::new("Karthik Iyer", "155, HSR Layout, Bangalore, 560102", "+91 54321 09876", 12.9116, 77.6416),
];

pub const EXTRA_CUSTOMERS: &[Address] = &[
    Address::new("Meera Nair", "9, Jayanagar 4th Block, Bangalore, 560011", "+91 90000 11111", 12.9250, 77.5938),
    Address::new("Arjun Rao", "3, Malleshwaram 8th Cross, Bangalore, 560003", "+91 90000 22222", 13.0035, 77.5710),
    Address::new("Sneha Kulkarni", "61, Whitefield Main Road, Bangalore, 560066", "+91 90000 33333", 12.9698, 77.7500),
    Address::new("Rohan Gupta", "14, Hebbal Ring Road, Bangalore, 560024", "+91 90000 44444", 13.0358, 77.5970),
    Address::new("Divya Menon", "27, Electronic City Phase 1, Bangalore, 560100", "+91 90000 55555", 12.8452, 77.6602),
];

/// The five customers as pending stops, ids "1".."5".
pub fn customer_stops() -> Vec<DeliveryStop> {
    CUSTOMERS
        .iter()
        .enumerate()
        .map(|(i, address)| address.stop(&(i + 1).to_string()))
        .collect()
}

/// All ten addresses as pending stops, ids "1".."10".
pub fn all_stops() -> Vec<DeliveryStop> {
    CUSTOMERS
        .iter()
        .chain(EXTRA_CUSTOMERS)
        .enumerate()
        .map(|(i, address)| address.stop(&(i + 1).to_string()))
        .collect()
}

pub fn with_status(mut stop: DeliveryStop, status: StopStatus) -> DeliveryStop {
    stop.status = status;
    stop
}
