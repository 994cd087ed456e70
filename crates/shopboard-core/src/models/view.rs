//! Page view handed to the presentation layer.

use serde::{Deserialize, Serialize};

use super::Vehicle;

/// One grid cell of the current page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "slot", content = "vehicle", rename_all = "snake_case")]
pub enum Slot {
    Vehicle(Vehicle),
    Empty,
}

impl Slot {
    /// The vehicle in this slot, if any.
    pub fn vehicle(&self) -> Option<&Vehicle> {
        match self {
            Slot::Vehicle(vehicle) => Some(vehicle),
            Slot::Empty => None,
        }
    }
}

/// Everything needed to draw one page of the kiosk.
///
/// `slots` always has exactly `page_size` entries; trailing cells past the
/// last vehicle are [`Slot::Empty`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageView {
    /// Board title or status message
    pub board_name: String,
    /// Zero-based page index
    pub page: usize,
    /// Total pages, at least 1
    pub total_pages: usize,
    /// Vehicles across all pages
    pub vehicle_count: usize,
    /// Fixed-size grid for the current page
    pub slots: Vec<Slot>,
}

impl PageView {
    /// Vehicles visible on this page.
    pub fn vehicles(&self) -> impl Iterator<Item = &Vehicle> {
        self.slots.iter().filter_map(Slot::vehicle)
    }

    /// Number of placeholder cells on this page.
    pub fn empty_slots(&self) -> usize {
        self.slots.iter().filter(|slot| **slot == Slot::Empty).count()
    }

    /// True when the board name should be read as a status line.
    pub fn is_status_only(&self) -> bool {
        self.vehicle_count == 0
    }
}
