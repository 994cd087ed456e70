//! Display implementation for a kiosk page.

use std::fmt;

use super::row::VehicleRow;
use crate::models::{PageView, Slot};

/// Shown before the first snapshot arrives.
pub const LOADING_MESSAGE: &str = "Loading board...";

/// Column headings of the vehicle grid.
pub const COLUMN_HEADINGS: [&str; 5] = ["Model / Plate", "Client", "Stage", "Delivery", "Mechanic"];

/// Header line: board name and page position.
pub struct PageHeader<'a>(pub &'a PageView);

impl fmt::Display for PageHeader<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | page {} of {} • auto refresh",
            self.0.board_name,
            self.0.page + 1,
            self.0.total_pages
        )
    }
}

impl fmt::Display for PageView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", PageHeader(self))?;
        writeln!(f)?;

        if self.is_status_only() {
            return writeln!(f, "{}", self.board_name);
        }

        writeln!(f, "{}", COLUMN_HEADINGS.join(" | "))?;
        for slot in &self.slots {
            match slot {
                Slot::Vehicle(vehicle) => writeln!(f, "{}", VehicleRow(vehicle))?,
                Slot::Empty => writeln!(f, "-")?,
            }
        }

        Ok(())
    }
}
