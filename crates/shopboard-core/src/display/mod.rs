//! Presentation derivations for the kiosk.
//!
//! The core produces a [`PageView`](crate::models::PageView); this module owns
//! everything about how that page reads on screen without committing to a
//! particular terminal or color library:
//!
//! - [`datetime`]: day-first dates and wall-clock times for board timestamps
//! - [`row`]: per-vehicle derivations (tone, shortened model and stage,
//!   mechanic first name, live indicator)
//! - [`page`]: header line and a plain-text `Display` for a whole page
//!
//! The CLI renderer maps [`StageTone`] to concrete terminal colors.

pub mod datetime;
pub mod page;
pub mod row;

pub use datetime::{ClockTime, ShortDate};
pub use page::{PageHeader, COLUMN_HEADINGS, LOADING_MESSAGE};
pub use row::{
    display_model, display_stage, first_name, StageEmphasis, StageTone, VehicleRow,
};
