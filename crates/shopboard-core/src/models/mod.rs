//! Domain models for the workshop board.
//!
//! These types are the boundary between the board adapter, the prioritizer
//! and the presentation layer:
//!
//! - [`Stage`] / [`StageLabel`]: the fixed workflow and how a board list name
//!   resolves against it
//! - [`Vehicle`]: one card, mapped to display fields
//! - [`WorkshopData`]: an immutable snapshot from one refresh
//! - [`PageView`] / [`Slot`]: the fixed-size page the kiosk draws
//!
//! Display implementations live in [`crate::display`].
//!
//! # Examples
//!
//! ```rust
//! use shopboard_core::models::{Stage, StageLabel};
//!
//! assert_eq!(
//!     StageLabel::parse("Em Serviço"),
//!     StageLabel::Recognized(Stage::InService)
//! );
//! assert_eq!(StageLabel::parse("Lunch").stage(), None);
//! ```

pub mod stage;
pub mod vehicle;
pub mod view;
pub mod workshop;

#[cfg(test)]
mod tests;

pub use stage::{Stage, StageLabel};
pub use vehicle::Vehicle;
pub use view::{PageView, Slot};
pub use workshop::WorkshopData;
