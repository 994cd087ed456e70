//! Per-row display derivations for a vehicle.
//!
//! The kiosk shows shortened forms of some fields: the brand is stripped from
//! the model, the declined-budget stage is relabeled, long stage labels drop
//! to a compact tier and only the mechanic's first name is shown.

use std::fmt;

use crate::models::{Stage, StageLabel, Vehicle};

/// Brand removed from model names before display.
pub const STRIPPED_BRAND: &str = "Land Rover";

/// Stage labels longer than this render in the compact tier.
pub const COMPACT_STAGE_THRESHOLD: usize = 15;

/// Color family of a row, chosen by stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageTone {
    /// Warranty returns (red)
    Alert,
    /// Waiting in the yard (dark grey)
    Idle,
    /// Evaluation and approval (yellow)
    Pending,
    /// Approved and in service (orange)
    Active,
    /// Waiting for parts (blue)
    Blocked,
    /// Road test (light green)
    Testing,
    /// Ready for pickup (dark green)
    Done,
    /// Budget declined (purple)
    Declined,
    /// Anything else
    Neutral,
}

impl StageTone {
    pub fn for_stage(stage: Stage) -> Self {
        match stage {
            Stage::Warranty => StageTone::Alert,
            Stage::AwaitingEvaluation => StageTone::Idle,
            Stage::InEvaluation | Stage::AwaitingApproval => StageTone::Pending,
            Stage::Approved | Stage::InService => StageTone::Active,
            Stage::AwaitingParts => StageTone::Blocked,
            Stage::Testing => StageTone::Testing,
            Stage::Finished => StageTone::Done,
            Stage::BudgetNotApproved => StageTone::Declined,
        }
    }

    pub fn for_label(label: &StageLabel) -> Self {
        label.stage().map_or(StageTone::Neutral, StageTone::for_stage)
    }
}

/// Font tier of the stage column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageEmphasis {
    Large,
    Compact,
}

impl StageEmphasis {
    pub fn for_text(text: &str) -> Self {
        if text.chars().count() > COMPACT_STAGE_THRESHOLD {
            StageEmphasis::Compact
        } else {
            StageEmphasis::Large
        }
    }
}

/// Model name with the stripped brand removed.
pub fn display_model(model: &str) -> String {
    model.replacen(STRIPPED_BRAND, "", 1).trim().to_string()
}

/// Stage label as shown on the kiosk.
pub fn display_stage(label: &StageLabel) -> &str {
    match label {
        StageLabel::Recognized(Stage::BudgetNotApproved) => "Not Approved",
        other => other.as_str(),
    }
}

/// First whitespace-separated token of a name.
pub fn first_name(name: &str) -> &str {
    name.split_whitespace().next().unwrap_or(name)
}

/// A vehicle as one kiosk row.
///
/// Plain `Display` renders a pipe-separated line; the terminal renderer uses
/// the accessors to apply colors per [`StageTone`].
///
/// # Examples
///
/// ```rust
/// use shopboard_core::{display::VehicleRow, models::{Stage, Vehicle}};
///
/// let vehicle = Vehicle {
///     id: "c1".to_string(),
///     model: "Land Rover Defender".to_string(),
///     plate: "ABC1234".to_string(),
///     client: "John".to_string(),
///     delivery_date: "01/06/2024".to_string(),
///     mechanic: "Carlos Souza".to_string(),
///     stage: Stage::BudgetNotApproved.into(),
///     last_activity: "09:30:00".to_string(),
/// };
/// let row = VehicleRow(&vehicle);
/// assert_eq!(row.model(), "Defender");
/// assert_eq!(row.stage(), "Not Approved");
/// assert_eq!(row.mechanic(), "Carlos");
/// ```
pub struct VehicleRow<'a>(pub &'a Vehicle);

impl<'a> VehicleRow<'a> {
    pub fn model(&self) -> String {
        display_model(&self.0.model)
    }

    pub fn plate(&self) -> &'a str {
        &self.0.plate
    }

    pub fn client(&self) -> &'a str {
        &self.0.client
    }

    pub fn stage(&self) -> &'a str {
        display_stage(&self.0.stage)
    }

    pub fn delivery_date(&self) -> &'a str {
        &self.0.delivery_date
    }

    pub fn mechanic(&self) -> &'a str {
        first_name(&self.0.mechanic)
    }

    pub fn tone(&self) -> StageTone {
        StageTone::for_label(&self.0.stage)
    }

    pub fn emphasis(&self) -> StageEmphasis {
        StageEmphasis::for_text(self.stage())
    }

    /// In-service rows carry a live indicator.
    pub fn is_live(&self) -> bool {
        self.0.stage.stage() == Some(Stage::InService)
    }
}

impl fmt::Display for VehicleRow<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} | {} | {}{} | {} | {}",
            self.model(),
            self.plate(),
            self.client(),
            if self.is_live() { "● " } else { "" },
            self.stage(),
            self.delivery_date(),
            self.mechanic()
        )
    }
}
