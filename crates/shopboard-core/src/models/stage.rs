//! Workflow stages and their board labels.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of the ten repair workflow stages.
///
/// Variants are declared in display priority order, so `Stage::ALL` doubles
/// as the priority table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Vehicle returned under warranty
    Warranty,

    /// Vehicle is in the yard waiting for a mechanic to look at it
    AwaitingEvaluation,

    /// Mechanic is diagnosing the vehicle
    InEvaluation,

    /// Budget sent, waiting for the client to approve it
    AwaitingApproval,

    /// Client approved the budget
    Approved,

    /// Work is blocked on parts delivery
    AwaitingParts,

    /// Work is under way
    InService,

    /// Road test after service
    Testing,

    /// Ready for pickup
    Finished,

    /// Client declined the budget
    BudgetNotApproved,
}

impl Stage {
    /// Every stage, highest display priority first.
    pub const ALL: [Stage; 10] = [
        Stage::Warranty,
        Stage::AwaitingEvaluation,
        Stage::InEvaluation,
        Stage::AwaitingApproval,
        Stage::Approved,
        Stage::AwaitingParts,
        Stage::InService,
        Stage::Testing,
        Stage::Finished,
        Stage::BudgetNotApproved,
    ];

    /// Canonical board list name for the stage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Warranty => "Warranty",
            Stage::AwaitingEvaluation => "Awaiting Evaluation",
            Stage::InEvaluation => "In Evaluation",
            Stage::AwaitingApproval => "Awaiting Approval",
            Stage::Approved => "Approved",
            Stage::AwaitingParts => "Awaiting Parts",
            Stage::InService => "In Service",
            Stage::Testing => "Test Phase",
            Stage::Finished => "Finished",
            Stage::BudgetNotApproved => "Budget Not Approved",
        }
    }

    /// List name the shop's Portuguese board uses for the stage.
    pub fn board_alias(&self) -> &'static str {
        match self {
            Stage::Warranty => "Garantia",
            Stage::AwaitingEvaluation => "Aguardando Avaliação",
            Stage::InEvaluation => "Em Avaliação",
            Stage::AwaitingApproval => "Aguardando Aprovação",
            Stage::Approved => "Aprovado",
            Stage::AwaitingParts => "Aguardando Peças",
            Stage::InService => "Em Serviço",
            Stage::Testing => "Fase de Teste",
            Stage::Finished => "Finalizado",
            Stage::BudgetNotApproved => "Orçamento Não Aprovado",
        }
    }

    /// Display priority, 1 (shown first) through 10.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shopboard_core::models::Stage;
    ///
    /// assert_eq!(Stage::Warranty.priority(), 1);
    /// assert_eq!(Stage::InService.priority(), 7);
    /// assert_eq!(Stage::BudgetNotApproved.priority(), 10);
    /// ```
    pub fn priority(&self) -> u8 {
        match self {
            Stage::Warranty => 1,
            Stage::AwaitingEvaluation => 2,
            Stage::InEvaluation => 3,
            Stage::AwaitingApproval => 4,
            Stage::Approved => 5,
            Stage::AwaitingParts => 6,
            Stage::InService => 7,
            Stage::Testing => 8,
            Stage::Finished => 9,
            Stage::BudgetNotApproved => 10,
        }
    }
}

impl FromStr for Stage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Stage::ALL
            .into_iter()
            .find(|stage| stage.as_str() == name || stage.board_alias() == name)
            .ok_or_else(|| format!("Unknown stage: {s}"))
    }
}

/// A board list name resolved against the known stages.
///
/// Lists that do not correspond to a stage are kept verbatim so they can be
/// reported, but they never reach the display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum StageLabel {
    Recognized(Stage),
    Unrecognized(String),
}

impl StageLabel {
    /// Resolve a board list name.
    pub fn parse(name: &str) -> Self {
        match name.parse::<Stage>() {
            Ok(stage) => StageLabel::Recognized(stage),
            Err(_) => StageLabel::Unrecognized(name.to_string()),
        }
    }

    /// The recognized stage, if any.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            StageLabel::Recognized(stage) => Some(*stage),
            StageLabel::Unrecognized(_) => None,
        }
    }

    /// Label as it appeared on the board (canonical name when recognized).
    pub fn as_str(&self) -> &str {
        match self {
            StageLabel::Recognized(stage) => stage.as_str(),
            StageLabel::Unrecognized(raw) => raw,
        }
    }
}

impl From<Stage> for StageLabel {
    fn from(stage: Stage) -> Self {
        StageLabel::Recognized(stage)
    }
}
