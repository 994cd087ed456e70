//! Orders vehicles by workflow stage priority.
//!
//! Vehicles whose list does not resolve to a known [`Stage`] are removed
//! before sorting rather than pushed to the end. The sort is stable, so
//! vehicles sharing a stage keep the board's card order between refreshes
//! and rows do not jump around on screen.

use std::collections::BTreeMap;

use crate::models::{Stage, StageLabel, Vehicle};

/// Capability that turns board-order vehicles into display order.
pub trait Prioritizer: Send + Sync {
    fn prioritize(&self, vehicles: Vec<Vehicle>) -> Prioritized;
}

/// Output of a prioritization pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Prioritized {
    /// Vehicles in display order
    pub vehicles: Vec<Vehicle>,
    /// Vehicles removed per unrecognized list name
    pub dropped: BTreeMap<String, usize>,
}

impl Prioritized {
    /// Total number of vehicles removed.
    pub fn dropped_count(&self) -> usize {
        self.dropped.values().sum()
    }
}

/// Sorts by [`Stage::priority`], dropping unrecognized stages.
#[derive(Debug, Clone, Copy, Default)]
pub struct StagePrioritizer;

impl Prioritizer for StagePrioritizer {
    fn prioritize(&self, vehicles: Vec<Vehicle>) -> Prioritized {
        prioritize(vehicles)
    }
}

/// Filter out unrecognized stages, then stable-sort by stage priority.
///
/// # Examples
///
/// ```rust
/// use shopboard_core::{models::{Stage, StageLabel, Vehicle}, prioritizer::prioritize};
///
/// let make = |id: &str, stage: StageLabel| Vehicle {
///     id: id.to_string(),
///     model: String::new(),
///     plate: String::new(),
///     client: String::new(),
///     delivery_date: String::new(),
///     mechanic: String::new(),
///     stage,
///     last_activity: String::new(),
/// };
/// let result = prioritize(vec![
///     make("a", Stage::Finished.into()),
///     make("b", StageLabel::Unrecognized("Lunch".to_string())),
///     make("c", Stage::Warranty.into()),
/// ]);
///
/// let ids: Vec<&str> = result.vehicles.iter().map(|v| v.id.as_str()).collect();
/// assert_eq!(ids, ["c", "a"]);
/// assert_eq!(result.dropped_count(), 1);
/// ```
pub fn prioritize(vehicles: Vec<Vehicle>) -> Prioritized {
    let mut dropped: BTreeMap<String, usize> = BTreeMap::new();
    let mut ranked: Vec<(u8, Vehicle)> = Vec::with_capacity(vehicles.len());

    for vehicle in vehicles {
        match &vehicle.stage {
            StageLabel::Recognized(stage) => ranked.push((stage.priority(), vehicle)),
            StageLabel::Unrecognized(raw) => *dropped.entry(raw.clone()).or_default() += 1,
        }
    }

    // `sort_by_key` is stable: equal priorities keep input order.
    ranked.sort_by_key(|(priority, _)| *priority);

    Prioritized {
        vehicles: ranked.into_iter().map(|(_, vehicle)| vehicle).collect(),
        dropped,
    }
}

/// Priority of a label, `None` for unrecognized stages.
pub fn priority_of(label: &StageLabel) -> Option<u8> {
    label.stage().as_ref().map(Stage::priority)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicle(id: &str, stage: StageLabel) -> Vehicle {
        Vehicle {
            id: id.to_string(),
            model: "Civic".to_string(),
            plate: "ABC1234".to_string(),
            client: "John".to_string(),
            delivery_date: "To be defined".to_string(),
            mechanic: "Yard".to_string(),
            stage,
            last_activity: "09:30:00".to_string(),
        }
    }

    fn ids(prioritized: &Prioritized) -> Vec<&str> {
        prioritized
            .vehicles
            .iter()
            .map(|vehicle| vehicle.id.as_str())
            .collect()
    }

    /// Deterministic pseudo-random stage sequence covering all labels.
    fn mixed_fleet(count: usize) -> Vec<Vehicle> {
        let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
        (0..count)
            .map(|i| {
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                let pick = (state % 12) as usize;
                let label = match Stage::ALL.get(pick) {
                    Some(stage) => StageLabel::Recognized(*stage),
                    None => StageLabel::Unrecognized(format!("Unknown {pick}")),
                };
                vehicle(&format!("v{i}"), label)
            })
            .collect()
    }

    #[test]
    fn test_orders_by_priority() {
        let result = prioritize(vec![
            vehicle("finished", Stage::Finished.into()),
            vehicle("declined", Stage::BudgetNotApproved.into()),
            vehicle("service", Stage::InService.into()),
            vehicle("warranty", Stage::Warranty.into()),
            vehicle("parts", Stage::AwaitingParts.into()),
        ]);

        assert_eq!(
            ids(&result),
            vec!["warranty", "parts", "service", "finished", "declined"]
        );
        assert!(result.dropped.is_empty());
    }

    #[test]
    fn test_adjacent_priorities_never_decrease() {
        let result = prioritize(mixed_fleet(200));

        for pair in result.vehicles.windows(2) {
            assert!(priority_of(&pair[0].stage) <= priority_of(&pair[1].stage));
        }
    }

    #[test]
    fn test_unrecognized_stages_are_dropped_wherever_they_appear() {
        let fleet = mixed_fleet(200);
        let unknown = fleet
            .iter()
            .filter(|vehicle| vehicle.stage.stage().is_none())
            .count();
        assert!(unknown > 0);

        let result = prioritize(fleet);

        assert!(result
            .vehicles
            .iter()
            .all(|vehicle| priority_of(&vehicle.stage).is_some()));
        assert_eq!(result.dropped_count(), unknown);
        assert_eq!(result.vehicles.len(), 200 - unknown);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let result = prioritize(vec![
            vehicle("s1", Stage::InService.into()),
            vehicle("w1", Stage::Warranty.into()),
            vehicle("s2", Stage::InService.into()),
            vehicle("w2", Stage::Warranty.into()),
            vehicle("s3", Stage::InService.into()),
        ]);

        assert_eq!(ids(&result), vec!["w1", "w2", "s1", "s2", "s3"]);
    }

    #[test]
    fn test_stable_across_large_input() {
        let fleet = mixed_fleet(300);
        let input_position = |id: &str| fleet.iter().position(|v| v.id == id).unwrap();
        let result = prioritize(fleet.clone());

        for pair in result.vehicles.windows(2) {
            if pair[0].stage == pair[1].stage {
                assert!(input_position(&pair[0].id) < input_position(&pair[1].id));
            }
        }
    }

    #[test]
    fn test_dropped_counts_per_list_name() {
        let result = StagePrioritizer.prioritize(vec![
            vehicle("a", StageLabel::Unrecognized("Wash".to_string())),
            vehicle("b", StageLabel::Unrecognized("Wash".to_string())),
            vehicle("c", StageLabel::Unrecognized("Archive".to_string())),
        ]);

        assert!(result.vehicles.is_empty());
        assert_eq!(result.dropped.get("Wash"), Some(&2));
        assert_eq!(result.dropped.get("Archive"), Some(&1));
        assert_eq!(result.dropped_count(), 3);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(prioritize(Vec::new()), Prioritized::default());
    }
}
