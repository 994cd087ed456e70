#[cfg(test)]
mod model_tests {
    use crate::models::{PageView, Slot, Stage, StageLabel, Vehicle, WorkshopData};

    fn create_test_vehicle(id: &str, stage: Stage) -> Vehicle {
        Vehicle {
            id: id.to_string(),
            model: "Civic".to_string(),
            plate: "ABC1234".to_string(),
            client: "John".to_string(),
            delivery_date: "01/06/2024".to_string(),
            mechanic: "Carlos".to_string(),
            stage: stage.into(),
            last_activity: "09:30:00".to_string(),
        }
    }

    #[test]
    fn test_stage_priorities_follow_declaration_order() {
        let priorities: Vec<u8> = Stage::ALL.iter().map(Stage::priority).collect();
        assert_eq!(priorities, (1..=10).collect::<Vec<u8>>());
    }

    #[test]
    fn test_stage_parses_canonical_and_board_names() {
        for stage in Stage::ALL {
            assert_eq!(stage.as_str().parse::<Stage>(), Ok(stage));
            assert_eq!(stage.board_alias().parse::<Stage>(), Ok(stage));
        }
        assert_eq!("  In Service ".parse::<Stage>(), Ok(Stage::InService));
    }

    #[test]
    fn test_stage_parse_is_exact() {
        assert!("in service".parse::<Stage>().is_err());
        assert!("Done".parse::<Stage>().is_err());
        assert!("".parse::<Stage>().is_err());
    }

    #[test]
    fn test_stage_label_keeps_unrecognized_name() {
        let label = StageLabel::parse("Car Wash");
        assert_eq!(label, StageLabel::Unrecognized("Car Wash".to_string()));
        assert_eq!(label.as_str(), "Car Wash");
        assert_eq!(label.stage(), None);
    }

    #[test]
    fn test_stage_label_recognized() {
        let label = StageLabel::parse("Aguardando Peças");
        assert_eq!(label.stage(), Some(Stage::AwaitingParts));
        assert_eq!(label.as_str(), "Awaiting Parts");
    }

    #[test]
    fn test_workshop_status_snapshot() {
        let data = WorkshopData::status("Connection error");
        assert!(data.is_empty());
        assert_eq!(data.len(), 0);
        assert_eq!(data.board_name, "Connection error");
    }

    #[test]
    fn test_page_view_counts() {
        let view = PageView {
            board_name: "Yard".to_string(),
            page: 0,
            total_pages: 1,
            vehicle_count: 2,
            slots: vec![
                Slot::Vehicle(create_test_vehicle("a", Stage::Warranty)),
                Slot::Vehicle(create_test_vehicle("b", Stage::Finished)),
                Slot::Empty,
                Slot::Empty,
            ],
        };

        assert_eq!(view.vehicles().count(), 2);
        assert_eq!(view.empty_slots(), 2);
        assert!(!view.is_status_only());
    }

    #[test]
    fn test_vehicle_serializes_stage_label() {
        let vehicle = create_test_vehicle("a", Stage::InService);
        let json = serde_json::to_value(&vehicle).unwrap();
        assert_eq!(json["stage"]["kind"], "recognized");
        assert_eq!(json["stage"]["value"], "in_service");
        assert_eq!(json["delivery_date"], "01/06/2024");
    }
}
