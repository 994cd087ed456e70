use shopboard_core::{
    board::{BoardClient, BoardContents, RemoteCard, RemoteLabel, RemoteList},
    BoardCredentials, Result,
};

/// Board client serving a fixed set of lists and cards.
pub struct StaticBoard(pub BoardContents);

impl BoardClient for StaticBoard {
    async fn fetch_board(&self, _credentials: &BoardCredentials) -> Result<BoardContents> {
        Ok(self.0.clone())
    }
}

pub fn list(id: &str, name: &str) -> RemoteList {
    RemoteList {
        id: id.to_string(),
        name: name.to_string(),
    }
}

/// Card with a due date and mechanic label.
pub fn card(id: &str, name: &str, id_list: &str, mechanic: Option<&str>) -> RemoteCard {
    RemoteCard {
        id: id.to_string(),
        name: name.to_string(),
        due: Some("2024-06-01T12:00:00.000Z".to_string()),
        id_list: Some(id_list.to_string()),
        labels: mechanic
            .map(|name| {
                vec![RemoteLabel {
                    name: name.to_string(),
                }]
            })
            .unwrap_or_default(),
        date_last_activity: Some("2024-05-31T08:15:00.000Z".to_string()),
    }
}

pub fn credentials() -> BoardCredentials {
    BoardCredentials::new("key", "token", "board")
}
