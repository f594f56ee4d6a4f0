use indexmap::IndexMap;
use serde::Deserialize;

/// Activity name -> record, in the order the server listed them.
pub type ActivityMap = IndexMap<String, Activity>;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Not clamped: an over-full activity reports a negative count.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }
}

/// Body of a signup/unregister response. Success carries `message`,
/// failure usually carries `detail`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct MutationReply {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chess(max: u32, participants: &[&str]) -> Activity {
        Activity {
            description: "d".into(),
            schedule: "s".into(),
            max_participants: max,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn spots_left_counts_remaining_capacity() {
        assert_eq!(chess(12, &[]).spots_left(), 12);
        assert_eq!(chess(2, &["a@x.com"]).spots_left(), 1);
        assert_eq!(chess(2, &["a@x.com", "b@x.com"]).spots_left(), 0);
        assert_eq!(chess(0, &[]).spots_left(), 0);
    }

    #[test]
    fn spots_left_goes_negative_when_over_full() {
        assert_eq!(chess(1, &["a@x.com", "b@x.com"]).spots_left(), -1);
    }

    #[test]
    fn decoding_keeps_server_key_order() {
        let json = r#"{
            "Zumba": {"description":"z","schedule":"Mon","max_participants":5,"participants":[]},
            "Art Workshop": {"description":"a","schedule":"Tue","max_participants":3,"participants":["x@y.edu"]},
            "Chess Club": {"description":"c","schedule":"Fri","max_participants":12,"participants":[]}
        }"#;
        let map: ActivityMap = serde_json::from_str(json).unwrap();
        let names: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(names, ["Zumba", "Art Workshop", "Chess Club"]);
        assert_eq!(map["Art Workshop"].participants, ["x@y.edu"]);
    }

    #[test]
    fn missing_participants_decodes_as_empty() {
        let json = r#"{"Chess Club": {"description":"d","schedule":"s","max_participants":2}}"#;
        let map: ActivityMap = serde_json::from_str(json).unwrap();
        assert!(map["Chess Club"].participants.is_empty());
    }

    #[test]
    fn negative_capacity_is_rejected() {
        let json = r#"{"Chess Club": {"description":"d","schedule":"s","max_participants":-1,"participants":[]}}"#;
        assert!(serde_json::from_str::<ActivityMap>(json).is_err());
    }

    #[test]
    fn mutation_reply_tolerates_either_field() {
        let ok: MutationReply =
            serde_json::from_str(r#"{"message":"Signed up a@x.com for Chess Club"}"#).unwrap();
        assert_eq!(ok.message.as_deref(), Some("Signed up a@x.com for Chess Club"));
        assert_eq!(ok.detail, None);

        let err: MutationReply = serde_json::from_str(r#"{"detail":"Activity not found"}"#).unwrap();
        assert_eq!(err.detail.as_deref(), Some("Activity not found"));

        let empty: MutationReply = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, MutationReply::default());
    }
}
