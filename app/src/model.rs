use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Activity {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub participants: Vec<String>,
}

fn null_as_empty<'de, D>(de: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(de)?.unwrap_or_default())
}

impl Activity {
    /// Capacity minus roster size. Negative when the server is over capacity.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }
}

/// Body of `GET /activities`, keyed by activity name in server order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ActivityCollection(IndexMap<String, Activity>);

impl ActivityCollection {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.0.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.0.iter().map(|(name, activity)| (name.as_str(), activity))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn contains_participant(&self, activity: &str, email: &str) -> bool {
        self.get(activity)
            .is_some_and(|a| a.participants.iter().any(|p| p == email))
    }

    /// Drops the first roster entry equal to `email`. Returns false and leaves
    /// the collection untouched if either the activity or the email is gone.
    pub fn remove_participant(&mut self, activity: &str, email: &str) -> bool {
        let Some(entry) = self.0.get_mut(activity) else {
            return false;
        };
        match entry.participants.iter().position(|p| p == email) {
            Some(idx) => {
                entry.participants.remove(idx);
                true
            }
            None => false,
        }
    }
}

impl FromIterator<(String, Activity)> for ActivityCollection {
    fn from_iter<T: IntoIterator<Item = (String, Activity)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// What the activity list is currently showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListState {
    Loading,
    Loaded(ActivityCollection),
    Failed,
}

impl ListState {
    pub fn activities(&self) -> Option<&ActivityCollection> {
        match self {
            Self::Loaded(c) => Some(c),
            _ => None,
        }
    }
}

/// Avatar label for a participant: one or two uppercase characters taken
/// from the part of an email before `@`. Never fails; empty input gives `?`.
pub fn initials(text: Option<&str>) -> String {
    let text = text.unwrap_or_default();
    let local = text.split_once('@').map_or(text, |(local, _)| local);
    let mut parts = local.split(['.', '_', '-']).filter(|p| !p.is_empty());

    match (parts.next(), parts.next()) {
        (None, _) => match local.chars().next() {
            Some(c) => c.to_uppercase().collect(),
            None => "?".to_string(),
        },
        (Some(only), None) => first_char(only).to_uppercase(),
        (Some(first), Some(second)) => {
            let pair = format!("{}{}", first_char(first), first_char(second));
            pair.to_uppercase().chars().take(2).collect()
        }
    }
}

fn first_char(s: &str) -> String {
    s.chars().next().map(String::from).unwrap_or_default()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn activity(max: u32, participants: &[&str]) -> Activity {
        Activity {
            description: "Learn strategies and compete in chess tournaments".into(),
            schedule: "Fridays, 3:30 PM - 5:00 PM".into(),
            max_participants: max,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn initials_examples() {
        assert_eq!(initials(Some("")), "?");
        assert_eq!(initials(None), "?");
        assert_eq!(initials(Some("john@x.com")), "J");
        assert_eq!(initials(Some("john.doe@x.com")), "JD");
        assert_eq!(initials(Some("john_doe_smith@x.com")), "JD");
        assert_eq!(initials(Some("x@y.com")), "X");
    }

    #[test]
    fn initials_odd_input() {
        // no separators survive, so the raw first char is used
        assert_eq!(initials(Some("...@x.com")), ".");
        assert_eq!(initials(Some("@x.com")), "?");
        assert_eq!(initials(Some("mary-ann")), "MA");
        assert_eq!(initials(Some("__bob__")), "B");
        assert_eq!(initials(Some("élodie.zoé@x.fr")), "ÉZ");
    }

    #[test]
    fn spots_left_can_go_negative() {
        assert_eq!(activity(10, &["a@x", "b@x", "c@x"]).spots_left(), 7);
        let full: Vec<String> = (0..10).map(|i| format!("p{i}@x")).collect();
        let full: Vec<&str> = full.iter().map(String::as_str).collect();
        assert_eq!(activity(10, &full).spots_left(), 0);

        let mut over = full.clone();
        over.push("extra@x");
        assert_eq!(activity(10, &over).spots_left(), -1);
    }

    #[test]
    fn decode_keeps_server_order() {
        let json = r#"{
            "Programming Class": {"description": "d", "schedule": "s", "max_participants": 20, "participants": ["emma@mergington.edu"]},
            "Chess Club": {"description": "d", "schedule": "s", "max_participants": 12, "participants": []},
            "Art Club": {"description": "d", "schedule": "s", "max_participants": 15, "participants": null}
        }"#;
        let c: ActivityCollection = serde_json::from_str(json).unwrap();
        let names: Vec<&str> = c.names().collect();
        assert_eq!(names, ["Programming Class", "Chess Club", "Art Club"]);
        assert!(c.get("Art Club").unwrap().participants.is_empty());
    }

    #[test]
    fn decode_missing_participants() {
        let json = r#"{"Gym": {"description": "d", "schedule": "s", "max_participants": 3}}"#;
        let c: ActivityCollection = serde_json::from_str(json).unwrap();
        assert_eq!(c.get("Gym").unwrap().spots_left(), 3);
    }

    #[test]
    fn decode_rejects_non_object() {
        assert!(serde_json::from_str::<ActivityCollection>("[]").is_err());
        assert!(serde_json::from_str::<ActivityCollection>("<html>").is_err());
    }

    #[test]
    fn remove_participant_is_scoped_and_tolerant() {
        let mut c: ActivityCollection = [
            ("Chess Club".to_string(), activity(12, &["a@x", "b@x"])),
            ("Art Club".to_string(), activity(15, &["a@x"])),
        ]
        .into_iter()
        .collect();

        assert!(c.contains_participant("Chess Club", "a@x"));
        assert!(c.remove_participant("Chess Club", "a@x"));
        assert!(!c.contains_participant("Chess Club", "a@x"));
        assert!(c.contains_participant("Art Club", "a@x"));

        // already gone, or unknown activity
        assert!(!c.remove_participant("Chess Club", "a@x"));
        assert!(!c.remove_participant("Drama", "b@x"));
        assert_eq!(c.get("Chess Club").unwrap().participants, ["b@x"]);
    }
}
