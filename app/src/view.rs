use yew::prelude::*;

use crate::config::{LOADING, LOAD_FAILED, NO_PARTICIPANTS, SELECT_PLACEHOLDER};
use crate::model::{initials, Activity, ActivityCollection, ListState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantEntry {
    pub email: String,
    pub initials: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParticipantsView {
    Placeholder,
    Entries(Vec<ParticipantEntry>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCardView {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub availability: String,
    pub participants: ParticipantsView,
}

impl ActivityCardView {
    pub fn project(name: &str, activity: &Activity) -> Self {
        let participants = if activity.participants.is_empty() {
            ParticipantsView::Placeholder
        } else {
            ParticipantsView::Entries(
                activity
                    .participants
                    .iter()
                    .map(|email| ParticipantEntry {
                        email: email.clone(),
                        initials: initials(Some(email)),
                    })
                    .collect(),
            )
        };

        Self {
            name: name.to_string(),
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            availability: format!("{} spots left", activity.spots_left()),
            participants,
        }
    }
}

pub fn card_views(activities: &ActivityCollection) -> Vec<ActivityCardView> {
    activities
        .iter()
        .map(|(name, activity)| ActivityCardView::project(name, activity))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

/// Placeholder first, then one entry per activity. Only the placeholder
/// while the list is loading or failed.
pub fn select_options(state: &ListState) -> Vec<SelectOption> {
    let placeholder = SelectOption {
        value: String::new(),
        label: SELECT_PLACEHOLDER.to_string(),
        disabled: true,
    };
    let names = state.activities().into_iter().flat_map(|c| c.names());
    std::iter::once(placeholder)
        .chain(names.map(|name| SelectOption {
            value: name.to_string(),
            label: name.to_string(),
            disabled: false,
        }))
        .collect()
}

pub fn render_options(state: &ListState, selected: &str) -> Html {
    html! {
        { for select_options(state).into_iter().map(|opt| html! {
            <option
                value={opt.value.clone()}
                disabled={opt.disabled}
                selected={opt.value == selected}
            >
                { opt.label }
            </option>
        }) }
    }
}

pub fn render_list(state: &ListState, on_unregister: &Callback<(String, String)>) -> Html {
    match state {
        ListState::Loading => html! { <p>{ LOADING }</p> },
        ListState::Failed => html! { <p>{ LOAD_FAILED }</p> },
        ListState::Loaded(activities) => html! {
            { for card_views(activities).iter().map(|card| render_card(card, on_unregister)) }
        },
    }
}

fn render_card(card: &ActivityCardView, on_unregister: &Callback<(String, String)>) -> Html {
    let items = match &card.participants {
        ParticipantsView::Placeholder => html! {
            <li class="no-participants">{ NO_PARTICIPANTS }</li>
        },
        ParticipantsView::Entries(entries) => html! {
            { for entries.iter().map(|p| {
                let onclick = {
                    let on_unregister = on_unregister.clone();
                    let target = (card.name.clone(), p.email.clone());
                    Callback::from(move |_: MouseEvent| on_unregister.emit(target.clone()))
                };
                html! {
                    <li class="participant-item">
                        <span class="avatar">{ p.initials.clone() }</span>
                        <span class="participant-name">{ p.email.clone() }</span>
                        <span class="delete-icon" title="Unregister" {onclick}>{ "🗑️" }</span>
                    </li>
                }
            }) }
        },
    };

    html! {
        <div class="activity-card">
            <h4>{ card.name.clone() }</h4>
            <p>{ card.description.clone() }</p>
            <p><strong>{ "Schedule:" }</strong>{ format!(" {}", card.schedule) }</p>
            <p><strong>{ "Availability:" }</strong>{ format!(" {}", card.availability) }</p>
            <div class="participants">
                <h5>{ "Registered Participants" }</h5>
                <ul>{ items }</ul>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::tests::activity;

    fn board() -> ActivityCollection {
        [
            (
                "Chess Club".to_string(),
                activity(12, &["michael@mergington.edu", "daniel.lee@mergington.edu"]),
            ),
            ("Gym Class".to_string(), activity(30, &[])),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn card_shows_spots_and_avatars() {
        let cards = card_views(&board());
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].name, "Chess Club");
        assert_eq!(cards[0].availability, "10 spots left");
        assert_eq!(
            cards[0].participants,
            ParticipantsView::Entries(vec![
                ParticipantEntry {
                    email: "michael@mergington.edu".into(),
                    initials: "M".into(),
                },
                ParticipantEntry {
                    email: "daniel.lee@mergington.edu".into(),
                    initials: "DL".into(),
                },
            ])
        );
    }

    #[test]
    fn empty_roster_is_single_placeholder() {
        let cards = card_views(&board());
        assert_eq!(cards[1].participants, ParticipantsView::Placeholder);
    }

    #[test]
    fn over_capacity_renders_negative() {
        let over = activity(1, &["a@x.com", "b@x.com"]);
        assert_eq!(ActivityCardView::project("Drama", &over).availability, "-1 spots left");
    }

    #[test]
    fn options_follow_collection() {
        let opts = select_options(&ListState::Loaded(board()));
        let labels: Vec<&str> = opts.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, [SELECT_PLACEHOLDER, "Chess Club", "Gym Class"]);
        assert!(opts[0].disabled && opts[0].value.is_empty());
        assert!(opts[1..].iter().all(|o| !o.disabled && o.value == o.label));
    }

    #[test]
    fn options_without_data_keep_placeholder_only() {
        for state in [ListState::Loading, ListState::Failed] {
            let opts = select_options(&state);
            assert_eq!(opts.len(), 1);
            assert_eq!(opts[0].label, SELECT_PLACEHOLDER);
        }
    }

    #[test]
    fn projection_is_idempotent() {
        let json = r#"{
            "Science Olympiad": {"description": "d", "schedule": "s", "max_participants": 18, "participants": ["ava@x.com"]},
            "Art Club": {"description": "d", "schedule": "s", "max_participants": 15, "participants": []}
        }"#;
        let first: ActivityCollection = serde_json::from_str(json).unwrap();
        let second: ActivityCollection = serde_json::from_str(json).unwrap();
        assert_eq!(card_views(&first), card_views(&second));
        let state = ListState::Loaded(first);
        assert_eq!(select_options(&state), select_options(&ListState::Loaded(second)));
    }
}
