use yew::prelude::*;

use crate::model::ActivityMap;

pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";
pub const LOADING_TEXT: &str = "Loading activities...";
pub const LOAD_FAILED_TEXT: &str = "Failed to load activities. Please try again later.";

/// One participant line. Carries exactly the strings the server sent, so a
/// delete click targets what was rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantRow {
    pub activity: String,
    pub email: String,
}

impl ParticipantRow {
    /// Accessible name of the delete button; also the confirmation wording.
    pub fn delete_label(&self) -> String {
        format!("Unregister {} from {}", self.email, self.activity)
    }

    /// Asks `confirm` first. `None` means the user declined and nothing
    /// should be sent.
    pub fn confirm_unregister(&self, confirm: impl FnOnce(&str) -> bool) -> Option<ParticipantRow> {
        let prompt = format!("{}?", self.delete_label());
        confirm(&prompt).then(|| self.clone())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub participants: Vec<ParticipantRow>,
}

impl CardView {
    pub fn availability(&self) -> String {
        format!("{} spots left", self.spots_left)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Snapshot of one accepted fetch. Built in full from the map, never patched.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub cards: Vec<CardView>,
    pub options: Vec<SelectOption>,
}

impl Projection {
    pub fn from_map(map: &ActivityMap) -> Self {
        let cards = map
            .iter()
            .map(|(name, a)| CardView {
                name: name.clone(),
                description: a.description.clone(),
                schedule: a.schedule.clone(),
                spots_left: a.spots_left(),
                participants: a
                    .participants
                    .iter()
                    .map(|email| ParticipantRow {
                        activity: name.clone(),
                        email: email.clone(),
                    })
                    .collect(),
            })
            .collect();

        let mut options = placeholder_options();
        options.extend(map.keys().map(|name| SelectOption {
            value: name.clone(),
            label: name.clone(),
        }));

        Self { cards, options }
    }
}

/// Selector contents before any fetch succeeds.
pub fn placeholder_options() -> Vec<SelectOption> {
    vec![SelectOption {
        value: String::new(),
        label: SELECT_PLACEHOLDER.to_string(),
    }]
}

pub fn render_card(card: &CardView, on_delete: &Callback<ParticipantRow>) -> Html {
    let participants = if card.participants.is_empty() {
        html! { <p class="activity-card__no-participants">{ "No participants yet" }</p> }
    } else {
        html! {
            <ul class="activity-card__participants-list">
                { for card.participants.iter().map(|row| render_participant(row, on_delete)) }
            </ul>
        }
    };

    html! {
        <div class="activity-card">
            <h4 class="activity-card__title">{ card.name.clone() }</h4>
            <p class="activity-card__text">{ card.description.clone() }</p>
            <p class="activity-card__text"><strong>{ "Schedule:" }</strong>{ " " }{ card.schedule.clone() }</p>
            <p class="activity-card__text"><strong>{ "Availability:" }</strong>{ " " }{ card.availability() }</p>
            <div class="activity-card__participants">
                <p class="activity-card__participants-title"><strong>{ "Current Participants:" }</strong></p>
                { participants }
            </div>
        </div>
    }
}

fn render_participant(row: &ParticipantRow, on_delete: &Callback<ParticipantRow>) -> Html {
    let onclick = {
        let on_delete = on_delete.clone();
        let row = row.clone();
        Callback::from(move |_: MouseEvent| on_delete.emit(row.clone()))
    };

    html! {
        <li class="activity-card__participant">
            <span class="activity-card__email">{ row.email.clone() }</span>
            <button
                type="button"
                class="activity-card__delete"
                title={row.delete_label()}
                aria-label={row.delete_label()}
                data-activity={row.activity.clone()}
                data-email={row.email.clone()}
                {onclick}
            >
                { "✕" }
            </button>
        </li>
    }
}
