use gloo::console::{debug, error};
use gloo::timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::api::{ApiClient, Mutation};
use crate::config::AppConfig;
use crate::feedback::{AfterMutation, StatusMessage};
use crate::generation::FetchGeneration;
use crate::view::{
    placeholder_options, render_card, CardView, ParticipantRow, Projection, SelectOption,
    LOADING_TEXT, LOAD_FAILED_TEXT,
};

#[derive(Debug, Clone, PartialEq)]
enum ListState {
    Loading,
    Ready { generation: u64, cards: Vec<CardView> },
    Failed,
}

/// Everything a fetch needs to land its result. Cloned into each handler.
#[derive(Clone)]
struct Loader {
    api: ApiClient,
    generation: FetchGeneration,
    list: UseStateHandle<ListState>,
    options: UseStateHandle<Vec<SelectOption>>,
}

impl Loader {
    fn reload(&self) {
        let Loader { api, generation, list, options } = self.clone();
        let ticket = generation.begin();

        spawn_local(async move {
            let result = api.fetch_activities().await;

            if !generation.is_current(ticket) {
                debug!(format!("Dropping stale activities response #{ticket}"));
                return;
            }

            match result {
                Ok(map) => {
                    let Projection { cards, options: opts } = Projection::from_map(&map);
                    options.set(opts);
                    list.set(ListState::Ready { generation: ticket, cards });
                }
                Err(e) => {
                    error!("Error fetching activities:", e.to_string());
                    list.set(ListState::Failed);
                }
            }
        });
    }
}

fn confirm(prompt: &str) -> bool {
    window()
        .and_then(|w| w.confirm_with_message(prompt).ok())
        .unwrap_or(false)
}

#[function_component(App)]
pub fn app() -> Html {
    let config = use_state(AppConfig::load);
    let generation = use_state(FetchGeneration::default);

    let list = use_state(|| ListState::Loading);
    let options = use_state(placeholder_options);

    let email = use_state(String::new);
    let activity = use_state(String::new);
    let submitting = use_state(|| false);
    let activity_select = use_node_ref();

    let status = use_state(|| None::<StatusMessage>);
    let status_visible = use_state(|| false);

    let loader = Loader {
        api: ApiClient::new(config.api_base.clone()),
        generation: (*generation).clone(),
        list: list.clone(),
        options: options.clone(),
    };

    // Every call restarts the 5s countdown; earlier timers still fire.
    let show_status = {
        let status = status.clone();
        let status_visible = status_visible.clone();
        let hide_ms = config.status_hide_ms;
        Callback::from(move |msg: StatusMessage| {
            status.set(Some(msg));
            status_visible.set(true);
            let status_visible = status_visible.clone();
            let _ = Timeout::new(hide_ms, move || status_visible.set(false)).forget();
        })
    };

    {
        let loader = loader.clone();
        use_effect_with((), move |_| {
            loader.reload();
            || ()
        });
    }

    let on_submit = {
        let loader = loader.clone();
        let show_status = show_status.clone();
        let email = email.clone();
        let activity = activity.clone();
        let submitting = submitting.clone();
        let activity_select = activity_select.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let loader = loader.clone();
            let show_status = show_status.clone();
            let email = email.clone();
            let activity = activity.clone();
            let submitting = submitting.clone();
            let activity_select = activity_select.clone();
            let (email_value, activity_value) = ((*email).clone(), (*activity).clone());

            submitting.set(true);
            spawn_local(async move {
                let result = loader.api.signup(&activity_value, &email_value).await;
                if let Err(err) = &result {
                    if err.is_transport() {
                        error!("Error signing up:", err.to_string());
                    }
                }

                let plan = AfterMutation::plan(Mutation::Signup, &result);
                show_status.emit(plan.status);
                if plan.reset_form {
                    email.set(String::new());
                    activity.set(String::new());
                    // `selected` stops driving an option once the user has picked one.
                    if let Some(sel) = activity_select.cast::<HtmlSelectElement>() {
                        sel.set_value("");
                    }
                }
                if plan.reload {
                    loader.reload();
                }
                submitting.set(false);
            });
        })
    };

    let on_delete = {
        let loader = loader.clone();
        let show_status = show_status.clone();
        Callback::from(move |row: ParticipantRow| {
            let Some(row) = row.confirm_unregister(confirm) else {
                return;
            };

            let loader = loader.clone();
            let show_status = show_status.clone();
            spawn_local(async move {
                let result = loader.api.unregister(&row.activity, &row.email).await;
                if let Err(err) = &result {
                    if err.is_transport() {
                        error!("Error unregistering:", err.to_string());
                    }
                }

                let plan = AfterMutation::plan(Mutation::Unregister, &result);
                show_status.emit(plan.status);
                if plan.reload {
                    loader.reload();
                }
            });
        })
    };

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };

    let on_activity_change = {
        let activity = activity.clone();
        Callback::from(move |e: Event| {
            if let Some(sel) = e.target_dyn_into::<HtmlSelectElement>() {
                activity.set(sel.value());
            }
        })
    };

    // Keyed by fetch generation so each accepted fetch replaces the subtree.
    let list_body = match &*list {
        ListState::Loading => html! { <p key="loading">{ LOADING_TEXT }</p> },
        ListState::Failed => html! { <p key="failed">{ LOAD_FAILED_TEXT }</p> },
        ListState::Ready { generation, cards } => html! {
            <div key={format!("fetch-{generation}")} class="activities-list__cards">
                { for cards.iter().map(|card| render_card(card, &on_delete)) }
            </div>
        },
    };

    let (status_class, status_text) = match &*status {
        Some(msg) => (msg.class(*status_visible), msg.text.clone()),
        None => ("message message--hidden".to_string(), String::new()),
    };

    html! {
        <main class="container">
            <section class="activities">
                <h3>{ "Available Activities" }</h3>
                <div id="activities-list">{ list_body }</div>
            </section>

            <section class="signup">
                <h3>{ "Sign Up for an Activity" }</h3>
                <form id="signup-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label>{ "Student Email:" }</label>
                        <input
                            type="text"
                            id="email"
                            autocomplete="email"
                            placeholder="your-email@mergington.edu"
                            value={(*email).clone()}
                            oninput={on_email_input}
                        />
                    </div>
                    <div class="form-group">
                        <label>{ "Select Activity:" }</label>
                        <select id="activity" ref={activity_select} onchange={on_activity_change}>
                            { for options.iter().map(|opt| html! {
                                <option value={opt.value.clone()} selected={opt.value == *activity}>
                                    { opt.label.clone() }
                                </option>
                            }) }
                        </select>
                    </div>
                    <button type="submit" disabled={*submitting}>{ "Sign Up" }</button>
                </form>
                <div id="message" class={status_class}>{ status_text }</div>
            </section>
        </main>
    }
}
