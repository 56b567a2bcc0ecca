use std::rc::Rc;

use gloo::console::{error, log};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::api::{ApiClient, ApiError, Outcome};
use crate::config::{
    API_BASE, SIGNUP_FAILED, SIGNUP_REJECTED, UNREGISTER_FAILED, UNREGISTER_OK,
    UNREGISTER_REJECTED,
};
use crate::message::{use_flash, Flash, FlashArea, FlashHandle};
use crate::model::{ActivityCollection, ListState};
use crate::view::{render_list, render_options};

pub enum BoardAction {
    Loaded(ActivityCollection),
    LoadFailed,
    /// Local removal after the server confirmed an unregister.
    ParticipantRemoved { activity: String, email: String },
}

impl Reducible for ListState {
    type Action = BoardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            BoardAction::Loaded(activities) => Rc::new(ListState::Loaded(activities)),
            BoardAction::LoadFailed => Rc::new(ListState::Failed),
            BoardAction::ParticipantRemoved { activity, email } => {
                // A refresh may have landed first; removing from whatever is
                // current keeps a late response harmless.
                let ListState::Loaded(current) = &*self else {
                    return self;
                };
                let mut next = current.clone();
                if next.remove_participant(&activity, &email) {
                    Rc::new(ListState::Loaded(next))
                } else {
                    self
                }
            }
        }
    }
}

/// What the board does after the server answers a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUp {
    /// Clear the signup form, then refetch the list.
    ResetAndRefresh,
    /// Drop the participant from the local collection without refetching.
    RemoveLocal,
    Refresh,
    Nothing,
}

pub fn signup_feedback(result: Result<Outcome, ApiError>) -> (Flash, FollowUp) {
    match result {
        Ok(Outcome::Accepted(message)) => (
            Flash::success(message.unwrap_or_default()),
            FollowUp::ResetAndRefresh,
        ),
        Ok(Outcome::Rejected(detail)) => (
            Flash::error(detail.unwrap_or_else(|| SIGNUP_REJECTED.to_string())),
            FollowUp::Nothing,
        ),
        Err(_) => (Flash::error(SIGNUP_FAILED), FollowUp::Nothing),
    }
}

pub fn unregister_feedback(result: Result<Outcome, ApiError>) -> (Flash, FollowUp) {
    match result {
        Ok(Outcome::Accepted(_)) => (Flash::success(UNREGISTER_OK), FollowUp::RemoveLocal),
        Ok(Outcome::Rejected(detail)) => (
            Flash::error(detail.unwrap_or_else(|| UNREGISTER_REJECTED.to_string())),
            FollowUp::Refresh,
        ),
        Err(_) => (Flash::error(UNREGISTER_FAILED), FollowUp::Refresh),
    }
}

/// An unregister is only sent for a participant the board is still showing.
pub fn is_listed(state: &ListState, activity: &str, email: &str) -> bool {
    state
        .activities()
        .is_some_and(|c| c.contains_participant(activity, email))
}

async fn refresh_activities(client: &ApiClient, list: &UseReducerHandle<ListState>) {
    match client.fetch_activities().await {
        Ok(activities) => {
            log!(format!("loaded {} activities", activities.len()));
            list.dispatch(BoardAction::Loaded(activities));
        }
        Err(e) => {
            error!(format!("Error fetching activities: {e}"));
            list.dispatch(BoardAction::LoadFailed);
        }
    }
}

/// Returns true once the server has accepted the unregister. Any failure
/// flashes an error and resynchronises the whole list.
async fn unregister_participant(
    client: &ApiClient,
    list: &UseReducerHandle<ListState>,
    flash: &FlashHandle,
    activity: &str,
    email: &str,
) -> bool {
    let result = client.unregister(activity, email).await;
    if let Err(e) = &result {
        error!(format!("Error unregistering: {e}"));
    }
    let (message, follow_up) = unregister_feedback(result);
    flash.show(message);
    if follow_up == FollowUp::Refresh {
        refresh_activities(client, list).await;
    }
    follow_up == FollowUp::RemoveLocal
}

#[function_component(ActivityBoard)]
pub fn activity_board() -> Html {
    let client = use_memo((), |_| ApiClient::new(API_BASE));
    let list = use_reducer(|| ListState::Loading);
    let email = use_state(String::new);
    let selected = use_state(String::new);
    let flash = use_flash();

    let refresh = {
        let client = Rc::clone(&client);
        let list = list.clone();
        Callback::from(move |()| {
            let client = Rc::clone(&client);
            let list = list.clone();
            spawn_local(async move {
                refresh_activities(&client, &list).await;
            });
        })
    };

    // Initial load
    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            || ()
        });
    }

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_activity = {
        let selected = selected.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            selected.set(select.value());
        })
    };

    let on_submit = {
        let client = Rc::clone(&client);
        let email = email.clone();
        let selected = selected.clone();
        let flash = flash.clone();
        let refresh = refresh.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let client = Rc::clone(&client);
            let address = (*email).clone();
            let activity = (*selected).clone();
            let email = email.clone();
            let selected = selected.clone();
            let flash = flash.clone();
            let refresh = refresh.clone();

            spawn_local(async move {
                let result = client.signup(&activity, &address).await;
                if let Err(e) = &result {
                    error!(format!("Error signing up: {e}"));
                }
                let (message, follow_up) = signup_feedback(result);
                flash.show(message);
                if follow_up == FollowUp::ResetAndRefresh {
                    email.set(String::new());
                    selected.set(String::new());
                    refresh.emit(());
                }
            });
        })
    };

    let on_unregister = {
        let client = Rc::clone(&client);
        let list = list.clone();
        let flash = flash.clone();
        Callback::from(move |(activity, email): (String, String)| {
            if !is_listed(&list, &activity, &email) {
                error!(format!("Could not find activity for participant: {email}"));
                return;
            }

            let client = Rc::clone(&client);
            let list = list.clone();
            let flash = flash.clone();
            spawn_local(async move {
                if unregister_participant(&client, &list, &flash, &activity, &email).await {
                    list.dispatch(BoardAction::ParticipantRemoved { activity, email });
                }
            });
        })
    };

    html! {
        <main>
            <section id="activities-container">
                <h3>{ "Available Activities" }</h3>
                <div id="activities-list">
                    { render_list(&list, &on_unregister) }
                </div>
            </section>

            <section id="signup-container">
                <h3>{ "Sign Up for an Activity" }</h3>
                <form id="signup-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="email">{ "Student Email:" }</label>
                        <input
                            type="email"
                            id="email"
                            required=true
                            placeholder="your-email@mergington.edu"
                            value={(*email).clone()}
                            oninput={on_email}
                        />
                    </div>
                    <div class="form-group">
                        <label for="activity">{ "Select Activity:" }</label>
                        <select id="activity" required=true onchange={on_activity}>
                            { render_options(&list, &selected) }
                        </select>
                    </div>
                    <button type="submit">{ "Sign Up" }</button>
                </form>
                <FlashArea flash={flash.current().cloned()} />
            </section>
        </main>
    }
}
