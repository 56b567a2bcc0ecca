// Compile-time settings. Trunk serves the app next to the API, so the base
// is empty and every request goes to the same origin.
pub const API_BASE: &str = "";

pub const MESSAGE_HIDE_MS: u32 = 5_000;

pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";
pub const NO_PARTICIPANTS: &str = "No registered participants yet.";
pub const LOADING: &str = "Loading activities...";
pub const LOAD_FAILED: &str = "Failed to load activities. Please try again later.";

pub const SIGNUP_REJECTED: &str = "An error occurred";
pub const SIGNUP_FAILED: &str = "Failed to sign up. Please try again.";

pub const UNREGISTER_OK: &str = "Successfully unregistered from activity";
pub const UNREGISTER_REJECTED: &str = "An error occurred while unregistering";
pub const UNREGISTER_FAILED: &str = "Failed to unregister. Please try again.";
