use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::domain::UserInfo;

/// Local storage key written by the login flow.
pub const USER_INFO_KEY: &str = "userInfo";

pub fn parse_stored<T: DeserializeOwned>(key: &str, json: &str) -> Option<T> {
    match serde_json::from_str(json) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(key = %key, error = %e, "Ignoring malformed stored value");
            None
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn load_from_storage<T: DeserializeOwned>(key: &str) -> Option<T> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let json = storage.get_item(key).ok()??;
    parse_stored(key, &json)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_from_storage<T: DeserializeOwned>(_key: &str) -> Option<T> {
    None
}

/// The persisted session, if someone is logged in.
pub fn load_user_info() -> Option<UserInfo> {
    let user: Option<UserInfo> = load_from_storage(USER_INFO_KEY);
    debug!(
        logged_in = user.is_some(),
        admin = user.as_ref().is_some_and(UserInfo::is_admin),
        "Restored session"
    );
    user
}
