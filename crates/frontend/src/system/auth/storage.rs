use contracts::system::auth::UserInfo;
use web_sys::window;

const TOKEN_KEY: &str = "acp_token";
const USER_KEY: &str = "acp_user";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Persist the session under the two fixed keys, overwriting any prior one.
pub fn save_session(token: &str, user: &UserInfo) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
        if let Ok(json) = serde_json::to_string(user) {
            let _ = storage.set_item(USER_KEY, &json);
        }
    }
}

/// Remove both session keys.
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}

pub fn get_token() -> Option<String> {
    get_local_storage()?.get_item(TOKEN_KEY).ok()?
}

/// Stored profile, or `None` when absent or malformed.
pub fn get_user() -> Option<UserInfo> {
    let raw = get_local_storage()?.get_item(USER_KEY).ok()??;
    serde_json::from_str(&raw).ok()
}
