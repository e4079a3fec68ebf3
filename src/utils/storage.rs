use web_sys::{window, Storage};

/// Clave única de localStorage: el token de acceso tal cual lo emitió
/// el backend. La escribe la vista de login; aquí solo se lee y se
/// borra.
pub const STORAGE_KEY_ACCESS_TOKEN: &str = "accessToken";

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

pub fn load_token() -> Option<String> {
    let storage = get_local_storage()?;
    storage.get_item(STORAGE_KEY_ACCESS_TOKEN).ok()?
}

pub fn clear_token() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(STORAGE_KEY_ACCESS_TOKEN);
    }
}
