use yew::prelude::*;

use crate::models::UserRole;
use crate::services::{redirect_to_login, resolve_role};
use crate::utils::{clear_token, load_token};

pub struct UseSessionHandle {
    /// None mientras el guardián no ha resuelto (o ya redirigió).
    pub role: UseStateHandle<Option<UserRole>>,
    pub logout: Callback<()>,
}

/// Guardián de sesión: lee el token guardado una sola vez al montar la
/// vista. Sin token, o con token indescifrable o sin rol, se limpia la
/// credencial y se redirige a login antes de tocar el API.
#[hook]
pub fn use_session() -> UseSessionHandle {
    let role = use_state(|| None::<UserRole>);

    {
        let role = role.clone();
        use_effect_with((), move |_| {
            match load_token() {
                None => {
                    log::info!("🔒 Sin token guardado, redirigiendo a login");
                    redirect_to_login();
                }
                Some(token) => match resolve_role(&token) {
                    Some(resolved) => {
                        log::info!("✅ Sesión válida, rol: {:?}", resolved);
                        role.set(Some(resolved));
                    }
                    None => {
                        log::error!("❌ Token inválido o sin rol, limpiando credenciales");
                        clear_token();
                        redirect_to_login();
                    }
                },
            }
            || ()
        });
    }

    let logout = Callback::from(move |_| {
        clear_token();
        log::info!("👋 Logout");
        redirect_to_login();
    });

    UseSessionHandle { role, logout }
}
