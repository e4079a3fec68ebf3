use yew::prelude::*;

use crate::models::{Grade, UserRole};
use crate::services::{fetch_grades, redirect_to_login, FetchError};
use crate::utils::{clear_token, load_token};

pub struct UseGradesHandle {
    pub grades: UseStateHandle<Vec<Grade>>,
    pub loading: UseStateHandle<bool>,
    pub error: UseStateHandle<Option<String>>,
    pub reload: Callback<()>,
}

/// Carga el listado y vuelca el resultado en los handles. Si hay
/// recargas solapadas (envíos rápidos), gana la última respuesta en
/// resolver; no hay cancelación ni deduplicación.
async fn load_grades(
    role: UserRole,
    grades: UseStateHandle<Vec<Grade>>,
    loading: UseStateHandle<bool>,
    error: UseStateHandle<Option<String>>,
) {
    let token = match load_token() {
        Some(token) => token,
        None => {
            redirect_to_login();
            return;
        }
    };

    loading.set(true);
    error.set(None);

    match fetch_grades(role, &token).await {
        Ok(fetched) => {
            log::info!("📋 Calificaciones obtenidas: {}", fetched.len());
            grades.set(fetched);
        }
        Err(FetchError::Unauthorized) => {
            log::error!("🔒 Sesión rechazada por el API (401), limpiando credenciales");
            clear_token();
            loading.set(false);
            redirect_to_login();
            return;
        }
        Err(FetchError::Request(e)) => {
            log::error!("❌ Error cargando calificaciones: {}", e);
            error.set(Some("No se pudieron cargar las calificaciones.".to_string()));
        }
    }

    loading.set(false);
}

/// Cargador de calificaciones: dispara al conocerse el rol y expone
/// `reload` para refrescar tras un envío exitoso.
#[hook]
pub fn use_grades(role: Option<UserRole>) -> UseGradesHandle {
    let grades = use_state(|| Vec::<Grade>::new());
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);

    {
        let grades = grades.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with(role, move |role_opt| {
            if let Some(role) = *role_opt {
                wasm_bindgen_futures::spawn_local(load_grades(role, grades, loading, error));
            }
            || ()
        });
    }

    let reload = {
        let grades = grades.clone();
        let loading = loading.clone();
        let error = error.clone();
        Callback::from(move |_| {
            if let Some(role) = role {
                wasm_bindgen_futures::spawn_local(load_grades(
                    role,
                    grades.clone(),
                    loading.clone(),
                    error.clone(),
                ));
            }
        })
    };

    UseGradesHandle {
        grades,
        loading,
        error,
        reload,
    }
}
