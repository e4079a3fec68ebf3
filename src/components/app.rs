use yew::prelude::*;

use super::{GradeForm, GradeTable};
use crate::hooks::{use_grades, use_session};

/// Vista principal del dashboard: guardián de sesión, formulario de
/// alta (solo profesor) y tabla de calificaciones.
#[function_component(App)]
pub fn app() -> Html {
    let session = use_session();
    let grades = use_grades(*session.role);

    let on_logout = {
        let logout = session.logout.clone();
        Callback::from(move |_: MouseEvent| logout.emit(()))
    };

    let on_saved = {
        let reload = grades.reload.clone();
        Callback::from(move |_| reload.emit(()))
    };

    // Mientras el guardián resuelve (o ya redirigió) no se pinta nada.
    let role = match *session.role {
        Some(role) => role,
        None => return html! {},
    };

    let list_title = if role.is_profesor() {
        "Listado de Calificaciones Creadas"
    } else {
        "Mis Calificaciones"
    };

    html! {
        <div class="dashboard">
            <header class="app-header">
                <h1>{"Sistema de Calificaciones"}</h1>
                <button class="btn-logout" onclick={on_logout}>
                    {"Cerrar Sesión"}
                </button>
            </header>

            <main class="dashboard-content">
                if role.is_profesor() {
                    <GradeForm on_saved={on_saved} />
                }

                <section class="grades-section">
                    <h2>{list_title}</h2>
                    <GradeTable
                        grades={(*grades.grades).clone()}
                        loading={*grades.loading}
                        error={(*grades.error).clone()}
                        show_actions={role.is_profesor()}
                    />
                </section>
            </main>
        </div>
    }
}
