use web_sys::window;
use yew::prelude::*;

use crate::models::Grade;

#[derive(Properties, PartialEq, Clone)]
pub struct GradeTableProps {
    pub grades: Vec<Grade>,
    pub loading: bool,
    pub error: Option<String>,
    /// El profesor ve una columna extra de acciones.
    pub show_actions: bool,
}

/// Estados del cuerpo de la tabla, mutuamente excluyentes, evaluados
/// en este orden: cargando → error → vacío → con datos.
#[derive(Clone, PartialEq, Debug)]
pub enum TableState {
    Loading,
    Error(String),
    Empty,
    Populated,
}

pub fn table_state(loading: bool, error: Option<&str>, rows: usize) -> TableState {
    if loading {
        TableState::Loading
    } else if let Some(msg) = error {
        TableState::Error(msg.to_string())
    } else if rows == 0 {
        TableState::Empty
    } else {
        TableState::Populated
    }
}

#[function_component(GradeTable)]
pub fn grade_table(props: &GradeTableProps) -> Html {
    let columns = if props.show_actions { "4" } else { "3" };

    let body = match table_state(props.loading, props.error.as_deref(), props.grades.len()) {
        TableState::Loading => html! {
            <tr>
                <td colspan={columns} class="table-loading">{"Cargando..."}</td>
            </tr>
        },
        TableState::Error(msg) => html! {
            <tr>
                <td colspan={columns} class="table-error">{msg}</td>
            </tr>
        },
        TableState::Empty => html! {
            <tr>
                <td colspan={columns} class="table-empty">
                    {"No hay calificaciones para mostrar."}
                </td>
            </tr>
        },
        TableState::Populated => props
            .grades
            .iter()
            .map(|grade| grade_row(grade, props.show_actions))
            .collect::<Html>(),
    };

    html! {
        <table class="grades-table">
            <thead>
                <tr>
                    <th>{"Estudiante"}</th>
                    <th>{"Materia"}</th>
                    <th class="score-cell">{"Nota"}</th>
                    if props.show_actions {
                        <th class="actions-cell">{"Acciones"}</th>
                    }
                </tr>
            </thead>
            <tbody>
                { body }
            </tbody>
        </table>
    }
}

fn grade_row(grade: &Grade, show_actions: bool) -> Html {
    // Las acciones todavía no están implementadas en el backend
    let on_edit = Callback::from(|_: MouseEvent| {
        if let Some(win) = window() {
            let _ = win.alert_with_message("Funcionalidad Editar Próximamente");
        }
    });
    let on_delete = Callback::from(|_: MouseEvent| {
        if let Some(win) = window() {
            let _ = win.alert_with_message("Funcionalidad Eliminar Próximamente");
        }
    });

    html! {
        <tr key={grade.id.to_string()}>
            <td>{ &grade.student_name }</td>
            <td>{ &grade.subject }</td>
            <td class="score-cell">{ grade.score_display() }</td>
            if show_actions {
                <td class="actions-cell">
                    <button class="btn-action" title="Editar" onclick={on_edit}>{"✏️"}</button>
                    <button class="btn-action" title="Eliminar" onclick={on_delete}>{"🗑️"}</button>
                </td>
            }
        </tr>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_takes_precedence_over_everything() {
        let state = table_state(true, Some("falló"), 5);
        assert_eq!(state, TableState::Loading);
    }

    #[test]
    fn error_takes_precedence_over_rows() {
        let state = table_state(false, Some("falló"), 5);
        assert_eq!(state, TableState::Error("falló".to_string()));
    }

    #[test]
    fn empty_list_shows_empty_row_not_error() {
        assert_eq!(table_state(false, None, 0), TableState::Empty);
    }

    #[test]
    fn rows_render_when_nothing_else_applies() {
        assert_eq!(table_state(false, None, 3), TableState::Populated);
    }
}
