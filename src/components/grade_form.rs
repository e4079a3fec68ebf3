use web_sys::{window, HtmlInputElement};
use yew::prelude::*;

use crate::models::NewGrade;
use crate::services::create_grade;
use crate::utils::load_token;

#[derive(Properties, PartialEq)]
pub struct GradeFormProps {
    /// Se emite tras un alta exitosa para que el padre recargue la lista.
    pub on_saved: Callback<()>,
}

/// Formulario de alta de calificaciones, visible solo para el
/// profesor. Sin validación propia: los límites (0-500, paso 0.1) los
/// impone el input numérico del navegador y los revalida el backend.
#[function_component(GradeForm)]
pub fn grade_form(props: &GradeFormProps) -> Html {
    let student_ref = use_node_ref();
    let subject_ref = use_node_ref();
    let score_ref = use_node_ref();

    let on_submit = {
        let student_ref = student_ref.clone();
        let subject_ref = subject_ref.clone();
        let score_ref = score_ref.clone();
        let on_saved = props.on_saved.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let (Some(student_input), Some(subject_input), Some(score_input)) = (
                student_ref.cast::<HtmlInputElement>(),
                subject_ref.cast::<HtmlInputElement>(),
                score_ref.cast::<HtmlInputElement>(),
            ) {
                let score = match score_input.value().parse::<f64>() {
                    Ok(score) => score,
                    Err(_) => return,
                };

                let new_grade = NewGrade {
                    student_name: student_input.value(),
                    subject: subject_input.value(),
                    score,
                };

                let token = match load_token() {
                    Some(token) => token,
                    None => return,
                };

                let on_saved = on_saved.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match create_grade(&new_grade, &token).await {
                        Ok(()) => {
                            log::info!(
                                "✅ Calificación guardada: {} / {}",
                                new_grade.student_name,
                                new_grade.subject
                            );
                            // Se limpian los tres campos y se recarga la lista
                            student_input.set_value("");
                            subject_input.set_value("");
                            score_input.set_value("");
                            on_saved.emit(());
                        }
                        Err(msg) => {
                            // El borrador queda intacto para reintentar
                            log::error!("❌ Error guardando calificación: {}", msg);
                            if let Some(win) = window() {
                                let _ = win.alert_with_message(&msg);
                            }
                        }
                    }
                });
            }
        })
    };

    html! {
        <div class="grade-form-card">
            <h2>{"Añadir/Actualizar Calificación"}</h2>
            <form class="grade-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="student-name">{"Nombre del Estudiante"}</label>
                    <input
                        type="text"
                        id="student-name"
                        name="student_name"
                        ref={student_ref}
                        required=true
                    />
                </div>

                <div class="form-group">
                    <label for="subject">{"Materia"}</label>
                    <input
                        type="text"
                        id="subject"
                        name="subject"
                        ref={subject_ref}
                        required=true
                    />
                </div>

                <div class="form-group">
                    <label for="score">{"Nota (0-500)"}</label>
                    <input
                        type="number"
                        id="score"
                        name="score"
                        min="0"
                        max="500"
                        step="0.1"
                        ref={score_ref}
                        required=true
                    />
                </div>

                <button type="submit" class="btn-save">
                    {"Guardar Calificación"}
                </button>
            </form>
        </div>
    }
}
