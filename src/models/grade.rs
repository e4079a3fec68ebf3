use serde::{Deserialize, Serialize};

/// Calificación tal como la devuelve el API. La lista en memoria se
/// reemplaza completa con cada respuesta; aquí no se mezcla ni se
/// deduplica nada.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Grade {
    pub id: i64,
    pub student_name: String,
    pub subject: String,
    pub score: f64,
}

impl Grade {
    /// Nota con un decimal, como la muestra la tabla.
    pub fn score_display(&self) -> String {
        format!("{:.1}", self.score)
    }
}

/// Borrador del formulario: los tres campos que se envían al crear
/// una calificación.
#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct NewGrade {
    pub student_name: String,
    pub subject: String,
    pub score: f64,
}

/// Cuerpo de error que puede devolver el backend en respuestas no-2xx.
#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_renders_with_one_decimal() {
        let grade = Grade {
            id: 1,
            student_name: "Ana".to_string(),
            subject: "Math".to_string(),
            score: 450.5,
        };
        assert_eq!(grade.score_display(), "450.5");

        let entera = Grade { score: 88.0, ..grade };
        assert_eq!(entera.score_display(), "88.0");
    }

    #[test]
    fn grade_ignores_extra_response_fields() {
        // El backend incluye professor_id; el dashboard no lo usa.
        let raw = r#"{"id":3,"student_name":"Ana","subject":"Math","score":450.5,"professor_id":7}"#;
        let grade: Grade = serde_json::from_str(raw).unwrap();
        assert_eq!(grade.id, 3);
        assert_eq!(grade.score, 450.5);
    }

    #[test]
    fn new_grade_serializes_score_as_number() {
        let draft = NewGrade {
            student_name: "Ana".to_string(),
            subject: "Math".to_string(),
            score: "450.5".parse().unwrap(),
        };
        let body = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"student_name": "Ana", "subject": "Math", "score": 450.5})
        );
    }
}
