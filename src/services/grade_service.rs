use gloo_net::http::Request;

use crate::config::CONFIG;
use crate::models::{ApiErrorBody, Grade, NewGrade, UserRole};

/// Errores del listado. Un 401 obliga a cerrar la sesión; cualquier
/// otro fallo se muestra como mensaje en la tabla.
#[derive(Clone, PartialEq, Debug)]
pub enum FetchError {
    Unauthorized,
    Request(String),
}

/// El profesor ve todas las calificaciones que creó; el resto de
/// roles solo las propias.
pub fn grades_endpoint(role: UserRole, base_url: &str) -> String {
    match role {
        UserRole::Profesor => format!("{}/grades/", base_url),
        UserRole::Estudiante => format!("{}/my-grades/", base_url),
    }
}

pub async fn fetch_grades(role: UserRole, token: &str) -> Result<Vec<Grade>, FetchError> {
    let url = grades_endpoint(role, CONFIG.api_base_url());

    let response = Request::get(&url)
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| FetchError::Request(format!("Network error: {}", e)))?;

    if response.status() == 401 {
        return Err(FetchError::Unauthorized);
    }

    if !response.ok() {
        return Err(FetchError::Request(format!(
            "HTTP {}: {}",
            response.status(),
            response.status_text()
        )));
    }

    response
        .json::<Vec<Grade>>()
        .await
        .map_err(|e| FetchError::Request(format!("Parse error: {}", e)))
}

/// Crea (o actualiza, el backend decide) una calificación. En caso de
/// error devuelve el `detail` del servidor si viene en el cuerpo.
pub async fn create_grade(new_grade: &NewGrade, token: &str) -> Result<(), String> {
    let url = format!("{}/grades/", CONFIG.api_base_url());

    let response = Request::post(&url)
        .header("Authorization", &format!("Bearer {}", token))
        .json(new_grade)
        .map_err(|e| format!("Serialization error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let detail = response
            .json::<ApiErrorBody>()
            .await
            .ok()
            .and_then(|body| body.detail);
        return Err(detail.unwrap_or_else(|| "Error al añadir la calificación.".to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profesor_uses_full_listing_endpoint() {
        let url = grades_endpoint(UserRole::Profesor, "http://localhost:8000/api");
        assert_eq!(url, "http://localhost:8000/api/grades/");
    }

    #[test]
    fn other_roles_use_own_grades_endpoint() {
        let url = grades_endpoint(UserRole::Estudiante, "http://localhost:8000/api");
        assert_eq!(url, "http://localhost:8000/api/my-grades/");
    }

    #[test]
    fn error_body_detail_is_optional() {
        let with_detail: ApiErrorBody =
            serde_json::from_str(r#"{"detail":"Score out of range"}"#).unwrap();
        assert_eq!(with_detail.detail.as_deref(), Some("Score out of range"));

        let without: ApiErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(without.detail, None);
    }
}
