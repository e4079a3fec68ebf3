use serde::{Deserialize, Serialize};

/// Claims que el backend incluye en el payload del JWT.
/// Solo interesan `sub` y `role`; el resto se ignora.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct TokenClaims {
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// Rol del usuario autenticado. "profesor" es el único rol
/// privilegiado; cualquier otro valor solo consulta sus propias
/// calificaciones.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum UserRole {
    Profesor,
    Estudiante,
}

impl UserRole {
    pub fn from_claim(raw: &str) -> Self {
        match raw {
            "profesor" => UserRole::Profesor,
            _ => UserRole::Estudiante,
        }
    }

    pub fn is_profesor(&self) -> bool {
        matches!(self, UserRole::Profesor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profesor_claim_is_privileged() {
        assert_eq!(UserRole::from_claim("profesor"), UserRole::Profesor);
        assert!(UserRole::from_claim("profesor").is_profesor());
    }

    #[test]
    fn any_other_claim_is_not_privileged() {
        assert_eq!(UserRole::from_claim("estudiante"), UserRole::Estudiante);
        assert_eq!(UserRole::from_claim("admin"), UserRole::Estudiante);
        assert!(!UserRole::from_claim("estudiante").is_profesor());
    }

    #[test]
    fn claims_tolerate_missing_fields() {
        let claims: TokenClaims = serde_json::from_str("{}").unwrap();
        assert_eq!(claims.sub, None);
        assert_eq!(claims.role, None);
    }
}
