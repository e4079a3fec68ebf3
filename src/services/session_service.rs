use base64::engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD};
use base64::Engine;

use crate::models::{TokenClaims, UserRole};

/// Decodifica el payload del JWT (segundo segmento, base64url) sin
/// verificar la firma: la validación real la hace el backend, aquí
/// solo se lee el claim de rol.
pub fn decode_claims(token: &str) -> Option<TokenClaims> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .or_else(|_| URL_SAFE.decode(payload))
        .ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Rol extraído del token, o None si el token es inválido o no trae
/// el claim. Un fallo de decodificación es definitivo para la sesión.
pub fn resolve_role(token: &str) -> Option<UserRole> {
    decode_claims(token)?
        .role
        .as_deref()
        .map(UserRole::from_claim)
}

pub fn redirect_to_login() {
    if let Some(win) = web_sys::window() {
        let _ = win.location().set_href("/login");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_token(payload: &str) -> String {
        let encoded = URL_SAFE_NO_PAD.encode(payload.as_bytes());
        format!("header.{}.signature", encoded)
    }

    #[test]
    fn profesor_token_resolves_privileged_role() {
        let token = make_token(r#"{"sub":"ana","role":"profesor"}"#);
        assert_eq!(resolve_role(&token), Some(UserRole::Profesor));
    }

    #[test]
    fn estudiante_token_resolves_standard_role() {
        let token = make_token(r#"{"sub":"luis","role":"estudiante"}"#);
        assert_eq!(resolve_role(&token), Some(UserRole::Estudiante));
    }

    #[test]
    fn padded_payload_is_accepted() {
        let encoded = URL_SAFE.encode(br#"{"role":"profesor"}"#);
        let token = format!("h.{}.s", encoded);
        assert_eq!(resolve_role(&token), Some(UserRole::Profesor));
    }

    #[test]
    fn token_without_role_claim_is_invalid() {
        let token = make_token(r#"{"sub":"ana"}"#);
        assert!(decode_claims(&token).is_some());
        assert_eq!(resolve_role(&token), None);
    }

    #[test]
    fn malformed_tokens_are_invalid() {
        // Sin segmentos
        assert_eq!(resolve_role("no-es-un-jwt"), None);
        // Segmento que no es base64
        assert_eq!(resolve_role("a.!!!.c"), None);
        // Base64 válido pero no es JSON
        let token = format!("a.{}.c", URL_SAFE_NO_PAD.encode(b"hola"));
        assert_eq!(resolve_role(&token), None);
        // Vacío
        assert_eq!(resolve_role(""), None);
    }
}
