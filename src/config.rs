use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_url_development: String,
    pub api_url_production: String,
    pub environment: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url_development: "http://localhost:8000/api".to_string(),
            api_url_production: "https://api.sistema-calificaciones.app/api".to_string(),
            environment: "development".to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            api_url_development: option_env!("API_BASE_URL_DEVELOPMENT")
                .unwrap_or("http://localhost:8000/api")
                .to_string(),
            api_url_production: option_env!("API_BASE_URL_PRODUCTION")
                .unwrap_or("https://api.sistema-calificaciones.app/api")
                .to_string(),
            environment: option_env!("ENVIRONMENT").unwrap_or("development").to_string(),
        }
    }

    /// Obtiene la URL base del API según el entorno actual
    pub fn api_base_url(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.api_url_production,
            _ => &self.api_url_development,
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_environment_uses_development_url() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url(), "http://localhost:8000/api");
    }

    #[test]
    fn production_environment_switches_url() {
        let config = AppConfig {
            environment: "production".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.api_base_url(), "https://api.sistema-calificaciones.app/api");
    }
}
