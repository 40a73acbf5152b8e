use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::features::regions::services::DataPaths;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub data: DataConfig,
    pub admin: AdminConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub request_timeout: Duration,
}

/// Where the administrative data documents live
#[derive(Debug, Clone)]
pub struct DataConfig {
    pub data_path: PathBuf,
    pub provinces_file: String,
    pub wards_file: String,
}

/// Placeholder protection for admin endpoints
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// Bearer token required by admin endpoints; `None` leaves them open
    pub token: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            data: DataConfig::from_env()?,
            admin: AdminConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

impl AppConfig {
    const DEFAULT_PORT: u16 = 8100;
    const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| Self::DEFAULT_PORT.to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_REQUEST_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "REQUEST_TIMEOUT_SECS must be a valid number".to_string())?;

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            request_timeout: Duration::from_secs(request_timeout_secs),
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DataConfig {
    pub fn from_env() -> Result<Self, String> {
        let data_path = PathBuf::from(env::var("DATA_PATH").unwrap_or_else(|_| "./data".to_string()));
        let provinces_file =
            env::var("PROVINCES_FILE").unwrap_or_else(|_| "province.json".to_string());
        let wards_file = env::var("WARDS_FILE").unwrap_or_else(|_| "ward.json".to_string());

        if provinces_file.trim().is_empty() || wards_file.trim().is_empty() {
            return Err("PROVINCES_FILE and WARDS_FILE must not be empty".to_string());
        }

        Ok(Self {
            data_path,
            provinces_file,
            wards_file,
        })
    }

    pub fn paths(&self) -> DataPaths {
        DataPaths {
            provinces: self.data_path.join(&self.provinces_file),
            wards: self.data_path.join(&self.wards_file),
        }
    }
}

impl AdminConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use the token if it is non-empty
        let token = env::var("ADMIN_TOKEN").ok().filter(|s| !s.is_empty());
        Ok(Self { token })
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title = env::var("SWAGGER_TITLE")
            .unwrap_or_else(|_| "Vietnam Administrative API".to_string());
        let version =
            env::var("SWAGGER_VERSION").unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string());
        let description = env::var("SWAGGER_DESCRIPTION").unwrap_or_else(|_| {
            "Vietnamese provinces and wards: lookup, search and address validation".to_string()
        });

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_paths_join_directory_and_files() {
        let config = DataConfig {
            data_path: PathBuf::from("/srv/data"),
            provinces_file: "province.json".to_string(),
            wards_file: "ward.json".to_string(),
        };

        let paths = config.paths();
        assert_eq!(paths.provinces, PathBuf::from("/srv/data/province.json"));
        assert_eq!(paths.wards, PathBuf::from("/srv/data/ward.json"));
    }

    #[test]
    fn test_swagger_credentials_require_both_parts() {
        let mut config = SwaggerConfig {
            username: Some("admin".to_string()),
            password: None,
            title: String::new(),
            version: String::new(),
            description: String::new(),
        };
        assert_eq!(config.credentials(), None);

        config.password = Some("secret".to_string());
        assert_eq!(config.credentials(), Some("admin:secret".to_string()));
    }

    #[test]
    fn test_server_address() {
        let config = AppConfig {
            host: "127.0.0.1".to_string(),
            port: 8100,
            cors_allowed_origins: vec!["*".to_string()],
            request_timeout: Duration::from_secs(15),
        };
        assert_eq!(config.server_address(), "127.0.0.1:8100");
    }
}
