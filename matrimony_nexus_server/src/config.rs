use std::{env, io::Write};

use log::*;
use mns_common::Secret;
use rand::{distributions::Alphanumeric, thread_rng, Rng};
use serde_json::json;
use tempfile::NamedTempFile;

use crate::errors::ServerError;

const DEFAULT_MNS_HOST: &str = "127.0.0.1";
const DEFAULT_MNS_PORT: u16 = 5000;
const DEFAULT_MNS_DATABASE_URL: &str = "sqlite://data/matrimony_nexus.db";
const DEFAULT_CORS_ORIGINS: [&str; 2] = ["http://localhost:5173", "https://matrimony-nexus.netlify.app"];

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub auth: AuthConfig,
    /// The origins the browser is allowed to call us from. Credentials are always supported.
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_MNS_HOST.to_string(),
            port: DEFAULT_MNS_PORT,
            database_url: DEFAULT_MNS_DATABASE_URL.to_string(),
            auth: AuthConfig::default(),
            cors_origins: DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ServerConfig {
    pub fn new(host: &str, port: u16) -> Self {
        Self { host: host.to_string(), port, ..Default::default() }
    }

    pub fn from_env_or_default() -> Self {
        let host = env::var("MNS_HOST").ok().unwrap_or_else(|| DEFAULT_MNS_HOST.into());
        let port = env::var("MNS_PORT")
            .map(|s| {
                s.parse::<u16>().unwrap_or_else(|e| {
                    error!(
                        "🪛️ {s} is not a valid port for MNS_PORT. {e} Using the default, {DEFAULT_MNS_PORT}, instead."
                    );
                    DEFAULT_MNS_PORT
                })
            })
            .ok()
            .unwrap_or(DEFAULT_MNS_PORT);
        let database_url = env::var("MNS_DATABASE_URL").ok().unwrap_or_else(|| {
            info!("🪛️ MNS_DATABASE_URL is not set. Using the default, {DEFAULT_MNS_DATABASE_URL}, instead.");
            DEFAULT_MNS_DATABASE_URL.to_string()
        });
        let auth = AuthConfig::try_from_env().unwrap_or_else(|e| {
            warn!(
                "🪛️ Could not load the authentication configuration from environment variables. {e}. Reverting to the \
                 default configuration."
            );
            AuthConfig::default()
        });
        let cors_origins = env::var("MNS_CORS_ORIGINS")
            .map(|s| s.split(',').map(|o| o.trim().to_string()).filter(|o| !o.is_empty()).collect::<Vec<String>>())
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| {
                info!("🪛️ MNS_CORS_ORIGINS is not set. Using the default frontend origins.");
                DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect()
            });
        Self { host, port, database_url, auth, cors_origins }
    }
}

//-------------------------------------------------  AuthConfig  ------------------------------------------------------
#[derive(Clone, Debug)]
pub struct AuthConfig {
    /// The shared secret used to sign and verify JWTs (HS256).
    pub jwt_secret: Secret<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        let mut tmpfile = NamedTempFile::new().ok().and_then(|f| f.keep().ok());
        warn!(
            "🚨️🚨️🚨️ The JWT signing secret has not been set. I'm using a random value for this session. DO NOT \
             operate on production like this since all issued tokens die with the process. 🚨️🚨️🚨️"
        );
        let secret: String = thread_rng().sample_iter(&Alphanumeric).take(64).map(char::from).collect();
        match &mut tmpfile {
            Some((f, p)) => {
                let key_data = json!({ "jwt_secret": secret }).to_string();
                match writeln!(f, "{key_data}") {
                    Ok(()) => warn!(
                        "🚨️🚨️🚨️ The JWT secret for this session was written to {}. If this is a production \
                         instance, you are doing it wrong! Set the MNS_JWT_SECRET environment variable instead. \
                         🚨️🚨️🚨️",
                        p.to_str().unwrap_or("???")
                    ),
                    Err(e) => warn!("🪛️ Could not write the JWT secret to the temporary file. {e}"),
                }
            },
            None => {
                warn!("🪛️ Could not create a temporary file to store the JWT secret.");
            },
        }
        Self { jwt_secret: Secret::new(secret) }
    }
}

impl AuthConfig {
    pub fn try_from_env() -> Result<Self, ServerError> {
        let jwt_secret = env::var("MNS_JWT_SECRET")
            .map(Secret::from)
            .map_err(|e| ServerError::ConfigurationError(format!("{e} [MNS_JWT_SECRET]")))?;
        if jwt_secret.is_empty() {
            return Err(ServerError::ConfigurationError("MNS_JWT_SECRET is empty.".to_string()));
        }
        Ok(Self { jwt_secret })
    }
}
