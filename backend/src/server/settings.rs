//! Service settings loaded via OrthoConfig.
//!
//! Values come from `ENGINEERS_*` environment variables, CLI flags, or an
//! optional configuration file, in OrthoConfig's usual precedence.

use std::io;
use std::net::{SocketAddr, ToSocketAddrs};

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::inbound::http::cors::{CorsPolicy, CorsPolicyError, DEFAULT_ALLOWED_ORIGIN};
use crate::outbound::persistence::{DEFAULT_MAX_SIZE, PoolConfig};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Invalid settings detected after loading.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The host/port pair does not resolve to a socket address.
    #[error("bind address {host}:{port} cannot be resolved: {source}")]
    BindAddress {
        /// Configured host.
        host: String,
        /// Configured port.
        port: u16,
        /// Resolver failure.
        #[source]
        source: io::Error,
    },
    /// The host/port pair resolved to nothing.
    #[error("bind address {host}:{port} resolved to no addresses")]
    NoBindAddress {
        /// Configured host.
        host: String,
        /// Configured port.
        port: u16,
    },
    /// The configured CORS origin is not usable.
    #[error(transparent)]
    AllowedOrigin(#[from] CorsPolicyError),
}

/// Runtime configuration for the engineers service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ENGINEERS")]
pub struct AppSettings {
    /// Host the HTTP listener binds to.
    pub host: Option<String>,
    /// Port the HTTP listener binds to.
    pub port: Option<u16>,
    /// PostgreSQL connection URL. Without one the service keeps engineers in
    /// memory.
    pub database_url: Option<String>,
    /// Maximum number of pooled database connections.
    pub pool_max_size: Option<u32>,
    /// Browser origin allowed to call `/api/**`.
    pub allowed_origin: Option<String>,
    /// Apply embedded migrations before serving.
    #[ortho_config(default = true)]
    pub run_migrations: bool,
}

impl AppSettings {
    /// Configured host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Configured port, falling back to 8080.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Resolve the listener address.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when the host does not resolve.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let host = self.host();
        let port = self.port();
        let mut addrs =
            (host, port)
                .to_socket_addrs()
                .map_err(|source| SettingsError::BindAddress {
                    host: host.to_owned(),
                    port,
                    source,
                })?;
        addrs.next().ok_or_else(|| SettingsError::NoBindAddress {
            host: host.to_owned(),
            port,
        })
    }

    /// Validated cross-origin policy for the `/api` scope.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::AllowedOrigin`] when the origin is not an
    /// absolute http(s) URL.
    pub fn cors_policy(&self) -> Result<CorsPolicy, SettingsError> {
        let origin = self
            .allowed_origin
            .as_deref()
            .unwrap_or(DEFAULT_ALLOWED_ORIGIN);
        Ok(CorsPolicy::new(origin)?)
    }

    /// Pool configuration when a database URL is set.
    pub fn pool_config(&self) -> Option<PoolConfig> {
        self.database_url.as_deref().map(|url| {
            PoolConfig::new(url).with_max_size(self.pool_max_size.unwrap_or(DEFAULT_MAX_SIZE))
        })
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing and derived values.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const KEYS: [&str; 6] = [
        "ENGINEERS_HOST",
        "ENGINEERS_PORT",
        "ENGINEERS_DATABASE_URL",
        "ENGINEERS_POOL_MAX_SIZE",
        "ENGINEERS_ALLOWED_ORIGIN",
        "ENGINEERS_RUN_MIGRATIONS",
    ];

    fn load_from_empty_args() -> AppSettings {
        AppSettings::load_from_iter([OsString::from("engineers")]).expect("config should load")
    }

    fn cleared_env() -> Vec<(&'static str, Option<String>)> {
        KEYS.iter().map(|key| (*key, None)).collect()
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let _guard = lock_env(cleared_env());

        let settings = load_from_empty_args();

        assert_eq!(settings.host(), "0.0.0.0");
        assert_eq!(settings.port(), 8080);
        assert!(settings.run_migrations);
        assert!(settings.pool_config().is_none());
        assert_eq!(
            settings.cors_policy().expect("default origin").allowed_origin(),
            "http://localhost:8078"
        );
        assert_eq!(
            settings.bind_addr().expect("bind address"),
            "0.0.0.0:8080".parse::<SocketAddr>().expect("socket address")
        );
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let mut env = cleared_env();
        env.extend([
            ("ENGINEERS_HOST", Some("127.0.0.1".to_owned())),
            ("ENGINEERS_PORT", Some("9090".to_owned())),
            (
                "ENGINEERS_DATABASE_URL",
                Some("postgres://localhost/engineers".to_owned()),
            ),
            ("ENGINEERS_POOL_MAX_SIZE", Some("4".to_owned())),
            (
                "ENGINEERS_ALLOWED_ORIGIN",
                Some("https://app.example.com".to_owned()),
            ),
            ("ENGINEERS_RUN_MIGRATIONS", Some("false".to_owned())),
        ]);
        let _guard = lock_env(env);

        let settings = load_from_empty_args();

        assert_eq!(
            settings.bind_addr().expect("bind address"),
            "127.0.0.1:9090".parse::<SocketAddr>().expect("socket address")
        );
        assert!(!settings.run_migrations);
        let pool = settings.pool_config().expect("pool config");
        assert_eq!(pool.database_url(), "postgres://localhost/engineers");
        assert_eq!(pool.max_size(), 4);
        assert_eq!(
            settings.cors_policy().expect("origin").allowed_origin(),
            "https://app.example.com"
        );
    }

    #[rstest]
    fn unusable_origin_is_rejected() {
        let mut env = cleared_env();
        env.push(("ENGINEERS_ALLOWED_ORIGIN", Some("not a url".to_owned())));
        let _guard = lock_env(env);

        let settings = load_from_empty_args();

        assert!(matches!(
            settings.cors_policy(),
            Err(SettingsError::AllowedOrigin(_))
        ));
    }
}
