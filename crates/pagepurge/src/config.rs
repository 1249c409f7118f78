use std::{env, path::PathBuf, str::FromStr, time::Duration};

use pagepurge_core::purge::PurgerConfig;
use url::Url;

use crate::{error::ConfigError, store::ConnectOptions};

/// Connection settings for the Redis server holding the page cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedisSettings {
    pub hostname: String,
    pub port: u16,
    /// Unix socket path; takes precedence over hostname and port.
    pub unix_socket: Option<PathBuf>,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Logical database index.
    pub database: u16,
    pub connect: ConnectOptions,
}

impl Default for RedisSettings {
    fn default() -> Self {
        Self {
            hostname: "127.0.0.1".to_string(),
            port: 6379,
            unix_socket: None,
            username: None,
            password: None,
            database: 0,
            connect: ConnectOptions::default(),
        }
    }
}

impl RedisSettings {
    /// Builds the URL handed to the Redis client.
    ///
    /// Credentials are only included when a password is configured.
    pub fn connection_url(&self) -> Result<Url, ConfigError> {
        match &self.unix_socket {
            Some(path) => self.unix_url(path),
            None => self.tcp_url(),
        }
    }

    fn tcp_url(&self) -> Result<Url, ConfigError> {
        let host = if self.hostname.contains(':') && !self.hostname.starts_with('[') {
            format!("[{}]", self.hostname)
        } else {
            self.hostname.clone()
        };

        let mut url = Url::parse(&format!("redis://{}:{}/{}", host, self.port, self.database))
            .map_err(|source| ConfigError::InvalidUrl {
                name: "REDIS_HOSTNAME",
                source,
            })?;

        if let Some(password) = &self.password {
            let username = self.username.as_deref().unwrap_or_default();
            url.set_username(username)
                .and_then(|()| url.set_password(Some(password)))
                .map_err(|()| ConfigError::InvalidValue {
                    name: "REDIS_USERNAME",
                    value: username.to_string(),
                })?;
        }

        Ok(url)
    }

    fn unix_url(&self, path: &std::path::Path) -> Result<Url, ConfigError> {
        if !path.is_absolute() {
            return Err(ConfigError::RelativeSocketPath {
                name: "REDIS_UNIX_SOCKET",
                value: path.display().to_string(),
            });
        }

        let mut url = Url::parse(&format!("redis+unix://{}", path.display())).map_err(
            |source| ConfigError::InvalidUrl {
                name: "REDIS_UNIX_SOCKET",
                source,
            },
        )?;

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("db", &self.database.to_string());
            if let Some(password) = &self.password {
                if let Some(username) = &self.username {
                    query.append_pair("user", username);
                }
                query.append_pair("pass", password);
            }
        }

        Ok(url)
    }

    /// Describes the endpoint without credentials, for logging.
    pub fn endpoint(&self) -> String {
        match &self.unix_socket {
            Some(path) => format!("unix:{} db={}", path.display(), self.database),
            None => format!("{}:{} db={}", self.hostname, self.port, self.database),
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub redis: RedisSettings,
    /// Key prefix of cached pages (default: "nginx-cache:")
    pub prefix: String,
    /// Home URL of the site (default: "http://localhost/")
    pub home_url: Url,
    /// Custom URL suffixes purged by the `custom` command.
    pub purge_urls: Vec<String>,
    /// Suffix appended to every purged URL, e.g. "--*" for device variants.
    pub purge_url_suffix: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `REDIS_HOSTNAME` - Redis host (default: "127.0.0.1")
    /// - `REDIS_PORT` - Redis port (default: 6379)
    /// - `REDIS_UNIX_SOCKET` - Unix socket path, overrides host and port
    /// - `REDIS_USERNAME` - ACL username
    /// - `REDIS_PASSWORD` - Password
    /// - `REDIS_DATABASE` - Logical database index (default: 0)
    /// - `REDIS_CONNECT_TIMEOUT_MS` - Timeout per connection attempt (default: 2000)
    /// - `REDIS_CONNECT_RETRIES` - Connection attempts after the first (default: 2)
    /// - `REDIS_PREFIX` - Cache key prefix (default: "nginx-cache:")
    /// - `HOME_URL` - Site home URL (default: "http://localhost/")
    /// - `PURGE_URLS` - Newline-separated custom URL suffixes
    /// - `PURGE_URL_SUFFIX` - Suffix appended to purged URLs
    ///
    /// Empty variables count as unset. An empty `REDIS_PREFIX` therefore
    /// falls back to "nginx-cache:"; keys without any prefix cannot be
    /// configured.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let redis = RedisSettings {
            hostname: var("REDIS_HOSTNAME").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_var(var("REDIS_PORT"), "REDIS_PORT", 6379)?,
            unix_socket: var("REDIS_UNIX_SOCKET").map(PathBuf::from),
            username: var("REDIS_USERNAME"),
            password: var("REDIS_PASSWORD"),
            database: parse_var(var("REDIS_DATABASE"), "REDIS_DATABASE", 0)?,
            connect: ConnectOptions {
                timeout: Duration::from_millis(parse_var(
                    var("REDIS_CONNECT_TIMEOUT_MS"),
                    "REDIS_CONNECT_TIMEOUT_MS",
                    2000,
                )?),
                retries: parse_var(var("REDIS_CONNECT_RETRIES"), "REDIS_CONNECT_RETRIES", 2)?,
            },
        };

        let home_url = var("HOME_URL").unwrap_or_else(|| "http://localhost/".to_string());
        let home_url = Url::parse(home_url.trim()).map_err(|source| ConfigError::InvalidUrl {
            name: "HOME_URL",
            source,
        })?;
        if home_url.host_str().is_none() {
            return Err(ConfigError::InvalidValue {
                name: "HOME_URL",
                value: home_url.to_string(),
            });
        }

        Ok(Self {
            redis,
            prefix: var("REDIS_PREFIX")
                .map(|prefix| prefix.trim().to_string())
                .unwrap_or_else(|| "nginx-cache:".to_string()),
            home_url,
            purge_urls: var("PURGE_URLS")
                .map(|urls| parse_purge_urls(&urls))
                .unwrap_or_default(),
            purge_url_suffix: var("PURGE_URL_SUFFIX"),
        })
    }

    /// Configuration handed to the purger.
    pub fn purger_config(&self) -> PurgerConfig {
        PurgerConfig::new(&self.prefix, self.home_url.clone())
            .with_purge_urls(self.purge_urls.clone())
    }
}

fn parse_var<T: FromStr>(
    value: Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name, value }),
        None => Ok(default),
    }
}

/// Splits a newline-separated list (LF or CRLF), dropping blank lines.
fn parse_purge_urls(urls: &str) -> Vec<String> {
    urls.lines()
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .collect()
}
