//! Configuration for the search shell.
//!
//! Figment merges `config.toml`, an optional `config.<env>.toml` overlay
//! picked by `RUST_ENV`, then `APP_*` environment variables. The only keys
//! dsearch itself reads are the three data-file paths; `get` stays generic
//! so the shell can keep ad-hoc keys out of the core.

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use std::env;
use std::path::{Path, PathBuf};

/// Resolved locations of the three record collections.
#[derive(Debug, Clone)]
pub struct DataPaths {
    pub users: PathBuf,
    pub organisations: PathBuf,
    pub tickets: PathBuf,
}

pub struct Config {
    figment: Figment,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());

        let mut figment = Figment::new().merge(Toml::file("config.toml"));
        match env_name.as_str() {
            "dev" | "development" => figment = figment.merge(Toml::file("config.dev.toml")),
            "prod" | "production" => figment = figment.merge(Toml::file("config.prod.toml")),
            "test" | "testing" => figment = figment.merge(Toml::file("config.test.toml")),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("APP_"));

        Ok(Self { figment })
    }

    pub fn get<T>(&self, key: &str) -> anyhow::Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| anyhow::anyhow!("Failed to get '{}': {}", key, e))
    }

    /// Data-file paths from `data.users_file` / `data.organisations_file` /
    /// `data.tickets_file`, defaulting to the `data/` directory, resolved
    /// against `base`.
    pub fn data_paths(&self, base: &Path) -> DataPaths {
        let users: String = self
            .get("data.users_file")
            .unwrap_or_else(|_| "data/users.json".to_string());
        let organisations: String = self
            .get("data.organisations_file")
            .unwrap_or_else(|_| "data/organisations.json".to_string());
        let tickets: String = self
            .get("data.tickets_file")
            .unwrap_or_else(|_| "data/tickets.json".to_string());
        DataPaths {
            users: resolve_with_base(base, users),
            organisations: resolve_with_base(base, organisations),
            tickets: resolve_with_base(base, tickets),
        }
    }
}

/// Expand a leading `~` and any `${VAR}`/`$VAR` references in a path string.
/// No canonicalization is attempted.
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let with_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&with_env);
    PathBuf::from(expanded.as_ref())
}

/// Resolve a possibly relative path against `base` after expansion;
/// absolute paths pass through untouched.
pub fn resolve_with_base<S: AsRef<str>>(base: &Path, p: S) -> PathBuf {
    let p = expand_path(p);
    if p.is_absolute() {
        p
    } else {
        base.join(p)
    }
}
