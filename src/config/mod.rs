use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use tracing::info;

pub mod profile;
pub mod settings;

pub use profile::{DEFAULT_PORT, PrinterTarget, Profile, socket_address};
pub use settings::{AuthSettings, ConnectionSettings, Settings, SnmpVersion};

pub const DEFAULT_PROFILE_PATH: &str = "./profiles/printers.yaml";

/// Главная конфигурация приложения
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Профиль: список принтеров
    #[serde(flatten)]
    pub profile: Profile,
    /// Базовые настройки
    #[serde(default)]
    pub settings: Settings,
}

impl AppConfig {
    /// Загружает конфигурацию из YAML файла
    pub fn load(profile_path: impl AsRef<Path>) -> Result<Self> {
        let path = profile_path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Не удалось прочитать файл: {}", path.display()))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: AppConfig =
            serde_yml::from_str(content).context("Не удалось распарсить YAML")?;

        if config.profile.printers.is_empty() {
            anyhow::bail!("Профиль '{}' пустой", config.profile.name);
        }

        Ok(config)
    }

    /// Путь к профилю из PRINTER_PROFILE или по умолчанию
    pub fn profile_path() -> String {
        env::var("PRINTER_PROFILE").unwrap_or_else(|_| DEFAULT_PROFILE_PATH.to_string())
    }

    /// Применяет переменные окружения SNMP_TARGET, SNMP_TIMEOUT, SNMP_COMMUNITY
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(|key| env::var(key).ok())
    }

    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(target) = lookup("SNMP_TARGET") {
            self.profile.printers = vec![PrinterTarget::parse(&target)?];
        }
        if let Some(timeout) = lookup("SNMP_TIMEOUT") {
            self.settings.connection.timeout = timeout
                .parse()
                .with_context(|| format!("Невалидный SNMP_TIMEOUT: {}", timeout))?;
        }
        if let Some(community) = lookup("SNMP_COMMUNITY") {
            self.settings.auth.community = community;
        }
        Ok(self)
    }

    pub fn debug_config(&self) {
        info!(
            profile = %self.profile.name,
            printers = self.profile.printers.len(),
            timeout = self.settings.connection.timeout,
            retries = self.settings.connection.retries,
            version = ?self.settings.auth.version,
            poll_interval = self.profile.poll_interval,
            "конфигурация загружена"
        );
    }
}
