use serde::{Deserialize, Serialize};

/// Базовые настройки опроса
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Настройки подключения
    pub connection: ConnectionSettings,
    /// Настройки аутентификации
    pub auth: AuthSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionSettings {
    /// Таймаут одного SNMP запроса (секунды)
    pub timeout: u64,
    /// Количество повторов по таймауту
    pub retries: u32,
    /// max-repetitions для GETBULK
    pub max_repetitions: u32,
    /// Предел числа значений при обходе одной колонки
    pub max_rows: usize,
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self {
            timeout: 2,
            retries: 10,
            max_repetitions: 10,
            max_rows: 256,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnmpVersion {
    #[default]
    V1,
    V2c,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthSettings {
    pub version: SnmpVersion,
    /// Community string
    pub community: String,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            version: SnmpVersion::V1,
            community: "public".to_string(),
        }
    }
}
