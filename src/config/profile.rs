use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PORT: u16 = 161;

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn parse_port(port: &str, target: &str) -> Result<u16> {
    port.parse::<u16>()
        .with_context(|| format!("Невалидный порт в '{}'", target))
}

/// `host:port`, IPv6 адрес берётся в скобки
pub fn socket_address(host: &str, port: u16) -> String {
    if host.contains(':') {
        format!("[{}]:{}", host, port)
    } else {
        format!("{}:{}", host, port)
    }
}

/// Опрашиваемый принтер
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrinterTarget {
    #[serde(default)]
    pub name: Option<String>,
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Ожидаемая модель, только для диагностики
    #[serde(default)]
    pub model: Option<String>,
}

impl PrinterTarget {
    /// Разбирает `host`, `host:port`, IPv6 адрес или `[addr]:port`
    pub fn parse(target: &str) -> Result<Self> {
        let target = target.trim();

        let (host, port) = if let Some(rest) = target.strip_prefix('[') {
            let (host, tail) = rest
                .split_once(']')
                .with_context(|| format!("Незакрытая скобка в '{}'", target))?;
            match tail {
                "" => (host, DEFAULT_PORT),
                _ => {
                    let port = tail
                        .strip_prefix(':')
                        .with_context(|| format!("Мусор после адреса в '{}'", target))?;
                    (host, parse_port(port, target)?)
                }
            }
        } else if target.matches(':').count() > 1 {
            // IPv6 без скобок: порт не указывается
            (target, DEFAULT_PORT)
        } else {
            match target.split_once(':') {
                Some((host, port)) => (host, parse_port(port, target)?),
                None => (target, DEFAULT_PORT),
            }
        };

        if host.is_empty() {
            anyhow::bail!("Пустой хост в '{}'", target);
        }

        Ok(Self {
            name: None,
            host: host.to_string(),
            port,
            model: None,
        })
    }

    pub fn address(&self) -> String {
        socket_address(&self.host, self.port)
    }

    /// Имя для логов и вывода
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.host)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String, // Название профиля, например "office"
    /// Интервал опроса в секундах, 0 - один проход
    #[serde(default)]
    pub poll_interval: u64,
    pub printers: Vec<PrinterTarget>,
}
