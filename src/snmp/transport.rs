use async_trait::async_trait;

use crate::config::Settings;
use crate::error::Result;

/// Транспорт SNMP, через который опрашивается принтер.
///
/// Результат любого запроса трёхзначный: привязки, `PrinterError::Protocol`
/// (ошибка агента) или `PrinterError::Connectivity` (транспорт).
#[async_trait]
pub trait SnmpTransport: Send {
    /// Создаёт сессию до `target` (`host:port`)
    async fn connect(target: &str, settings: &Settings) -> Result<Self>
    where
        Self: Sized;

    /// Пакетный GET: пары (OID, значение) для поддерживаемых OID
    async fn get(&mut self, oids: &[&str]) -> Result<Vec<(String, String)>>;

    /// Обход: только OID строго внутри поддерева `prefix`
    async fn walk(&mut self, prefix: &str) -> Result<Vec<(String, String)>>;
}
