use tracing::debug;

use super::types::RawScalarMap;
use crate::error::{PrinterError, Result};
use crate::oids::{OidTable, oids};
use crate::snmp::SnmpTransport;

/// Сбор скалярных SNMP значений
pub struct ScalarCollector;

impl ScalarCollector {
    /// Один пакетный GET по всем OID таблицы
    pub async fn fetch_scalars<T: SnmpTransport>(
        transport: &mut T,
        table: OidTable,
    ) -> Result<RawScalarMap> {
        let oids = oids(table);
        let bindings = transport.get(&oids).await?;

        if bindings.is_empty() {
            return Err(PrinterError::Protocol("no data".to_string()));
        }

        let raw: RawScalarMap = bindings.into_iter().collect();
        debug!(count = raw.len(), "получены скалярные значения");
        Ok(raw)
    }
}
