use tracing::debug;

pub mod scalar_collector;
pub mod table_collector;
pub mod types;

pub use scalar_collector::ScalarCollector;
pub use table_collector::TableCollector;
pub use types::{RawRow, RawScalarMap, RawTableRows, RawTables, TableGroup};

use crate::error::Result;
use crate::snmp::SnmpTransport;

/// Оркестратор запросов к принтеру
pub struct SnmpCollector;

impl SnmpCollector {
    /// Собирает все четыре табличные группы.
    /// Запросы идут последовательно, первая ошибка прерывает сбор.
    pub async fn collect_tables<T: SnmpTransport>(transport: &mut T) -> Result<RawTables> {
        let mut tables = RawTables::default();

        for group in TableGroup::ALL {
            let rows = TableCollector::fetch_table(transport, group.oids()).await?;
            debug!(group = group.name(), rows = rows.len(), "таблица собрана");
            tables.set(group, rows);
        }

        Ok(tables)
    }
}
