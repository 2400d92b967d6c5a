use std::collections::HashMap;

use tracing::debug;

use super::types::{RawRow, RawTableRows};
use crate::error::{PrinterError, Result};
use crate::oids::OidTable;
use crate::snmp::{SnmpTransport, is_under, row_index};

/// Сбор табличных SNMP данных
pub struct TableCollector;

impl TableCollector {
    /// Обходит каждую колонку таблицы и собирает строки по индексу
    pub async fn fetch_table<T: SnmpTransport>(
        transport: &mut T,
        table: OidTable,
    ) -> Result<RawTableRows> {
        let mut columns = Vec::with_capacity(table.len());

        for (attr, prefix) in table {
            let values = transport.walk(prefix).await?;
            debug!(attr, prefix, count = values.len(), "колонка получена");
            columns.push((*prefix, values));
        }

        let rows = Self::group_rows(columns);
        if rows.is_empty() {
            return Err(PrinterError::Protocol("no data".to_string()));
        }

        Ok(rows)
    }

    /// Группирует значения колонок в строки по последнему компоненту OID.
    /// Значения вне префикса своей колонки отбрасываются.
    pub fn group_rows(columns: Vec<(&str, Vec<(String, String)>)>) -> RawTableRows {
        let mut rows: RawTableRows = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for (prefix, values) in columns {
            for (oid, value) in values {
                if !is_under(&oid, prefix) {
                    continue;
                }

                let index = row_index(&oid).to_string();
                let position = *positions.entry(index).or_insert_with(|| {
                    rows.push(RawRow::new());
                    rows.len() - 1
                });
                rows[position].insert(oid, value);
            }
        }

        rows
    }
}
