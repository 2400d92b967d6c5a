use std::collections::HashMap;

use async_trait::async_trait;

use printer_snmp::config::Settings;
use printer_snmp::oids::{OidTable, SCALAR_OIDS, oid_of};
use printer_snmp::{PrinterError, Result, SnmpTransport};

/// Транспорт в памяти: отвечает заранее заданными значениями
#[derive(Debug, Default)]
pub struct FakeTransport {
    pub scalars: HashMap<String, String>,
    pub walks: HashMap<String, Vec<(String, String)>>,
    pub fail_get: Option<PrinterError>,
    pub fail_walk: Option<PrinterError>,
    pub get_calls: usize,
    pub walk_calls: usize,
}

impl FakeTransport {
    pub fn scalar(mut self, attr: &str, value: &str) -> Self {
        let oid = oid_of(SCALAR_OIDS, attr).expect("scalar attribute");
        self.scalars.insert(oid.to_string(), value.to_string());
        self
    }

    /// Значение колонки `attr` таблицы с индексом строки `index`
    pub fn cell(mut self, table: OidTable, attr: &str, index: &str, value: &str) -> Self {
        let prefix = oid_of(table, attr).expect("table attribute");
        self.walks
            .entry(prefix.to_string())
            .or_default()
            .push((format!("{prefix}.{index}"), value.to_string()));
        self
    }
}

#[async_trait]
impl SnmpTransport for FakeTransport {
    async fn connect(target: &str, _settings: &Settings) -> Result<Self> {
        Err(PrinterError::Connectivity(format!("{target}: no network in tests")))
    }

    async fn get(&mut self, oids: &[&str]) -> Result<Vec<(String, String)>> {
        self.get_calls += 1;
        if let Some(err) = &self.fail_get {
            return Err(err.clone());
        }
        Ok(oids
            .iter()
            .filter_map(|oid| self.scalars.get(*oid).map(|v| (oid.to_string(), v.clone())))
            .collect())
    }

    async fn walk(&mut self, prefix: &str) -> Result<Vec<(String, String)>> {
        self.walk_calls += 1;
        if let Some(err) = &self.fail_walk {
            return Err(err.clone());
        }
        Ok(self.walks.get(prefix).cloned().unwrap_or_default())
    }
}
