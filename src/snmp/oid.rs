use snmp2::Oid;

use crate::error::{PrinterError, Result};

/// Числовые компоненты OID
pub fn components(s: &str) -> Result<Vec<u64>> {
    s.trim()
        .split('.')
        .filter(|p| !p.is_empty())
        .map(|p| p.parse::<u64>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|_| PrinterError::InvalidOid(s.to_string()))
}

pub fn parse_oid(s: &str) -> Result<Oid<'static>> {
    let parts = components(s)?;
    Oid::from(&parts).map_err(|e| PrinterError::InvalidOid(format!("{s}: {e:?}")))
}

/// Лежит ли OID строго внутри поддерева prefix
pub fn is_under(oid: &str, prefix: &str) -> bool {
    oid.strip_prefix(prefix)
        .is_some_and(|rest| rest.len() > 1 && rest.starts_with('.'))
}

/// Индекс строки: последний компонент OID
pub fn row_index(oid: &str) -> &str {
    oid.rsplit_once('.').map_or(oid, |(_, last)| last)
}
