use snmp2::{AsyncSession, Oid};
use tracing::{debug, warn};

use super::oid::{components, is_under, parse_oid};
use super::session::{NO_SUCH_NAME, Request, Session};
use crate::config::ConnectionSettings;
use crate::error::{PrinterError, Result};

/// Клиент SNMPv1: обход через GETNEXT, отсутствующий OID = noSuchName
pub struct SnmpClientV1 {
    pub(crate) session: Session,
    max_rows: usize,
}

impl SnmpClientV1 {
    pub async fn new(
        target: &str,
        community: &[u8],
        connection: &ConnectionSettings,
    ) -> Result<Self> {
        let session = AsyncSession::new_v1(target, community, 2)
            .await
            .map_err(|e| PrinterError::Connectivity(format!("{target}: {e}")))?;

        Ok(Self {
            session: Session::new(session, target, connection),
            max_rows: connection.max_rows,
        })
    }

    /// Пакетный GET. На noSuchName OID с error-index выбрасывается,
    /// остальные запрашиваются повторно.
    pub async fn get(&mut self, oids: &[&str]) -> Result<Vec<(String, String)>> {
        let mut pending = oids
            .iter()
            .map(|oid| parse_oid(oid))
            .collect::<Result<Vec<Oid<'static>>>>()?;

        while !pending.is_empty() {
            let batch: Vec<&Oid<'static>> = pending.iter().collect();
            let resp = self.session.request(&Request::GetMany(&batch)).await?;

            if resp.error_status == NO_SUCH_NAME {
                let index = usize::try_from(resp.error_index)
                    .ok()
                    .filter(|i| (1..=pending.len()).contains(i));
                let Some(index) = index else {
                    return Err(PrinterError::Protocol(format!(
                        "{}, {}",
                        resp.error_status, resp.error_index
                    )));
                };
                let missing = pending.remove(index - 1);
                debug!(oid = %missing, "агент не поддерживает OID");
                continue;
            }
            resp.check()?;

            return Ok(resp
                .bindings
                .into_iter()
                .filter_map(|(oid, binding)| binding.into_value().map(|v| (oid, v)))
                .collect());
        }

        Ok(Vec::new())
    }

    pub async fn walk(&mut self, prefix: &str) -> Result<Vec<(String, String)>> {
        let mut results = Vec::new();
        let mut current = prefix.to_string();

        while results.len() < self.max_rows {
            let current_oid = parse_oid(&current)?;
            let resp = self
                .session
                .request(&Request::GetNext(&current_oid))
                .await?;

            // конец MIB в SNMPv1
            if resp.error_status == NO_SUCH_NAME {
                return Ok(results);
            }
            resp.check()?;

            let Some((oid, binding)) = resp.bindings.into_iter().next() else {
                return Ok(results);
            };
            if !is_under(&oid, prefix) {
                return Ok(results);
            }
            if components(&oid)? <= components(&current)? {
                warn!(oid = %oid, "агент не продвигается по дереву, обход остановлен");
                return Ok(results);
            }

            current = oid.clone();
            if let Some(value) = binding.into_value() {
                results.push((oid, value));
            }
        }

        warn!(prefix, limit = self.max_rows, "обход ограничен по числу строк");
        Ok(results)
    }
}
