use snmp2::{AsyncSession, Oid};
use tracing::{debug, warn};

use super::oid::{components, is_under, parse_oid};
use super::session::{Request, Session};
use super::value::Binding;
use crate::config::ConnectionSettings;
use crate::error::{PrinterError, Result};

pub struct SnmpClientV2c {
    pub(crate) session: Session,
    max_repetitions: u32,
    max_rows: usize,
}

impl SnmpClientV2c {
    pub async fn new(
        target: &str,
        community: &[u8],
        connection: &ConnectionSettings,
    ) -> Result<Self> {
        let session = AsyncSession::new_v2c(target, community, 2)
            .await
            .map_err(|e| PrinterError::Connectivity(format!("{target}: {e}")))?;

        Ok(Self {
            session: Session::new(session, target, connection),
            max_repetitions: connection.max_repetitions,
            max_rows: connection.max_rows,
        })
    }

    /// Пакетный GET. noSuchObject/noSuchInstance отбрасываются.
    pub async fn get(&mut self, oids: &[&str]) -> Result<Vec<(String, String)>> {
        let parsed = oids
            .iter()
            .map(|oid| parse_oid(oid))
            .collect::<Result<Vec<Oid<'static>>>>()?;
        let batch: Vec<&Oid<'static>> = parsed.iter().collect();

        let resp = self.session.request(&Request::GetMany(&batch)).await?;
        resp.check()?;

        let mut results = Vec::with_capacity(resp.bindings.len());
        for (oid, binding) in resp.bindings {
            match binding.into_value() {
                Some(value) => results.push((oid, value)),
                None => debug!(oid = %oid, "агент не поддерживает OID"),
            }
        }

        Ok(results)
    }

    /// Обход поддерева через GETBULK
    pub async fn walk(&mut self, prefix: &str) -> Result<Vec<(String, String)>> {
        let mut results: Vec<(String, String)> = Vec::new();
        let mut current = prefix.to_string();

        'walk: loop {
            let current_oid = parse_oid(&current)?;
            let resp = self
                .session
                .request(&Request::GetBulk(&current_oid, self.max_repetitions))
                .await?;
            resp.check()?;

            if resp.bindings.is_empty() {
                break;
            }

            for (oid, binding) in resp.bindings {
                if binding == Binding::EndOfMibView || !is_under(&oid, prefix) {
                    break 'walk;
                }
                if components(&oid)? <= components(&current)? {
                    warn!(oid = %oid, "агент не продвигается по дереву, обход остановлен");
                    break 'walk;
                }
                if results.len() >= self.max_rows {
                    warn!(prefix, limit = self.max_rows, "обход ограничен по числу строк");
                    break 'walk;
                }

                current = oid.clone();
                if let Some(value) = binding.into_value() {
                    results.push((oid, value));
                }
            }
        }

        Ok(results)
    }
}
