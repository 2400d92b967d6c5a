use std::time::Duration;

use snmp2::{AsyncSession, Oid, Value};
use tokio::time::timeout;
use tracing::{debug, warn};

use super::value::{Binding, render};
use crate::config::ConnectionSettings;
use crate::error::{PrinterError, Result};

/// noSuchName в ответе SNMPv1
pub const NO_SUCH_NAME: i64 = 2;

pub enum Request<'a> {
    /// Один GET на все OID
    GetMany(&'a [&'a Oid<'static>]),
    GetNext(&'a Oid<'static>),
    GetBulk(&'a Oid<'static>, u32),
}

/// Ответ агента, скопированный из буфера сессии
#[derive(Debug)]
pub struct Response {
    pub error_status: i64,
    pub error_index: i64,
    pub bindings: Vec<(String, Binding)>,
}

impl Response {
    fn new<'p, I>(error_status: i64, error_index: i64, varbinds: I) -> Self
    where
        I: IntoIterator<Item = (Oid<'p>, Value<'p>)>,
    {
        let bindings = varbinds
            .into_iter()
            .map(|(oid, value)| (oid.to_string(), render(&value)))
            .collect();

        Self {
            error_status,
            error_index,
            bindings,
        }
    }

    /// Ошибка протокола, если агент вернул ненулевой error-status
    pub fn check(&self) -> Result<()> {
        if self.error_status != 0 {
            return Err(PrinterError::Protocol(format!(
                "{}, {}",
                self.error_status, self.error_index
            )));
        }
        Ok(())
    }
}

/// UDP сессия с таймаутом и повторами на каждый запрос
pub struct Session {
    inner: AsyncSession,
    target: String,
    timeout: Duration,
    retries: u32,
}

impl Session {
    pub fn new(inner: AsyncSession, target: &str, connection: &ConnectionSettings) -> Self {
        Self {
            inner,
            target: target.to_string(),
            timeout: Duration::from_secs(connection.timeout),
            retries: connection.retries,
        }
    }

    async fn send(
        &mut self,
        request: &Request<'_>,
    ) -> std::result::Result<Response, snmp2::Error> {
        let pdu = match request {
            Request::GetMany(oids) => self.inner.get_many(oids).await?,
            Request::GetNext(oid) => self.inner.getnext(oid).await?,
            Request::GetBulk(oid, max_repetitions) => {
                self.inner.getbulk(&[*oid], 0, *max_repetitions).await?
            }
        };

        Ok(Response::new(
            pdu.error_status as i64,
            pdu.error_index as i64,
            pdu.varbinds,
        ))
    }

    pub async fn request(&mut self, request: &Request<'_>) -> Result<Response> {
        for attempt in 0..=self.retries {
            let outcome = timeout(self.timeout, self.send(request)).await;
            match outcome {
                Ok(Ok(response)) => return Ok(response),
                // запоздавший ответ на прошлую попытку
                Ok(Err(snmp2::Error::RequestIdMismatch)) => {
                    debug!(host = %self.target, attempt, "SNMP ответ на устаревший запрос");
                }
                Ok(Err(e)) => {
                    return Err(PrinterError::Connectivity(format!("{}: {}", self.target, e)));
                }
                Err(_) => {
                    debug!(host = %self.target, attempt, "SNMP запрос: таймаут");
                }
            }
        }

        warn!(host = %self.target, retries = self.retries, "SNMP запрос: повторы исчерпаны");
        Err(PrinterError::Connectivity(format!(
            "{}: timeout after {} attempts",
            self.target,
            self.retries + 1
        )))
    }
}
