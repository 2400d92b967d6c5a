use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::collector::{ScalarCollector, SnmpCollector};
use crate::config::{PrinterTarget, Settings, socket_address};
use crate::decoder::{StatusDecoder, decode_identity};
use crate::error::Result;
use crate::oids::SCALAR_OIDS;
use crate::snapshot::StatusSnapshot;
use crate::snmp::{SnmpClient, SnmpTransport};

/// Один опрашиваемый принтер.
///
/// Владеет SNMP сессией (создаётся лениво) и моментом загрузки устройства.
/// `update` принимает `&mut self`, поэтому опросы одного экземпляра не
/// пересекаются.
pub struct PrinterSnmp<T = SnmpClient> {
    host: String,
    port: u16,
    settings: Settings,
    transport: Option<T>,
    decoder: StatusDecoder,
    model: Option<String>,
    serial: Option<String>,
}

impl PrinterSnmp<SnmpClient> {
    pub fn new(host: &str, port: u16, settings: Settings, model: Option<&str>) -> Self {
        Self::build(host, port, settings, None, model)
    }

    pub fn from_target(target: &PrinterTarget, settings: Settings) -> Self {
        Self::new(&target.host, target.port, settings, target.model.as_deref())
    }
}

impl<T: SnmpTransport> PrinterSnmp<T> {
    /// Принтер с готовым транспортом
    pub fn with_transport(host: &str, port: u16, settings: Settings, transport: T) -> Self {
        Self::build(host, port, settings, Some(transport), None)
    }

    fn build(
        host: &str,
        port: u16,
        settings: Settings,
        transport: Option<T>,
        model: Option<&str>,
    ) -> Self {
        if let Some(model) = model {
            debug!(host, model, "ожидаемая модель");
        }
        debug!(host, port, "используется хост");

        Self {
            host: host.to_string(),
            port,
            settings,
            transport,
            decoder: StatusDecoder::new(),
            model: None,
            serial: None,
        }
    }

    pub fn address(&self) -> String {
        socket_address(&self.host, self.port)
    }

    /// Модель из последнего успешного опроса
    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    pub fn serial(&self) -> Option<&str> {
        self.serial.as_deref()
    }

    pub fn boot_time(&self) -> Option<DateTime<Utc>> {
        self.decoder.boot_time()
    }

    /// Опрашивает принтер и возвращает свежий снимок
    pub async fn update(&mut self) -> Result<StatusSnapshot> {
        let mut transport = match self.transport.take() {
            Some(transport) => transport,
            None => T::connect(&self.address(), &self.settings).await?,
        };

        let result = self.poll(&mut transport).await;
        self.transport = Some(transport);
        result
    }

    async fn poll(&mut self, transport: &mut T) -> Result<StatusSnapshot> {
        let scalars = ScalarCollector::fetch_scalars(transport, SCALAR_OIDS).await?;
        debug!(host = %self.host, raw = ?scalars, "сырые скалярные данные");

        let identity = decode_identity(&scalars)?;
        self.model = Some(identity.model.clone());
        self.serial = Some(identity.serial.clone());

        let tables = SnmpCollector::collect_tables(transport).await?;
        debug!(host = %self.host, raw = ?tables, "сырые табличные данные");

        let snapshot = self.decoder.decode(identity, &scalars, &tables, Utc::now());
        info!(
            host = %self.host,
            model = %snapshot.model,
            status = %snapshot.status,
            "опрос завершён"
        );
        Ok(snapshot)
    }
}
