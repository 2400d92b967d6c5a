//! Декодер статуса: из сырых SNMP значений в [`StatusSnapshot`].
//!
//! Промахи по таблицам кодов для вторичных полей не прерывают опрос:
//! поле получает безопасное значение по умолчанию, промах пишется в лог.

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::codes::{
    self, CRITICAL_MASKS, CoverState, InputTrayType, OutputTrayType, PAPER_MASKS, PageDelivery,
    PrinterStatus, SubunitStatus, SupplyState, TONER_MASKS,
};
use crate::collector::{RawRow, RawScalarMap, RawTableRows, RawTables};
use crate::error::{PrinterError, Result};
use crate::oids::{
    ATTR_CAPACITY, ATTR_COLOR, ATTR_DEVICE_STATUS, ATTR_LEVEL, ATTR_MEDIA, ATTR_MODEL, ATTR_NAME,
    ATTR_PAGE_COUNT, ATTR_PAGE_DELIVERY, ATTR_PRINTER_DETECTED_ERROR_STATE, ATTR_PRINTER_STATUS,
    ATTR_SERIAL, ATTR_STATUS, ATTR_TYPE, ATTR_UPTIME, COVERS_OIDS, INPUT_TRAYS_OIDS,
    OUTPUT_TRAYS_OIDS, OidTable, SCALAR_OIDS, SUPPLIES_OIDS, attribute_of, oid_of,
};
use crate::snapshot::{Cover, InputTray, OutputTray, StatusSnapshot, Supply};
use crate::uptime::UptimeTracker;

/// Модель и серийный номер
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub model: String,
    pub serial: String,
}

fn scalar<'a>(scalars: &'a RawScalarMap, attr: &str) -> Option<&'a str> {
    let oid = oid_of(SCALAR_OIDS, attr)?;
    scalars.get(oid).map(String::as_str)
}

/// Без модели и серийного номера принтер считается неподдерживаемым
pub fn decode_identity(scalars: &RawScalarMap) -> Result<Identity> {
    let unsupported = |attr: &str| {
        PrinterError::UnsupportedModel(format!(
            "printer did not report its {attr}, this model is not supported"
        ))
    };

    let model = scalar(scalars, ATTR_MODEL).ok_or_else(|| unsupported(ATTR_MODEL))?;
    let serial = scalar(scalars, ATTR_SERIAL).ok_or_else(|| unsupported(ATTR_SERIAL))?;

    Ok(Identity {
        model: model.to_string(),
        serial: serial.to_string(),
    })
}

/// Общий статус по паре (hrDeviceStatus, hrPrinterStatus)
pub fn decode_status(device_status: Option<&str>, printer_status: Option<&str>) -> PrinterStatus {
    match (device_status, printer_status) {
        (Some(device), Some(printer)) => codes::composite_status(device, printer)
            .unwrap_or_else(|| {
                warn!(device, printer, "неизвестный статус принтера");
                PrinterStatus::Unknown
            }),
        _ => {
            debug!("неполные данные о статусе от принтера");
            PrinterStatus::Unknown
        }
    }
}

/// hrPrinterDetectedErrorState: байты значения как одно big-endian число
pub fn error_state_bits(raw: &str) -> u64 {
    raw.as_bytes()
        .iter()
        .fold(0u64, |acc, &b| (acc << 8) | u64::from(b))
}

/// Критический статус уточняется первой совпавшей маской
pub fn refine_critical(status: PrinterStatus, bits: u64) -> PrinterStatus {
    if status != PrinterStatus::Critical {
        return status;
    }
    codes::first_match(CRITICAL_MASKS, bits).unwrap_or(status)
}

pub fn paper_state(bits: u64) -> SupplyState {
    codes::first_match(PAPER_MASKS, bits).unwrap_or(SupplyState::Ok)
}

pub fn toner_state(bits: u64) -> SupplyState {
    codes::first_match(TONER_MASKS, bits).unwrap_or(SupplyState::Ok)
}

fn parse_number(scalars: &RawScalarMap, attr: &str) -> Option<u64> {
    let raw = scalar(scalars, attr)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(attr, value = raw, "нечисловое значение, поле пропущено");
            None
        }
    }
}

fn decode_code<T>(field: &str, value: &str, lookup: fn(&str) -> Option<T>, default: T) -> T {
    lookup(value).unwrap_or_else(|| {
        warn!(field, code = value, "неизвестный код");
        default
    })
}

fn for_each_attribute(row: &RawRow, table: OidTable, mut apply: impl FnMut(&'static str, &str)) {
    for (oid, value) in row {
        match attribute_of(table, oid) {
            Some(attr) => apply(attr, value),
            None => debug!(oid = %oid, "OID вне таблицы атрибутов"),
        }
    }
}

pub fn decode_supplies(rows: &RawTableRows) -> Vec<Supply> {
    rows.iter()
        .map(|row| {
            let mut supply = Supply::default();
            for_each_attribute(row, SUPPLIES_OIDS, |attr, value| {
                let value = Some(value.to_string());
                match attr {
                    ATTR_NAME => supply.name = value,
                    ATTR_COLOR => supply.color = value,
                    ATTR_CAPACITY => supply.capacity = value,
                    ATTR_LEVEL => supply.level = value,
                    _ => {}
                }
            });
            supply
        })
        .collect()
}

pub fn decode_covers(rows: &RawTableRows) -> Vec<Cover> {
    rows.iter()
        .map(|row| {
            let mut cover = Cover::default();
            for_each_attribute(row, COVERS_OIDS, |attr, value| match attr {
                ATTR_NAME => cover.name = Some(value.to_string()),
                ATTR_STATUS => {
                    cover.status = Some(decode_code(
                        "cover.status",
                        value,
                        codes::cover_state,
                        CoverState::Unknown,
                    ))
                }
                _ => {}
            });
            cover
        })
        .collect()
}

fn subunit_status(field: &str, value: &str) -> SubunitStatus {
    decode_code(field, value, codes::subunit_status, SubunitStatus::Unknown)
}

pub fn decode_input_trays(rows: &RawTableRows) -> Vec<InputTray> {
    rows.iter()
        .map(|row| {
            let mut tray = InputTray::default();
            for_each_attribute(row, INPUT_TRAYS_OIDS, |attr, value| match attr {
                ATTR_NAME => tray.name = Some(value.to_string()),
                ATTR_TYPE => {
                    tray.tray_type = Some(decode_code(
                        "input_tray.type",
                        value,
                        codes::input_tray_type,
                        InputTrayType::Unknown,
                    ))
                }
                ATTR_CAPACITY => tray.capacity = Some(value.to_string()),
                ATTR_STATUS => tray.status = Some(subunit_status("input_tray.status", value)),
                ATTR_MEDIA => tray.media = Some(value.to_string()),
                _ => {}
            });
            tray
        })
        .collect()
}

pub fn decode_output_trays(rows: &RawTableRows) -> Vec<OutputTray> {
    rows.iter()
        .map(|row| {
            let mut tray = OutputTray::default();
            for_each_attribute(row, OUTPUT_TRAYS_OIDS, |attr, value| match attr {
                ATTR_NAME => tray.name = Some(value.to_string()),
                ATTR_TYPE => {
                    tray.tray_type = Some(decode_code(
                        "output_tray.type",
                        value,
                        codes::output_tray_type,
                        OutputTrayType::Unknown,
                    ))
                }
                ATTR_CAPACITY => tray.capacity = Some(value.to_string()),
                ATTR_STATUS => tray.status = Some(subunit_status("output_tray.status", value)),
                ATTR_PAGE_DELIVERY => {
                    tray.page_delivery = Some(decode_code(
                        "output_tray.page_delivery",
                        value,
                        codes::page_delivery,
                        PageDelivery::Unknown,
                    ))
                }
                _ => {}
            });
            tray
        })
        .collect()
}

/// Декодер одного принтера; хранит момент загрузки между опросами
#[derive(Debug, Default)]
pub struct StatusDecoder {
    uptime: UptimeTracker,
}

impl StatusDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn boot_time(&self) -> Option<DateTime<Utc>> {
        self.uptime.boot_time()
    }

    pub fn decode(
        &mut self,
        identity: Identity,
        scalars: &RawScalarMap,
        tables: &RawTables,
        now: DateTime<Utc>,
    ) -> StatusSnapshot {
        let device_status = scalar(scalars, ATTR_DEVICE_STATUS);
        let printer_status = scalar(scalars, ATTR_PRINTER_STATUS);

        let bits = scalar(scalars, ATTR_PRINTER_DETECTED_ERROR_STATE)
            .map(error_state_bits)
            .unwrap_or(0);
        let status = refine_critical(decode_status(device_status, printer_status), bits);

        let uptime = parse_number(scalars, ATTR_UPTIME)
            .and_then(|ticks| self.uptime.reconcile(ticks, now));

        StatusSnapshot {
            model: identity.model,
            serial: identity.serial,
            device_status: device_status.map(str::to_string),
            printer_status: printer_status.map(str::to_string),
            status,
            printer_status_paper: paper_state(bits),
            printer_status_toner: toner_state(bits),
            uptime,
            page_counter: parse_number(scalars, ATTR_PAGE_COUNT),
            supplies: decode_supplies(&tables.supplies),
            covers: decode_covers(&tables.covers),
            input_trays: decode_input_trays(&tables.input_trays),
            output_trays: decode_output_trays(&tables.output_trays),
        }
    }
}
