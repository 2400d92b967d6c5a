//! Итоговый снимок состояния принтера.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::codes::{
    CoverState, InputTrayType, OutputTrayType, PageDelivery, PrinterStatus, SubunitStatus,
    SupplyState,
};

/// Снимок, собираемый заново на каждом опросе
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusSnapshot {
    pub model: String,
    pub serial: String,
    /// Сырой hrDeviceStatus
    pub device_status: Option<String>,
    /// Сырой hrPrinterStatus
    pub printer_status: Option<String>,
    pub status: PrinterStatus,
    pub printer_status_paper: SupplyState,
    pub printer_status_toner: SupplyState,
    /// Момент загрузки устройства
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uptime: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_counter: Option<u64>,
    pub supplies: Vec<Supply>,
    #[serde(rename = "cover")]
    pub covers: Vec<Cover>,
    #[serde(rename = "input_tray")]
    pub input_trays: Vec<InputTray>,
    #[serde(rename = "output_tray")]
    pub output_trays: Vec<OutputTray>,
}

/// Расходник (тонер, барабан)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Supply {
    pub name: Option<String>,
    pub color: Option<String>,
    pub capacity: Option<String>,
    pub level: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Cover {
    pub name: Option<String>,
    pub status: Option<CoverState>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InputTray {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub tray_type: Option<InputTrayType>,
    pub capacity: Option<String>,
    pub status: Option<SubunitStatus>,
    pub media: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OutputTray {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub tray_type: Option<OutputTrayType>,
    pub capacity: Option<String>,
    pub status: Option<SubunitStatus>,
    pub page_delivery: Option<PageDelivery>,
}
