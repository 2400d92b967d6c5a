//! Реестр OID: логические атрибуты и их идентификаторы в Printer-MIB / Host-Resources-MIB.

/// Упорядоченная таблица (атрибут, OID)
pub type OidTable = &'static [(&'static str, &'static str)];

pub const ATTR_MODEL: &str = "model";
pub const ATTR_SERIAL: &str = "serial";
pub const ATTR_PAGE_COUNT: &str = "page_counter";
pub const ATTR_PRINTER_STATUS: &str = "printer_status";
pub const ATTR_DEVICE_STATUS: &str = "device_status";
pub const ATTR_PRINTER_DETECTED_ERROR_STATE: &str = "printer_detected_error_state";
pub const ATTR_UPTIME: &str = "uptime";

pub const ATTR_NAME: &str = "name";
pub const ATTR_COLOR: &str = "color";
pub const ATTR_CAPACITY: &str = "capacity";
pub const ATTR_LEVEL: &str = "level";
pub const ATTR_STATUS: &str = "status";
pub const ATTR_TYPE: &str = "type";
pub const ATTR_MEDIA: &str = "media";
pub const ATTR_PAGE_DELIVERY: &str = "page_delivery";

/// Скалярные значения, запрашиваемые одним GET
pub const SCALAR_OIDS: OidTable = &[
    (ATTR_MODEL, "1.3.6.1.2.1.1.1.0"),
    (ATTR_PAGE_COUNT, "1.3.6.1.2.1.43.10.2.1.4.1.1"),
    (ATTR_SERIAL, "1.3.6.1.2.1.43.5.1.1.17.1"),
    (ATTR_PRINTER_STATUS, "1.3.6.1.2.1.25.3.5.1.1.1"),
    (ATTR_DEVICE_STATUS, "1.3.6.1.2.1.25.3.2.1.5.1"),
    (ATTR_PRINTER_DETECTED_ERROR_STATE, "1.3.6.1.2.1.25.3.5.1.2.1"),
    (ATTR_UPTIME, "1.3.6.1.2.1.1.3.0"),
];

pub const SUPPLIES_OIDS: OidTable = &[
    (ATTR_NAME, "1.3.6.1.2.1.43.11.1.1.6.1"),
    (ATTR_COLOR, "1.3.6.1.2.1.43.12.1.1.4"),
    (ATTR_CAPACITY, "1.3.6.1.2.1.43.11.1.1.8"),
    (ATTR_LEVEL, "1.3.6.1.2.1.43.11.1.1.9"),
];

pub const COVERS_OIDS: OidTable = &[
    (ATTR_NAME, "1.3.6.1.2.1.43.6.1.1.2"),
    (ATTR_STATUS, "1.3.6.1.2.1.43.6.1.1.3"),
];

pub const INPUT_TRAYS_OIDS: OidTable = &[
    (ATTR_NAME, "1.3.6.1.2.1.43.8.2.1.13"),
    (ATTR_TYPE, "1.3.6.1.2.1.43.8.2.1.2"),
    (ATTR_CAPACITY, "1.3.6.1.2.1.43.8.2.1.9"),
    (ATTR_STATUS, "1.3.6.1.2.1.43.8.2.1.11"),
    (ATTR_MEDIA, "1.3.6.1.2.1.43.8.2.1.21"),
];

pub const OUTPUT_TRAYS_OIDS: OidTable = &[
    (ATTR_NAME, "1.3.6.1.2.1.43.9.2.1.7"),
    (ATTR_TYPE, "1.3.6.1.2.1.43.9.2.1.2"),
    (ATTR_CAPACITY, "1.3.6.1.2.1.43.9.2.1.4"),
    (ATTR_STATUS, "1.3.6.1.2.1.43.9.2.1.6"),
    (ATTR_PAGE_DELIVERY, "1.3.6.1.2.1.43.9.2.1.20"),
];

/// OID атрибута в таблице
pub fn oid_of(table: OidTable, attr: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(name, _)| *name == attr)
        .map(|(_, oid)| *oid)
}

/// Атрибут, под префикс которого попадает возвращённый OID
pub fn attribute_of(table: OidTable, oid: &str) -> Option<&'static str> {
    table.iter().find_map(|(attr, prefix)| {
        oid.strip_prefix(prefix)
            .filter(|rest| rest.starts_with('.'))
            .map(|_| *attr)
    })
}

/// Все OID таблицы в порядке объявления
pub fn oids(table: OidTable) -> Vec<&'static str> {
    table.iter().map(|(_, oid)| *oid).collect()
}
