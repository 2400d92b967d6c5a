//! Опрос сетевых принтеров по SNMP.
//!
//! Принтер опрашивается одним пакетным GET и четырьмя обходами таблиц
//! Printer-MIB; сырые коды декодируются в [`StatusSnapshot`].

pub mod codes;
pub mod collector;
pub mod config;
pub mod decoder;
pub mod error;
pub mod formatter;
pub mod oids;
pub mod printer;
pub mod snapshot;
pub mod snmp;
pub mod uptime;

pub use error::{PrinterError, Result};
pub use printer::PrinterSnmp;
pub use snapshot::StatusSnapshot;
pub use snmp::{SnmpClient, SnmpTransport};
