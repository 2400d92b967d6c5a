//! Таблицы кодов: перевод сырых SNMP кодов в канонический словарь статусов.
//!
//! Битовые таблицы хранятся упорядоченными срезами: при нескольких
//! выставленных битах побеждает первая объявленная маска.

use std::fmt;

use serde::{Serialize, Serializer};

macro_rules! vocabulary {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

vocabulary! {
    /// Общий статус принтера
    PrinterStatus {
        Unknown => "unknown",
        Standby => "standby",
        Idle => "idle",
        Printing => "printing",
        Warning => "warning",
        Critical => "critical",
        Warmup => "warmup",
        Jammed => "jammed",
        OpenDoor => "open_door",
    }
}

vocabulary! {
    /// Состояние бумаги или тонера
    SupplyState {
        Ok => "ok",
        Low => "low",
        Empty => "empty",
    }
}

vocabulary! {
    CoverState {
        Unknown => "unknown",
        Other => "other",
        Open => "open",
        Closed => "closed",
    }
}

vocabulary! {
    /// Статус подсистемы (лотка)
    SubunitStatus {
        Idle => "idle",
        Unavailable => "unavailable",
        Standby => "standby",
        Active => "active",
        Unknown => "unknown",
        Busy => "busy",
        Warning => "warning",
        Critical => "critical",
    }
}

vocabulary! {
    InputTrayType {
        Other => "other",
        Unknown => "unknown",
        SheetFeedAutoRemovable => "removable auto sheet feeder",
        SheetFeedAutoNonRemovable => "unremovable auto sheet feeder",
        SheetFeedManual => "manual sheet feeder",
        ContinuousRoll => "continuous roll",
        ContinuousFanRoll => "continuous fan-roll",
    }
}

vocabulary! {
    OutputTrayType {
        Other => "other",
        Unknown => "unknown",
        RemovableBin => "removable bin",
        UnremovableBin => "unremovable bin",
        ContinuousRoll => "continuous roll",
        Mailbox => "mailbox",
        ContinuousFanFold => "continuous fan-fold",
    }
}

vocabulary! {
    PageDelivery {
        Unknown => "unknown",
        FaceUp => "face up",
        FaceDown => "face down",
    }
}

/// hrDeviceStatus -> (hrPrinterStatus -> статус)
static STATUS_TABLE: &[(&str, &[(&str, PrinterStatus)])] = &[
    (
        "2",
        &[
            ("1", PrinterStatus::Standby),
            ("3", PrinterStatus::Idle),
            ("4", PrinterStatus::Printing),
            ("5", PrinterStatus::Warmup),
        ],
    ),
    (
        "3",
        &[("3", PrinterStatus::Warning), ("4", PrinterStatus::Warning)],
    ),
    (
        "5",
        &[("1", PrinterStatus::Critical), ("5", PrinterStatus::Warmup)],
    ),
];

static COVER_TABLE: &[(&str, CoverState)] = &[
    ("1", CoverState::Other),
    ("3", CoverState::Open),
    ("4", CoverState::Closed),
    ("5", CoverState::Open),
    ("6", CoverState::Closed),
];

static INPUT_TYPE_TABLE: &[(&str, InputTrayType)] = &[
    ("1", InputTrayType::Other),
    ("2", InputTrayType::Unknown),
    ("3", InputTrayType::SheetFeedAutoRemovable),
    ("4", InputTrayType::SheetFeedAutoNonRemovable),
    ("5", InputTrayType::SheetFeedManual),
    ("6", InputTrayType::ContinuousRoll),
    ("7", InputTrayType::ContinuousFanRoll),
];

static OUTPUT_TYPE_TABLE: &[(&str, OutputTrayType)] = &[
    ("1", OutputTrayType::Other),
    ("2", OutputTrayType::Unknown),
    ("3", OutputTrayType::RemovableBin),
    ("4", OutputTrayType::UnremovableBin),
    ("5", OutputTrayType::ContinuousRoll),
    ("6", OutputTrayType::Mailbox),
    ("7", OutputTrayType::ContinuousFanFold),
];

static PAGE_DELIVERY_TABLE: &[(&str, PageDelivery)] =
    &[("3", PageDelivery::FaceUp), ("4", PageDelivery::FaceDown)];

static SUBUNIT_STATUS_TABLE: &[(u32, SubunitStatus)] = &[
    (0, SubunitStatus::Idle),
    (1, SubunitStatus::Unavailable),
    (2, SubunitStatus::Standby),
    (3, SubunitStatus::Unavailable),
    (4, SubunitStatus::Active),
    (5, SubunitStatus::Unknown),
    (6, SubunitStatus::Busy),
    (7, SubunitStatus::Unknown),
    (8, SubunitStatus::Warning),
    (16, SubunitStatus::Critical),
    (64, SubunitStatus::Unknown),
];

/// Уточнение критического статуса по hrPrinterDetectedErrorState
pub static CRITICAL_MASKS: &[(u64, PrinterStatus)] = &[
    (0b0000_1000, PrinterStatus::OpenDoor),
    (0b0000_0100, PrinterStatus::Jammed),
];

pub static PAPER_MASKS: &[(u64, SupplyState)] = &[
    (0b1000_0000, SupplyState::Low),
    (0b0100_0000, SupplyState::Empty),
];

pub static TONER_MASKS: &[(u64, SupplyState)] = &[
    (0b0010_0000, SupplyState::Low),
    (0b0001_0000, SupplyState::Empty),
];

fn lookup<T: Copy>(table: &[(&str, T)], code: &str) -> Option<T> {
    let code = code.trim();
    table.iter().find(|(key, _)| *key == code).map(|(_, v)| *v)
}

/// Статус по паре (hrDeviceStatus, hrPrinterStatus)
pub fn composite_status(device_status: &str, printer_status: &str) -> Option<PrinterStatus> {
    let (_, row) = STATUS_TABLE
        .iter()
        .find(|(device, _)| *device == device_status.trim())?;
    lookup(row, printer_status)
}

/// Первая маска из таблицы, пересекающаяся со значением
pub fn first_match<T: Copy>(masks: &[(u64, T)], value: u64) -> Option<T> {
    masks
        .iter()
        .find(|(mask, _)| value & mask != 0)
        .map(|(_, label)| *label)
}

pub fn cover_state(code: &str) -> Option<CoverState> {
    lookup(COVER_TABLE, code)
}

pub fn input_tray_type(code: &str) -> Option<InputTrayType> {
    lookup(INPUT_TYPE_TABLE, code)
}

pub fn output_tray_type(code: &str) -> Option<OutputTrayType> {
    lookup(OUTPUT_TYPE_TABLE, code)
}

pub fn page_delivery(code: &str) -> Option<PageDelivery> {
    lookup(PAGE_DELIVERY_TABLE, code)
}

fn subunit_exact(code: u32) -> Option<SubunitStatus> {
    SUBUNIT_STATUS_TABLE
        .iter()
        .find(|(key, _)| *key == code)
        .map(|(_, v)| *v)
}

/// Статус подсистемы.
///
/// Неизвестный код округляется вверх до ближайшей степени двойки
/// (класса серьёзности) и ищется повторно.
pub fn subunit_status(code: &str) -> Option<SubunitStatus> {
    let code: u32 = code.trim().parse().ok()?;
    subunit_exact(code).or_else(|| subunit_exact(code.checked_next_power_of_two()?))
}
