use std::collections::{BTreeMap, HashMap};

use crate::oids::{COVERS_OIDS, INPUT_TRAYS_OIDS, OUTPUT_TRAYS_OIDS, OidTable, SUPPLIES_OIDS};

/// OID -> значение из одного пакетного GET
pub type RawScalarMap = HashMap<String, String>;

/// Строка таблицы: полный OID -> значение
pub type RawRow = BTreeMap<String, String>;

/// Строки таблицы в порядке появления индексов
pub type RawTableRows = Vec<RawRow>;

/// Табличные группы принтера
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableGroup {
    Supplies,
    Covers,
    InputTrays,
    OutputTrays,
}

impl TableGroup {
    pub const ALL: [TableGroup; 4] = [
        TableGroup::Supplies,
        TableGroup::Covers,
        TableGroup::InputTrays,
        TableGroup::OutputTrays,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TableGroup::Supplies => "supplies",
            TableGroup::Covers => "cover",
            TableGroup::InputTrays => "input_tray",
            TableGroup::OutputTrays => "output_tray",
        }
    }

    pub fn oids(&self) -> OidTable {
        match self {
            TableGroup::Supplies => SUPPLIES_OIDS,
            TableGroup::Covers => COVERS_OIDS,
            TableGroup::InputTrays => INPUT_TRAYS_OIDS,
            TableGroup::OutputTrays => OUTPUT_TRAYS_OIDS,
        }
    }
}

/// Сырые данные всех табличных групп одного опроса
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTables {
    pub supplies: RawTableRows,
    pub covers: RawTableRows,
    pub input_trays: RawTableRows,
    pub output_trays: RawTableRows,
}

impl RawTables {
    pub fn set(&mut self, group: TableGroup, rows: RawTableRows) {
        match group {
            TableGroup::Supplies => self.supplies = rows,
            TableGroup::Covers => self.covers = rows,
            TableGroup::InputTrays => self.input_trays = rows,
            TableGroup::OutputTrays => self.output_trays = rows,
        }
    }
}
