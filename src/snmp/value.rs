use snmp2::Value;

/// Значение из ответа агента, приведённое к строке
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Binding {
    Value(String),
    NoSuchObject,
    NoSuchInstance,
    EndOfMibView,
}

impl Binding {
    /// Значение, если это не исключение SNMPv2
    pub fn into_value(self) -> Option<String> {
        match self {
            Binding::Value(v) => Some(v),
            _ => None,
        }
    }
}

pub fn render(value: &Value<'_>) -> Binding {
    match value {
        Value::Integer(v) => Binding::Value(v.to_string()),
        Value::Counter32(v) | Value::Unsigned32(v) | Value::Timeticks(v) => {
            Binding::Value(v.to_string())
        }
        Value::Counter64(v) => Binding::Value(v.to_string()),
        Value::OctetString(bytes) => Binding::Value(octets_to_string(bytes)),
        Value::ObjectIdentifier(oid) => Binding::Value(oid.to_string()),
        Value::Null => Binding::Value(String::new()),
        Value::NoSuchObject => Binding::NoSuchObject,
        Value::NoSuchInstance => Binding::NoSuchInstance,
        Value::EndOfMibView => Binding::EndOfMibView,
        other => Binding::Value(format!("{:?}", other)),
    }
}

/// OCTET STRING: UTF-8, если валиден, иначе байт на символ
pub fn octets_to_string(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => bytes.iter().map(|&b| char::from(b)).collect(),
    }
}
