use thiserror::Error;

/// Ошибки опроса принтера
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrinterError {
    /// Хост недоступен: сеть, сокет или исчерпаны повторы по таймауту
    #[error("printer unreachable: {0}")]
    Connectivity(String),

    /// Устройство вернуло SNMP ошибку или не вернуло данных
    #[error("SNMP error: {0}")]
    Protocol(String),

    /// Не удалось извлечь модель или серийный номер
    #[error("unsupported printer model: {0}")]
    UnsupportedModel(String),

    #[error("invalid OID '{0}'")]
    InvalidOid(String),
}

impl PrinterError {
    /// Имеет ли смысл повторить опрос позже
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Connectivity(_) | Self::Protocol(_))
    }

    /// Короткое имя вида ошибки для JSON вывода
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Connectivity(_) => "connectivity",
            Self::Protocol(_) => "protocol",
            Self::UnsupportedModel(_) => "unsupported_model",
            Self::InvalidOid(_) => "invalid_oid",
        }
    }
}

pub type Result<T> = std::result::Result<T, PrinterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_model_is_not_retryable() {
        assert!(!PrinterError::UnsupportedModel("no serial".into()).is_retryable());
        assert!(!PrinterError::InvalidOid("1.x".into()).is_retryable());
        assert!(PrinterError::Connectivity("timeout".into()).is_retryable());
        assert!(PrinterError::Protocol("no data".into()).is_retryable());
    }

    #[test]
    fn kind_names() {
        assert_eq!(PrinterError::Protocol("2, 1".into()).kind(), "protocol");
        assert_eq!(
            PrinterError::UnsupportedModel(String::new()).kind(),
            "unsupported_model"
        );
    }
}
