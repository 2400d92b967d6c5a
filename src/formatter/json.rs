use serde::Serialize;

use crate::config::PrinterTarget;
use crate::error::PrinterError;
use crate::snapshot::StatusSnapshot;

/// JSON структура результата опроса одного принтера
#[derive(Debug, Clone, Serialize)]
pub struct PollResultJson {
    pub name: String,
    pub host: String,
    pub timestamp: String,
    pub status: String, // "success" | "error"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<StatusSnapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub kind: String,
    pub message: String,
    pub retryable: bool,
}

impl From<&PrinterError> for ErrorInfo {
    fn from(err: &PrinterError) -> Self {
        Self {
            kind: err.kind().to_string(),
            message: err.to_string(),
            retryable: err.is_retryable(),
        }
    }
}

/// JSON форматтер для результатов опроса
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn format_poll_result(
        target: &PrinterTarget,
        result: &Result<StatusSnapshot, PrinterError>,
    ) -> PollResultJson {
        let timestamp = chrono::Utc::now().to_rfc3339();

        let (status, snapshot, error) = match result {
            Ok(snapshot) => ("success", Some(snapshot.clone()), None),
            Err(err) => ("error", None, Some(ErrorInfo::from(err))),
        };

        PollResultJson {
            name: target.label().to_string(),
            host: target.address(),
            timestamp,
            status: status.to_string(),
            snapshot,
            error,
        }
    }

    /// Сериализует результат в JSON строку
    pub fn to_json_string(
        target: &PrinterTarget,
        result: &Result<StatusSnapshot, PrinterError>,
    ) -> anyhow::Result<String> {
        let json_result = Self::format_poll_result(target, result);
        serde_json::to_string_pretty(&json_result)
            .map_err(|e| anyhow::anyhow!("Ошибка сериализации в JSON: {}", e))
    }

    /// Сериализует результат в компактный JSON
    pub fn to_json_compact(
        target: &PrinterTarget,
        result: &Result<StatusSnapshot, PrinterError>,
    ) -> anyhow::Result<String> {
        let json_result = Self::format_poll_result(target, result);
        serde_json::to_string(&json_result)
            .map_err(|e| anyhow::anyhow!("Ошибка сериализации в JSON: {}", e))
    }
}
