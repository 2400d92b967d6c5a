use anyhow::Result;
use tokio::time::{Duration, sleep};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use printer_snmp::PrinterSnmp;
use printer_snmp::config::{AppConfig, PrinterTarget};
use printer_snmp::formatter::JsonFormatter;

#[tokio::main]
async fn main() -> Result<()> {
    // Логи в stderr, stdout только под JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::load(AppConfig::profile_path())?.with_env_overrides()?;
    config.debug_config();

    let mut printers: Vec<(PrinterTarget, PrinterSnmp)> = config
        .profile
        .printers
        .iter()
        .map(|target| {
            (
                target.clone(),
                PrinterSnmp::from_target(target, config.settings.clone()),
            )
        })
        .collect();

    let interval = config.profile.poll_interval;

    loop {
        for (target, printer) in printers.iter_mut() {
            let result = printer.update().await;
            if let Err(e) = &result {
                warn!(printer = target.label(), error = %e, "опрос не удался");
            }

            match JsonFormatter::to_json_string(target, &result) {
                Ok(json) => println!("{}", json),
                Err(e) => warn!(error = %e, "ошибка JSON сериализации"),
            }
        }

        if interval == 0 {
            break;
        }

        tokio::select! {
            _ = sleep(Duration::from_secs(interval)) => {}
            _ = tokio::signal::ctrl_c() => {
                info!("остановка по сигналу");
                break;
            }
        }
    }

    Ok(())
}
