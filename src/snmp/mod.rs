use async_trait::async_trait;
use tracing::debug;

pub mod clients_enum;
pub mod oid;
pub mod session;
#[cfg(test)]
pub(crate) mod testing;
pub mod transport;
pub mod v1;
pub mod v2c;
pub mod value;

pub use clients_enum::SnmpClient;
pub use oid::{is_under, parse_oid, row_index};
pub use transport::SnmpTransport;
pub use v1::SnmpClientV1;
pub use v2c::SnmpClientV2c;

use crate::config::{Settings, SnmpVersion};
use crate::error::Result;

#[async_trait]
impl SnmpTransport for SnmpClient {
    async fn connect(target: &str, settings: &Settings) -> Result<Self> {
        let community = settings.auth.community.as_bytes();
        debug!(host = target, version = ?settings.auth.version, "создание SNMP сессии");

        match settings.auth.version {
            SnmpVersion::V1 => {
                let client = SnmpClientV1::new(target, community, &settings.connection).await?;
                Ok(SnmpClient::V1(client))
            }
            SnmpVersion::V2c => {
                let client = SnmpClientV2c::new(target, community, &settings.connection).await?;
                Ok(SnmpClient::V2c(client))
            }
        }
    }

    async fn get(&mut self, oids: &[&str]) -> Result<Vec<(String, String)>> {
        match self {
            SnmpClient::V1(client) => client.get(oids).await,
            SnmpClient::V2c(client) => client.get(oids).await,
        }
    }

    async fn walk(&mut self, prefix: &str) -> Result<Vec<(String, String)>> {
        match self {
            SnmpClient::V1(client) => client.walk(prefix).await,
            SnmpClient::V2c(client) => client.walk(prefix).await,
        }
    }
}
