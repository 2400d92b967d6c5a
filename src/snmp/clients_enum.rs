use super::v1::SnmpClientV1;
use super::v2c::SnmpClientV2c;

pub enum SnmpClient {
    V1(SnmpClientV1),
    V2c(SnmpClientV2c),
}
