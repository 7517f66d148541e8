use rand::rngs::OsRng;
use rand::RngCore;
use uuid::Uuid;
use crate::types::{NrfError, NrfResult};

/// Fresh NF instance id.
pub fn new_instance_id() -> String {
    Uuid::new_v4().to_string()
}

/// Uniformly distributed integer in `0..100`, drawn from the OS entropy source.
///
/// Bytes of 200 and above are rejected so every value is equally likely.
pub fn random_below_100() -> NrfResult<u8> {
    let mut byte = [0u8; 1];
    loop {
        OsRng
            .try_fill_bytes(&mut byte)
            .map_err(|e| NrfError::RandomSource(e.to_string()))?;
        if byte[0] < 200 {
            return Ok(byte[0] % 100);
        }
    }
}

pub fn subscription_id() -> NrfResult<String> {
    Ok(random_below_100()?.to_string())
}
