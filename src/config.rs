use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::countdown::{TICK_INTERVAL, TIME_LIMIT_SECS};
use crate::sequence::SEQUENCE_LENGTH;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameConfig {
    pub sequence_length: usize,
    pub time_limit_secs: u32,
    pub tick_interval: Duration,
    pub sound: bool,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            sequence_length: SEQUENCE_LENGTH,
            time_limit_secs: TIME_LIMIT_SECS,
            tick_interval: TICK_INTERVAL,
            sound: true,
            seed: None,
        }
    }
}
