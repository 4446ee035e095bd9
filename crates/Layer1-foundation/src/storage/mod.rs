//! Storage module for fibcalc
//!
//! - `config_store`: TOML - 설정 파일 저장/로드

mod config_store;

pub use config_store::{ConfigStore, CONFIG_DIR_NAME, PROJECT_DIR_NAME};
