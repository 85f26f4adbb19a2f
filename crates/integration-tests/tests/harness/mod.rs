#![allow(dead_code)]

pub mod config;
pub mod mock_llm;
pub mod mock_sarvam;
pub mod server;

/// Whether a directory has no entries
pub fn dir_is_empty(path: &std::path::Path) -> bool {
    std::fs::read_dir(path).expect("readable dir").next().is_none()
}
