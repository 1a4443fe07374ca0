#![cfg(test)]

pub mod common;
pub mod storage_tests;
pub mod traversal_tests;
pub mod write_tests;
