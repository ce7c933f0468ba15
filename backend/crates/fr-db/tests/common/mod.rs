#![allow(dead_code)]

pub mod fixtures;

pub use fixtures::*;
pub use test_db::*;
