// Test helpers shared by the contract and integration suites
//
// Each test binary pulls these in with
//   #[path = "../helpers/mod.rs"] mod helpers;
// and uses only part of them.

#![allow(dead_code)]

pub mod test_database;
pub mod test_server;

pub use test_data::*;
pub use test_database::*;
pub use test_server::*;
