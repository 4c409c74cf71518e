//! Shared test helpers for staker tests.
#![allow(dead_code)]

pub mod fixture;
pub mod mock_accounts;

pub use fixture::*;
pub use instructions::*;
pub use mock_accounts::*;
pub use setup::*;
