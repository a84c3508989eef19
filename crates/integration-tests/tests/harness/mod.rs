//! Shared test harness: mock upstreams, config builder, test server
//!
//! Each test binary pulls in the whole harness; not every binary uses
//! every helper.
#![allow(dead_code)]

pub mod config;
pub mod mock_auth;
pub mod mock_provider;
pub mod server;
