//! HTTP access to the explorer API

mod client;

pub use client::ExplorerClient;
