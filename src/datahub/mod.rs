pub mod client;

pub use client::DatasetHubClient;
