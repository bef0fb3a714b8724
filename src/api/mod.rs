//! Client for the remote projects endpoint.

mod client;
mod error;
mod wire;

pub use client::{ProjectsApi, PROJECTS_PATH};
pub use error::FetchError;
pub use wire::{ProjectsResponse, RawProject};
