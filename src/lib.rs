//! scenesplit - split home-video recordings into dated, titled scenes
//!
//! This library crate exposes the planning and production pipeline for
//! integration testing.

pub mod config;
pub mod pipeline;
pub mod plan;
pub mod sidecar;
