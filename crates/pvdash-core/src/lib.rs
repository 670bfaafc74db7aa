//! Hardware-independent core library for pvdash
//!
//! This crate contains all platform-agnostic logic for the pvdash e-paper
//! energy dashboard: the telemetry snapshot model, payload ingestion, graph
//! primitives, the fixed dashboard layout, and frame presentation.
//!
//! It is `#![no_std]` with `extern crate alloc` so it compiles on both
//! embedded targets (the e-paper controller) and desktop hosts (for the
//! simulator and tests).

#![no_std]

extern crate alloc;

pub mod config;
pub mod display_manager;
pub mod framebuffer;
pub mod ingest;
pub mod pages;
pub mod refresh;
pub mod snapshot;
pub mod ui;
