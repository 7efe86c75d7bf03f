//! Festival Food Buddy - a terminal client for festival food ordering.
//!
//! This crate provides the visitor-facing festival app as a TUI: login and
//! registration by login number, an order overview, a shopping basket and a
//! credit top-up dialog.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing use cases and services.
pub mod application;
/// Domain layer containing roles, sessions, carts and orders.
pub mod domain;
/// Infrastructure layer containing configuration.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "festbuddy";
