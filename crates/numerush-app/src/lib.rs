//! Shared library module for the Numerush app crate.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub use self::app::NumerushApp;

pub mod action;
pub mod app;
pub mod clock;
pub mod game_factory;
pub mod persistence;
pub mod state;
pub mod ui;
pub mod view_model_builder;
