//! mvc-observer: a console Model-View-Controller built on an
//! Observer/Observable notification protocol.

pub mod app;
pub mod controller;
pub mod error;
pub mod log;
pub mod model;
pub mod observer;
pub mod output;
pub mod theme;
pub mod types;
pub mod view;

pub use error::{Error, Result};
