//! Client side of the portfolio contact form: the relay/backend dual write
//! and the persisted theme preference.

pub mod backend;
pub mod config;
pub mod form;
pub mod prefs;
pub mod relay;
