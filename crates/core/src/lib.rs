#![forbid(unsafe_code)]

pub mod catalog;
pub mod certification;
pub mod chatbot;
pub mod model;
pub mod quiz_session;
pub mod time;

pub use time::Clock;
