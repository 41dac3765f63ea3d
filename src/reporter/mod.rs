//! Verdict presentation: console, JSON, and the dealer message

pub mod console;
pub mod json;
pub mod message;

pub use console::ConsoleReporter;
pub use json::JsonReporter;
pub use message::dealer_message;
