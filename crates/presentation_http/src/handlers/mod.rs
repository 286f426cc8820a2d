//! HTTP request handlers

pub mod calculator;
pub mod exports;
pub mod health;
pub mod history;
pub mod page;
pub mod research;
pub mod weather;
