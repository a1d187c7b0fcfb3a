//! Boost CRM - Sales pipeline tracking and reporting
//!
//! Customers move through a fixed pipeline of statuses. Meetings, next
//! actions and contact persons hang off each customer. From these records the
//! crate derives per-customer activity recency and deadline urgency, and two
//! six-month dashboard series: new meetings and status distribution.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
