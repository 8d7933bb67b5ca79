//! Core domain types and storage contracts for feedbackd.
//!
//! This crate is free of I/O: it defines the feedback record, its
//! identifier and validation rules, and the repository trait that storage
//! backends implement.

pub mod feedback;
pub mod storage;
