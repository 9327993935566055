//! Eyegic Domain Concerns

pub mod enquiries;
