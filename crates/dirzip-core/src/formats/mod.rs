//! Container format plumbing.

pub mod zip;
