//! Test suite for Some Comments
//!
//! This module organizes all tests

pub mod property;
