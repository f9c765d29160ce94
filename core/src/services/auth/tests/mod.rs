//! Tests for authentication service

#[cfg(test)]
mod concurrency_tests;
