//! Integration tests for lite-validator.

mod callbacks;
mod scenarios;
