//! Reactive state contexts

pub mod wallet;
