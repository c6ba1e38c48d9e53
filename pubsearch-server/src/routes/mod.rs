//! Route handlers

pub mod classify;
pub mod generate_query;
pub mod root;
pub mod search;
