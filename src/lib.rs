//! Parse ORM search domains (Python-literal filter lists) into typed,
//! validated prefix-notation expressions.

pub mod app;
pub mod config;
pub mod domain;
pub mod utils;

pub use domain::{DomainBuilder, DomainError, Expression, parse, parse_with, validate};
pub use utils::split_field_list;
