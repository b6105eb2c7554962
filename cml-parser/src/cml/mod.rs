//! Main module for cml library functionality

pub mod ast;
pub mod building;
pub mod diagnostics;
pub mod error;
pub mod lexing;
pub mod loader;
pub mod model;
pub mod parsing;
pub mod result;
pub mod testing;
pub mod token;
pub mod transforms;
