//! Main module for plaintasks library functionality

pub mod actions;
pub mod ast;
pub mod formats;
pub mod lexer;
pub mod parser;
pub mod processor;
pub mod settings;
pub mod testing;
