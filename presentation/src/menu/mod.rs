//! Interactive menu loop

pub mod repl;
