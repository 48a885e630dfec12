mod commands;
mod input;
mod render;
mod repl;
mod setup;

pub use commands::run;
