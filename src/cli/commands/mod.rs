//! Subcommands of the ttt-robot binary

pub mod bench;
pub mod play;
pub mod suggest;
