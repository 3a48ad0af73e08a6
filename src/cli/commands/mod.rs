//! One file per subcommand; each handler owns its argument validation and
//! error reporting.

mod demo;
mod emit;

pub use demo::cmd_demo;
pub use emit::cmd_emit;
