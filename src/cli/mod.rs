pub mod console;
pub mod output;
pub mod router;
pub mod screens;
pub mod session;
mod shell;

pub use console::{Console, ScriptedConsole, StdioConsole};
pub use output::MessageKind;
pub use router::{LoopControl, Router};
pub use session::Session;
pub use shell::{run_cli, run_session};
