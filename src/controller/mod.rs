//! Dashboard controller: view-state ownership, refresh scheduling and the event loop

pub mod command;
pub mod dashboard;
pub mod prompt;
pub mod refresh;
pub mod runtime;

pub use command::*;
pub use dashboard::*;
pub use prompt::*;
pub use refresh::*;
pub use runtime::*;
