pub mod catalog;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod loading;
pub mod panel;
pub mod protocol;
pub mod selector;

pub use catalog::*;
pub use config::*;
pub use dispatch::*;
pub use error::*;
pub use loading::*;
pub use panel::*;
pub use protocol::*;
pub use selector::*;
