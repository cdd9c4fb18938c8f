pub mod account;
pub mod actions;
pub mod intents;
pub mod workload;

pub use account::*;
pub use actions::*;
pub use intents::*;
pub use workload::*;
