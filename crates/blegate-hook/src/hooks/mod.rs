mod broker_hooks;
mod publish_hook;

pub use broker_hooks::*;
pub use publish_hook::*;
