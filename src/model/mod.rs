//! Plain data shared between the engines, the session actor and the presentation layer.

pub mod product;
pub mod session;

pub use product::*;
pub use session::*;
