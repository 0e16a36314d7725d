//! Runtime orchestration and lifecycle management.
//!
//! - [`BrowserSystem`] - spawns the session actor, exposes its client and shuts it down
//! - [`setup_tracing`] - initializes logging for the process
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop the client** - closes the sender side of the channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None`
//! 3. **Actor logs final state** - number of sessions still open
//! 4. **Await completion** - the task handle is joined

pub mod browser_system;
pub mod tracing;

pub use browser_system::*;
pub use self::tracing::*;
