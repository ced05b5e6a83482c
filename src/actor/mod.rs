//! Preview Actor System
//!
//! Message-passing coordination for live preview updates:
//!
//! ```text
//! editor --> PreviewHandle --> PreviewActor --> Renderer (worker pool)
//!                                  |
//!                                  +--> diff anchor --> Publication --> surface
//! ```
//!
//! # Module Structure
//!
//! - `messages` - message types into the actor
//! - `preview` - the actor, its state and the builder
//! - `handle` - cloneable caller-facing handle

mod handle;
mod messages;
mod preview;


pub use handle::PreviewHandle;
pub use messages::PreviewMsg;
pub use preview::PreviewBuilder;
