//! Gist relay domain logic.
//!
//! # Data Flow
//! ```text
//! inbound JSON body
//!     → types.rs (GistCommand, raw shape)
//!     → validate.rs (whitelist + credential check)
//!     → GistRequest (validated, typed)
//!     → [upstream client performs the single outbound call]
//!     → StoredEnvelope (parsed or defaulted)
//!     → normalized JSON response
//! ```
//!
//! # Design Decisions
//! - The resource whitelist is a closed enum; unknown kinds never reach
//!   the upstream client
//! - Validation is a pure function of input + config snapshot
//! - Every error variant maps to exactly one response status

pub mod types;
pub mod validate;

pub use types::{GistCommand, GistRequest, Operation, ProxyError, ResourceKind, StoredEnvelope};
pub use validate::validate_command;
