//! Engine and gearbox state holders.
//!
//! Two independent components: the engine owns its running flag and RPM,
//! the gearbox owns mode, gear, and pawl. Any cross-check ("is the engine
//! running") is passed into `shift` as an explicit argument, never read
//! through a back-reference.

pub mod engine;
pub mod gearbox;
