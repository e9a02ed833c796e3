//! Domain Layer
//!
//! Pure types and capability traits. Nothing in here spawns a process,
//! talks to AWS, or prompts the operator.
//!
//! - `value_objects` - runtime profiles, size classification, content hashes
//! - `entities` - build request/result and the persisted preferences record
//! - `plans` - fully specified publish and upload parameters
//! - `ports` - traits the infrastructure layer implements

pub mod entities;
pub mod plans;
pub mod ports;
pub mod value_objects;
