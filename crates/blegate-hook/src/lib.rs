//! Broker publish-hook for BLE gateway telemetry.
//!
//! A BLE gateway publishes a MessagePack envelope bundling its identity with
//! the raw advertisement frames it captured. This crate decodes those
//! envelopes on the broker's publish pipeline, extracts beacon identities and
//! proximity estimates, and tells the broker what to do with each message:
//! forward it unchanged, rewrite its payload with the decoded summary, or
//! drop it.
//!
//! The transport layer exposing the hook surface is out of scope; it mounts
//! the [`hooks::BrokerHooks`] capability set and applies the returned
//! [`domain::PublishDecision`].

pub mod config;
pub mod domain;
pub mod hooks;
pub mod msgpack;

pub use domain::*;
pub use hooks::*;
pub use msgpack::*;
