//! Player-facing operations.
//!
//! Each submodule adds one group of operations to [`HuntRuntime`]. Every
//! operation locks the player's session slot first and holds it until the
//! session state and any write-back are settled, so two updates from the same
//! chat can never interleave.
//!
//! [`HuntRuntime`]: crate::runtime::HuntRuntime

mod battle;
mod explore;
mod players;
mod quests;
mod rest;
mod tracks;
