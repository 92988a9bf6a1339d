//! Discord bot surface.
//!
//! This module wires the dispenser services to Discord. Slash commands are registered
//! globally when the bot becomes ready and dispatched by name; panel buttons carry a
//! `dispense:<group>` custom id and are routed to the same dispense path as the
//! `/dispense` command.
//!
//! The bot is initialized during startup and runs in a separate tokio task. Its HTTP
//! client is shared with the weekly reset scheduler for audit delivery.
//!
//! # Gateway Intents
//!
//! The bot only requires `GUILDS`. Interactions are delivered regardless of intents
//! and carry the invoking member's roles and permissions.

pub mod command;
pub mod handler;
pub mod start;
