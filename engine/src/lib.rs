//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! # Telnex Protocol Engine
//!
//! Sans-IO core of a Telnet client: the protocol machine that sits
//! between a byte-oriented transport and an application that sends
//! commands and receives terminal output.
//!
//! Implements RFC 854 (Telnet) with option negotiation per RFC 855,
//! Suppress Go Ahead (RFC 858), NAWS (RFC 1073), Terminal Type
//! (RFC 1091, always "UNKNOWN"), Linemode (RFC 1184, acknowledged
//! only), Authentication (RFC 1416, NULL mechanism built in) and
//! Logout (RFC 727).
//!
//! ## Overview
//!
//! The engine owns no socket and spawns no tasks. A driver feeds it
//! inbound bytes with [`TelnetEngine::receive`], moves
//! [`TelnetEngine::take_output`] to the transport after every
//! interaction, and reacts to the returned [`TelnetEvent`]s. Control
//! sequences may straddle arbitrary read boundaries; incomplete frames
//! are held back internally and finished by a later read.
//!
//! Three cooperating pieces do the interesting work:
//!
//! - a **negotiation state machine** that suppresses redundant
//!   acknowledgments (RFC 854) and breaks request/reply loops with a
//!   FIFO record of unacknowledged negotiations we sent,
//! - **suboption handlers** for NAWS, Terminal Type and the RFC 1416
//!   authentication exchange, with pluggable [`AuthMechanism`]s,
//! - a **login assistant** that watches plaintext for login, password
//!   and prompt patterns and injects stored credentials.
//!
//! ## Usage
//!
//! ```rust
//! use telnex_engine::{TelnetEngine, TelnetEvent};
//!
//! let mut engine = TelnetEngine::new();
//! engine.connecting();
//! engine.connected();
//! let announce = engine.take_output(); // initial option negotiation
//!
//! for event in engine.receive(b"Welcome\r\n") {
//!     if let TelnetEvent::Message(text) = event {
//!         print!("{text}");
//!     }
//! }
//! let replies = engine.take_output(); // negotiation replies, if any
//! # let _ = (announce, replies);
//! ```

#![warn(
    clippy::cargo,
    missing_docs,
    clippy::pedantic,
    future_incompatible,
    rust_2018_idioms
)]
#![allow(
    clippy::option_if_let_else,
    clippy::module_name_repetitions,
    clippy::missing_errors_doc
)]

mod auth;
mod buffer;
pub mod consts;
mod control;
mod engine;
mod event;
mod login;
mod naws;

pub use self::auth::{AuthMechanism, AuthState, NullAuth};
pub use self::buffer::ReceiveBuffer;
pub use self::control::Control;
pub use self::engine::TelnetEngine;
pub use self::event::{SessionState, TelnetEvent};
pub use self::naws::WindowSize;
