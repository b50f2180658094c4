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

//! # Telnex Telnet Client
//!
//! Event-driven Telnet client on top of the sans-IO protocol engine.
//! Connects over TCP (or any stream the application supplies), drives
//! option negotiation and the login handshake, and reports session
//! events to a [`TelnetHandler`].
//!
//! ## Quick Start
//!
//! ```no_run
//! use telnex_client::{ClientConfig, TelnetClient, TelnetConnection, TelnetHandler};
//! use async_trait::async_trait;
//! use std::sync::Arc;
//!
//! struct Shell;
//!
//! #[async_trait]
//! impl TelnetHandler for Shell {
//!     async fn on_message(&self, _conn: &TelnetConnection, text: &str) {
//!         print!("{text}");
//!     }
//!
//!     async fn on_login_required(&self, conn: &TelnetConnection) {
//!         let _ = conn.login("alice", "secret");
//!     }
//!
//!     async fn on_logged_in(&self, conn: &TelnetConnection) {
//!         let _ = conn.send_data("uptime\r\n");
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new("localhost", 23).with_window_size(80, 24);
//!     let mut client = TelnetClient::new(config);
//!     client.connect(Arc::new(Shell)).await?;
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod handler;

pub use client::{TelnetClient, TelnetConnection};
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use handler::TelnetHandler;

// Re-export the engine surface a client application interacts with.
pub use telnex_engine::{
    AuthMechanism, AuthState, Control, NullAuth, SessionState, TelnetEngine, TelnetEvent,
    WindowSize,
};
