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

//! Client event handler trait

use crate::{ClientError, TelnetConnection};
use async_trait::async_trait;

/// Telnet client event handler
///
/// Implement this trait to receive session events. All methods are
/// async and default to doing nothing, so a handler only spells out
/// what it cares about.
///
/// # Example
///
/// ```no_run
/// use telnex_client::{TelnetConnection, TelnetHandler};
/// use async_trait::async_trait;
///
/// struct Printer;
///
/// #[async_trait]
/// impl TelnetHandler for Printer {
///     async fn on_message(&self, _conn: &TelnetConnection, text: &str) {
///         print!("{text}");
///     }
///
///     async fn on_login_required(&self, conn: &TelnetConnection) {
///         let _ = conn.login("alice", "secret");
///     }
/// }
/// ```
#[async_trait]
pub trait TelnetHandler: Send + Sync + 'static {
    /// Called once the transport is up, before any negotiation output
    /// has been read back.
    async fn on_connected(&self, _conn: &TelnetConnection) {}

    /// Called with terminal output. ANSI sequences and carriage returns
    /// are passed through untouched.
    async fn on_message(&self, _conn: &TelnetConnection, _text: &str) {}

    /// Called when the server expects authentication and the engine has
    /// no usable credentials. Reply by calling
    /// [`TelnetConnection::login`] (or logging out).
    async fn on_login_required(&self, _conn: &TelnetConnection) {}

    /// Called when an authentication exchange failed. The connection
    /// stays open for another attempt.
    async fn on_login_failed(&self, _conn: &TelnetConnection) {}

    /// Called when the session is authenticated.
    async fn on_logged_in(&self, _conn: &TelnetConnection) {}

    /// Called when the session ends, by logout, close or transport drop.
    async fn on_logged_out(&self, _conn: &TelnetConnection) {}

    /// Called when the transport reports an error.
    async fn on_connection_error(&self, _conn: &TelnetConnection, _error: &ClientError) {}
}
