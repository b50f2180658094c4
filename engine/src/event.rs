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

/// Events the engine surfaces to the application, in byte-stream order.
#[derive(Clone, Debug, PartialEq)]
pub enum TelnetEvent {
    /// The server expects authentication and no usable credentials are
    /// stored. Reply by calling `login` (or `logout` to give up).
    LoginRequired,
    /// An authentication exchange failed. The connection stays open so
    /// new credentials can be tried.
    LoginFailed,
    /// The session is authenticated, either through an auth mechanism,
    /// a matched prompt pattern, or the server declining authentication.
    LoggedIn,
    /// The session ended.
    LoggedOut,
    /// Terminal output. Carriage returns and ANSI sequences are passed
    /// through untouched.
    Message(String),
}

/// Lifecycle of a Telnet session.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SessionState {
    /// No transport.
    Disconnected,
    /// Transport connect in flight.
    Connecting,
    /// Transport open; option negotiation under way.
    Connected,
    /// An auth mechanism is active or the login handshake is running.
    Authenticating,
    /// Authenticated.
    LoggedIn,
    /// The session ended, by logout, close or transport drop.
    LoggedOut,
}

impl SessionState {
    /// True while the transport is open.
    pub fn is_connected(&self) -> bool {
        matches!(
            self,
            SessionState::Connected | SessionState::Authenticating | SessionState::LoggedIn
        )
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionState::Disconnected => write!(f, "Disconnected"),
            SessionState::Connecting => write!(f, "Connecting"),
            SessionState::Connected => write!(f, "Connected"),
            SessionState::Authenticating => write!(f, "Authenticating"),
            SessionState::LoggedIn => write!(f, "LoggedIn"),
            SessionState::LoggedOut => write!(f, "LoggedOut"),
        }
    }
}
