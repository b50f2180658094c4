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

//! Telnet authentication mechanisms (RFC 1416).

use crate::consts;

/// Progress of an authentication exchange.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AuthState {
    /// More round trips are expected.
    Intermediate,
    /// The exchange completed successfully.
    Success,
    /// The exchange failed; the server may offer a retry.
    Failure,
}

/// A pluggable authentication mechanism.
///
/// The engine selects a mechanism by walking the `(type, modifier)`
/// pairs of an inbound `SEND` against its registry, then drives it with
/// every Authentication suboption payload until it reports a terminal
/// state. A mechanism that reached [`AuthState::Success`] is never
/// stepped again.
pub trait AuthMechanism: Send {
    /// The RFC 1416 authentication-type byte identifying this mechanism.
    fn code(&self) -> u8;

    /// Current state of the exchange.
    fn state(&self) -> AuthState;

    /// Advances the exchange with a raw Authentication suboption payload.
    ///
    /// `payload` starts with the Authentication option byte, exactly as
    /// it appeared between `IAC SB` and `IAC SE`. The returned bytes are
    /// transmitted verbatim when non-empty.
    fn step(&mut self, payload: &[u8]) -> Vec<u8>;
}

/// The built-in NULL mechanism.
///
/// Replies `IS NULL` to the first `SEND` and declares success. Installed
/// as the fallback when the server offers no mechanism the engine has a
/// registration for.
pub struct NullAuth {
    state: AuthState,
}

impl NullAuth {
    /// Creates a NULL mechanism awaiting the server's `SEND`.
    pub fn new() -> Self {
        NullAuth {
            state: AuthState::Intermediate,
        }
    }
}

impl Default for NullAuth {
    fn default() -> Self {
        NullAuth::new()
    }
}

impl AuthMechanism for NullAuth {
    fn code(&self) -> u8 {
        consts::auth::NULL
    }

    fn state(&self) -> AuthState {
        self.state
    }

    fn step(&mut self, payload: &[u8]) -> Vec<u8> {
        if payload.len() < 2 || payload[1] != consts::SEND {
            return Vec::new();
        }
        self.state = AuthState::Success;
        vec![
            consts::IAC,
            consts::SB,
            consts::option::AUTHENTICATION,
            consts::IS,
            consts::auth::NULL,
            consts::auth::CLIENT_TO_SERVER | consts::auth::HOW_ONE_WAY,
            consts::IAC,
            consts::SE,
        ]
    }
}
