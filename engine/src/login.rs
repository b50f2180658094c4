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

//! Regex-driven login assistant.
//!
//! Watches plaintext output for login, password and shell-prompt
//! patterns and decides when to inject stored credentials. Patterns
//! match each plaintext run independently; a prompt that straddles two
//! network reads is not recognized, so callers with chunk-sensitive
//! servers should widen their patterns rather than anchor them tightly.

use crate::engine::encode_text;
use regex::Regex;

/// What the engine should do with a plaintext run, in order.
#[derive(Debug, PartialEq)]
pub(crate) enum Outcome {
    /// Surface the text as a message event.
    Deliver(String),
    /// Ask the application for (new) credentials.
    RequestCredentials,
    /// Write these bytes to the transport.
    Transmit(Vec<u8>),
    /// The shell prompt matched; the session is logged in.
    PromptSeen,
}

/// Credential injection state machine.
///
/// The two-phase flow mirrors interactive use: the first time a login
/// or password prompt appears (or any time it reappears after we have
/// already answered it), the prompt is surfaced and fresh credentials
/// are requested; once credentials are stored, the next prompt is
/// answered on the wire.
pub(crate) struct LoginAssist {
    login_re: Option<Regex>,
    password_re: Option<Regex>,
    prompt_re: Option<Regex>,
    username: Vec<u8>,
    password: Vec<u8>,
    first_try: bool,
    tried_login: bool,
    tried_password: bool,
}

impl LoginAssist {
    pub(crate) fn new() -> Self {
        LoginAssist {
            login_re: Some(Regex::new(r"ogin:\s*$").expect("default login pattern")),
            password_re: Some(Regex::new(r"assword:\s*$").expect("default password pattern")),
            prompt_re: None,
            username: Vec::new(),
            password: Vec::new(),
            first_try: true,
            tried_login: false,
            tried_password: false,
        }
    }

    /// Stores credentials and re-arms the injection flags.
    pub(crate) fn set_credentials(&mut self, username: &str, password: &str) {
        self.username = encode_text(username);
        self.wipe_password();
        self.password = encode_text(password);
        self.tried_login = false;
        self.tried_password = false;
    }

    pub(crate) fn set_login_pattern(&mut self, pattern: Option<Regex>) {
        self.login_re = pattern;
    }

    pub(crate) fn set_password_pattern(&mut self, pattern: Option<Regex>) {
        self.password_re = pattern;
    }

    pub(crate) fn set_prompt_pattern(&mut self, pattern: Option<Regex>) {
        self.prompt_re = pattern;
    }

    /// True when a login or password pattern is configured. With neither
    /// present the server is trusted to admit us without a challenge.
    pub(crate) fn has_login_patterns(&self) -> bool {
        self.login_re.is_some() || self.password_re.is_some()
    }

    /// Examines one plaintext run and returns the actions to take.
    pub(crate) fn observe(&mut self, text: &str) -> Vec<Outcome> {
        let mut out = Vec::new();

        if hit(&self.prompt_re, text) {
            out.push(Outcome::PromptSeen);
            out.push(Outcome::Deliver(text.to_owned()));
            return out;
        }

        if hit(&self.login_re, text) {
            let mut deliver = true;
            if self.first_try || self.tried_login {
                // Surface the prompt and ask for a (new) login.
                out.push(Outcome::Deliver(text.to_owned()));
                out.push(Outcome::RequestCredentials);
                self.first_try = false;
                deliver = false;
            }
            if !self.tried_login {
                out.push(Outcome::Transmit(self.username.clone()));
                self.tried_login = true;
            }
            if deliver {
                out.push(Outcome::Deliver(text.to_owned()));
            }
            return out;
        }

        if hit(&self.password_re, text) {
            let mut deliver = true;
            if self.first_try || self.tried_password {
                out.push(Outcome::Deliver(text.to_owned()));
                out.push(Outcome::RequestCredentials);
                self.first_try = false;
                deliver = false;
            }
            if !self.tried_password {
                out.push(Outcome::Transmit(self.password.clone()));
                self.tried_password = true;
                // The password is not kept around once answered.
                self.wipe_password();
            }
            if deliver {
                out.push(Outcome::Deliver(text.to_owned()));
            }
            return out;
        }

        out.push(Outcome::Deliver(text.to_owned()));
        out
    }

    fn wipe_password(&mut self) {
        for byte in self.password.iter_mut() {
            *byte = b' ';
        }
        self.password.clear();
    }
}

fn hit(pattern: &Option<Regex>, text: &str) -> bool {
    pattern.as_ref().is_some_and(|re| re.is_match(text))
}
