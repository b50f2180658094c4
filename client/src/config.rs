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

//! Client configuration

use regex::Regex;
use std::time::Duration;

/// Telnet client configuration
///
/// The three patterns configure the login assistant; see the engine
/// documentation for the handshake they drive. `login_pattern` and
/// `password_pattern` default to the classic `ogin:`/`assword:` prompt
/// suffixes and can be set to `None` when the server authenticates
/// through a mechanism instead.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Server hostname or IP address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Connection timeout
    pub connect_timeout: Duration,

    /// Pattern recognizing a login prompt
    pub login_pattern: Option<Regex>,

    /// Pattern recognizing a password prompt
    pub password_pattern: Option<Regex>,

    /// Pattern recognizing the shell prompt; a match declares the
    /// session logged in
    pub prompt_pattern: Option<Regex>,

    /// Initial window size in characters, for the NAWS announcement
    pub window_size: Option<(u16, u16)>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 23,
            connect_timeout: Duration::from_secs(30),
            login_pattern: Some(Regex::new(r"ogin:\s*$").expect("default login pattern")),
            password_pattern: Some(Regex::new(r"assword:\s*$").expect("default password pattern")),
            prompt_pattern: None,
            window_size: None,
        }
    }
}

impl ClientConfig {
    /// Create a new client configuration with the given host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Set the connection timeout
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set or clear the login prompt pattern
    pub fn with_login_pattern(mut self, pattern: Option<Regex>) -> Self {
        self.login_pattern = pattern;
        self
    }

    /// Set or clear the password prompt pattern
    pub fn with_password_pattern(mut self, pattern: Option<Regex>) -> Self {
        self.password_pattern = pattern;
        self
    }

    /// Set or clear the shell prompt pattern
    pub fn with_prompt_pattern(mut self, pattern: Option<Regex>) -> Self {
        self.prompt_pattern = pattern;
        self
    }

    /// Set the initial window size in characters
    pub fn with_window_size(mut self, cols: u16, rows: u16) -> Self {
        self.window_size = Some((cols, rows));
        self
    }

    /// Get the server address as a string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
