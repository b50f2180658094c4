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

use crate::auth::{AuthMechanism, AuthState, NullAuth};
use crate::buffer::ReceiveBuffer;
use crate::consts;
use crate::control::Control;
use crate::event::{SessionState, TelnetEvent};
use crate::login::{LoginAssist, Outcome};
use crate::naws::WindowSize;
use bytes::BytesMut;
use regex::Regex;
use std::collections::{BTreeMap, VecDeque};
use tracing::{debug, warn};

/// Stateful Telnet client protocol engine.
///
/// The engine sits between a byte-oriented transport and the
/// application. It is sans-IO: inbound bytes go in through
/// [`receive`](TelnetEngine::receive), application calls queue outbound
/// bytes, and the driver moves [`take_output`](TelnetEngine::take_output)
/// to the transport after every interaction. Nothing here blocks and
/// nothing aborts; malformed input is logged and skipped.
///
/// Negotiation follows RFC 855 with the RFC 854 refinements: redundant
/// `DO`/`DONT` acknowledgments are suppressed, and a FIFO set of
/// unacknowledged negotiations we transmitted breaks request/reply
/// loops.
pub struct TelnetEngine {
    buffer: ReceiveBuffer,
    /// Options the peer has asked us to perform, keyed by option code.
    modes: [bool; 256],
    /// Negotiations we sent and have not yet seen acknowledged.
    sent: VecDeque<(u8, u8)>,
    window: WindowSize,
    auths: BTreeMap<u8, Box<dyn AuthMechanism>>,
    active_auth: Option<Box<dyn AuthMechanism>>,
    null_auth_used: bool,
    skip_prompt_check: bool,
    assist: LoginAssist,
    state: SessionState,
    output: BytesMut,
    urgent: Option<u8>,
    events: Vec<TelnetEvent>,
}

impl TelnetEngine {
    /// Creates an engine in the [`SessionState::Disconnected`] state.
    ///
    /// The login and password patterns default to `ogin:\s*$` and
    /// `assword:\s*$`; no prompt pattern is set.
    pub fn new() -> Self {
        TelnetEngine {
            buffer: ReceiveBuffer::new(),
            modes: [false; 256],
            sent: VecDeque::new(),
            window: WindowSize::invalid(),
            auths: BTreeMap::new(),
            active_auth: None,
            null_auth_used: false,
            skip_prompt_check: false,
            assist: LoginAssist::new(),
            state: SessionState::Disconnected,
            output: BytesMut::new(),
            urgent: None,
            events: Vec::new(),
        }
    }

    // ===== Lifecycle hooks driven by the transport =====

    /// A transport connect has been initiated.
    pub fn connecting(&mut self) {
        self.state = SessionState::Connecting;
    }

    /// The transport came up. Announces the initial option set:
    /// `WILL Authentication`, `DO SuppressGoAhead`, `WILL Linemode`,
    /// `DO Status`, and `WILL NAWS` when the window size is valid.
    pub fn connected(&mut self) {
        self.state = SessionState::Connected;
        self.send_options();
    }

    /// The transport dropped out from under us.
    pub fn connection_lost(&mut self) {
        if self.state.is_connected() {
            self.state = SessionState::LoggedOut;
            self.events.push(TelnetEvent::LoggedOut);
        }
    }

    /// Appends inbound bytes and parses as many complete frames as
    /// possible. Returns the application events produced, in byte-stream
    /// order. Incomplete trailing frames are kept for the next call.
    pub fn receive(&mut self, data: &[u8]) -> Vec<TelnetEvent> {
        self.buffer.append(data);
        self.consume();
        self.take_events()
    }

    /// Drains events produced by operations outside of `receive`.
    pub fn take_events(&mut self) -> Vec<TelnetEvent> {
        std::mem::take(&mut self.events)
    }

    /// Drains the bytes queued for the transport.
    pub fn take_output(&mut self) -> BytesMut {
        self.output.split()
    }

    /// Drains the pending SYNC byte, to be sent as TCP urgent data where
    /// the transport supports it (and in-band where it does not).
    pub fn take_urgent(&mut self) -> Option<u8> {
        self.urgent.take()
    }

    // ===== Application operations =====

    /// Stores credentials for the login assistant and re-arms it, so an
    /// already-seen prompt is answered at its next appearance. May be
    /// called before or after a `LoginRequired` event.
    pub fn login(&mut self, username: &str, password: &str) {
        self.assist.set_credentials(username, password);
    }

    /// Writes application data verbatim. No CR/LF is appended. A no-op
    /// while not connected.
    pub fn send_data(&mut self, data: &str) {
        if !self.state.is_connected() {
            return;
        }
        let bytes = encode_text(data);
        self.output.extend_from_slice(&bytes);
    }

    /// Transmits `IAC <command>`, followed by a SYNC for the command
    /// kinds that request one.
    pub fn send_control(&mut self, control: Control) {
        self.send_command(&[consts::IAC, control.byte()]);
        if control.needs_sync() {
            self.send_sync();
        }
    }

    /// Queues the SYNC sequence: a Data Mark the transport should flush
    /// ahead of and send out-of-band. A no-op while not connected.
    pub fn send_sync(&mut self) {
        if !self.state.is_connected() {
            return;
        }
        self.urgent = Some(consts::DM);
    }

    /// Updates the client window size and drives the NAWS announcement:
    /// staying valid re-sends the dimensions (when the peer negotiated
    /// NAWS), turning valid announces `WILL NAWS`, turning invalid
    /// withdraws it with `WONT NAWS`.
    pub fn set_window_size(&mut self, cols: u16, rows: u16) {
        let was_valid = self.window.is_valid();
        self.window = WindowSize::new(cols, rows);

        if was_valid && self.window.is_valid() {
            self.send_window_size();
        } else if self.window.is_valid() {
            self.send_command(&[consts::IAC, consts::WILL, consts::option::NAWS]);
            // The peer may have negotiated NAWS while our size was
            // invalid; announce the dimensions right away in that case.
            self.send_window_size();
        } else if was_valid {
            self.send_command(&[consts::IAC, consts::WONT, consts::option::NAWS]);
        }
    }

    /// Requests a logout (RFC 727). The peer acknowledges with
    /// `WONT Logout`, which closes the connection.
    pub fn logout(&mut self) {
        self.send_command(&[consts::IAC, consts::DO, consts::option::LOGOUT]);
    }

    /// Ends the session immediately. The driver is expected to tear the
    /// transport down when it observes the state change.
    pub fn close(&mut self) {
        if !self.state.is_connected() {
            return;
        }
        self.state = SessionState::LoggedOut;
        self.events.push(TelnetEvent::LoggedOut);
    }

    // ===== Configuration =====

    /// Sets the pattern recognizing a login prompt, or disables it.
    pub fn set_login_pattern(&mut self, pattern: Option<Regex>) {
        self.assist.set_login_pattern(pattern);
    }

    /// Sets the pattern recognizing a password prompt, or disables it.
    pub fn set_password_pattern(&mut self, pattern: Option<Regex>) {
        self.assist.set_password_pattern(pattern);
    }

    /// Sets the pattern recognizing the shell prompt, or disables it.
    /// A match declares the session logged in.
    pub fn set_prompt_pattern(&mut self, pattern: Option<Regex>) {
        self.assist.set_prompt_pattern(pattern);
    }

    /// Sets the login pattern to a literal string match.
    pub fn set_login_string(&mut self, literal: &str) {
        self.set_login_pattern(Some(escaped(literal)));
    }

    /// Sets the password pattern to a literal string match.
    pub fn set_password_string(&mut self, literal: &str) {
        self.set_password_pattern(Some(escaped(literal)));
    }

    /// Sets the prompt pattern to a literal string match.
    pub fn set_prompt_string(&mut self, literal: &str) {
        self.set_prompt_pattern(Some(escaped(literal)));
    }

    /// Registers an authentication mechanism under its type code. The
    /// NULL mechanism is built in and needs no registration.
    pub fn register_auth(&mut self, mechanism: Box<dyn AuthMechanism>) {
        self.auths.insert(mechanism.code(), mechanism);
    }

    // ===== Accessors =====

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether we have acknowledged `DO <option>` from the peer, i.e.
    /// we perform the option.
    pub fn peer_enabled(&self, option: u8) -> bool {
        self.modes[option as usize]
    }

    /// The window size, while the peer has NAWS negotiated.
    pub fn window_size(&self) -> Option<WindowSize> {
        if self.modes[consts::option::NAWS as usize] {
            Some(self.window)
        } else {
            None
        }
    }

    /// True when both window dimensions are positive.
    pub fn is_valid_window_size(&self) -> bool {
        self.window.is_valid()
    }

    // ===== Outbound plumbing =====

    fn send_options(&mut self) {
        self.send_command(&[consts::IAC, consts::WILL, consts::option::AUTHENTICATION]);
        self.send_command(&[consts::IAC, consts::DO, consts::option::SGA]);
        self.send_command(&[consts::IAC, consts::WILL, consts::option::LINEMODE]);
        self.send_command(&[consts::IAC, consts::DO, consts::option::STATUS]);
        if self.window.is_valid() {
            self.send_command(&[consts::IAC, consts::WILL, consts::option::NAWS]);
        }
    }

    /// Queues a command sequence. Three-byte negotiations go through the
    /// sent-set: a pending identical pair means this emission is the
    /// acknowledgment of a crossed request and is dropped instead.
    fn send_command(&mut self, command: &[u8]) {
        if !self.state.is_connected() || command.is_empty() {
            return;
        }
        if command.len() == 3 {
            let (operation, option) = (command[1], command[2]);
            if self.already_sent(operation, option) {
                return;
            }
            self.add_sent(operation, option);
        }
        self.output.extend_from_slice(command);
    }

    fn add_sent(&mut self, operation: u8, option: u8) {
        self.sent.push_back((operation, option));
    }

    /// Removes the oldest matching pending negotiation, if any.
    fn already_sent(&mut self, operation: u8, option: u8) -> bool {
        if let Some(index) = self
            .sent
            .iter()
            .position(|&pair| pair == (operation, option))
        {
            self.sent.remove(index);
            return true;
        }
        false
    }

    fn send_window_size(&mut self) {
        if !self.modes[consts::option::NAWS as usize] || !self.window.is_valid() {
            return;
        }
        let mut command = Vec::with_capacity(9);
        command.extend_from_slice(&[consts::IAC, consts::SB, consts::option::NAWS]);
        self.window.encode(&mut command);
        command.extend_from_slice(&[consts::IAC, consts::SE]);
        self.send_command(&command);
    }

    // ===== Option negotiation =====

    /// RFC 854: requests to enter a mode we are already in are not
    /// acknowledged.
    fn reply_needed(&self, operation: u8, option: u8) -> bool {
        if operation == consts::DO && self.modes[option as usize] {
            return false;
        }
        if operation == consts::DONT && !self.modes[option as usize] {
            return false;
        }
        true
    }

    fn allow_option(&self, option: u8) -> bool {
        if option == consts::option::AUTHENTICATION
            || option == consts::option::SGA
            || option == consts::option::LINEMODE
            || option == consts::option::STATUS
            || option == consts::option::LOGOUT
            || option == consts::option::TTYPE
        {
            return true;
        }
        option == consts::option::NAWS && self.window.is_valid()
    }

    fn set_mode(&mut self, operation: u8, option: u8) {
        if operation != consts::DO && operation != consts::DONT {
            return;
        }
        self.modes[option as usize] = operation == consts::DO;
        if option == consts::option::NAWS && self.modes[consts::option::NAWS as usize] {
            self.send_window_size();
        }
    }

    // ===== Inbound parsing =====

    /// One full parse pass over the buffered stream. Every iteration
    /// consumes at least one byte or the loop exits, so malformed input
    /// cannot spin; the unconsumed suffix rolls back into the buffer.
    fn consume(&mut self) {
        let mut data = self.buffer.drain_all();
        let mut position = 0usize;
        let mut previous = usize::MAX;
        while previous != position && position < data.len() {
            previous = position;
            match data[position] {
                consts::DM => {
                    // Data Mark placeholder; the urgent notification is
                    // the transport's business.
                    debug!("data mark in stream");
                    position += 1;
                }
                consts::IAC => position += self.parse_iac(&data[position..]),
                _ => position += self.parse_plaintext(&data[position..]),
            }
        }
        if position < data.len() {
            self.buffer.push_front(data.split_off(position));
        }
    }

    /// Parses one IAC-introduced sequence; returns the bytes consumed,
    /// or zero when the sequence is still incomplete.
    fn parse_iac(&mut self, data: &[u8]) -> usize {
        debug_assert_eq!(data[0], consts::IAC);
        if data.len() < 2 {
            return 0;
        }
        let lead = data[1];

        // IAC IAC carries a literal 0xFF data byte.
        if lead == consts::IAC {
            self.handle_plain_run(&[consts::IAC]);
            return 2;
        }

        if is_operation(lead) {
            if data.len() < 3 {
                return 0;
            }
            let (operation, option) = (lead, data[2]);
            if operation == consts::WONT && option == consts::option::LOGOUT {
                self.close();
                return 3;
            }
            if operation == consts::DONT && option == consts::option::AUTHENTICATION {
                // The server waived authentication.
                if !self.assist.has_login_patterns() {
                    self.emit_logged_in();
                }
                self.null_auth_used = true;
            }
            if self.reply_needed(operation, option) {
                let allowed = self.allow_option(option);
                let reply = opposite(operation, allowed);
                self.send_command(&[consts::IAC, reply, option]);
                self.set_mode(operation, option);
            }
            return 3;
        }

        if lead == consts::SB {
            return self.parse_suboption(data);
        }

        if is_known_command(lead) {
            return 2;
        }

        warn!("unknown command 0x{:02X} after IAC", lead);
        2
    }

    /// Scans for the terminating `IAC SE` and dispatches the payload.
    /// Returns zero while the block is incomplete.
    fn parse_suboption(&mut self, data: &[u8]) -> usize {
        if data.len() < 4 {
            return 0;
        }
        let mut index = 2;
        while index + 1 < data.len() {
            if data[index] == consts::IAC && data[index + 1] == consts::SE {
                let payload = &data[2..index];
                self.dispatch_suboption(payload);
                return index + 2;
            }
            index += 1;
        }
        0
    }

    fn dispatch_suboption(&mut self, payload: &[u8]) {
        match payload.first() {
            Some(&consts::option::AUTHENTICATION) => self.parse_sub_auth(payload),
            Some(&consts::option::TTYPE) => self.parse_sub_ttype(payload),
            Some(&consts::option::NAWS) => {
                // A client does not receive window-size requests.
            }
            Some(&option) => warn!("unknown suboption {}", option),
            None => warn!("empty suboption block"),
        }
    }

    /// Authentication suboption (RFC 1416). Picks the first offered
    /// mechanism with a registration, falls back to the built-in NULL
    /// mechanism, and drives the active one to a terminal state.
    fn parse_sub_auth(&mut self, payload: &[u8]) {
        if self.state == SessionState::Connected {
            self.state = SessionState::Authenticating;
        }
        if self.active_auth.is_none() && payload.len() >= 2 && payload[1] == consts::SEND {
            let mut index = 2;
            while index < payload.len() {
                if let Some(mechanism) = self.auths.remove(&payload[index]) {
                    self.active_auth = Some(mechanism);
                    self.events.push(TelnetEvent::LoginRequired);
                    break;
                }
                // Skip the modifier byte of this (type, modifier) pair.
                index += 2;
            }
            if self.active_auth.is_none() {
                self.active_auth = Some(Box::new(NullAuth::new()));
                self.null_auth_used = true;
                if !self.assist.has_login_patterns() {
                    self.skip_prompt_check = true;
                }
            }
        }

        let Some(mut mechanism) = self.active_auth.take() else {
            return;
        };
        if mechanism.state() == AuthState::Success {
            // A successful exchange is terminal; never step it again.
            self.active_auth = Some(mechanism);
            return;
        }
        let reply = mechanism.step(payload);
        if !reply.is_empty() {
            self.send_command(&reply);
        }
        match mechanism.state() {
            AuthState::Failure => self.events.push(TelnetEvent::LoginFailed),
            AuthState::Success => {
                if !self.assist.has_login_patterns() {
                    self.emit_logged_in();
                }
                if !self.null_auth_used {
                    self.skip_prompt_check = true;
                }
            }
            AuthState::Intermediate => {}
        }
        self.active_auth = Some(mechanism);
    }

    /// Terminal Type suboption (RFC 1091). Always reports "UNKNOWN".
    fn parse_sub_ttype(&mut self, payload: &[u8]) {
        if payload.len() < 2 || payload[1] != consts::SEND {
            return;
        }
        let mut command = Vec::with_capacity(13);
        command.extend_from_slice(&[consts::IAC, consts::SB, consts::option::TTYPE, consts::IS]);
        command.extend_from_slice(b"UNKNOWN");
        command.extend_from_slice(&[consts::IAC, consts::SE]);
        self.send_command(&command);
    }

    /// Consumes one plaintext run, ended by IAC, NUL or the buffer end.
    /// A NUL terminates the run and is itself consumed.
    fn parse_plaintext(&mut self, data: &[u8]) -> usize {
        let limit = data
            .iter()
            .position(|&byte| byte == consts::IAC)
            .unwrap_or(data.len());
        let (length, consumed) = match data[..limit].iter().position(|&byte| byte == 0) {
            Some(index) => (index, index + 1),
            None => (limit, limit),
        };
        self.handle_plain_run(&data[..length]);
        consumed
    }

    /// Routes decoded text through the login assistant while it is
    /// armed, and surfaces it as a message either way.
    fn handle_plain_run(&mut self, bytes: &[u8]) {
        if bytes.is_empty() {
            return;
        }
        let text = decode_text(bytes);
        if !self.null_auth_used || self.skip_prompt_check {
            self.events.push(TelnetEvent::Message(text));
            return;
        }
        let outcomes = self.assist.observe(&text);
        for outcome in outcomes {
            match outcome {
                Outcome::Deliver(message) => self.events.push(TelnetEvent::Message(message)),
                Outcome::RequestCredentials => {
                    if self.state == SessionState::Connected {
                        self.state = SessionState::Authenticating;
                    }
                    self.events.push(TelnetEvent::LoginRequired);
                }
                Outcome::Transmit(credentials) => {
                    if self.state == SessionState::Connected {
                        self.state = SessionState::Authenticating;
                    }
                    if !credentials.is_empty() && self.state.is_connected() {
                        self.output.extend_from_slice(&credentials);
                    }
                }
                Outcome::PromptSeen => {
                    self.skip_prompt_check = true;
                    self.emit_logged_in();
                }
            }
        }
    }

    fn emit_logged_in(&mut self) {
        self.state = SessionState::LoggedIn;
        self.events.push(TelnetEvent::LoggedIn);
    }
}

impl Default for TelnetEngine {
    fn default() -> Self {
        TelnetEngine::new()
    }
}

fn is_operation(byte: u8) -> bool {
    matches!(byte, consts::WILL | consts::WONT | consts::DO | consts::DONT)
}

fn is_known_command(byte: u8) -> bool {
    matches!(
        byte,
        consts::CEOF
            | consts::SUSP
            | consts::ABORT
            | consts::SE
            | consts::NOP
            | consts::DM
            | consts::BRK
            | consts::IP
            | consts::AO
            | consts::AYT
            | consts::EC
            | consts::EL
            | consts::GA
    )
}

/// Reply table of RFC 855: an inbound request is answered with the
/// matching verb from our side. A `DONT` may not be answered `WILL`,
/// nor a `WONT` with `DO`.
fn opposite(operation: u8, positive: bool) -> u8 {
    match operation {
        consts::DO => {
            if positive {
                consts::WILL
            } else {
                consts::WONT
            }
        }
        consts::DONT => consts::WONT,
        consts::WILL => {
            if positive {
                consts::DO
            } else {
                consts::DONT
            }
        }
        consts::WONT => consts::DONT,
        _ => {
            debug_assert!(false, "opposite of a non-negotiation byte");
            consts::NOP
        }
    }
}

/// Compiles a literal into a pattern matching it verbatim. Escaping
/// cannot produce an invalid pattern.
fn escaped(literal: &str) -> Regex {
    Regex::new(&regex::escape(literal)).expect("escaped literal pattern")
}

/// Encodes text as locale 8-bit (Latin-1) the way the wire expects it;
/// characters outside the range degrade to '?'.
pub(crate) fn encode_text(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| {
            let code = ch as u32;
            if code <= 0xFF {
                code as u8
            } else {
                b'?'
            }
        })
        .collect()
}

/// Decodes locale 8-bit (Latin-1) bytes into text, losslessly.
pub(crate) fn decode_text(bytes: &[u8]) -> String {
    bytes.iter().map(|&byte| byte as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connected() -> TelnetEngine {
        let mut engine = TelnetEngine::new();
        engine.connecting();
        engine.connected();
        engine.take_output();
        engine
    }

    #[test]
    fn opposite_follows_the_reply_table() {
        assert_eq!(opposite(consts::DO, true), consts::WILL);
        assert_eq!(opposite(consts::DO, false), consts::WONT);
        assert_eq!(opposite(consts::DONT, true), consts::WONT);
        assert_eq!(opposite(consts::DONT, false), consts::WONT);
        assert_eq!(opposite(consts::WILL, true), consts::DO);
        assert_eq!(opposite(consts::WILL, false), consts::DONT);
        assert_eq!(opposite(consts::WONT, true), consts::DONT);
        assert_eq!(opposite(consts::WONT, false), consts::DONT);
    }

    #[test]
    fn echo_is_always_refused() {
        let mut engine = connected();
        engine.receive(&[consts::IAC, consts::DO, consts::option::ECHO]);
        assert_eq!(
            &engine.take_output()[..],
            &[consts::IAC, consts::WONT, consts::option::ECHO]
        );
    }

    #[test]
    fn sent_set_removal_is_fifo() {
        let mut engine = connected();
        engine.add_sent(consts::WILL, consts::option::NAWS);
        engine.add_sent(consts::WONT, consts::option::NAWS);
        engine.add_sent(consts::WILL, consts::option::NAWS);
        assert!(engine.already_sent(consts::WILL, consts::option::NAWS));
        let remaining: Vec<(u8, u8)> = engine.sent.iter().copied().collect();
        assert_eq!(
            remaining,
            vec![
                (consts::WONT, consts::option::NAWS),
                (consts::WILL, consts::option::NAWS)
            ]
        );
    }

    #[test]
    fn terminal_type_always_reports_unknown() {
        let mut engine = connected();
        engine.receive(&[
            consts::IAC,
            consts::SB,
            consts::option::TTYPE,
            consts::SEND,
            consts::IAC,
            consts::SE,
        ]);
        let mut expected = vec![consts::IAC, consts::SB, consts::option::TTYPE, consts::IS];
        expected.extend_from_slice(b"UNKNOWN");
        expected.extend_from_slice(&[consts::IAC, consts::SE]);
        assert_eq!(&engine.take_output()[..], &expected[..]);
    }

    #[test]
    fn unknown_suboption_is_discarded() {
        let mut engine = connected();
        let events = engine.receive(&[
            consts::IAC,
            consts::SB,
            200,
            1,
            2,
            3,
            consts::IAC,
            consts::SE,
            b'x',
        ]);
        assert_eq!(events, vec![TelnetEvent::Message("x".into())]);
        assert!(engine.take_output().is_empty());
    }

    #[test]
    fn escaped_iac_reaches_the_message_stream() {
        let mut engine = connected();
        let events = engine.receive(&[b'a', consts::IAC, consts::IAC, b'b']);
        let text: String = events
            .iter()
            .map(|event| match event {
                TelnetEvent::Message(message) => message.clone(),
                _ => String::new(),
            })
            .collect();
        assert_eq!(text, "a\u{FF}b");
    }

    #[test]
    fn nul_terminates_a_run_and_vanishes() {
        let mut engine = connected();
        let events = engine.receive(b"one\0two");
        assert_eq!(
            events,
            vec![
                TelnetEvent::Message("one".into()),
                TelnetEvent::Message("two".into()),
            ]
        );
    }

    #[test]
    fn unknown_command_is_skipped_with_the_stream_intact() {
        let mut engine = connected();
        let events = engine.receive(&[consts::IAC, 0x01, b'k']);
        assert_eq!(events, vec![TelnetEvent::Message("k".into())]);
    }

    #[test]
    fn operations_before_connect_are_dropped() {
        let mut engine = TelnetEngine::new();
        engine.send_data("hello");
        engine.send_control(Control::Break);
        engine.send_sync();
        engine.logout();
        assert!(engine.take_output().is_empty());
        assert!(engine.take_urgent().is_none());
    }

    #[test]
    fn text_codec_round_trips_latin1() {
        let bytes: Vec<u8> = (1..=255).collect();
        let text = decode_text(&bytes);
        assert_eq!(encode_text(&text), bytes);
        assert_eq!(encode_text("snowman \u{2603}"), b"snowman ?");
    }
}
