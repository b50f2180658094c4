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

//! Wire constants for RFC 854 and the option RFCs this engine speaks.

/// Interpret As Command. Escapes every Telnet control sequence.
pub const IAC: u8 = 255;
/// Ask the peer to stop performing an option.
pub const DONT: u8 = 254;
/// Ask the peer to start performing an option.
pub const DO: u8 = 253;
/// Refuse to perform an option ourselves.
pub const WONT: u8 = 252;
/// Offer to perform an option ourselves.
pub const WILL: u8 = 251;
/// Suboption Begin.
pub const SB: u8 = 250;
/// Go Ahead.
pub const GA: u8 = 249;
/// Erase Line.
pub const EL: u8 = 248;
/// Erase Character.
pub const EC: u8 = 247;
/// Are You There.
pub const AYT: u8 = 246;
/// Abort Output.
pub const AO: u8 = 245;
/// Interrupt Process.
pub const IP: u8 = 244;
/// Break.
pub const BRK: u8 = 243;
/// Data Mark. Carried as the SYNC payload when sent urgently.
pub const DM: u8 = 242;
/// No Operation.
pub const NOP: u8 = 241;
/// Suboption End.
pub const SE: u8 = 240;
/// Abort process (RFC 1184 extension command).
pub const ABORT: u8 = 238;
/// Suspend process (RFC 1184 extension command).
pub const SUSP: u8 = 237;
/// End Of File (RFC 1184 extension command).
pub const CEOF: u8 = 236;

/// Suboption qualifier: the sender is stating a value.
pub const IS: u8 = 0;
/// Suboption qualifier: the sender requests a value.
pub const SEND: u8 = 1;

/// Telnet option codes this engine recognizes.
pub mod option {
    /// Echo (RFC 857). Always refused.
    pub const ECHO: u8 = 1;
    /// Suppress Go Ahead (RFC 858).
    pub const SGA: u8 = 3;
    /// Status (RFC 859).
    pub const STATUS: u8 = 5;
    /// Logout (RFC 727).
    pub const LOGOUT: u8 = 18;
    /// Terminal Type (RFC 1091). Always answered with "UNKNOWN".
    pub const TTYPE: u8 = 24;
    /// Negotiate About Window Size (RFC 1073).
    pub const NAWS: u8 = 31;
    /// Linemode (RFC 1184). Acknowledged only; no slave negotiation.
    pub const LINEMODE: u8 = 34;
    /// Authentication (RFC 1416).
    pub const AUTHENTICATION: u8 = 37;
}

/// Authentication suboption constants (RFC 1416).
pub mod auth {
    /// Authentication command: reply to a challenge.
    pub const REPLY: u8 = 2;
    /// Authentication command: account name exchange.
    pub const NAME: u8 = 3;

    /// The NULL authentication type.
    pub const NULL: u8 = 0;
    /// Kerberos version 4.
    pub const KERBEROS_V4: u8 = 1;
    /// Kerberos version 5.
    pub const KERBEROS_V5: u8 = 2;
    /// SPX.
    pub const SPX: u8 = 3;
    /// SRA.
    pub const SRA: u8 = 6;
    /// LOKI.
    pub const LOKI: u8 = 10;

    /// Modifier mask selecting the authenticating party.
    pub const WHO_MASK: u8 = 1;
    /// The client authenticates itself to the server.
    pub const CLIENT_TO_SERVER: u8 = 0;
    /// The server authenticates itself to the client.
    pub const SERVER_TO_CLIENT: u8 = 1;
    /// Modifier mask selecting the mutuality of the exchange.
    pub const HOW_MASK: u8 = 2;
    /// One-way authentication.
    pub const HOW_ONE_WAY: u8 = 0;
    /// Mutual authentication.
    pub const HOW_MUTUAL: u8 = 2;
}
