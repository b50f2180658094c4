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

use crate::consts;
use std::fmt::Formatter;

/// Control messages the application can send to the server.
///
/// Each kind maps to a single RFC 854 command byte, transmitted as
/// `IAC <command>`. A few of them are followed by a SYNC so the server
/// processes them out of the normal data flow.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Control {
    /// The server may continue to send data (half-duplex turnaround).
    GoAhead,
    /// Interrupt the running process, like Ctrl+C in most terminals.
    InterruptProcess,
    /// Probe whether the connection is still alive.
    AreYouThere,
    /// Suspend or resume output from the server.
    AbortOutput,
    /// Erase the last entered character.
    EraseCharacter,
    /// Erase the last entered line.
    EraseLine,
    /// The Break or Attention key.
    Break,
    /// End of file.
    EndOfFile,
    /// Suspend the running process, like Ctrl+Z in most terminals.
    Suspend,
    /// Abort the running process.
    Abort,
}

impl Control {
    /// RFC 854 command byte for this control message.
    pub fn byte(self) -> u8 {
        match self {
            Control::GoAhead => consts::GA,
            Control::InterruptProcess => consts::IP,
            Control::AreYouThere => consts::AYT,
            Control::AbortOutput => consts::AO,
            Control::EraseCharacter => consts::EC,
            Control::EraseLine => consts::EL,
            Control::Break => consts::BRK,
            Control::EndOfFile => consts::CEOF,
            Control::Suspend => consts::SUSP,
            Control::Abort => consts::ABORT,
        }
    }

    /// Whether the command is followed by a SYNC (urgent Data Mark).
    pub fn needs_sync(self) -> bool {
        matches!(
            self,
            Control::InterruptProcess | Control::AbortOutput | Control::AreYouThere
        )
    }
}

impl std::fmt::Display for Control {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Control::GoAhead => write!(f, "GoAhead"),
            Control::InterruptProcess => write!(f, "InterruptProcess"),
            Control::AreYouThere => write!(f, "AreYouThere"),
            Control::AbortOutput => write!(f, "AbortOutput"),
            Control::EraseCharacter => write!(f, "EraseCharacter"),
            Control::EraseLine => write!(f, "EraseLine"),
            Control::Break => write!(f, "Break"),
            Control::EndOfFile => write!(f, "EndOfFile"),
            Control::Suspend => write!(f, "Suspend"),
            Control::Abort => write!(f, "Abort"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_mapping_follows_rfc854() {
        assert_eq!(Control::GoAhead.byte(), 249);
        assert_eq!(Control::InterruptProcess.byte(), 244);
        assert_eq!(Control::AreYouThere.byte(), 246);
        assert_eq!(Control::AbortOutput.byte(), 245);
        assert_eq!(Control::EraseCharacter.byte(), 247);
        assert_eq!(Control::EraseLine.byte(), 248);
        assert_eq!(Control::Break.byte(), 243);
        assert_eq!(Control::EndOfFile.byte(), 236);
        assert_eq!(Control::Suspend.byte(), 237);
        assert_eq!(Control::Abort.byte(), 238);
    }

    #[test]
    fn sync_marks_the_interrupting_commands() {
        assert!(Control::InterruptProcess.needs_sync());
        assert!(Control::AbortOutput.needs_sync());
        assert!(Control::AreYouThere.needs_sync());
        assert!(!Control::GoAhead.needs_sync());
        assert!(!Control::Break.needs_sync());
        assert!(!Control::EraseLine.needs_sync());
    }
}
