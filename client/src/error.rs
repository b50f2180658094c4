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

//! Client error types

use std::io;
use thiserror::Error;

/// Client result type
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors surfaced by the Telnet client, with stable kinds for the
/// common transport failures.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The connect attempt timed out
    #[error("connection timeout")]
    ConnectionTimeout,

    /// The peer refused the connection
    #[error("connection refused")]
    ConnectionRefused,

    /// The host could not be resolved
    #[error("host not found")]
    HostNotFound,

    /// The connection was closed by the peer
    #[error("connection closed by peer")]
    ConnectionClosed,

    /// There is no active connection to operate on
    #[error("not connected")]
    NotConnected,

    /// Any other I/O error
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<io::Error> for ClientError {
    fn from(error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::TimedOut => Self::ConnectionTimeout,
            io::ErrorKind::ConnectionRefused => Self::ConnectionRefused,
            io::ErrorKind::NotFound => Self::HostNotFound,
            io::ErrorKind::ConnectionReset
            | io::ErrorKind::ConnectionAborted
            | io::ErrorKind::BrokenPipe
            | io::ErrorKind::UnexpectedEof => Self::ConnectionClosed,
            _ => Self::Io(error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_map_to_stable_kinds() {
        let err: ClientError = io::Error::from(io::ErrorKind::ConnectionRefused).into();
        assert!(matches!(err, ClientError::ConnectionRefused));

        let err: ClientError = io::Error::from(io::ErrorKind::BrokenPipe).into();
        assert!(matches!(err, ClientError::ConnectionClosed));

        let err: ClientError = io::Error::from(io::ErrorKind::TimedOut).into();
        assert!(matches!(err, ClientError::ConnectionTimeout));
    }
}
