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

//! Negotiate About Window Size (RFC 1073).

use byteorder::{BigEndian, ByteOrder};
use bytes::BufMut;

/// Client window dimensions, in characters.
///
/// A size with a zero in either dimension is invalid; an invalid size
/// withdraws the NAWS announcement. The wire payload is four bytes in
/// network byte order: columns high, columns low, rows high, rows low.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WindowSize {
    /// Columns in the terminal window.
    pub cols: u16,
    /// Rows in the terminal window.
    pub rows: u16,
}

impl WindowSize {
    /// Creates a window size with the given columns and rows.
    pub fn new(cols: u16, rows: u16) -> Self {
        WindowSize { cols, rows }
    }

    /// An invalid size, as used before the application reports one.
    pub fn invalid() -> Self {
        WindowSize { cols: 0, rows: 0 }
    }

    /// True when both dimensions are positive.
    pub fn is_valid(&self) -> bool {
        self.cols > 0 && self.rows > 0
    }

    /// Encoded payload length. Always four bytes.
    pub fn len(&self) -> usize {
        4
    }

    /// Returns false; the payload is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Encodes the dimensions big-endian into `dst` and returns the
    /// number of bytes written.
    pub fn encode<B: BufMut>(&self, dst: &mut B) -> usize {
        let mut buf = [0u8; 4];
        BigEndian::write_u16(&mut buf[0..2], self.cols);
        BigEndian::write_u16(&mut buf[2..4], self.rows);
        dst.put_slice(&buf);
        buf.len()
    }
}

impl std::fmt::Display for WindowSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.cols, self.rows)
    }
}
