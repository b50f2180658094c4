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

use bytes::BytesMut;
use std::collections::VecDeque;

/// Inbound chunk FIFO with rollback support.
///
/// Network reads land here chunk by chunk. A parse pass drains the whole
/// buffer into one contiguous view; whatever trails behind the last
/// complete frame is pushed back to the head so the next pass sees it
/// before any newly appended bytes.
#[derive(Debug)]
pub struct ReceiveBuffer {
    chunks: VecDeque<BytesMut>,
    available: usize,
}

impl ReceiveBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        ReceiveBuffer {
            chunks: VecDeque::new(),
            available: 0,
        }
    }

    /// Appends a freshly received chunk at the tail.
    pub fn append(&mut self, chunk: &[u8]) {
        if chunk.is_empty() {
            return;
        }
        self.available += chunk.len();
        self.chunks.push_back(BytesMut::from(chunk));
    }

    /// Re-inserts an unconsumed suffix at the head of the queue.
    pub fn push_front(&mut self, chunk: BytesMut) {
        if chunk.is_empty() {
            return;
        }
        self.available += chunk.len();
        self.chunks.push_front(chunk);
    }

    /// Concatenates and clears all buffered chunks.
    pub fn drain_all(&mut self) -> BytesMut {
        let mut data = BytesMut::with_capacity(self.available);
        while let Some(chunk) = self.chunks.pop_front() {
            data.extend_from_slice(&chunk);
        }
        self.available = 0;
        data
    }

    /// Number of bytes currently buffered.
    pub fn len(&self) -> usize {
        self.available
    }

    /// Returns true if no bytes are buffered.
    pub fn is_empty(&self) -> bool {
        self.available == 0
    }
}

impl Default for ReceiveBuffer {
    fn default() -> Self {
        ReceiveBuffer::new()
    }
}
