// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::{any::Any, fmt};

/// Type-erased per-point value column.
pub(crate) trait ErasedChannel: Any + Send + Sync {
    fn push_default(&mut self);
    fn len(&self) -> usize;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Values of one named property, one per point.
pub(crate) struct Channel<V> {
    default: V,
    pub(crate) values: Vec<V>,
}

impl<V: Clone + Send + Sync + 'static> Channel<V> {
    pub(crate) fn filled(default: V, len: usize) -> Self {
        Channel {
            values: vec![default.clone(); len],
            default,
        }
    }
}

impl<V: Clone + Send + Sync + 'static> ErasedChannel for Channel<V> {
    fn push_default(&mut self) {
        self.values.push(self.default.clone());
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl fmt::Debug for dyn ErasedChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Channel(len = {})", self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_default_uses_stored_default() {
        let mut channel = Channel::filled(7u8, 2);
        channel.push_default();
        assert_eq!(channel.values, vec![7, 7, 7]);

        let erased: &dyn ErasedChannel = &channel;
        assert_eq!(erased.len(), 3);
        assert!(erased.as_any().downcast_ref::<Channel<u8>>().is_some());
        assert!(erased.as_any().downcast_ref::<Channel<u16>>().is_none());
    }
}
