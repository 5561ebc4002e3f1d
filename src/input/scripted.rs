//! Scripted input
//!
//! Replays a fixed byte sequence as keystrokes. Closes when drained.

use std::collections::VecDeque;

use async_trait::async_trait;

use super::InputSource;

#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    pending: VecDeque<u8>,
}

impl ScriptedInput {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            pending: bytes.into().into(),
        }
    }

    /// Queue more keystrokes behind the pending ones.
    pub fn push(&mut self, bytes: &[u8]) {
        self.pending.extend(bytes.iter().copied());
    }

    /// Keystrokes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

impl From<&str> for ScriptedInput {
    fn from(s: &str) -> Self {
        Self::new(s.as_bytes().to_vec())
    }
}

#[async_trait]
impl InputSource for ScriptedInput {
    async fn read_char(&mut self) -> Option<u8> {
        self.pending.pop_front()
    }
}
