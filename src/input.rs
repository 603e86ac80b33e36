// raw stdin bytes are queued in a circular buffer and decoded into key presses once per frame,
// every press is reported exactly once
use circular_buffer::CircularBuffer;

use crate::grid::Direction;

type InputBuffer = CircularBuffer<1024, u8>; // 1024 bytes in input buffer

const ESC: u8 = 27;
const CSI: u8 = 91; // '['
const CTRL_C: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Arrow(Direction),
    /// A letter key, lower-cased.
    Char(char),
    Enter,
    Space,
    Quit,
}

impl Key {
    /// Player two's W/A/S/D keys.
    pub fn wasd_direction(&self) -> Option<Direction> {
        match self {
            Key::Char('w') => Some(Direction::Up),
            Key::Char('s') => Some(Direction::Down),
            Key::Char('a') => Some(Direction::Left),
            Key::Char('d') => Some(Direction::Right),
            _ => None,
        }
    }
}

enum Sequence {
    Incomplete,
    Complete { len: usize, final_byte: u8 },
    Malformed { len: usize },
}

#[derive(Debug)]
pub struct KeyDecoder {
    input_buffer: InputBuffer,
}

impl KeyDecoder {
    pub fn new() -> Self {
        KeyDecoder {
            input_buffer: InputBuffer::new(),
        }
    }

    pub fn push(&mut self, key: u8) {
        // if the buffer is full, ignore the input
        if self.input_buffer.is_full() {
            return;
        }
        self.input_buffer.push_back(key);
    }

    fn discard(&mut self, len: usize) {
        for _ in 0..len {
            self.input_buffer.pop_front();
        }
    }

    // the buffer front holds `ESC [`: parameter and intermediate bytes run up to a final byte
    fn scan_csi(&self) -> Sequence {
        let mut i = 2;
        loop {
            match self.input_buffer.nth_front(i) {
                None => return Sequence::Incomplete,
                Some(&(0x20..=0x3F)) => i += 1,
                Some(&final_byte @ 0x40..=0x7E) => {
                    return Sequence::Complete {
                        len: i + 1,
                        final_byte,
                    }
                }
                Some(_) => return Sequence::Malformed { len: i },
            }
        }
    }

    /// Decodes every complete key press received so far. A partial escape
    /// sequence stays buffered until the rest of it arrives.
    pub fn drain(&mut self) -> Vec<Key> {
        let mut keys = Vec::new();
        while let Some(&byte) = self.input_buffer.front() {
            if byte == ESC {
                // arrows keys start with 27 and 91, then optional parameters and a final letter
                match self.input_buffer.nth_front(1) {
                    None => break,
                    Some(&CSI) => match self.scan_csi() {
                        Sequence::Incomplete => {
                            if !self.input_buffer.is_full() {
                                break;
                            }
                            // a sequence that can never finish
                            self.input_buffer.clear();
                        }
                        Sequence::Complete { len, final_byte } => {
                            // modifiers (shift, ctrl, alt) only add parameters
                            let arrow = match final_byte {
                                b'A' => Some(Direction::Up),
                                b'B' => Some(Direction::Down),
                                b'C' => Some(Direction::Right),
                                b'D' => Some(Direction::Left),
                                _ => None, // not an arrow
                            };
                            if let Some(direction) = arrow {
                                keys.push(Key::Arrow(direction));
                            }
                            self.discard(len);
                        }
                        Sequence::Malformed { len } => self.discard(len),
                    },
                    Some(_) => {
                        // a lone escape, drop it
                        self.input_buffer.pop_front();
                    }
                }
                continue;
            }

            self.input_buffer.pop_front();
            let key = match byte {
                CTRL_C => Some(Key::Quit),
                b'\r' | b'\n' => Some(Key::Enter),
                b' ' => Some(Key::Space),
                b'q' | b'Q' => Some(Key::Quit),
                b'a'..=b'z' | b'A'..=b'Z' => Some(Key::Char(byte.to_ascii_lowercase() as char)),
                _ => None,
            };
            if let Some(key) = key {
                keys.push(key);
            }
        }
        keys
    }
}
