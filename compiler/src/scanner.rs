use std::{iter::Peekable, str::Chars};

use crate::pos::BytePos;

/// Character cursor over a source buffer that keeps track of the byte offset
/// and line of the next unread character.
pub struct Scanner<'a> {
    pos: BytePos,
    line: usize,
    buf: Peekable<Chars<'a>>,
}

impl<'a> Scanner<'a> {
    pub fn new(buf: &'a str) -> Scanner<'a> {
        Scanner {
            pos: BytePos::default(),
            line: 1,
            buf: buf.chars().peekable(),
        }
    }

    pub fn pos(&self) -> BytePos {
        self.pos
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn next(&mut self) -> Option<char> {
        let next = self.buf.next();
        if let Some(c) = next {
            self.pos = self.pos.shift(c);
            if c == '\n' {
                self.line += 1;
            }
        }

        next
    }

    pub fn peek(&mut self) -> Option<char> {
        self.buf.peek().copied()
    }

    /// Consumes the longest run of characters matching `f`.
    pub fn consume_while<F>(&mut self, f: F) -> String
    where
        F: Fn(char) -> bool,
    {
        let mut run = String::new();
        while let Some(ch) = self.peek() {
            if !f(ch) {
                break;
            }
            self.next();
            run.push(ch);
        }

        run
    }

    #[cfg(test)]
    fn assert_next(&mut self, pos: u32, c: Option<char>) {
        assert_eq!(self.pos.0, pos);
        assert_eq!(self.peek(), c);
        assert_eq!(self.next(), c);
    }
}
