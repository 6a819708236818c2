//! Command line tokenizer.
//!
//! Supports:
//! - Whitespace separated words
//! - Quote handling: `"string with spaces"`, `'literal string'`
//! - Backslash escapes inside double quotes (`\"`, `\\`)
//!
//! Quoted and unquoted parts that touch form a single word, so
//! `cat "my notes".md` reads one argument.

// =============================================================================
// Lexer
// =============================================================================

/// Lexer producing the words of one command line.
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn current_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self, c: char) {
        self.pos += c.len_utf8();
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.current_char() {
            if !c.is_whitespace() {
                break;
            }
            self.advance(c);
        }
    }

    fn read_single_quoted(&mut self, word: &mut String) {
        while let Some(c) = self.current_char() {
            self.advance(c);
            if c == '\'' {
                return;
            }
            word.push(c);
        }
        // Unclosed quote keeps what was read
    }

    fn read_double_quoted(&mut self, word: &mut String) {
        while let Some(c) = self.current_char() {
            self.advance(c);
            match c {
                '"' => return,
                '\\' => match self.current_char() {
                    Some(escaped @ ('"' | '\\')) => {
                        self.advance(escaped);
                        word.push(escaped);
                    }
                    _ => word.push('\\'),
                },
                _ => word.push(c),
            }
        }
    }

    fn read_word(&mut self) -> String {
        let mut word = String::new();

        while let Some(c) = self.current_char() {
            if c.is_whitespace() {
                break;
            }
            self.advance(c);
            match c {
                '\'' => self.read_single_quoted(&mut word),
                '"' => self.read_double_quoted(&mut word),
                _ => word.push(c),
            }
        }

        word
    }
}

impl Iterator for Lexer<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_whitespace();
        if self.pos >= self.input.len() {
            return None;
        }
        Some(self.read_word())
    }
}

/// Split a command line into words.
pub fn tokenize(input: &str) -> Vec<String> {
    Lexer::new(input).collect()
}

// =============================================================================
// Tests
// =============================================================================
