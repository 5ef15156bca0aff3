use num_bigint::BigInt;

use crate::{decoding::Error, Value, DEFAULT_MAX_DEPTH};

/// A strict bencode decoder.
///
/// Reads exactly one value out of a byte buffer by recursive descent. Nested
/// boundaries are tracked structurally: every nested parse advances the
/// shared cursor by exactly the bytes it consumed, and the parent continues
/// from there. The closing `e` of a container is never searched for in the
/// raw buffer, since byte strings may themselves contain an `e` byte.
#[derive(Debug)]
pub struct Decoder<'a> {
    source: &'a [u8],
    offset: usize,
    max_depth: usize,
}

impl<'ser> Decoder<'ser> {
    /// Create a new decoder over the given byte buffer.
    pub fn new(buffer: &'ser [u8]) -> Self {
        Decoder {
            source: buffer,
            offset: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Set the maximum nesting depth of the decoder.
    ///
    /// Input nesting drives recursion directly, so the higher the limit, the
    /// more stack space an attacker can make the decoder use. For untrusted
    /// input, set the bound as tight as your data allows.
    #[must_use]
    pub fn with_max_depth(mut self, new_max_depth: usize) -> Self {
        self.max_depth = new_max_depth;
        self
    }

    /// Decode the buffer as a single complete value.
    ///
    /// There is no partial result: the first violation anywhere in the
    /// structure aborts the whole decode, and a buffer holding anything but
    /// exactly one value is rejected.
    pub fn decode(mut self) -> Result<Value, Error> {
        let value = self.parse_value(0)?;
        if self.offset != self.source.len() {
            return Err(Error::TrailingBytes {
                offset: self.offset,
            });
        }
        Ok(value)
    }

    fn peek_byte(&self) -> Option<u8> {
        self.source.get(self.offset).copied()
    }

    fn take_chunk(&mut self, count: usize) -> Option<&'ser [u8]> {
        match self.offset.checked_add(count) {
            Some(end_pos) if end_pos <= self.source.len() => {
                let ret = &self.source[self.offset..end_pos];
                self.offset = end_pos;
                Some(ret)
            },
            _ => None,
        }
    }

    fn eof(&self) -> Error {
        Error::UnexpectedEof {
            offset: self.source.len(),
        }
    }

    /// Scan a decimal run (optionally signed) up to and including
    /// `terminator`, returning the run itself.
    ///
    /// The scanner enforces the canonical digit rules: at least one digit, no
    /// leading zero unless the run is the single digit `0`, and no `-0`.
    fn take_int(&mut self, signed: bool, terminator: u8) -> Result<&'ser [u8], Error> {
        enum State {
            Start,
            Sign,
            Zero,
            Digits,
        }

        let start = self.offset;
        let mut curpos = self.offset;
        let mut state = State::Start;
        let term: &'static str = if terminator == b'e' { "'e'" } else { "':'" };

        while curpos < self.source.len() {
            let b = self.source[curpos];
            match state {
                State::Start => {
                    state = match b {
                        b'-' if signed => State::Sign,
                        b'0' => State::Zero,
                        b'1'..=b'9' => State::Digits,
                        _ => {
                            let expected = if signed { "'-' or '0'..'9'" } else { "'0'..'9'" };
                            return Err(Error::invalid_integer(expected, b, curpos));
                        },
                    };
                },
                State::Sign => {
                    state = match b {
                        // rejects both `-0` and a bare `-`
                        b'1'..=b'9' => State::Digits,
                        _ => return Err(Error::invalid_integer("'1'..'9'", b, curpos)),
                    };
                },
                State::Zero => {
                    if b == terminator {
                        let run = &self.source[start..curpos];
                        self.offset = curpos + 1;
                        return Ok(run);
                    }
                    // a digit here would be a leading zero
                    return if b.is_ascii_digit() || terminator == b'e' {
                        Err(Error::invalid_integer(term, b, curpos))
                    } else {
                        Err(Error::malformed_delimiter(terminator, b, curpos))
                    };
                },
                State::Digits => {
                    if b == terminator {
                        let run = &self.source[start..curpos];
                        self.offset = curpos + 1;
                        return Ok(run);
                    }
                    if !b.is_ascii_digit() {
                        return if terminator == b'e' {
                            Err(Error::invalid_integer("'e' or '0'..'9'", b, curpos))
                        } else {
                            Err(Error::malformed_delimiter(terminator, b, curpos))
                        };
                    }
                },
            }
            curpos += 1;
        }

        Err(self.eof())
    }

    /// Parse one value starting at the cursor, dispatching on the leading
    /// byte. `depth` is the number of containers already entered.
    fn parse_value(&mut self, depth: usize) -> Result<Value, Error> {
        let offset = self.offset;
        let b = self.peek_byte().ok_or_else(|| self.eof())?;
        match b {
            b'i' => {
                self.offset += 1;
                self.parse_integer()
            },
            b'l' => {
                self.check_depth(depth, offset)?;
                self.offset += 1;
                self.parse_list(depth + 1)
            },
            b'd' => {
                self.check_depth(depth, offset)?;
                self.offset += 1;
                self.parse_dict(depth + 1)
            },
            b'0'..=b'9' => self.parse_byte_string().map(Value::Bytes),
            _ => Err(Error::UnknownTag {
                offset,
                found: b as char,
            }),
        }
    }

    fn check_depth(&self, depth: usize, offset: usize) -> Result<(), Error> {
        if depth >= self.max_depth {
            return Err(Error::DepthExceeded { offset });
        }
        Ok(())
    }

    /// Parse an integer body; the leading `i` has already been consumed.
    fn parse_integer(&mut self) -> Result<Value, Error> {
        let run = self.take_int(true, b'e')?;
        // Every byte of the run has already been examined by the scanner
        let int = BigInt::parse_bytes(run, 10).expect("run holds only a sign and digits");
        Ok(Value::Integer(int))
    }

    /// Parse a byte string; the cursor is on the first digit of the length
    /// prefix. A zero length (`0:`) is legal per BEP-3.
    fn parse_byte_string(&mut self) -> Result<Vec<u8>, Error> {
        let offset = self.offset;
        let run = self.take_int(false, b':')?;

        let mut declared: u64 = 0;
        for &digit in run {
            declared = declared
                .saturating_mul(10)
                .saturating_add(u64::from(digit - b'0'));
        }

        match usize::try_from(declared).ok().and_then(|len| self.take_chunk(len)) {
            Some(chunk) => Ok(chunk.to_vec()),
            None => Err(Error::LengthMismatch {
                offset,
                declared,
                available: self.source.len() - self.offset,
            }),
        }
    }

    /// Parse list elements; the opening `l` has already been consumed.
    fn parse_list(&mut self, depth: usize) -> Result<Value, Error> {
        let mut elements = Vec::new();
        loop {
            match self.peek_byte() {
                None => return Err(self.eof()),
                Some(b'e') => {
                    self.offset += 1;
                    return Ok(Value::List(elements));
                },
                Some(_) => elements.push(self.parse_value(depth)?),
            }
        }
    }

    /// Parse dictionary entries; the opening `d` has already been consumed.
    ///
    /// The strictly-ascending key order is checked as each key is parsed,
    /// against the previous key only; duplicates fail the same check.
    fn parse_dict(&mut self, depth: usize) -> Result<Value, Error> {
        let mut entries: Vec<(Vec<u8>, Value)> = Vec::new();
        loop {
            let key_offset = self.offset;
            match self.peek_byte() {
                None => return Err(self.eof()),
                Some(b'e') => {
                    self.offset += 1;
                    return Ok(Value::Dict(entries));
                },
                Some(b'0'..=b'9') => {
                    let key = self.parse_byte_string()?;
                    if let Some((previous, _)) = entries.last() {
                        if previous.as_slice() >= key.as_slice() {
                            return Err(Error::UnsortedKeys { offset: key_offset });
                        }
                    }
                    let value = self.parse_value(depth)?;
                    entries.push((key, value));
                },
                Some(found) => {
                    // keys must be byte strings
                    return Err(Error::UnknownTag {
                        offset: key_offset,
                        found: found as char,
                    });
                },
            }
        }
    }
}
