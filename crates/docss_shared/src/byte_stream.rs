use crate::errors::{CssError, CssResult};
use std::char::REPLACEMENT_CHARACTER;
use std::fmt::{Debug, Formatter};
use std::io::{self, Read, Seek, SeekFrom};
use std::{cmp, fmt};

pub const CHAR_LF: char = '\u{000A}';
pub const CHAR_CR: char = '\u{000D}';

/// Encoding defines the way the buffer stream is read, as what defines a "character".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Encoding {
    /// Stream is of single byte chars (0-255), every byte is a character
    #[default]
    ASCII,
    /// Stream is of UTF8 characters. Multi-byte sequences are decoded into a single code point
    UTF8,
}

/// Defines a single character/element in the stream. Note that characters are not the same as
/// bytes, since a single character can be multiple bytes in UTF8.
///
/// The end of the stream is denoted as a separate element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Character {
    /// Standard UTF character
    Ch(char),
    /// Stream buffer empty and no more data can be pulled from the source
    StreamEnd,
}

use Character::*;

/// Converts the given character to a char. The end of the stream is converted to 0x0000
impl From<&Character> for char {
    fn from(c: &Character) -> Self {
        match c {
            Ch(c) => *c,
            StreamEnd => 0x0000 as char,
        }
    }
}

impl From<Character> for char {
    fn from(c: Character) -> Self {
        char::from(&c)
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Ch(ch) => write!(f, "{ch}"),
            StreamEnd => write!(f, "StreamEnd"),
        }
    }
}

impl Character {
    /// Returns true when the character is a whitespace
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Ch(c) if c.is_whitespace())
    }

    /// Returns true when the character is an ascii digit
    pub fn is_numeric(&self) -> bool {
        matches!(self, Ch(c) if c.is_ascii_digit())
    }

    /// Returns true when the character is an ascii hex digit
    pub fn is_hex_digit(&self) -> bool {
        matches!(self, Ch(c) if c.is_ascii_hexdigit())
    }
}

/// Configuration structure for a bytestream.
#[derive(Clone, Debug)]
pub struct Config {
    /// Maximum size of the buffer window on a seekable source
    pub max_buffer_length: usize,
    /// Initial size of the buffer on a non-seekable source. It doubles every time it runs full.
    pub min_buffer_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_buffer_length: 64 * 1024,
            min_buffer_length: 1024,
        }
    }
}

/// Anything we can read from and seek in
pub trait SeekRead: Read + Seek {}

impl<T: Read + Seek> SeekRead for T {}

/// Where the bytes of the stream come from
enum Source<'src> {
    /// Random access source. The total length is known up front and the buffer is a window on it.
    Seekable(Box<dyn SeekRead + 'src>),
    /// Forward-only source (network, pipe, console). The buffer grows while we pull in more bytes.
    Streaming(Box<dyn Read + 'src>),
    /// All bytes are in the buffer, or the source has been closed
    Closed,
}

/// Random access byte buffer on top of a (seekable or non-seekable) source.
///
/// The stream owns its source. Hand over a `&mut reader` to keep ownership of the reader
/// with the caller, or the reader itself to have it dropped when the stream is closed.
pub struct ByteStream<'src> {
    /// Actual buffer in u8 bytes
    buffer: Vec<u8>,
    /// Position of the first byte of the buffer inside the source
    buffer_start: usize,
    /// Number of valid bytes in the buffer
    buffer_len: usize,
    /// Current position in the buffer
    buffer_pos: usize,
    /// Number of bytes in the source (as far as known for non-seekable sources)
    file_len: usize,
    /// The source we read our bytes from
    source: Source<'src>,
    /// Current encoding
    encoding: Encoding,
    // Configuration for the stream
    config: Config,
    /// First I/O error we encountered while pulling bytes from the source
    error: Option<io::Error>,
}

impl Debug for ByteStream<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteStream")
            .field("pos", &self.pos())
            .field("len", &self.file_len)
            .field("encoding", &self.encoding)
            .finish()
    }
}

impl ByteStream<'static> {
    /// Creates a stream on the given string. The stream decodes UTF8.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(data: &str) -> Self {
        let mut stream = Self::from_bytes(data.as_bytes());
        stream.set_encoding(Encoding::UTF8);
        stream
    }

    /// Creates a stream on a copy of the given bytes. Every byte is read as a single character
    /// until the encoding is changed.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            buffer: bytes.to_vec(),
            buffer_start: 0,
            buffer_len: bytes.len(),
            buffer_pos: 0,
            file_len: bytes.len(),
            source: Source::Closed,
            encoding: Encoding::ASCII,
            config: Config::default(),
            error: None,
        }
    }
}

impl<'src> ByteStream<'src> {
    /// Creates a stream on a seekable source with the default configuration
    pub fn from_seekable<R: Read + Seek + 'src>(reader: R) -> CssResult<Self> {
        Self::from_seekable_with_config(reader, Config::default())
    }

    /// Creates a stream on a seekable source. The buffer is sized to the source, up to
    /// `config.max_buffer_length` bytes.
    pub fn from_seekable_with_config<R: Read + Seek + 'src>(mut reader: R, config: Config) -> CssResult<Self> {
        let file_len = reader
            .seek(SeekFrom::End(0))
            .and_then(|len| reader.seek(SeekFrom::Start(0)).map(|_| len))
            .map_err(|e| CssError::fatal(&format!("cannot determine stream length: {e}")))?;
        let file_len = usize::try_from(file_len).map_err(|_| CssError::fatal("stream too large"))?;

        let mut stream = Self {
            buffer: vec![0; cmp::min(file_len, config.max_buffer_length)],
            buffer_start: 0,
            buffer_len: 0,
            buffer_pos: 0,
            file_len,
            source: Source::Seekable(Box::new(reader)),
            encoding: Encoding::ASCII,
            config,
            error: None,
        };

        stream.move_to(0);
        if let Some(e) = stream.error.take() {
            return Err(CssError::fatal(&format!("cannot read stream: {e}")));
        }

        if stream.buffer_len == stream.file_len {
            // Everything fits in the buffer, no need to keep the source around
            log::debug!("complete source of {} bytes buffered", stream.file_len);
            stream.close();
        }

        Ok(stream)
    }

    /// Creates a stream on a non-seekable source with the default configuration
    pub fn from_reader<R: Read + 'src>(reader: R) -> Self {
        Self::from_reader_with_config(reader, Config::default())
    }

    /// Creates a stream on a non-seekable source. Bytes are pulled in when needed.
    pub fn from_reader_with_config<R: Read + 'src>(reader: R, config: Config) -> Self {
        Self {
            buffer: vec![0; cmp::max(config.min_buffer_length, 1)],
            buffer_start: 0,
            buffer_len: 0,
            buffer_pos: 0,
            file_len: 0,
            source: Source::Streaming(Box::new(reader)),
            encoding: Encoding::ASCII,
            config,
            error: None,
        }
    }

    /// Reads the current character and advances to the next
    pub fn read(&mut self) -> Character {
        match self.encoding {
            Encoding::ASCII => self.read_byte().map_or(StreamEnd, |b| Ch(char::from(b))),
            Encoding::UTF8 => self.read_utf8(),
        }
    }

    /// Returns the current character without consuming it
    pub fn peek(&mut self) -> Character {
        let pos = self.pos();
        let ch = self.read();
        self.move_to(pos);

        ch
    }

    /// Current position in bytes
    pub fn pos(&self) -> usize {
        self.buffer_start + self.buffer_pos
    }

    /// Seeks to the given position in bytes. Positions beyond the end of the source are a fatal
    /// error.
    pub fn set_pos(&mut self, pos: usize) -> CssResult<()> {
        self.pull_until(pos);

        if pos > self.file_len {
            return Err(CssError::fatal(&format!(
                "buffer out of bounds access, position: {pos}"
            )));
        }

        self.move_to(pos);
        Ok(())
    }

    /// Returns the text between the byte positions `begin` and `end`. The current position is
    /// not changed.
    pub fn slice(&mut self, begin: usize, end: usize) -> String {
        let pos = self.pos();
        let mut s = String::new();

        self.move_to(begin);
        while self.pos() < end {
            match self.read() {
                Ch(c) => s.push(c),
                StreamEnd => break,
            }
        }

        self.move_to(pos);
        s
    }

    /// Returns the complete contents of the source as text
    pub fn contents(&mut self) -> String {
        self.pull_until(usize::MAX);
        self.slice(0, self.file_len)
    }

    /// Number of bytes in the source. For non-seekable sources, this is the number of bytes
    /// pulled in so far.
    pub fn len(&self) -> usize {
        self.file_len
    }

    pub fn is_empty(&self) -> bool {
        self.file_len == 0
    }

    /// Returns true when the stream is positioned at the end and no more bytes can be pulled in
    pub fn eof(&mut self) -> bool {
        self.pull_until(self.pos());
        self.pos() >= self.file_len
    }

    /// Closes the source. An owned reader is dropped, a borrowed one is released to the caller.
    pub fn close(&mut self) {
        self.source = Source::Closed;
    }

    /// Changes the encoding that the decoder uses to read the buffer. Note that this does not
    /// reset the position, so it might start on a non-valid character.
    pub fn set_encoding(&mut self, e: Encoding) {
        self.encoding = e;
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Returns (and clears) the I/O error that stopped the stream, if any
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    fn read_byte(&mut self) -> Option<u8> {
        if self.buffer_pos < self.buffer_len {
            let b = self.buffer[self.buffer_pos];
            self.buffer_pos += 1;
            return Some(b);
        }

        if self.pos() < self.file_len {
            // Seekable source with the position outside the current window
            self.move_to(self.pos());
            if self.buffer_pos < self.buffer_len {
                let b = self.buffer[self.buffer_pos];
                self.buffer_pos += 1;
                return Some(b);
            }
            return None;
        }

        if self.read_next_chunk() > 0 {
            let b = self.buffer[self.buffer_pos];
            self.buffer_pos += 1;
            return Some(b);
        }

        None
    }

    /// Decodes a 2, 3 or 4 byte sequence into a single code point, based on the high bits of the
    /// leading byte. Stray continuation bytes are skipped.
    fn read_utf8(&mut self) -> Character {
        let first = loop {
            match self.read_byte() {
                None => return StreamEnd,
                Some(b) if b >= 0x80 && b & 0xC0 != 0xC0 => continue,
                Some(b) => break b,
            }
        };

        let (width, mut cp) = match first {
            b if b < 0x80 => return Ch(char::from(b)),
            b if b & 0xF0 == 0xF0 => (4, u32::from(b & 0x07)),
            b if b & 0xE0 == 0xE0 => (3, u32::from(b & 0x0F)),
            b => (2, u32::from(b & 0x1F)),
        };

        for _ in 1..width {
            match self.read_byte() {
                Some(b) => cp = (cp << 6) | u32::from(b & 0x3F),
                None => return Ch(REPLACEMENT_CHARACTER),
            }
        }

        Ch(char::from_u32(cp).unwrap_or(REPLACEMENT_CHARACTER))
    }

    /// Moves to a position that is known to be valid. I/O problems are recorded and leave the
    /// stream at its end.
    fn move_to(&mut self, pos: usize) {
        self.pull_until(pos);

        if pos >= self.buffer_start {
            let offset = pos - self.buffer_start;
            // The end of the buffer is a valid position when nothing follows it
            let at_end = offset == self.buffer_len
                && (!matches!(self.source, Source::Seekable(_)) || pos == self.file_len);
            if offset < self.buffer_len || at_end {
                self.buffer_pos = offset;
                return;
            }
        }

        if let Source::Seekable(reader) = &mut self.source {
            log::debug!("refilling buffer window at position {pos}");

            let result = reader
                .seek(SeekFrom::Start(pos as u64))
                .and_then(|_| fill(reader, &mut self.buffer));
            match result {
                Ok(len) => {
                    self.buffer_start = pos;
                    self.buffer_len = len;
                    self.buffer_pos = 0;
                    return;
                }
                Err(e) => {
                    log::warn!("cannot refill buffer: {e}");
                    self.error.get_or_insert(e);
                }
            }
        }

        // Make pos() return the length of the source, the buffer stays intact
        self.buffer_pos = self.file_len.saturating_sub(self.buffer_start);
    }

    /// Pulls chunks from a non-seekable source until the given position is inside the buffer
    fn pull_until(&mut self, pos: usize) {
        if matches!(self.source, Source::Streaming(_)) {
            while pos >= self.file_len && self.read_next_chunk() > 0 {}
        }
    }

    /// Reads the next chunk of a non-seekable source into the buffer, doubling the buffer when
    /// it is full. Returns the number of bytes read.
    fn read_next_chunk(&mut self) -> usize {
        if !matches!(self.source, Source::Streaming(_)) {
            return 0;
        }

        if self.buffer.len() == self.buffer_len {
            let new_len = cmp::max(self.buffer.len() * 2, self.config.min_buffer_length);
            log::debug!("growing stream buffer from {} to {} bytes", self.buffer.len(), new_len);
            self.buffer.resize(new_len, 0);
        }

        let Source::Streaming(reader) = &mut self.source else {
            return 0;
        };

        loop {
            match reader.read(&mut self.buffer[self.buffer_len..]) {
                Ok(0) => {
                    // Nothing more to read, the source is done
                    self.source = Source::Closed;
                    return 0;
                }
                Ok(n) => {
                    self.buffer_len += n;
                    self.file_len = self.buffer_len;
                    return n;
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    log::warn!("cannot read from stream: {e}");
                    self.error.get_or_insert(e);
                    self.source = Source::Closed;
                    return 0;
                }
            }
        }
    }
}

/// Reads from the reader until the buffer is full or the reader is exhausted
fn fill(reader: &mut Box<dyn SeekRead + '_>, buffer: &mut [u8]) -> io::Result<usize> {
    let mut len = 0;
    while len < buffer.len() {
        match reader.read(&mut buffer[len..]) {
            Ok(0) => break,
            Ok(n) => len += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    Ok(len)
}

/// Location holds the start position of the given element in the data source
#[derive(Clone, Default, PartialEq, Eq, derive_more::Display)]
#[display("{line}:{column}")]
pub struct Location {
    /// Line number, starting with 1
    pub line: usize,
    /// Column number, starting with 0
    pub column: usize,
    /// Byte offset, starting with 0
    pub offset: usize,
    /// Character offset, starting with 0
    pub char_offset: usize,
}

impl Location {
    /// Create a new Location
    pub fn new(line: usize, column: usize, offset: usize, char_offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
            char_offset,
        }
    }
}

impl Debug for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}:{})", self.line, self.column)
    }
}
