/// Hard cap on accumulated story text. The server is trusted to send short
/// narrative segments; the cap only bounds a misbehaving stream.
pub const MAX_STORY_BYTES: usize = 256 * 1024;

/// Incremental UTF-8 decoder for the story byte stream.
///
/// Chunk boundaries from the network do not respect character boundaries,
/// so up to three trailing bytes of an unfinished sequence are carried over
/// into the next `push`. Decoded output stops once the cap is reached.
pub struct ChunkDecoder {
    carry: Vec<u8>,
    decoded_bytes: usize,
    cap: usize,
    /// Set once the cap refused data, including the case where the byte
    /// budget has room left but the next character would not fit whole.
    saturated: bool,
}

impl Default for ChunkDecoder {
    fn default() -> Self {
        Self::with_cap(MAX_STORY_BYTES)
    }
}

impl ChunkDecoder {
    pub fn with_cap(cap: usize) -> Self {
        Self {
            carry: Vec::new(),
            decoded_bytes: 0,
            cap,
            saturated: false,
        }
    }

    /// Decode the next chunk of bytes. Returns the complete characters
    /// available so far; an empty string means the chunk only extended an
    /// unfinished sequence.
    pub fn push(&mut self, bytes: &[u8]) -> String {
        if self.at_capacity() {
            return String::new();
        }

        self.carry.extend_from_slice(bytes);

        let valid_len = match std::str::from_utf8(&self.carry) {
            Ok(_) => self.carry.len(),
            Err(e) => e.valid_up_to(),
        };

        // Only the validated prefix is inspected for char boundaries.
        let valid = match std::str::from_utf8(&self.carry[..valid_len]) {
            Ok(s) => s,
            Err(_) => return String::new(),
        };

        let mut take = valid_len.min(self.cap - self.decoded_bytes);
        // Never split a character at the cap. Whenever the cap truncates
        // the valid data, the decoder is saturated: a walked-back boundary
        // would otherwise leave `decoded_bytes` short of `cap` forever.
        while take > 0 && !valid.is_char_boundary(take) {
            take -= 1;
        }
        if take < valid_len {
            self.saturated = true;
        }

        let rest = self.carry.split_off(take);
        let chunk = String::from_utf8(std::mem::replace(&mut self.carry, rest))
            .unwrap_or_default();
        self.decoded_bytes += chunk.len();

        if self.at_capacity() {
            self.carry.clear();
        }

        chunk
    }

    /// True once the cap is reached; the caller should stop reading.
    pub fn at_capacity(&self) -> bool {
        self.saturated || self.decoded_bytes >= self.cap
    }

    /// Flush at end of stream. A truncated trailing sequence becomes a
    /// replacement character, matching lenient text decoding. Yields
    /// nothing once the cap has been hit.
    pub fn finish(self) -> String {
        if self.at_capacity() || self.carry.is_empty() {
            String::new()
        } else {
            String::from_utf8_lossy(&self.carry).into_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_plain_chunks_in_order() {
        let mut dec = ChunkDecoder::default();
        assert_eq!(dec.push(b"You enter a "), "You enter a ");
        assert_eq!(dec.push(b"dark cave.\n"), "dark cave.\n");
        assert_eq!(dec.finish(), "");
    }

    #[test]
    fn handles_utf8_split_across_chunks() {
        // "café" with the é split between reads.
        let mut dec = ChunkDecoder::default();
        assert_eq!(dec.push(&[b'c', b'a', b'f', 0xC3]), "caf");
        assert_eq!(dec.push(&[0xA9, b'!']), "é!");
        assert_eq!(dec.finish(), "");
    }

    #[test]
    fn truncated_tail_becomes_replacement_char() {
        let mut dec = ChunkDecoder::default();
        assert_eq!(dec.push(&[b'o', b'k', 0xE2, 0x82]), "ok");
        assert_eq!(dec.finish(), "\u{FFFD}");
    }

    #[test]
    fn stops_at_the_cap() {
        let mut dec = ChunkDecoder::with_cap(4);
        assert_eq!(dec.push(b"abcdef"), "abcd");
        assert!(dec.at_capacity());
        assert_eq!(dec.push(b"ghi"), "");
    }

    #[test]
    fn cap_never_splits_a_character() {
        // Cap lands in the middle of the two-byte é.
        let mut dec = ChunkDecoder::with_cap(4);
        assert_eq!(dec.push("abcé".as_bytes()), "abc");
        assert!(dec.at_capacity());
    }

    #[test]
    fn cap_inside_a_character_still_saturates() {
        // The walked-back boundary leaves decoded_bytes below the cap;
        // the decoder must still refuse everything that follows instead
        // of hoarding it and flushing it all at end of stream.
        let mut dec = ChunkDecoder::with_cap(4);
        assert_eq!(dec.push("abcé".as_bytes()), "abc");
        assert!(dec.at_capacity());

        for _ in 0..1000 {
            assert_eq!(dec.push(&[b'x'; 10]), "");
        }
        assert_eq!(dec.finish(), "");
    }
}
