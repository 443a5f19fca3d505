// src/decode/encoding.rs

use crate::constants::{ENCODING_SAMPLE_SIZE, UTF8_REPLACED_LABEL};
use chardetng::EncodingDetector;
use encoding_rs::{Encoding, REPLACEMENT, UTF_8};
use log::{debug, warn};

/// Text produced from raw bytes, with the label of the encoding used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub text: String,
    pub encoding: String,
}

/// Decodes bytes to text, never failing.
///
/// With `forced` set, that label is used. Otherwise a byte-order mark wins,
/// then valid UTF-8, then statistical detection over the first
/// [`ENCODING_SAMPLE_SIZE`] bytes. Undecodable sequences become U+FFFD.
///
/// A forced label that names no usable encoding falls back to UTF-8 with
/// replacement, and so does any UTF-8 decode that had to replace bytes. Both
/// are labelled `utf-8 (with errors replaced)`.
///
/// # Examples
///
/// ```
/// use docpage::decode::decode;
///
/// let decoded = decode("héllo".as_bytes(), None);
/// assert_eq!(decoded.text, "héllo");
/// assert_eq!(decoded.encoding, "utf-8");
///
/// let latin1 = decode(b"caf\xe9", Some("latin1"));
/// assert_eq!(latin1.text, "café");
/// assert_eq!(latin1.encoding, "windows-1252");
/// ```
pub fn decode(bytes: &[u8], forced: Option<&str>) -> Decoded {
    let encoding = match forced {
        Some(label) => match Encoding::for_label(label.trim().as_bytes()) {
            Some(encoding) if encoding != REPLACEMENT => encoding,
            _ => {
                warn!("Unknown encoding '{}', decoding as UTF-8 with replacement", label);
                return decode_utf8_lossy(bytes);
            }
        },
        None => detect(bytes),
    };

    let (text, used, had_errors) = encoding.decode(bytes);
    if had_errors && used == UTF_8 {
        debug!("Invalid UTF-8 sequences replaced");
        return Decoded {
            text: text.into_owned(),
            encoding: UTF8_REPLACED_LABEL.to_string(),
        };
    }
    if had_errors {
        debug!("Undecodable {} sequences replaced", used.name());
    }
    Decoded {
        text: text.into_owned(),
        encoding: used.name().to_lowercase(),
    }
}

fn decode_utf8_lossy(bytes: &[u8]) -> Decoded {
    Decoded {
        text: String::from_utf8_lossy(bytes).into_owned(),
        encoding: UTF8_REPLACED_LABEL.to_string(),
    }
}

/// Picks an encoding from the leading sample of `bytes`.
fn detect(bytes: &[u8]) -> &'static Encoding {
    let sample = &bytes[..bytes.len().min(ENCODING_SAMPLE_SIZE)];

    if let Some((encoding, _bom_len)) = Encoding::for_bom(sample) {
        return encoding;
    }

    // A sample cut in the middle of a character still counts as UTF-8.
    match std::str::from_utf8(sample) {
        Ok(_) => return UTF_8,
        Err(e) if e.error_len().is_none() => return UTF_8,
        Err(_) => {}
    }

    let mut detector = EncodingDetector::new();
    detector.feed(sample, true);
    let guess = detector.guess(None, true);
    debug!("Detected encoding {}", guess.name());
    guess
}
