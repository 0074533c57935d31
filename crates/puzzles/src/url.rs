// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Stateless url shortener.
use thiserror::Error;

/// Errors returned by the [UrlShortener].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    /// Urls must be ASCII to be encoded.
    #[error("non ASCII char '{0}' in url")]
    NonAscii(char),
    /// NUL chars can't be told apart from the odd length padding.
    #[error("NUL char at byte {0} in url")]
    Nul(usize),
    /// The short code contains a char that is not a packed pair.
    #[error("invalid char '{0}' in short code")]
    InvalidCode(char),
}

/// Shortens urls by packing two ASCII chars in a single char.
///
/// Nothing is stored, the short link carries the url and it is half the
/// length of the original in chars.
///
/// ```
/// # use kata_puzzles::url::UrlShortener;
/// let shortener = UrlShortener;
/// let url = "https://en.wikipedia.org/wiki/URL_shortening";
/// let short = shortener.encode(url).unwrap();
/// assert_eq!(short.chars().count(), 22);
/// assert_eq!(shortener.decode(&short).unwrap(), url);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlShortener;

impl UrlShortener {
    /// Encodes a url, an odd trailing char is stored in the high byte.
    pub fn encode(&self, url: &str) -> Result<String, UrlError> {
        if let Some(c) = url.chars().find(|c| !c.is_ascii()) {
            return Err(UrlError::NonAscii(c));
        }

        if let Some(pos) = url.bytes().position(|b| b == 0) {
            return Err(UrlError::Nul(pos));
        }

        url.as_bytes()
            .chunks(2)
            .map(|pair| {
                let hi = u32::from(pair[0]) << 8;
                let lo = pair.get(1).copied().map_or(0, u32::from);
                // Both bytes are ASCII so the value is below the surrogates.
                char::from_u32(hi | lo).ok_or(UrlError::NonAscii(pair[0] as char))
            })
            .collect()
    }

    /// Decodes a short code back to the url.
    pub fn decode(&self, code: &str) -> Result<String, UrlError> {
        let mut url = String::with_capacity(code.len() * 2);

        for c in code.chars() {
            let value = u32::from(c);
            let (hi, lo) = ((value >> 8) as u8, (value & 0xff) as u8);
            if value > 0xffff || !hi.is_ascii() || !lo.is_ascii() {
                return Err(UrlError::InvalidCode(c));
            }

            url.push(hi as char);
            if lo != 0 {
                url.push(lo as char);
            }
        }

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let shortener = UrlShortener;
        for url in [
            "https://en.wikipedia.org/wiki/URL_shortening",
            "https://github.com/",
            "a",
            "",
        ] {
            let short = shortener.encode(url).unwrap();
            assert_eq!(short.chars().count(), url.len().div_ceil(2));
            assert_eq!(shortener.decode(&short).unwrap(), url);
        }
    }

    #[test]
    fn packed_chars() {
        let shortener = UrlShortener;
        assert_eq!(shortener.encode("ab").unwrap(), "\u{6162}");
        assert_eq!(shortener.encode("a").unwrap(), "\u{6100}");
        assert_eq!(shortener.decode("\u{6100}").unwrap(), "a");
    }

    #[test]
    fn invalid_input() {
        let shortener = UrlShortener;
        assert_eq!(
            shortener.encode("https://example.com/é"),
            Err(UrlError::NonAscii('é'))
        );
        assert_eq!(shortener.encode("a\0"), Err(UrlError::Nul(1)));
        assert_eq!(shortener.encode("\0ab"), Err(UrlError::Nul(0)));
        assert_eq!(
            shortener.decode("\u{1F600}"),
            Err(UrlError::InvalidCode('\u{1F600}'))
        );
        assert_eq!(shortener.decode("\u{E000}"), Err(UrlError::InvalidCode('\u{E000}')));
    }
}
