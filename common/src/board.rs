//! The board: latest departures snapshot shared between the poller and the renderer.
//!
//! The proxy answers with one JSON object, either a destination map
//! (`{"Berryessa": ["2", "5", "Leaving"]}`) or an error object
//! (`{"Error": "No departure times found"}`). [`Board::from_json`] decodes both
//! into fixed-capacity storage and folds every decoding failure into
//! [`Board::Error`], so whatever the poller publishes can be shown as-is.

use core::fmt;

use heapless::{String, Vec};
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Unexpected, Visitor};

use crate::config::{ERROR_LEN, MAX_DESTINATIONS, MAX_ETAS, MESSAGE_LEN, NAME_LEN, UNESCAPE_BUFFER_LEN};
use crate::text::{format_truncated, truncated};

/// Key of the one-entry error object.
pub const ERROR_KEY: &str = "Error";

/// ETA value meaning the train is at the platform.
pub const LEAVING: &str = "Leaving";

/// Shown until the first poll completes.
pub const WAITING_MESSAGE: &str = "Asking BART for train ETAs...";

/// Shown when the proxy returns an empty destination map.
pub const NO_TRAINS_MESSAGE: &str = "No trains scheduled";

/// Error published when the device cannot reach the proxy at all.
pub const UNREACHABLE_MESSAGE: &str = "There was an issue calling the server from this device.";

/// One destination and its upcoming trains.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Destination {
    /// Destination name as sent by the proxy (truncated to [`NAME_LEN`]).
    pub name: String<NAME_LEN>,
    /// Minutes until each train, ascending. "Leaving" is 0.
    pub etas: Vec<u16, MAX_ETAS>,
}

impl Destination {
    /// Create a destination with no trains yet.
    pub fn new(name: &str) -> Self {
        Self {
            name: truncated(name),
            etas: Vec::new(),
        }
    }

    /// Insert an ETA keeping the list sorted.
    ///
    /// When the list is full the latest train is dropped, so the soonest
    /// [`MAX_ETAS`] trains are always kept.
    pub fn insert_eta(
        &mut self,
        minutes: u16,
    ) {
        let idx = self.etas.partition_point(|&m| m <= minutes);
        if self.etas.is_full() {
            if idx >= self.etas.len() {
                return;
            }
            self.etas.pop();
        }
        self.etas.insert(idx, minutes).ok();
    }
}

/// Latest snapshot published by the poller.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Board {
    /// Nothing received yet.
    #[default]
    Waiting,
    /// The proxy reported a problem, or the response could not be fetched or decoded.
    Error(String<ERROR_LEN>),
    /// Destinations in the order the proxy listed them.
    Departures(Vec<Destination, MAX_DESTINATIONS>),
}

impl Board {
    /// Build an error board, truncating long messages.
    pub fn error(message: &str) -> Self { Self::Error(truncated(message)) }

    /// Decode a proxy response body.
    ///
    /// Never fails: malformed input becomes [`Board::Error`] describing the problem.
    /// JSON escapes are decoded; a single string longer than
    /// [`UNESCAPE_BUFFER_LEN`] bytes is treated as malformed.
    pub fn from_json(body: &[u8]) -> Self {
        let mut scratch = [0u8; UNESCAPE_BUFFER_LEN];
        match serde_json_core::from_slice_escaped::<Board>(body, &mut scratch) {
            Ok((board, _)) => board,
            Err(err) => Self::Error(format_truncated(format_args!("Bad response from server: {err}"))),
        }
    }

    /// Full-screen message for this board, or `None` when there are departure rows to draw.
    pub fn message(&self) -> Option<String<MESSAGE_LEN>> {
        match self {
            Self::Waiting => Some(truncated(WAITING_MESSAGE)),
            Self::Error(message) => Some(format_truncated(format_args!("Error: {message}"))),
            Self::Departures(list) if list.is_empty() => Some(truncated(NO_TRAINS_MESSAGE)),
            Self::Departures(_) => None,
        }
    }

    /// Departure rows, empty for message boards.
    pub fn destinations(&self) -> &[Destination] {
        match self {
            Self::Departures(list) => list,
            _ => &[],
        }
    }
}

/// Parse one ETA string: a minute count or "Leaving".
pub fn parse_eta(value: &str) -> Option<u16> {
    let value = value.trim();
    if value == LEAVING {
        Some(0)
    } else {
        value.parse().ok()
    }
}

// =============================================================================
// Deserialization
// =============================================================================

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(BoardVisitor)
    }
}

struct BoardVisitor;

impl<'de> Visitor<'de> for BoardVisitor {
    type Value = Board;

    fn expecting(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str("a destination map or an error object")
    }

    fn visit_map<A>(
        self,
        mut map: A,
    ) -> Result<Board, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut departures: Vec<Destination, MAX_DESTINATIONS> = Vec::new();
        let mut error: Option<String<ERROR_LEN>> = None;

        // Every value is consumed even once the outcome is known, otherwise the
        // parser reports the rest of the object as trailing characters.
        while let Some(Text(key)) = map.next_key::<Text<NAME_LEN>>()? {
            if key == ERROR_KEY {
                let Text(message) = map.next_value::<Text<ERROR_LEN>>()?;
                error.get_or_insert(message);
                continue;
            }

            let EtaList(etas) = map.next_value()?;
            if departures.is_full() {
                continue;
            }
            let mut destination = Destination {
                name: key,
                etas: Vec::new(),
            };
            for minutes in etas {
                destination.insert_eta(minutes);
            }
            departures.push(destination).ok();
        }

        Ok(match error {
            Some(message) => Board::Error(message),
            None => Board::Departures(departures),
        })
    }
}

/// A JSON string, unescaped and truncated to `N` bytes.
///
/// Strings are taken through `visit_str`, so the deserializer hands over the
/// unescaped text rather than the raw bytes between the quotes.
struct Text<const N: usize>(String<N>);

impl<'de, const N: usize> Deserialize<'de> for Text<N> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(TextVisitor::<N>)
    }
}

struct TextVisitor<const N: usize>;

impl<const N: usize> Visitor<'_> for TextVisitor<N> {
    type Value = Text<N>;

    fn expecting(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str("a string")
    }

    fn visit_str<E>(
        self,
        value: &str,
    ) -> Result<Text<N>, E>
    where
        E: de::Error,
    {
        Ok(Text(truncated(value)))
    }
}

/// One ETA string decoded to minutes.
struct Eta(u16);

impl<'de> Deserialize<'de> for Eta {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(EtaVisitor)
    }
}

struct EtaVisitor;

impl Visitor<'_> for EtaVisitor {
    type Value = Eta;

    fn expecting(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str("minutes or Leaving")
    }

    fn visit_str<E>(
        self,
        value: &str,
    ) -> Result<Eta, E>
    where
        E: de::Error,
    {
        parse_eta(value)
            .map(Eta)
            .ok_or_else(|| E::invalid_value(Unexpected::Str(value), &self))
    }
}

/// ETAs of one destination, already parsed and capped.
///
/// Holds twice the display capacity so that sorting still picks the soonest
/// trains when the proxy lists more than fit.
struct EtaList(Vec<u16, { MAX_ETAS * 2 }>);

impl<'de> Deserialize<'de> for EtaList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(EtaListVisitor)
    }
}

struct EtaListVisitor;

impl<'de> Visitor<'de> for EtaListVisitor {
    type Value = EtaList;

    fn expecting(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str("a list of ETA strings")
    }

    fn visit_seq<A>(
        self,
        mut seq: A,
    ) -> Result<EtaList, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut etas = Vec::new();
        while let Some(Eta(minutes)) = seq.next_element()? {
            // Past capacity the extra entries are still validated but not kept
            etas.push(minutes).ok();
        }
        Ok(EtaList(etas))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
