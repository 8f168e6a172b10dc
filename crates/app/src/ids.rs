//! Typed Store Identifiers

use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    hash::{Hash, Hasher},
    marker::PhantomData,
    str::FromStr,
    sync::{
        LazyLock,
        atomic::{AtomicU32, Ordering as AtomicOrdering},
    },
};

use jiff::Timestamp;
use rand::{Rng, RngCore, thread_rng};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};
use thiserror::Error;

/// Number of raw bytes in a store identifier.
pub const ID_BYTES: usize = 12;

/// Length of the hex rendering of a store identifier.
pub const ID_HEX_LEN: usize = ID_BYTES * 2;

const COUNTER_MASK: u32 = 0x00FF_FFFF;

/// Per-process random bytes mixed into every identifier.
static PROCESS_UNIQUE: LazyLock<[u8; 5]> = LazyLock::new(|| {
    let mut bytes = [0_u8; 5];

    thread_rng().fill_bytes(&mut bytes);

    bytes
});

static COUNTER: LazyLock<AtomicU32> =
    LazyLock::new(|| AtomicU32::new(thread_rng().gen_range(0..=COUNTER_MASK)));

/// Why a string is not a store identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdParseError {
    /// Wrong number of characters.
    #[error("identifier must be {ID_HEX_LEN} characters, got {0}")]
    InvalidLength(usize),

    /// Characters outside `[0-9a-fA-F]`.
    #[error("identifier must be hex encoded")]
    InvalidHex,
}

/// A 12 byte store identifier tagged with the collection it belongs to.
///
/// Layout: 4 bytes of big-endian Unix seconds, 5 process-unique random bytes
/// and a 3 byte big-endian counter.
pub struct TypedId<T>([u8; ID_BYTES], PhantomData<T>);

impl<T> TypedId<T> {
    /// Generate a fresh identifier.
    #[must_use]
    pub fn new() -> Self {
        let seconds = u32::try_from(Timestamp::now().as_second()).unwrap_or(u32::MAX);
        let count = COUNTER.fetch_add(1, AtomicOrdering::Relaxed) & COUNTER_MASK;

        let mut bytes = [0_u8; ID_BYTES];

        let (time, rest) = bytes.split_at_mut(4);
        let (unique, counter) = rest.split_at_mut(5);

        time.copy_from_slice(&seconds.to_be_bytes());
        unique.copy_from_slice(&*PROCESS_UNIQUE);

        let [_, high, mid, low] = count.to_be_bytes();

        counter.copy_from_slice(&[high, mid, low]);

        Self(bytes, PhantomData)
    }

    /// Wrap raw identifier bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; ID_BYTES]) -> Self {
        Self(bytes, PhantomData)
    }

    /// The raw identifier bytes.
    #[must_use]
    pub const fn bytes(&self) -> [u8; ID_BYTES] {
        self.0
    }
}

impl<T> Default for TypedId<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromStr for TypedId<T> {
    type Err = IdParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.len() != ID_HEX_LEN {
            return Err(IdParseError::InvalidLength(value.len()));
        }

        let mut bytes = [0_u8; ID_BYTES];

        hex::decode_to_slice(value, &mut bytes).map_err(|_invalid| IdParseError::InvalidHex)?;

        Ok(Self::from_bytes(bytes))
    }
}

impl<T> Clone for TypedId<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TypedId<T> {}

impl<T> Debug for TypedId<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "TypedId({self})")
    }
}

impl<T> Display for TypedId<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&hex::encode(self.0))
    }
}

impl<T> PartialEq for TypedId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for TypedId<T> {}

impl<T> Hash for TypedId<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T> PartialOrd for TypedId<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for TypedId<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T> Serialize for TypedId<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, T> Deserialize<'de> for TypedId<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;

        value.parse().map_err(D::Error::custom)
    }
}
