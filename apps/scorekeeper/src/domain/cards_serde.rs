//! Serialization and deserialization for trump values

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::cards_types::Trump;

impl Serialize for Trump {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Trump {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "CLUBS" => Ok(Trump::Clubs),
            "DIAMONDS" => Ok(Trump::Diamonds),
            "HEARTS" => Ok(Trump::Hearts),
            "SPADES" => Ok(Trump::Spades),
            "NO_TRUMPS" => Ok(Trump::NoTrumps),
            _ => Err(serde::de::Error::custom(format!("Invalid trump: {s}"))),
        }
    }
}
