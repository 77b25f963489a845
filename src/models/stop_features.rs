use serde::{Deserialize, Serialize};

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StopFeatures: u8 {
        const PARKING_LOT = 0b0000_0001;
        const ACCESS      = 0b0000_0010;
    }
}

impl StopFeatures {
    /// Wire name for a single feature flag
    #[must_use]
    pub fn feature_name(flag: Self) -> Option<&'static str> {
        if flag == Self::PARKING_LOT {
            Some("parking_lot")
        } else if flag == Self::ACCESS {
            Some("access")
        } else {
            None
        }
    }

    /// Parse a single feature from its wire name
    #[must_use]
    pub fn from_wire_name(name: &str) -> Option<Self> {
        match name {
            "parking_lot" => Some(Self::PARKING_LOT),
            "access" => Some(Self::ACCESS),
            _ => None,
        }
    }

    /// Tooltip labels for the features present, in display order
    #[must_use]
    pub fn labels(self) -> Vec<&'static str> {
        let mut labels = Vec::new();
        if self.contains(Self::PARKING_LOT) {
            labels.push("Parking");
        }
        if self.contains(Self::ACCESS) {
            labels.push("Accessible");
        }
        labels
    }
}

// Stored on the wire as a list of feature names; unknown names are ignored
impl Serialize for StopFeatures {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let names: Vec<&str> = self.iter().filter_map(Self::feature_name).collect();
        names.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for StopFeatures {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let names = Vec::<String>::deserialize(deserializer)?;
        Ok(names
            .iter()
            .filter_map(|name| Self::from_wire_name(name))
            .fold(Self::empty(), |acc, flag| acc | flag))
    }
}
