use serde::{Deserialize, Serialize};

/// GTFS route type, limited to the modes the line diagram is drawn for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum RouteType {
    LightRail,
    Subway,
    CommuterRail,
    Bus,
    Ferry,
}

impl TryFrom<u8> for RouteType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::LightRail),
            1 => Ok(Self::Subway),
            2 => Ok(Self::CommuterRail),
            3 => Ok(Self::Bus),
            4 => Ok(Self::Ferry),
            other => Err(format!("Unknown route type: {other}")),
        }
    }
}

impl From<RouteType> for u8 {
    fn from(route_type: RouteType) -> Self {
        match route_type {
            RouteType::LightRail => 0,
            RouteType::Subway => 1,
            RouteType::CommuterRail => 2,
            RouteType::Bus => 3,
            RouteType::Ferry => 4,
        }
    }
}

impl RouteType {
    #[must_use]
    pub const fn is_rail(self) -> bool {
        matches!(self, Self::LightRail | Self::Subway | Self::CommuterRail)
    }

    #[must_use]
    pub const fn is_commuter_rail(self) -> bool {
        matches!(self, Self::CommuterRail)
    }

    /// Heading used above the stop list
    #[must_use]
    pub const fn stop_noun(self) -> &'static str {
        if self.is_rail() { "Stations" } else { "Stops" }
    }

    #[must_use]
    pub const fn vehicle_name(self) -> &'static str {
        match self {
            Self::Bus => "Bus",
            Self::Ferry => "Ferry",
            Self::LightRail | Self::Subway | Self::CommuterRail => "Train",
        }
    }
}

/// Direction of travel along a route (0 or 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "u8", into = "u8")]
pub enum DirectionId {
    #[default]
    Zero,
    One,
}

impl TryFrom<u8> for DirectionId {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Zero),
            1 => Ok(Self::One),
            other => Err(format!("Invalid direction id: {other}")),
        }
    }
}

impl From<DirectionId> for u8 {
    fn from(direction: DirectionId) -> Self {
        match direction {
            DirectionId::Zero => 0,
            DirectionId::One => 1,
        }
    }
}

impl DirectionId {
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Zero => Self::One,
            Self::One => Self::Zero,
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Zero => 0,
            Self::One => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub route_type: RouteType,
    #[serde(default)]
    pub color: Option<String>,
    /// Indexed by `DirectionId::index`
    pub direction_names: [String; 2],
    pub direction_destinations: [String; 2],
}

impl Route {
    #[must_use]
    pub fn direction_name(&self, direction: DirectionId) -> &str {
        &self.direction_names[direction.index()]
    }

    #[must_use]
    pub fn direction_destination(&self, direction: DirectionId) -> &str {
        &self.direction_destinations[direction.index()]
    }

    /// Line color for the diagram, black when the route has none
    #[must_use]
    pub fn line_color(&self) -> &str {
        self.color.as_deref().unwrap_or("#000")
    }
}
