use serde::Deserialize;
use serde::Serialize;
use std::fmt::Display;
use std::fmt::Formatter;

/// Text attribute of a trailhead.
///
/// Closed set: these are the only identifiers that ever reach SQL as
/// column names, so filters can name a column without interpolating
/// client input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Name,
    Restrooms,
    Picnic,
    Fishing,
    Type,
    Difficulty,
    AccessType,
    #[serde(rename = "th_leash")]
    Leash,
    BikeTrail,
    HorseTrail,
    Fee,
    RecycleBin,
    Grills,
    BikeRack,
    DogTube,
}

impl Column {
    /// Every column, in storage order.
    pub const fn all() -> [Self; 15] {
        [
            Self::Name,
            Self::Restrooms,
            Self::Picnic,
            Self::Fishing,
            Self::Type,
            Self::Difficulty,
            Self::AccessType,
            Self::Leash,
            Self::BikeTrail,
            Self::HorseTrail,
            Self::Fee,
            Self::RecycleBin,
            Self::Grills,
            Self::BikeRack,
            Self::DogTube,
        ]
    }

    /// Columns exposed as `GET /trails` query filters.
    pub const fn filters() -> [Self; 9] {
        [
            Self::Restrooms,
            Self::Fishing,
            Self::BikeTrail,
            Self::HorseTrail,
            Self::Fee,
            Self::RecycleBin,
            Self::Grills,
            Self::BikeRack,
            Self::DogTube,
        ]
    }

    /// Database column name, identical to the JSON key.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Restrooms => "restrooms",
            Self::Picnic => "picnic",
            Self::Fishing => "fishing",
            Self::Type => "type",
            Self::Difficulty => "difficulty",
            Self::AccessType => "access_type",
            Self::Leash => "th_leash",
            Self::BikeTrail => "bike_trail",
            Self::HorseTrail => "horse_trail",
            Self::Fee => "fee",
            Self::RecycleBin => "recycle_bin",
            Self::Grills => "grills",
            Self::BikeRack => "bike_rack",
            Self::DogTube => "dog_tube",
        }
    }
}

impl Display for Column {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
