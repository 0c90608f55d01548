use super::*;
use serde::Deserialize;
use serde::Serialize;

/// Trailhead identifier, taken from the source file.
pub type Fid = i32;

/// One trailhead and its amenities.
///
/// Every attribute other than the identifier is free-form text as it
/// appeared in the source file, lowercased where the [`Layout`] says so.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trail {
    pub fid: Fid,
    pub name: String,
    pub restrooms: String,
    pub picnic: String,
    pub fishing: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub difficulty: String,
    pub access_type: String,
    pub th_leash: String,
    pub bike_trail: String,
    pub horse_trail: String,
    pub fee: String,
    pub recycle_bin: String,
    pub grills: String,
    pub bike_rack: String,
    pub dog_tube: String,
}

impl Trail {
    pub fn new(fid: Fid) -> Self {
        Self {
            fid,
            ..Self::default()
        }
    }
    pub fn get(&self, column: Column) -> &str {
        self.slot(column)
    }
    pub fn set(&mut self, column: Column, value: String) {
        *self.slot_mut(column) = value;
    }
    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, column: Column, value: &str) -> Self {
        self.set(column, value.to_string());
        self
    }

    #[rustfmt::skip]
    fn slot(&self, column: Column) -> &String {
        match column {
            Column::Name       => &self.name,
            Column::Restrooms  => &self.restrooms,
            Column::Picnic     => &self.picnic,
            Column::Fishing    => &self.fishing,
            Column::Type       => &self.kind,
            Column::Difficulty => &self.difficulty,
            Column::AccessType => &self.access_type,
            Column::Leash      => &self.th_leash,
            Column::BikeTrail  => &self.bike_trail,
            Column::HorseTrail => &self.horse_trail,
            Column::Fee        => &self.fee,
            Column::RecycleBin => &self.recycle_bin,
            Column::Grills     => &self.grills,
            Column::BikeRack   => &self.bike_rack,
            Column::DogTube    => &self.dog_tube,
        }
    }
    #[rustfmt::skip]
    fn slot_mut(&mut self, column: Column) -> &mut String {
        match column {
            Column::Name       => &mut self.name,
            Column::Restrooms  => &mut self.restrooms,
            Column::Picnic     => &mut self.picnic,
            Column::Fishing    => &mut self.fishing,
            Column::Type       => &mut self.kind,
            Column::Difficulty => &mut self.difficulty,
            Column::AccessType => &mut self.access_type,
            Column::Leash      => &mut self.th_leash,
            Column::BikeTrail  => &mut self.bike_trail,
            Column::HorseTrail => &mut self.horse_trail,
            Column::Fee        => &mut self.fee,
            Column::RecycleBin => &mut self.recycle_bin,
            Column::Grills     => &mut self.grills,
            Column::BikeRack   => &mut self.bike_rack,
            Column::DogTube    => &mut self.dog_tube,
        }
    }
}

#[cfg(feature = "database")]
mod schema {
    use super::*;
    use tokio_postgres::types::Type;
    use trails_pg::*;

    #[rustfmt::skip]
    const FIELDS: &str = "fid, name, restrooms, picnic, fishing, type, difficulty, access_type, th_leash, bike_trail, horse_trail, fee, recycle_bin, grills, bike_rack, dog_tube";

    impl Schema for Trail {
        fn name() -> &'static str {
            TRAILS
        }
        fn fields() -> &'static str {
            FIELDS
        }
        fn creates() -> &'static str {
            const_format::concatcp!(
                "CREATE TABLE IF NOT EXISTS ",
                TRAILS,
                " (
                    fid         INTEGER PRIMARY KEY,
                    name        TEXT NOT NULL,
                    restrooms   TEXT NOT NULL,
                    picnic      TEXT NOT NULL,
                    fishing     TEXT NOT NULL,
                    type        TEXT NOT NULL,
                    difficulty  TEXT NOT NULL,
                    access_type TEXT NOT NULL,
                    th_leash    TEXT NOT NULL,
                    bike_trail  TEXT NOT NULL,
                    horse_trail TEXT NOT NULL,
                    fee         TEXT NOT NULL,
                    recycle_bin TEXT NOT NULL,
                    grills      TEXT NOT NULL,
                    bike_rack   TEXT NOT NULL,
                    dog_tube    TEXT NOT NULL
                );"
            )
        }
        fn deletes() -> &'static str {
            const_format::concatcp!("DELETE FROM ", TRAILS)
        }
        fn copy() -> &'static str {
            const_format::concatcp!("COPY ", TRAILS, " (", FIELDS, ") FROM STDIN BINARY")
        }
        fn columns() -> &'static [Type] {
            &[
                Type::INT4,
                Type::TEXT,
                Type::TEXT,
                Type::TEXT,
                Type::TEXT,
                Type::TEXT,
                Type::TEXT,
                Type::TEXT,
                Type::TEXT,
                Type::TEXT,
                Type::TEXT,
                Type::TEXT,
                Type::TEXT,
                Type::TEXT,
                Type::TEXT,
                Type::TEXT,
            ]
        }
    }

    /// Decodes a row selected with [`Schema::fields`] column order.
    impl TryFrom<&tokio_postgres::Row> for Trail {
        type Error = PgErr;
        fn try_from(row: &tokio_postgres::Row) -> Result<Self, Self::Error> {
            let mut trail = Trail::new(row.try_get::<_, Fid>(0)?);
            for (i, column) in Column::all().into_iter().enumerate() {
                trail.set(column, row.try_get::<_, String>(i + 1)?);
            }
            Ok(trail)
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_set_every_column() {
        let mut trail = Trail::new(7);
        for column in Column::all() {
            trail.set(column, column.as_str().to_uppercase());
        }
        for column in Column::all() {
            assert_eq!(trail.get(column), column.as_str().to_uppercase());
        }
        assert_eq!(trail.fid, 7);
    }

    #[test]
    fn json_keys() {
        let trail = Trail::new(3).with(Column::Type, "loop");
        let json = serde_json::to_value(&trail).unwrap();
        assert_eq!(json["fid"], 3);
        assert_eq!(json["type"], "loop");
        for column in Column::all() {
            assert!(json.get(column.as_str()).is_some(), "missing {}", column);
        }
    }
}
