//! Feature engineering for the load model
//!
//! The load model is scored on a fixed-order vector:
//! - five mutually exclusive station flags (BRPL, BYPL, NDPL, NDMC, MES)
//! - hour of day
//! - day of month, month, weekday (0=Monday) and a weekend flag

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Column order the load model was trained with
pub const FEATURE_ORDER: [&str; 10] = [
    "BRPL", "BYPL", "NDPL", "NDMC", "MES", "hour", "day", "month", "weekday", "weekend",
];

/// Distribution station a forecast is produced for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Station {
    /// BSES Rajdhani Power Ltd
    #[default]
    Brpl,
    /// BSES Yamuna Power Ltd
    Bypl,
    /// North Delhi Power Ltd
    Ndpl,
    /// New Delhi Municipal Council
    Ndmc,
    /// Military Engineer Services
    Mes,
}

impl Station {
    /// All stations, in feature order
    pub const ALL: [Station; 5] = [
        Station::Brpl,
        Station::Bypl,
        Station::Ndpl,
        Station::Ndmc,
        Station::Mes,
    ];

    /// Position of this station's flag in the feature vector
    pub fn index(self) -> usize {
        match self {
            Station::Brpl => 0,
            Station::Bypl => 1,
            Station::Ndpl => 2,
            Station::Ndmc => 3,
            Station::Mes => 4,
        }
    }

    /// Feature column name of this station
    pub fn code(self) -> &'static str {
        FEATURE_ORDER[self.index()]
    }
}

/// Model input for a single date and hour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Station flags in `Station::ALL` order, exactly one set to 1
    pub stations: [u8; 5],
    /// Hour of day (0-23)
    pub hour: u32,
    /// Day of month (1-31)
    pub day: u32,
    /// Month (1-12)
    pub month: u32,
    /// Day of week (0=Monday, 6=Sunday)
    pub weekday: u32,
    /// 1 on Saturday and Sunday
    pub weekend: u8,
}

impl FeatureVector {
    /// Build the feature vector for a date and hour with a given active station
    pub fn for_station(date: NaiveDate, hour: u32, station: Station) -> Self {
        let mut stations = [0u8; 5];
        stations[station.index()] = 1;

        let weekday = date.weekday().num_days_from_monday();

        Self {
            stations,
            hour,
            day: date.day(),
            month: date.month(),
            weekday,
            weekend: u8::from(weekday >= 5),
        }
    }

    /// The station whose flag is set
    pub fn station(&self) -> Option<Station> {
        Station::ALL
            .iter()
            .copied()
            .find(|s| self.stations[s.index()] == 1)
    }

    /// Values in `FEATURE_ORDER`
    pub fn as_array(&self) -> [f64; 10] {
        [
            self.stations[0] as f64,
            self.stations[1] as f64,
            self.stations[2] as f64,
            self.stations[3] as f64,
            self.stations[4] as f64,
            self.hour as f64,
            self.day as f64,
            self.month as f64,
            self.weekday as f64,
            self.weekend as f64,
        ]
    }

    /// Feature names, matching `as_array`
    pub fn names() -> &'static [&'static str; 10] {
        &FEATURE_ORDER
    }

    /// Whether the date falls on a weekend
    pub fn is_weekend(&self) -> bool {
        self.weekend == 1
    }
}

/// Build features for the default forecasting scope (BRPL only)
///
/// The hour is not range checked; out-of-range values are passed to the
/// model unchanged.
pub fn build_features(date: NaiveDate, hour: u32) -> FeatureVector {
    FeatureVector::for_station(date, hour, Station::default())
}

/// Build features with an explicit active station
pub fn build_features_for_station(date: NaiveDate, hour: u32, station: Station) -> FeatureVector {
    FeatureVector::for_station(date, hour, station)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_build_features_layout() {
        // 2025-06-15 is a Sunday
        let features = build_features(date(2025, 6, 15), 12);

        assert_eq!(
            features.as_array(),
            [1.0, 0.0, 0.0, 0.0, 0.0, 12.0, 15.0, 6.0, 6.0, 1.0]
        );
        assert_eq!(features.station(), Some(Station::Brpl));
    }

    #[rstest]
    #[case(date(2025, 6, 9), 0, 0)] // Monday
    #[case(date(2025, 6, 11), 2, 0)] // Wednesday
    #[case(date(2025, 6, 13), 4, 0)] // Friday
    #[case(date(2025, 6, 14), 5, 1)] // Saturday
    #[case(date(2025, 6, 15), 6, 1)] // Sunday
    fn test_weekday_and_weekend(#[case] d: NaiveDate, #[case] weekday: u32, #[case] weekend: u8) {
        let features = build_features(d, 8);
        assert_eq!(features.weekday, weekday);
        assert_eq!(features.weekend, weekend);
        assert_eq!(features.is_weekend(), weekend == 1);
    }

    #[test]
    fn test_exactly_one_station_flag() {
        for station in Station::ALL {
            let features = build_features_for_station(date(2025, 1, 1), 23, station);
            let active: u32 = features.stations.iter().map(|&f| f as u32).sum();
            assert_eq!(active, 1);
            assert_eq!(features.station(), Some(station));
        }
    }

    #[test]
    fn test_hour_is_passed_through() {
        let features = build_features(date(2025, 3, 1), 30);
        assert_eq!(features.hour, 30);
    }

    #[test]
    fn test_names_match_station_codes() {
        assert_eq!(FeatureVector::names()[0], Station::Brpl.code());
        assert_eq!(FeatureVector::names()[4], Station::Mes.code());
        assert_eq!(FeatureVector::names()[9], "weekend");
    }
}
