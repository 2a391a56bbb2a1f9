//! Static game data for Pandemic: disease colors and statuses, player
//! roles, event cards, and the world map.
//!
//! The map is built from a literal table and normalized to a symmetric
//! adjacency at construction, so an outbreak can always propagate back
//! along any edge it arrived through.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// The four disease colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DiseaseColor {
    Blue,
    Yellow,
    Black,
    Red,
}

impl DiseaseColor {
    pub const ALL: [DiseaseColor; 4] = [
        DiseaseColor::Blue,
        DiseaseColor::Yellow,
        DiseaseColor::Black,
        DiseaseColor::Red,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            DiseaseColor::Blue => "Blue",
            DiseaseColor::Yellow => "Yellow",
            DiseaseColor::Black => "Black",
            DiseaseColor::Red => "Red",
        }
    }

    #[must_use]
    pub fn lookup(name: &str) -> Option<DiseaseColor> {
        DiseaseColor::ALL.into_iter().find(|color| color.name() == name)
    }

    /// Dense index for per-color arrays.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            DiseaseColor::Blue => 0,
            DiseaseColor::Yellow => 1,
            DiseaseColor::Black => 2,
            DiseaseColor::Red => 3,
        }
    }
}

/// Lifecycle of one disease.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiseaseStatus {
    #[default]
    Active,
    Cured,
    /// Cured with zero cubes left anywhere on the board. Eradicated
    /// diseases no longer place cubes.
    Eradicated,
}

/// The seven player roles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PlayerRole {
    Medic,
    Scientist,
    Researcher,
    OperationsExpert,
    Dispatcher,
    QuarantineSpecialist,
    ContingencyPlanner,
}

impl PlayerRole {
    pub const ALL: [PlayerRole; 7] = [
        PlayerRole::Medic,
        PlayerRole::Scientist,
        PlayerRole::Researcher,
        PlayerRole::OperationsExpert,
        PlayerRole::Dispatcher,
        PlayerRole::QuarantineSpecialist,
        PlayerRole::ContingencyPlanner,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            PlayerRole::Medic => "Medic",
            PlayerRole::Scientist => "Scientist",
            PlayerRole::Researcher => "Researcher",
            PlayerRole::OperationsExpert => "Operations Expert",
            PlayerRole::Dispatcher => "Dispatcher",
            PlayerRole::QuarantineSpecialist => "Quarantine Specialist",
            PlayerRole::ContingencyPlanner => "Contingency Planner",
        }
    }
}

/// The five event cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EventKind {
    Airlift,
    GovernmentGrant,
    Forecast,
    ResilientPopulation,
    OneQuietNight,
}

impl EventKind {
    pub const ALL: [EventKind; 5] = [
        EventKind::Airlift,
        EventKind::GovernmentGrant,
        EventKind::Forecast,
        EventKind::ResilientPopulation,
        EventKind::OneQuietNight,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            EventKind::Airlift => "Airlift",
            EventKind::GovernmentGrant => "Government Grant",
            EventKind::Forecast => "Forecast",
            EventKind::ResilientPopulation => "Resilient Population",
            EventKind::OneQuietNight => "One Quiet Night",
        }
    }

    #[must_use]
    pub fn lookup(name: &str) -> Option<EventKind> {
        EventKind::ALL.into_iter().find(|event| event.name() == name)
    }
}

/// Index of a city in the world map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CityId(pub u16);

impl CityId {
    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0)
    }
}

/// One city's static data.
#[derive(Clone, Debug)]
pub struct CityInfo {
    pub name: String,
    pub color: DiseaseColor,
    pub neighbors: Vec<CityId>,
}

/// The board graph plus a name lookup.
#[derive(Clone, Debug)]
pub struct WorldMap {
    cities: Vec<CityInfo>,
    by_name: FxHashMap<String, CityId>,
}

type CityRow = (&'static str, DiseaseColor, &'static [&'static str]);

impl WorldMap {
    /// Build a map from `(name, color, neighbor names)` rows.
    ///
    /// Every neighbor name must appear as a row. Adjacency is normalized
    /// to symmetric: if any row lists B next to A, both directions exist
    /// in the built map.
    #[must_use]
    pub fn from_table(rows: &[CityRow]) -> Self {
        let mut by_name = FxHashMap::default();
        for (idx, (name, _, _)) in rows.iter().enumerate() {
            by_name.insert((*name).to_string(), CityId(idx as u16));
        }

        let mut neighbor_sets: Vec<Vec<CityId>> = vec![Vec::new(); rows.len()];
        for (idx, (_, _, neighbors)) in rows.iter().enumerate() {
            for neighbor in *neighbors {
                let other = *by_name
                    .get(*neighbor)
                    .unwrap_or_else(|| panic!("undefined city in adjacency table: {neighbor}"));
                let here = CityId(idx as u16);
                if !neighbor_sets[idx].contains(&other) {
                    neighbor_sets[idx].push(other);
                }
                if !neighbor_sets[other.index()].contains(&here) {
                    neighbor_sets[other.index()].push(here);
                }
            }
        }

        let cities = rows
            .iter()
            .zip(neighbor_sets)
            .map(|((name, color, _), neighbors)| CityInfo {
                name: (*name).to_string(),
                color: *color,
                neighbors,
            })
            .collect();
        Self { cities, by_name }
    }

    /// The standard 48-city board.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_table(STANDARD_CITIES)
    }

    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<CityId> {
        self.by_name.get(name).copied()
    }

    #[must_use]
    pub fn city(&self, id: CityId) -> &CityInfo {
        &self.cities[id.index()]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = CityId> + '_ {
        (0..self.cities.len()).map(|idx| CityId(idx as u16))
    }
}

use DiseaseColor::{Black, Blue, Red, Yellow};

const STANDARD_CITIES: &[CityRow] = &[
    // Blue
    ("Atlanta", Blue, &["Chicago", "Washington", "Miami"]),
    ("Chicago", Blue, &["San Francisco", "Los Angeles", "Mexico City", "Atlanta", "Montreal"]),
    ("Montreal", Blue, &["Chicago", "New York", "Washington"]),
    ("New York", Blue, &["Montreal", "Washington", "London", "Madrid"]),
    ("Washington", Blue, &["Atlanta", "Montreal", "New York", "Miami"]),
    ("San Francisco", Blue, &["Chicago", "Los Angeles", "Tokyo", "Manila"]),
    ("London", Blue, &["New York", "Madrid", "Paris", "Essen"]),
    ("Madrid", Blue, &["New York", "London", "Paris", "Algiers", "Sao Paulo"]),
    ("Paris", Blue, &["London", "Madrid", "Algiers", "Milan", "Essen"]),
    ("Essen", Blue, &["London", "Paris", "Milan", "St. Petersburg"]),
    ("Milan", Blue, &["Essen", "Paris", "Istanbul"]),
    ("St. Petersburg", Blue, &["Essen", "Istanbul", "Moscow"]),
    // Yellow
    ("Los Angeles", Yellow, &["San Francisco", "Chicago", "Mexico City", "Sydney"]),
    ("Mexico City", Yellow, &["Los Angeles", "Chicago", "Miami", "Lima", "Bogota"]),
    ("Miami", Yellow, &["Atlanta", "Washington", "Mexico City", "Bogota"]),
    ("Bogota", Yellow, &["Miami", "Mexico City", "Lima", "Sao Paulo", "Buenos Aires"]),
    ("Lima", Yellow, &["Mexico City", "Bogota", "Santiago"]),
    ("Santiago", Yellow, &["Lima"]),
    ("Sao Paulo", Yellow, &["Bogota", "Buenos Aires", "Madrid", "Lagos"]),
    ("Buenos Aires", Yellow, &["Bogota", "Sao Paulo"]),
    ("Lagos", Yellow, &["Sao Paulo", "Kinshasa", "Khartoum"]),
    ("Kinshasa", Yellow, &["Lagos", "Khartoum", "Johannesburg"]),
    ("Khartoum", Yellow, &["Cairo", "Lagos", "Kinshasa", "Johannesburg"]),
    ("Johannesburg", Yellow, &["Kinshasa", "Khartoum"]),
    // Black
    ("Algiers", Black, &["Madrid", "Paris", "Istanbul", "Cairo"]),
    ("Cairo", Black, &["Algiers", "Istanbul", "Baghdad", "Khartoum", "Riyadh"]),
    ("Istanbul", Black, &["Milan", "St. Petersburg", "Moscow", "Baghdad", "Cairo", "Algiers"]),
    ("Moscow", Black, &["St. Petersburg", "Istanbul", "Tehran"]),
    ("Tehran", Black, &["Moscow", "Baghdad", "Karachi", "Delhi"]),
    ("Baghdad", Black, &["Istanbul", "Cairo", "Tehran", "Karachi", "Riyadh"]),
    ("Riyadh", Black, &["Baghdad", "Karachi", "Cairo"]),
    ("Karachi", Black, &["Tehran", "Baghdad", "Riyadh", "Mumbai", "Delhi"]),
    ("Mumbai", Black, &["Karachi", "Delhi", "Chennai"]),
    ("Delhi", Black, &["Tehran", "Karachi", "Mumbai", "Chennai", "Kolkata"]),
    ("Chennai", Black, &["Mumbai", "Delhi", "Kolkata", "Bangkok", "Jakarta"]),
    ("Kolkata", Black, &["Delhi", "Chennai", "Bangkok", "Hong Kong"]),
    // Red
    ("Beijing", Red, &["Seoul", "Shanghai"]),
    ("Seoul", Red, &["Beijing", "Shanghai", "Tokyo"]),
    ("Tokyo", Red, &["Seoul", "Shanghai", "Osaka", "San Francisco"]),
    ("Shanghai", Red, &["Beijing", "Seoul", "Tokyo", "Taipei", "Hong Kong"]),
    ("Hong Kong", Red, &["Shanghai", "Taipei", "Manila", "Ho Chi Minh City", "Bangkok", "Kolkata"]),
    ("Taipei", Red, &["Shanghai", "Osaka", "Manila", "Hong Kong"]),
    ("Osaka", Red, &["Tokyo", "Taipei"]),
    ("Manila", Red, &["Taipei", "Hong Kong", "Ho Chi Minh City", "Sydney", "San Francisco"]),
    ("Ho Chi Minh City", Red, &["Hong Kong", "Manila", "Jakarta", "Bangkok"]),
    ("Jakarta", Red, &["Ho Chi Minh City", "Bangkok", "Chennai", "Sydney"]),
    ("Bangkok", Red, &["Kolkata", "Chennai", "Jakarta", "Ho Chi Minh City", "Hong Kong"]),
    ("Sydney", Red, &["Jakarta", "Manila", "Los Angeles"]),
];
