//! Static city directory.
//!
//! The set of known cities is fixed at compile time; there is no geocoding.
//! Lookups never fail with an error - unknown or malformed input simply
//! yields no match.

/// A known city with its coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct City {
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
}

/// All cities the widget knows about, in display order.
pub const CITIES: [City; 7] = [
    City { name: "Mumbai", lat: 19.0760, lon: 72.8777 },
    City { name: "Delhi", lat: 28.7041, lon: 77.1025 },
    City { name: "Bangalore", lat: 12.9716, lon: 77.5946 },
    City { name: "Chennai", lat: 13.0827, lon: 80.2707 },
    City { name: "Kolkata", lat: 22.5726, lon: 88.3639 },
    City { name: "Hyderabad", lat: 17.3850, lon: 78.4867 },
    City { name: "Ratnagiri", lat: 16.9902, lon: 73.3120 },
];

/// Exact, case-insensitive lookup by name.
pub fn lookup(name: &str) -> Option<City> {
    CITIES
        .iter()
        .find(|city| city.name.eq_ignore_ascii_case(name))
        .copied()
}

/// Up to `limit` cities whose name starts with `partial`, case-insensitively.
///
/// Matches keep the table's relative order. An empty `partial` matches
/// nothing, as does input that does not line up with a name prefix.
pub fn prefix_search(partial: &str, limit: usize) -> Vec<City> {
    if partial.is_empty() {
        return Vec::new();
    }
    CITIES
        .iter()
        .filter(|city| {
            city.name
                .get(..partial.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(partial))
        })
        .take(limit)
        .copied()
        .collect()
}
