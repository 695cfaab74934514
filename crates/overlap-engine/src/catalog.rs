//! The static city catalog.
//!
//! Curated list of major global hubs, each carrying the IANA zone that
//! governs its clock. The data is compile-time constant and read-only at
//! runtime; expanding coverage is just adding a row. Several cities can
//! share one zone (Beijing and Shanghai, San Francisco and Seattle), so
//! the slug, not the zone, is the identity.

use serde::Serialize;

/// An immutable city identity record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct City {
    /// URL-safe unique key, e.g. `"new-york"`.
    pub slug: &'static str,
    /// Display name, e.g. `"New York"`.
    pub name: &'static str,
    /// Display country, e.g. `"United States"`.
    pub country: &'static str,
    /// IANA zone identifier, e.g. `"America/New_York"`.
    pub time_zone: &'static str,
}

const fn city(
    slug: &'static str,
    name: &'static str,
    country: &'static str,
    time_zone: &'static str,
) -> City {
    City {
        slug,
        name,
        country,
        time_zone,
    }
}

/// Curated list of major global hubs.
pub const CITIES: &[City] = &[
    // North America
    city("new-york", "New York", "United States", "America/New_York"),
    city("san-francisco", "San Francisco", "United States", "America/Los_Angeles"),
    city("los-angeles", "Los Angeles", "United States", "America/Los_Angeles"),
    city("seattle", "Seattle", "United States", "America/Los_Angeles"),
    city("denver", "Denver", "United States", "America/Denver"),
    city("phoenix", "Phoenix", "United States", "America/Phoenix"),
    city("chicago", "Chicago", "United States", "America/Chicago"),
    city("austin", "Austin", "United States", "America/Chicago"),
    city("miami", "Miami", "United States", "America/New_York"),
    city("boston", "Boston", "United States", "America/New_York"),
    city("washington-dc", "Washington, DC", "United States", "America/New_York"),
    city("toronto", "Toronto", "Canada", "America/Toronto"),
    city("montreal", "Montreal", "Canada", "America/Toronto"),
    city("vancouver", "Vancouver", "Canada", "America/Vancouver"),
    city("mexico-city", "Mexico City", "Mexico", "America/Mexico_City"),
    city("honolulu", "Honolulu", "United States", "Pacific/Honolulu"),
    // South America
    city("sao-paulo", "São Paulo", "Brazil", "America/Sao_Paulo"),
    city("rio-de-janeiro", "Rio de Janeiro", "Brazil", "America/Sao_Paulo"),
    city("buenos-aires", "Buenos Aires", "Argentina", "America/Argentina/Buenos_Aires"),
    city("santiago", "Santiago", "Chile", "America/Santiago"),
    city("lima", "Lima", "Peru", "America/Lima"),
    city("bogota", "Bogotá", "Colombia", "America/Bogota"),
    // Europe
    city("london", "London", "United Kingdom", "Europe/London"),
    city("dublin", "Dublin", "Ireland", "Europe/Dublin"),
    city("lisbon", "Lisbon", "Portugal", "Europe/Lisbon"),
    city("madrid", "Madrid", "Spain", "Europe/Madrid"),
    city("barcelona", "Barcelona", "Spain", "Europe/Madrid"),
    city("paris", "Paris", "France", "Europe/Paris"),
    city("brussels", "Brussels", "Belgium", "Europe/Brussels"),
    city("amsterdam", "Amsterdam", "Netherlands", "Europe/Amsterdam"),
    city("berlin", "Berlin", "Germany", "Europe/Berlin"),
    city("munich", "Munich", "Germany", "Europe/Berlin"),
    city("zurich", "Zurich", "Switzerland", "Europe/Zurich"),
    city("vienna", "Vienna", "Austria", "Europe/Vienna"),
    city("prague", "Prague", "Czechia", "Europe/Prague"),
    city("warsaw", "Warsaw", "Poland", "Europe/Warsaw"),
    city("stockholm", "Stockholm", "Sweden", "Europe/Stockholm"),
    city("copenhagen", "Copenhagen", "Denmark", "Europe/Copenhagen"),
    city("oslo", "Oslo", "Norway", "Europe/Oslo"),
    city("helsinki", "Helsinki", "Finland", "Europe/Helsinki"),
    city("rome", "Rome", "Italy", "Europe/Rome"),
    city("milan", "Milan", "Italy", "Europe/Rome"),
    city("athens", "Athens", "Greece", "Europe/Athens"),
    city("istanbul", "Istanbul", "Turkey", "Europe/Istanbul"),
    city("moscow", "Moscow", "Russia", "Europe/Moscow"),
    city("kyiv", "Kyiv", "Ukraine", "Europe/Kyiv"),
    // Middle East
    city("dubai", "Dubai", "United Arab Emirates", "Asia/Dubai"),
    city("abu-dhabi", "Abu Dhabi", "United Arab Emirates", "Asia/Dubai"),
    city("riyadh", "Riyadh", "Saudi Arabia", "Asia/Riyadh"),
    city("doha", "Doha", "Qatar", "Asia/Qatar"),
    city("kuwait-city", "Kuwait City", "Kuwait", "Asia/Kuwait"),
    city("manama", "Manama", "Bahrain", "Asia/Bahrain"),
    city("muscat", "Muscat", "Oman", "Asia/Muscat"),
    city("tehran", "Tehran", "Iran", "Asia/Tehran"),
    city("baghdad", "Baghdad", "Iraq", "Asia/Baghdad"),
    city("tel-aviv", "Tel Aviv", "Israel", "Asia/Jerusalem"),
    city("amman", "Amman", "Jordan", "Asia/Amman"),
    // Africa
    city("cairo", "Cairo", "Egypt", "Africa/Cairo"),
    city("casablanca", "Casablanca", "Morocco", "Africa/Casablanca"),
    city("tunis", "Tunis", "Tunisia", "Africa/Tunis"),
    city("lagos", "Lagos", "Nigeria", "Africa/Lagos"),
    city("accra", "Accra", "Ghana", "Africa/Accra"),
    city("nairobi", "Nairobi", "Kenya", "Africa/Nairobi"),
    city("addis-ababa", "Addis Ababa", "Ethiopia", "Africa/Addis_Ababa"),
    city("johannesburg", "Johannesburg", "South Africa", "Africa/Johannesburg"),
    city("cape-town", "Cape Town", "South Africa", "Africa/Johannesburg"),
    // South Asia
    city("karachi", "Karachi", "Pakistan", "Asia/Karachi"),
    city("islamabad", "Islamabad", "Pakistan", "Asia/Karachi"),
    city("lahore", "Lahore", "Pakistan", "Asia/Karachi"),
    city("delhi", "Delhi", "India", "Asia/Kolkata"),
    city("mumbai", "Mumbai", "India", "Asia/Kolkata"),
    city("bengaluru", "Bengaluru", "India", "Asia/Kolkata"),
    city("chennai", "Chennai", "India", "Asia/Kolkata"),
    city("kolkata", "Kolkata", "India", "Asia/Kolkata"),
    city("dhaka", "Dhaka", "Bangladesh", "Asia/Dhaka"),
    city("colombo", "Colombo", "Sri Lanka", "Asia/Colombo"),
    city("kathmandu", "Kathmandu", "Nepal", "Asia/Kathmandu"),
    city("kabul", "Kabul", "Afghanistan", "Asia/Kabul"),
    // Central Asia
    city("tashkent", "Tashkent", "Uzbekistan", "Asia/Tashkent"),
    city("almaty", "Almaty", "Kazakhstan", "Asia/Almaty"),
    // Southeast Asia
    city("singapore", "Singapore", "Singapore", "Asia/Singapore"),
    city("kuala-lumpur", "Kuala Lumpur", "Malaysia", "Asia/Kuala_Lumpur"),
    city("bangkok", "Bangkok", "Thailand", "Asia/Bangkok"),
    city("jakarta", "Jakarta", "Indonesia", "Asia/Jakarta"),
    city("ho-chi-minh-city", "Ho Chi Minh City", "Vietnam", "Asia/Ho_Chi_Minh"),
    city("hanoi", "Hanoi", "Vietnam", "Asia/Ho_Chi_Minh"),
    city("manila", "Manila", "Philippines", "Asia/Manila"),
    city("phnom-penh", "Phnom Penh", "Cambodia", "Asia/Phnom_Penh"),
    city("yangon", "Yangon", "Myanmar", "Asia/Yangon"),
    // East Asia
    city("tokyo", "Tokyo", "Japan", "Asia/Tokyo"),
    city("osaka", "Osaka", "Japan", "Asia/Tokyo"),
    city("seoul", "Seoul", "South Korea", "Asia/Seoul"),
    city("beijing", "Beijing", "China", "Asia/Shanghai"),
    city("shanghai", "Shanghai", "China", "Asia/Shanghai"),
    city("shenzhen", "Shenzhen", "China", "Asia/Shanghai"),
    city("hong-kong", "Hong Kong", "China", "Asia/Hong_Kong"),
    city("taipei", "Taipei", "Taiwan", "Asia/Taipei"),
    // Oceania
    city("sydney", "Sydney", "Australia", "Australia/Sydney"),
    city("melbourne", "Melbourne", "Australia", "Australia/Melbourne"),
    city("brisbane", "Brisbane", "Australia", "Australia/Brisbane"),
    city("perth", "Perth", "Australia", "Australia/Perth"),
    city("auckland", "Auckland", "New Zealand", "Pacific/Auckland"),
];

/// Exact slug lookup.
pub fn city_by_slug(slug: &str) -> Option<&'static City> {
    CITIES.iter().find(|c| c.slug == slug)
}

/// Resolve free-form input to a city.
///
/// Tries, in order: exact name match, exact slug match, then the first
/// city whose name starts with the query. All comparisons are
/// case-insensitive; surrounding whitespace is ignored; an empty query
/// never matches.
///
/// # Examples
///
/// ```
/// use overlap_engine::catalog::find_city;
///
/// assert_eq!(find_city("Tokyo").unwrap().slug, "tokyo");
/// assert_eq!(find_city("  new-york ").unwrap().name, "New York");
/// assert_eq!(find_city("sing").unwrap().slug, "singapore");
/// assert!(find_city("atlantis").is_none());
/// ```
pub fn find_city(input: &str) -> Option<&'static City> {
    let q = input.trim().to_lowercase();
    if q.is_empty() {
        return None;
    }
    CITIES
        .iter()
        .find(|c| c.name.to_lowercase() == q)
        .or_else(|| city_by_slug(&q))
        .or_else(|| CITIES.iter().find(|c| c.name.to_lowercase().starts_with(&q)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn slugs_are_unique() {
        let mut seen = HashSet::new();
        for c in CITIES {
            assert!(seen.insert(c.slug), "duplicate slug {}", c.slug);
        }
    }

    #[test]
    fn prefix_match_takes_the_first_in_catalog_order() {
        // "San" prefixes San Francisco and Santiago; catalog order decides.
        assert_eq!(find_city("san").unwrap().slug, "san-francisco");
        assert_eq!(find_city("Delhi").unwrap().slug, "delhi");
    }

    #[test]
    fn lookup_is_case_insensitive_and_trims() {
        assert_eq!(find_city("TOKYO").unwrap().slug, "tokyo");
        assert_eq!(find_city(" São Paulo ").unwrap().slug, "sao-paulo");
        assert_eq!(find_city("HO-CHI-MINH-CITY").unwrap().slug, "ho-chi-minh-city");
    }

    #[test]
    fn empty_and_unknown_queries_miss() {
        assert!(find_city("").is_none());
        assert!(find_city("   ").is_none());
        assert!(find_city("gotham").is_none());
        assert!(city_by_slug("gotham").is_none());
    }
}
