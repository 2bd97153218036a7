/// Three-letter codes for the countries the catalogue lists courses in.
/// ISO 3166 alpha-3 throughout, except `SCO` for Scotland, which has no ISO
/// code of its own.
const COUNTRY_CODES: &[(&str, &str)] = &[
    ("ARE", "United Arab Emirates"),
    ("AUS", "Australia"),
    ("AUT", "Austria"),
    ("CAN", "Canada"),
    ("CHN", "China"),
    ("DEU", "Germany"),
    ("ESP", "Spain"),
    ("FRA", "France"),
    ("GBR", "United Kingdom"),
    ("IDN", "Indonesia"),
    ("IRL", "Ireland"),
    ("ITA", "Italy"),
    ("JPN", "Japan"),
    ("KOR", "South Korea"),
    ("MEX", "Mexico"),
    ("MYS", "Malaysia"),
    ("NZL", "New Zealand"),
    ("PHL", "Philippines"),
    ("PRT", "Portugal"),
    ("SCO", "Scotland"),
    ("SGP", "Singapore"),
    ("THA", "Thailand"),
    ("TUR", "Turkey"),
    ("TWN", "Taiwan"),
    ("USA", "United States"),
    ("VNM", "Vietnam"),
    ("ZAF", "South Africa"),
];

/// Maps a country code or name to its full name. Unknown input comes back
/// trimmed but otherwise as given.
pub fn normalize_country(input: &str) -> String {
    let input = input.trim();
    COUNTRY_CODES
        .iter()
        .find(|(code, name)| code.eq_ignore_ascii_case(input) || name.eq_ignore_ascii_case(input))
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| input.to_string())
}

pub fn same_country(a: &str, b: &str) -> bool {
    normalize_country(a).eq_ignore_ascii_case(&normalize_country(b))
}
