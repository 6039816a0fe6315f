// ── Country code resolution ──
//
// Fixed ISO 3166-1 alpha-2 table covering the codes the supported
// providers emit. A lookup miss is non-fatal: the raw code is kept as
// the country value and a warning is handed back for the caller to emit.

/// Code table entries: (lowercase alpha-2 code, canonical country name).
pub const COUNTRY_CODES: &[(&str, &str)] = &[
    ("ad", "Andorra"),
    ("ae", "United Arab Emirates"),
    ("al", "Albania"),
    ("ar", "Argentina"),
    ("at", "Austria"),
    ("au", "Australia"),
    ("ba", "Bosnia and Herzegovina"),
    ("be", "Belgium"),
    ("bg", "Bulgaria"),
    ("br", "Brazil"),
    ("ca", "Canada"),
    ("ch", "Switzerland"),
    ("cl", "Chile"),
    ("co", "Colombia"),
    ("cr", "Costa Rica"),
    ("cy", "Cyprus"),
    ("cz", "Czech Republic"),
    ("de", "Germany"),
    ("dk", "Denmark"),
    ("ee", "Estonia"),
    ("es", "Spain"),
    ("fi", "Finland"),
    ("fr", "France"),
    ("gb", "United Kingdom"),
    ("ge", "Georgia"),
    ("gr", "Greece"),
    ("hk", "Hong Kong"),
    ("hr", "Croatia"),
    ("hu", "Hungary"),
    ("id", "Indonesia"),
    ("ie", "Ireland"),
    ("il", "Israel"),
    ("in", "India"),
    ("is", "Iceland"),
    ("it", "Italy"),
    ("jp", "Japan"),
    ("kr", "South Korea"),
    ("lt", "Lithuania"),
    ("lu", "Luxembourg"),
    ("lv", "Latvia"),
    ("md", "Moldova"),
    ("me", "Montenegro"),
    ("mk", "North Macedonia"),
    ("mx", "Mexico"),
    ("my", "Malaysia"),
    ("ng", "Nigeria"),
    ("nl", "Netherlands"),
    ("no", "Norway"),
    ("nz", "New Zealand"),
    ("pe", "Peru"),
    ("ph", "Philippines"),
    ("pl", "Poland"),
    ("pt", "Portugal"),
    ("ro", "Romania"),
    ("rs", "Serbia"),
    ("se", "Sweden"),
    ("sg", "Singapore"),
    ("si", "Slovenia"),
    ("sk", "Slovakia"),
    ("th", "Thailand"),
    ("tr", "Turkey"),
    ("tw", "Taiwan"),
    ("ua", "Ukraine"),
    ("us", "United States"),
    ("vn", "Vietnam"),
    ("za", "South Africa"),
];

/// Resolve a provider country code against a code table.
///
/// Returns the canonical name, or on a miss the raw code unchanged plus a
/// warning message. Keeping the raw code (rather than an empty value)
/// keeps unknown-code servers distinguishable in catalog diffs.
pub fn code_to_country(code: &str, table: &[(&str, &str)]) -> (String, Option<String>) {
    let needle = code.to_lowercase();
    for (candidate, name) in table {
        if *candidate == needle {
            return ((*name).to_owned(), None);
        }
    }
    (
        code.to_owned(),
        Some(format!("country code {code} not found in the country table")),
    )
}
