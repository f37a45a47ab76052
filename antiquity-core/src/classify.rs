//! Keyword classification of place records into population types.

use crate::model::{PlaceRecord, PopulationType};

const JEWISH_MARKERS: &[&str] = &[
    "jewish",
    "juda",
    "judea",
    "hebrew",
    "synagogue",
    "jerusalem",
    "galilee",
    "qumran",
    "samaria",
    "masada",
    "israelite",
    "rabbinic",
];

const ROMAN_MARKERS: &[&str] = &[
    "roman",
    "rome",
    "imperial",
    "legion",
    "forum",
    "aqueduct",
    "pompeii",
    "constantinople",
    "colonia",
    "municipium",
    "castra",
];

const DIVERSITY_MARKERS: &[&str] = &["mixed", "cosmopolitan"];

const MULTICULTURAL_CITIES: &[&str] = &[
    "alexandria",
    "antioch",
    "ephesus",
    "damascus",
    "thessalonica",
];

const ERA_MARKERS: &[&str] = &["ancient", "classical"];

const SETTLEMENT_TAGS: &[&str] = &["settlement", "city", "urban"];

/// A single classification test.
enum Rule {
    /// Any of the keywords occurs in the text.
    AnyOf(&'static [&'static str]),
    /// Both Roman and Jewish markers, a diversity marker, or a known multicultural city.
    Mixed,
    /// Tagged as a settlement and described as ancient or classical.
    AncientSettlement,
}

/// Rules evaluated in order; the first match wins.
///
/// Jewish is checked before Roman, so text carrying both sets of markers is Jewish.
const RULES: [(PopulationType, Rule); 4] = [
    (PopulationType::Jewish, Rule::AnyOf(JEWISH_MARKERS)),
    (PopulationType::Roman, Rule::AnyOf(ROMAN_MARKERS)),
    (PopulationType::Mixed, Rule::Mixed),
    (PopulationType::Roman, Rule::AncientSettlement),
];

/// Assign a population type to a place record based on its title, names and description.
#[must_use]
pub fn classify(record: &PlaceRecord) -> PopulationType {
    let text = searchable_text(record);

    RULES
        .iter()
        .find(|(_, rule)| rule.matches(record, &text))
        .map_or(PopulationType::Other, |(population_type, _)| *population_type)
}

impl Rule {
    fn matches(&self, record: &PlaceRecord, text: &str) -> bool {
        match self {
            Rule::AnyOf(keywords) => mentions_any(text, keywords),
            Rule::Mixed => {
                (mentions_any(text, ROMAN_MARKERS) && mentions_any(text, JEWISH_MARKERS))
                    || mentions_any(text, DIVERSITY_MARKERS)
                    || mentions_any(text, MULTICULTURAL_CITIES)
            }
            Rule::AncientSettlement => {
                is_tagged_settlement(record) && mentions_any(text, ERA_MARKERS)
            }
        }
    }
}

/// Lowercased title, alternate names and description joined by spaces.
fn searchable_text(record: &PlaceRecord) -> String {
    let mut parts = Vec::with_capacity(record.names.len() + 2);
    parts.push(record.title.as_str());
    parts.extend(record.names.iter().map(String::as_str));
    if let Some(description) = record.description.as_deref() {
        parts.push(description);
    }
    parts.join(" ").to_lowercase()
}

/// Plain substring match: `rome` also hits `hippodrome`.
fn mentions_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}

fn is_tagged_settlement(record: &PlaceRecord) -> bool {
    record.place_types.iter().any(|tag| {
        let tag = tag.to_lowercase();
        SETTLEMENT_TAGS.iter().any(|known| tag.starts_with(known))
    })
}
