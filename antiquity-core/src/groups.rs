//! Population-group labels offered to users and their mapping to population types.

use crate::model::PopulationType;

/// Group label used for Roman settlements.
pub const ANCIENT_ROMAN: &str = "Ancient Roman";
/// Group label used for Jewish settlements.
pub const JEWISH: &str = "Jewish";
/// Group label used for every other settlement.
pub const OTHER: &str = "Other";

/// Static translation of group labels to the population types they select.
const GROUP_TYPES: &[(&str, &[PopulationType])] = &[
    (ANCIENT_ROMAN, &[PopulationType::Roman]),
    (JEWISH, &[PopulationType::Jewish]),
    ("Ancient Greek", &[PopulationType::Other]),
    ("Byzantine", &[PopulationType::Roman]),
    ("Christian", &[PopulationType::Mixed]),
    ("Muslim", &[PopulationType::Other]),
];

const FALLBACK_TYPES: &[PopulationType] = &[PopulationType::Other];

/// Population types selected by a group label. Unknown labels select `Other`.
#[must_use]
pub fn types_for_group(group: &str) -> &'static [PopulationType] {
    GROUP_TYPES
        .iter()
        .find(|(label, _)| *label == group)
        .map_or(FALLBACK_TYPES, |(_, types)| *types)
}

/// Flatten the mapping over `groups`, keeping the first occurrence of each type.
#[must_use]
pub fn types_for_groups<S: AsRef<str>>(groups: &[S]) -> Vec<PopulationType> {
    let mut types = Vec::new();
    for population_type in groups
        .iter()
        .flat_map(|group| types_for_group(group.as_ref()))
    {
        if !types.contains(population_type) {
            types.push(*population_type);
        }
    }
    types
}

/// Group label a settlement of the given type is counted under.
#[must_use]
pub const fn group_label_for(population_type: PopulationType) -> &'static str {
    match population_type {
        PopulationType::Roman => ANCIENT_ROMAN,
        PopulationType::Jewish => JEWISH,
        PopulationType::Mixed | PopulationType::Other => OTHER,
    }
}

/// Every group label a user can pick, alphabetically ordered.
pub const GROUP_CATALOGUE: &[&str] = &[
    "Aboriginal Australian",
    "African American",
    "Albanian",
    "American",
    "Amhara",
    "Ancient Egyptian",
    "Ancient Greek",
    "Ancient Roman",
    "Arab",
    "Argentine",
    "Armenian",
    "Ashanti",
    "Assyrian",
    "Australian",
    "Aztec",
    "Azerbaijani",
    "Bantu",
    "Basque",
    "Belarusian",
    "Bengali",
    "Berber",
    "Bosnian",
    "Brazilian",
    "British",
    "Bulgarian",
    "Buddhist",
    "Burmese",
    "Byzantine",
    "Cambodian",
    "Canadian",
    "Catalan",
    "Chilean",
    "Chinese",
    "Christian",
    "Colombian",
    "Croatian",
    "Cuban",
    "Czech",
    "Danish",
    "Dutch",
    "Ecuadorian",
    "English",
    "Estonian",
    "Fijian",
    "Filipino",
    "Finnish",
    "French",
    "Fulani",
    "Georgian",
    "German",
    "Greek",
    "Guatemalan",
    "Haitian",
    "Hausa",
    "Hawaiian",
    "Hindu",
    "Hmong",
    "Honduran",
    "Hungarian",
    "Igbo",
    "Inca",
    "Indian",
    "Indonesian",
    "Iranian",
    "Iraqi",
    "Irish",
    "Israeli",
    "Italian",
    "Japanese",
    "Jewish",
    "Jordanian",
    "Kikuyu",
    "Korean",
    "Kurdish",
    "Laotian",
    "Latvian",
    "Lebanese",
    "Lithuanian",
    "Macedonian",
    "Maasai",
    "Malay",
    "Mandinka",
    "Maori",
    "Maya",
    "Mexican",
    "Moldovan",
    "Mongol",
    "Muslim",
    "Nepali",
    "Nicaraguan",
    "Norwegian",
    "Oromo",
    "Ottoman",
    "Pakistani",
    "Palestinian",
    "Panamanian",
    "Papua New Guinean",
    "Paraguayan",
    "Peruvian",
    "Persian",
    "Phoenician",
    "Polish",
    "Portuguese",
    "Puerto Rican",
    "Romanian",
    "Russian",
    "Samoan",
    "Salvadoran",
    "Scottish",
    "Serbian",
    "Sikh",
    "Slovak",
    "Slovenian",
    "Somali",
    "Spanish",
    "Swahili",
    "Swedish",
    "Swiss",
    "Syrian",
    "Taoist",
    "Thai",
    "Tibetan",
    "Tongan",
    "Turkish",
    "Ukrainian",
    "Uruguayan",
    "Venezuelan",
    "Vietnamese",
    "Viking",
    "Welsh",
    "Yemeni",
    "Yoruba",
    "Zulu",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapped_labels_are_in_catalogue() {
        for (label, _) in GROUP_TYPES {
            assert!(GROUP_CATALOGUE.contains(label), "{label} must be selectable");
        }
    }

    #[test]
    fn types_are_deduplicated_in_first_seen_order() {
        let types = types_for_groups(&["Byzantine", "Jewish", "Ancient Roman", "Muslim", "Zulu"]);
        assert_eq!(
            types,
            vec![
                PopulationType::Roman,
                PopulationType::Jewish,
                PopulationType::Other
            ],
            "Roman appears once, unknown labels select Other"
        );
    }

    #[test]
    fn no_groups_select_no_types() {
        assert!(types_for_groups::<&str>(&[]).is_empty(), "empty selection");
    }

    #[test]
    fn mixed_settlements_count_as_other() {
        assert_eq!(group_label_for(PopulationType::Roman), ANCIENT_ROMAN, "roman");
        assert_eq!(group_label_for(PopulationType::Jewish), JEWISH, "jewish");
        assert_eq!(group_label_for(PopulationType::Mixed), OTHER, "mixed");
        assert_eq!(group_label_for(PopulationType::Other), OTHER, "other");
    }
}
