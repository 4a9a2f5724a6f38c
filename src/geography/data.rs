//! Standard map data: per-state defense and income, and the state combinations.

use super::combinations::{CombinationCategory, CombinationEffect, StateCombination};

/// `(id, name, base_ip, defense)` for the 50 states plus DC.
pub(super) const STANDARD_STATES: &[(&str, &str, u32, i32)] = &[
    ("CA", "California", 4, 4),
    ("TX", "Texas", 4, 4),
    ("NY", "New York", 5, 5),
    ("FL", "Florida", 2, 2),
    ("IL", "Illinois", 3, 3),
    ("PA", "Pennsylvania", 3, 3),
    ("OH", "Ohio", 3, 3),
    ("GA", "Georgia", 3, 3),
    ("NC", "North Carolina", 3, 3),
    ("MI", "Michigan", 3, 3),
    ("DC", "Washington DC", 5, 5),
    ("WA", "Washington", 3, 3),
    ("NV", "Nevada", 2, 2),
    ("CO", "Colorado", 2, 2),
    ("VA", "Virginia", 3, 3),
    ("MD", "Maryland", 3, 3),
    ("LA", "Louisiana", 2, 2),
    ("TN", "Tennessee", 2, 2),
    ("AL", "Alabama", 2, 2),
    ("KY", "Kentucky", 2, 2),
    ("SC", "South Carolina", 2, 2),
    ("AR", "Arkansas", 2, 2),
    ("MS", "Mississippi", 2, 2),
    ("AZ", "Arizona", 2, 2),
    ("UT", "Utah", 2, 2),
    ("NM", "New Mexico", 2, 2),
    ("WI", "Wisconsin", 2, 2),
    ("MN", "Minnesota", 2, 2),
    ("MO", "Missouri", 2, 2),
    ("IN", "Indiana", 2, 2),
    ("CT", "Connecticut", 3, 3),
    ("OR", "Oregon", 2, 2),
    ("AK", "Alaska", 1, 1),
    ("HI", "Hawaii", 1, 1),
    ("WY", "Wyoming", 1, 1),
    ("VT", "Vermont", 1, 1),
    ("DE", "Delaware", 2, 2),
    ("NH", "New Hampshire", 1, 1),
    ("RI", "Rhode Island", 1, 1),
    ("ME", "Maine", 1, 1),
    ("MA", "Massachusetts", 3, 3),
    ("NJ", "New Jersey", 3, 3),
    ("NE", "Nebraska", 1, 1),
    ("KS", "Kansas", 1, 1),
    ("ND", "North Dakota", 1, 1),
    ("SD", "South Dakota", 1, 1),
    ("IA", "Iowa", 1, 1),
    ("OK", "Oklahoma", 2, 2),
    ("MT", "Montana", 1, 1),
    ("ID", "Idaho", 1, 1),
    ("WV", "West Virginia", 1, 1),
];

/// The standard state combinations.
pub(super) fn standard_combinations() -> Vec<StateCombination> {
    use CombinationCategory::*;
    use CombinationEffect::*;

    vec![
        StateCombination::new("wall_street_empire", "Wall Street Empire", &["NY", "CT", "NJ"], 5, Economic)
            .with_description("Control the financial capitals of America")
            .with_effect(FlatIp(2)),
        StateCombination::new("silicon_valley_network", "Silicon Valley Network", &["CA", "WA", "OR"], 4, Economic)
            .with_description("Dominate the tech industry")
            .with_effect(MediaCostModifier(-1)),
        StateCombination::new("oil_cartel", "Oil Cartel", &["TX", "AK", "ND", "OK"], 6, Energy)
            .with_description("Control America's energy resources")
            .with_effect(IpPerControlledState(1)),
        StateCombination::new("military_triangle", "Military Triangle", &["VA", "MD", "DC"], 4, Military)
            .with_description("Pentagon, CIA, and NSA under your control"),
        StateCombination::new("nuclear_triad", "Nuclear Triad", &["WY", "MT", "ND"], 3, Military)
            .with_description("Control the nuclear arsenal"),
        StateCombination::new("space_program", "Space Program", &["FL", "TX", "AL", "CA"], 5, Military)
            .with_description("Control space operations"),
        StateCombination::new("intel_web", "Intelligence Web", &["VA", "MD", "UT", "NV"], 4, Intelligence)
            .with_description("Total information awareness"),
        StateCombination::new("academic_elite", "Academic Elite", &["MA", "CT", "NY", "CA"], 3, Cultural)
            .with_description("Control the ivory towers")
            .with_effect(TruthMultiplierPct(150)),
        StateCombination::new("midwest_backbone", "Midwest Backbone", &["IL", "OH", "MI", "IN", "WI"], 4, Economic)
            .with_description("America's industrial heartland"),
        StateCombination::new("deep_south", "Deep South Network", &["GA", "AL", "MS", "SC", "LA"], 3, Cultural)
            .with_description("Traditional power structures")
            .with_effect(GovernmentTruthBonus(2)),
        StateCombination::new(
            "new_england_conspiracy",
            "New England Conspiracy",
            &["MA", "NH", "VT", "ME", "RI", "CT"],
            4,
            Cultural,
        )
        .with_description("Old money, old secrets"),
        StateCombination::new("transport_control", "Transport Control", &["IL", "MO", "IN", "OH"], 3, Transport)
            .with_description("Control the flow of goods and people"),
        StateCombination::new("southern_border", "Southern Border", &["CA", "AZ", "NM", "TX"], 4, Military)
            .with_description("Control immigration and smuggling")
            .with_effect(IpPerNeutralState(1)),
        StateCombination::new("food_supply", "Food Supply Chain", &["IA", "NE", "KS", "MO", "IL"], 3, Economic)
            .with_description("Control America's breadbasket"),
    ]
}
