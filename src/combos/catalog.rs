//! The standard combo catalog.

use super::types::{ComboCategory, ComboDefinition, ComboReward, ComboTrigger, ThresholdMetric};
use crate::cards::{CardType, Rarity};

use CardType::{Attack, Media, Zone};

fn logged(reward: ComboReward, line: &str) -> ComboReward {
    ComboReward {
        log: Some(line.to_string()),
        ..reward
    }
}

/// Every built-in combo, grouped by family.
#[must_use]
pub fn standard_combos() -> Vec<ComboDefinition> {
    let mut combos = sequence_combos();
    combos.extend(count_combos());
    combos.extend(threshold_combos());
    combos.extend(state_combos());
    combos.extend(hybrid_combos());
    combos
}

fn sequence_combos() -> Vec<ComboDefinition> {
    let seq = |id: &str, name: &str, description: &str, priority, pattern: &[CardType], reward| {
        ComboDefinition::new(
            id,
            name,
            ComboCategory::Sequence,
            priority,
            ComboTrigger::sequence(pattern),
            reward,
        )
        .with_description(description)
    };

    vec![
        seq(
            "sequence_attack_blitz",
            "Attack Blitz",
            "Play three ATTACK cards in a row to overwhelm the opposition.",
            100,
            &[Attack, Attack, Attack],
            logged(
                ComboReward::attack_multiplier(2),
                "Attack Blitz primes your next strike for double damage.",
            ),
        )
        .with_cap(4),
        seq(
            "sequence_media_wave",
            "Media Wave",
            "Flood the airwaves with three back-to-back MEDIA plays.",
            100,
            &[Media, Media, Media],
            logged(ComboReward::truth(4), "+Truth from media wave"),
        ),
        seq(
            "sequence_zone_lock",
            "Zone Lock",
            "Deploy three ZONE cards consecutively to lock the map.",
            95,
            &[Zone, Zone, Zone],
            logged(ComboReward::ip(3), "+IP from zone lock"),
        ),
        seq(
            "sequence_shock_and_awe",
            "Shock & Awe",
            "Strike with ATTACK then follow with double MEDIA spin.",
            96,
            &[Attack, Media, Media],
            logged(ComboReward::truth(3), "+Truth from shock & awe"),
        ),
        seq(
            "sequence_crossfire",
            "Crossfire",
            "MEDIA exposes the target before a pair of ATTACK plays.",
            92,
            &[Media, Attack, Attack],
            logged(ComboReward::ip(3), "+IP from crossfire"),
        ),
        seq(
            "sequence_signal_jam",
            "Signal Jam",
            "MEDIA-ZONE-MEDIA triangle to scramble responses.",
            90,
            &[Media, Zone, Media],
            logged(ComboReward::truth(2), "Truth swing from signal jam"),
        ),
        seq(
            "sequence_territorial_push",
            "Territorial Push",
            "ZONE-ATTACK-ZONE to lock down contested regions.",
            94,
            &[Zone, Attack, Zone],
            logged(ComboReward::ip(3), "IP surge from territorial push"),
        ),
        seq(
            "sequence_full_spectrum",
            "Full Spectrum",
            "Play ATTACK, MEDIA and ZONE in sequence for total coverage.",
            98,
            &[Attack, Media, Zone],
            logged(ComboReward::ip_and_truth(2, 1), "Full spectrum pressure applied"),
        ),
        seq(
            "sequence_closed_circuit",
            "Closed Circuit",
            "ZONE-MEDIA-ATTACK loops intelligence to offense.",
            91,
            &[Zone, Media, Attack],
            logged(ComboReward::ip(2), "Closed circuit advantage"),
        ),
        seq(
            "sequence_firestorm",
            "Firestorm",
            "Two ATTACK cards followed by MEDIA exploitation.",
            93,
            &[Attack, Attack, Media],
            logged(ComboReward::truth(2), "Media fans the flames"),
        ),
    ]
}

fn count_combos() -> Vec<ComboDefinition> {
    let count = |id: &str, name: &str, description: &str, priority, trigger, reward| {
        ComboDefinition::new(id, name, ComboCategory::Count, priority, trigger, reward).with_description(description)
    };

    vec![
        count(
            "count_attack_barrage",
            "Attack Barrage",
            "Play at least three ATTACK cards during the turn.",
            89,
            ComboTrigger::count(Some(Attack), 3),
            logged(ComboReward::ip(6), "Barrage drains their reserves"),
        )
        .with_cap(4),
        count(
            "count_media_campaign",
            "Media Campaign",
            "Publish three MEDIA pieces to sway opinion.",
            88,
            ComboTrigger::count(Some(Media), 3),
            logged(ComboReward::truth(3), "Campaign shifts public sentiment"),
        ),
        count(
            "count_zone_network",
            "Zone Network",
            "Deploy two or more ZONE cards to secure control.",
            87,
            ComboTrigger::count(Some(Zone), 2),
            logged(ComboReward::ip(2), "Network strengthens position"),
        ),
        count(
            "count_full_press",
            "Full Press",
            "Play four or more cards of any type in a turn.",
            85,
            ComboTrigger::count(None, 4),
            logged(ComboReward::ip(2), "Full press exhausts the opposition"),
        ),
        count(
            "count_relentless",
            "Relentless Pressure",
            "Play five or more cards regardless of type.",
            84,
            ComboTrigger::count(None, 5),
            logged(ComboReward::ip(3), "Relentless drive yields dividends"),
        ),
        count(
            "count_rare_circle",
            "Rare Circle",
            "Play two or more cards of rare or legendary rarity.",
            83,
            ComboTrigger::count_rarity(2, Rarity::Rare),
            logged(ComboReward::ip(3), "Elites mobilised"),
        ),
        count(
            "count_legendary_gambit",
            "Legendary Gambit",
            "Play a legendary card to swing the narrative.",
            90,
            ComboTrigger::count_rarity(1, Rarity::Legendary),
            logged(ComboReward::ip(4), "Legendary gambit pays off"),
        ),
        count(
            "count_media_pair",
            "Media Pair",
            "Play two MEDIA cards to maintain coverage.",
            82,
            ComboTrigger::count(Some(Media), 2),
            logged(ComboReward::truth(2), "Media pairing sustains attention"),
        ),
        count(
            "count_balanced_arsenal",
            "Balanced Arsenal",
            "Play at least one card of each type in a single turn.",
            88,
            ComboTrigger::all(vec![
                ComboTrigger::count(Some(Attack), 1),
                ComboTrigger::count(Some(Media), 1),
                ComboTrigger::count(Some(Zone), 1),
            ]),
            logged(ComboReward::ip_and_truth(2, 1), "Balanced arsenal unlocks flexibility"),
        ),
        count(
            "count_budget_masters",
            "Budget Masters",
            "Play three low-cost cards (cost ≤ 2) in one turn.",
            81,
            ComboTrigger::threshold(ThresholdMetric::LowCostCount, 3),
            logged(ComboReward::truth(2), "Budget plays resonate locally"),
        ),
    ]
}

fn threshold_combos() -> Vec<ComboDefinition> {
    let threshold = |id: &str, name: &str, description: &str, priority, metric, value, reward| {
        ComboDefinition::new(
            id,
            name,
            ComboCategory::Threshold,
            priority,
            ComboTrigger::threshold(metric, value),
            reward,
        )
        .with_description(description)
    };

    vec![
        threshold(
            "threshold_total_spend_12",
            "Strategic Budget",
            "Spend at least 12 IP on cards this turn.",
            80,
            ThresholdMetric::IpSpent,
            12,
            logged(ComboReward::ip(4), "Budget converts to momentum"),
        ),
        threshold(
            "threshold_attack_spend_9",
            "Ordnance Allocation",
            "Invest 9 or more IP into ATTACK cards in one turn.",
            86,
            ThresholdMetric::AttackSpent,
            9,
            logged(ComboReward::ip(3), "Heavy strike investment returns"),
        ),
        threshold(
            "threshold_media_spend_8",
            "Broadcast Budget",
            "Invest eight or more IP into MEDIA plays.",
            85,
            ThresholdMetric::MediaSpent,
            8,
            logged(ComboReward::truth(4), "Media saturation achieved"),
        ),
        threshold(
            "threshold_zone_spend_6",
            "Logistics Surge",
            "Spend at least six IP on ZONE cards this turn.",
            84,
            ThresholdMetric::ZoneSpent,
            6,
            logged(ComboReward::ip(2), "Logistics surge expands reach"),
        ),
        threshold(
            "threshold_total_spend_18",
            "Grand Offensive",
            "Spend eighteen or more IP during a single turn.",
            88,
            ThresholdMetric::IpSpent,
            18,
            logged(ComboReward::ip(5), "Grand offensive reshapes the board"),
        ),
        threshold(
            "threshold_low_cost_4",
            "Grassroots Push",
            "Deploy four low-cost cards (cost ≤ 2).",
            79,
            ThresholdMetric::LowCostCount,
            4,
            logged(ComboReward::truth(2), "Grassroots push builds trust"),
        ),
        threshold(
            "threshold_high_cost_2",
            "High Roller",
            "Play two cards costing six IP or more.",
            83,
            ThresholdMetric::HighCostCount,
            2,
            logged(ComboReward::ip(3), "High-cost cards swing the tide"),
        ),
        threshold(
            "threshold_unique_states_3",
            "Multi-State Operation",
            "Target three different states with ZONE cards.",
            82,
            ThresholdMetric::UniqueStatesTargeted,
            3,
            logged(ComboReward::ip(3), "Multi-state operation widens influence"),
        ),
    ]
}

fn state_combos() -> Vec<ComboDefinition> {
    let state = |id: &str, name: &str, description: &str, priority, trigger, reward| {
        ComboDefinition::new(id, name, ComboCategory::State, priority, trigger, reward).with_description(description)
    };

    vec![
        state(
            "state_double_down",
            "Double Down",
            "Target the same state twice with ZONE plays in a turn.",
            78,
            ComboTrigger::same_state(Some(Zone), &[], 2),
            logged(ComboReward::ip(2), "Double targeting overwhelms defences"),
        ),
        state(
            "state_lockdown",
            "Lockdown",
            "Hit the same state three times with ZONE cards.",
            90,
            ComboTrigger::same_state(Some(Zone), &[], 3),
            logged(ComboReward::ip(4), "Lockdown secures the region"),
        ),
        state(
            "state_coastal_pressure",
            "Coastal Pressure",
            "Target two coastal states (CA, OR, WA, FL, NY).",
            76,
            ComboTrigger::unique_states(Some(Zone), &["CA", "OR", "WA", "FL", "NY"], 2),
            logged(ComboReward::ip(2), "Coastal pressure strains supply lines"),
        ),
        state(
            "state_border_push",
            "Border Push",
            "Apply ZONE pressure to two southern border states.",
            77,
            ComboTrigger::unique_states(Some(Zone), &["CA", "AZ", "NM", "TX"], 2),
            logged(ComboReward::ip(2), "Border operations escalate"),
        ),
        state(
            "state_capital_strike",
            "Capital Strike",
            "Target DC with any ZONE card.",
            85,
            ComboTrigger::same_state(Some(Zone), &["DC"], 1),
            logged(ComboReward::truth(3), "Capital strike rattles leadership"),
        ),
        state(
            "state_heartland_drive",
            "Heartland Drive",
            "Target two heartland states (IA, KS, MO, NE, OK).",
            75,
            ComboTrigger::unique_states(Some(Zone), &["IA", "KS", "MO", "NE", "OK"], 2),
            logged(ComboReward::ip(2), "Heartland drive captures logistics"),
        ),
    ]
}

fn hybrid_combos() -> Vec<ComboDefinition> {
    let hybrid = |id: &str, name: &str, description: &str, priority, triggers, reward| {
        ComboDefinition::new(
            id,
            name,
            ComboCategory::Hybrid,
            priority,
            ComboTrigger::all(triggers),
            reward,
        )
        .with_description(description)
    };

    vec![
        hybrid(
            "hybrid_precision_strike",
            "Precision Strike",
            "Chain ATTACK into ZONE while spending six IP on ATTACK plays.",
            92,
            vec![
                ComboTrigger::sequence(&[Attack, Zone]),
                ComboTrigger::threshold(ThresholdMetric::AttackSpent, 6),
            ],
            logged(ComboReward::ip(3), "Precision strike breaks resistance"),
        ),
        hybrid(
            "hybrid_signal_lock",
            "Signal Lock",
            "Play MEDIA twice and spend at least three IP on ZONE.",
            86,
            vec![
                ComboTrigger::sequence(&[Media, Media]),
                ComboTrigger::threshold(ThresholdMetric::ZoneSpent, 3),
            ],
            logged(ComboReward::truth(2), "Signal lock cements the story"),
        ),
        hybrid(
            "hybrid_momentum",
            "Momentum Engine",
            "Play three cards and spend at least ten IP in total.",
            88,
            vec![
                ComboTrigger::count(None, 3),
                ComboTrigger::threshold(ThresholdMetric::IpSpent, 10),
            ],
            logged(ComboReward::ip(3), "Momentum engine fuels dominance"),
        ),
        hybrid(
            "hybrid_rally",
            "Public Rally",
            "Two MEDIA plays and two unique targeted states in one turn.",
            87,
            vec![
                ComboTrigger::count(Some(Media), 2),
                ComboTrigger::threshold(ThresholdMetric::UniqueStatesTargeted, 2),
            ],
            logged(ComboReward::truth(3), "Public rally energises supporters"),
        ),
        hybrid(
            "hybrid_last_resort",
            "Last Resort",
            "Play two cards including at least one high-cost option.",
            74,
            vec![
                ComboTrigger::count(None, 2),
                ComboTrigger::threshold(ThresholdMetric::HighCostCount, 1),
            ],
            logged(ComboReward::ip(2), "Last resort squeezes hidden reserves"),
        ),
        hybrid(
            "hybrid_chain_reaction",
            "Chain Reaction",
            "Execute a three-card sequence while targeting two states.",
            93,
            vec![
                ComboTrigger::count(None, 3),
                ComboTrigger::threshold(ThresholdMetric::UniqueStatesTargeted, 2),
            ],
            logged(ComboReward::ip_and_truth(3, 1), "Chain reaction cascades advantages"),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_catalog_ids_unique() {
        let combos = standard_combos();
        let ids: FxHashSet<&str> = combos.iter().map(|c| c.id.as_str()).collect();

        assert_eq!(combos.len(), 40);
        assert_eq!(ids.len(), combos.len());
    }

    #[test]
    fn test_catalog_families() {
        let combos = standard_combos();
        let in_family = |category| combos.iter().filter(|c| c.category == category).count();

        assert_eq!(in_family(ComboCategory::Sequence), 10);
        assert_eq!(in_family(ComboCategory::Count), 10);
        assert_eq!(in_family(ComboCategory::Threshold), 8);
        assert_eq!(in_family(ComboCategory::State), 6);
        assert_eq!(in_family(ComboCategory::Hybrid), 6);
    }

    #[test]
    fn test_attack_blitz_definition() {
        let combos = standard_combos();
        let blitz = combos.iter().find(|c| c.id == "sequence_attack_blitz").unwrap();

        assert_eq!(blitz.priority, 100);
        assert_eq!(blitz.reward.next_attack_multiplier, Some(2));
        assert_eq!(blitz.trigger, ComboTrigger::sequence(&[Attack, Attack, Attack]));
    }
}
