//! Built-in core set data.

use super::definition::{CardType, Rarity};
use crate::core::Faction;

/// `(id, name, faction, rarity, type, amount, opponent discards)`.
pub(super) type CoreEntry = (&'static str, &'static str, Faction, Rarity, CardType, i32, u32);

// Media amounts are magnitudes; the faction decides the direction.
pub(super) const CORE_SET: &[CoreEntry] = {
    use CardType::{Attack, Media, Zone};
    use Faction::{Government, Truth};
    use Rarity::{Common, Legendary, Rare, Uncommon};
    &[
        ("truth-a01", "The Lone Gunmen", Truth, Common, Attack, 1, 0),
        ("truth-a02", "Leaked Memo", Truth, Common, Attack, 2, 0),
        ("truth-a03", "FOIA Avalanche", Truth, Uncommon, Attack, 3, 0),
        ("truth-a04", "Whistleblower Hotline", Truth, Uncommon, Attack, 3, 0),
        ("truth-a05", "Data Liberation", Truth, Rare, Attack, 4, 1),
        ("truth-a06", "The Full Dossier", Truth, Legendary, Attack, 5, 1),
        ("truth-m01", "Emergency Broadcast", Truth, Common, Media, 2, 0),
        ("truth-m02", "Blurry Mothman Dashcam", Truth, Common, Media, 2, 0),
        ("truth-m03", "Florida Man Finds Government Device", Truth, Common, Media, 2, 0),
        ("truth-m04", "Pirate Radio Hour", Truth, Uncommon, Media, 3, 0),
        ("truth-m05", "Bat Boy Delivers Breaking News", Truth, Uncommon, Media, 3, 0),
        ("truth-m06", "Ghost Jury Finds the Truth", Truth, Rare, Media, 4, 0),
        ("truth-m07", "Elvis Edits the Front Page", Truth, Legendary, Media, 5, 0),
        ("truth-z01", "Grassroots Press Co-Op", Truth, Common, Zone, 1, 0),
        ("truth-z02", "Skywatcher Ridge", Truth, Common, Zone, 1, 0),
        ("truth-z03", "Citizen Forensics Lab", Truth, Uncommon, Zone, 2, 0),
        ("truth-z04", "Desert Billboards of Truth", Truth, Uncommon, Zone, 2, 0),
        ("truth-z05", "Haunted Library Stacks", Truth, Rare, Zone, 3, 0),
        ("truth-z06", "Open-Records Taskforce", Truth, Rare, Zone, 3, 0),
        ("truth-z07", "Truth Meter Calibrator", Truth, Legendary, Zone, 4, 0),
        ("gov-a01", "Routine Audit", Government, Common, Attack, 1, 0),
        ("gov-a02", "Discrediting Op-Ed", Government, Common, Attack, 2, 0),
        ("gov-a03", "Budget Freeze", Government, Uncommon, Attack, 3, 0),
        ("gov-a04", "Surveillance Sweep", Government, Uncommon, Attack, 3, 0),
        ("gov-a05", "Black Bag Job", Government, Rare, Attack, 4, 1),
        ("gov-a06", "Total Information Awareness", Government, Legendary, Attack, 5, 1),
        ("gov-m01", "Weather Balloon Statement", Government, Common, Media, 2, 0),
        ("gov-m02", "Nothing to See Here", Government, Common, Media, 2, 0),
        ("gov-m03", "Press Secretary Deflects", Government, Common, Media, 2, 0),
        ("gov-m04", "Swamp Gas Briefing", Government, Uncommon, Media, 3, 0),
        ("gov-m05", "Official Fact Check", Government, Uncommon, Media, 3, 0),
        ("gov-m06", "Sponsored Expert Panel", Government, Rare, Media, 4, 0),
        ("gov-m07", "Prime-Time Distraction", Government, Legendary, Media, 5, 0),
        ("gov-z01", "Field Office", Government, Common, Zone, 1, 0),
        ("gov-z02", "Highway Checkpoint", Government, Common, Zone, 1, 0),
        ("gov-z03", "Regional Task Force", Government, Uncommon, Zone, 2, 0),
        ("gov-z04", "Contractor Campus", Government, Uncommon, Zone, 2, 0),
        ("gov-z05", "Black Site", Government, Rare, Zone, 3, 0),
        ("gov-z06", "Fusion Center", Government, Rare, Zone, 3, 0),
        ("gov-z07", "Area 51 Annex", Government, Legendary, Zone, 4, 0),
    ]
};
