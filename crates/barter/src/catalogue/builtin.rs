//! Reference market: 49 sell-side listings in seven vendor groups and 35
//! buy orders in seven groups.

use super::{Catalogue, Listing as L};

pub(super) fn market() -> Catalogue {
    Catalogue {
        currency: "g".to_string(),
        sell: sell(),
        buy: buy(),
    }
}

fn sell() -> Vec<L> {
    vec![
        L::new(("Healing Potion", 1), ("g", 2)),
        L::new(("Golden Goblet", 1), ("Hand Axe", 5)),
        L::new(("Jade Locket", 1), ("Linen Bandage", 2)),
        L::new(("Alliance Mace", 1), ("Stormwind Cheddar", 14)),
        L::new(("Draught of Angels", 1), ("Cute Doll", 3)),
        L::new(("Gilnean Dagger", 1), ("Shadowy Gem", 2)),
        L::new(("Loyal Pet Whistle", 1), ("Elixir of Vigor", 4)),

        L::new(("Iron Dagger", 1), ("g", 1)),
        L::new(("Jade Locket", 1), ("Stormwind Cheddar", 4)),
        L::new(("Golden Goblet", 1), ("Healing Potion", 4)),
        L::new(("Ruby Crown", 1), ("Hand Axe", 22)),
        L::new(("Sphere of Wisdom", 1), ("Potion of Night", 4)),
        L::new(("Shadowy Gem", 1), ("Gnomish Shield", 3)),
        L::new(("Sapphire Wand", 1), ("Loyal Pet Whistle", 2)),

        L::new(("Hand Axe", 1), ("g", 2)),
        L::new(("Cute Doll", 1), ("Linen Bandage", 5)),
        L::new(("Arcane Scroll", 1), ("Very Nice Hat", 8)),
        L::new(("Draught of Angels", 1), ("Angry Crystal", 1)),
        L::new(("Potion of Night", 1), ("Jade Locket", 5)),
        L::new(("Everburning Candle", 1), ("Goblin Fishing Pole", 4)),
        L::new(("Tiger Amulet", 1), ("Captivating Pipes", 5)),

        L::new(("Captivating Pipes", 1), ("g", 11)),
        L::new(("Linen Bandage", 1), ("Elixir of Vigor", 1)),
        L::new(("Gilnean Dagger", 1), ("Healing Potion", 49)),
        L::new(("Gnomish Shield", 1), ("Iron Dagger", 12)),
        L::new(("Potion of Night", 1), ("Stormwind Cheddar", 13)),
        L::new(("Tiger Amulet", 1), ("Arcane Scroll", 3)),
        L::new(("Alliance Mace", 1), ("Golden Goblet", 3)),

        L::new(("Arcane Scroll", 1), ("g", 25)),
        L::new(("Very Nice Hat", 1), ("Hand Axe", 2)),
        L::new(("Captivating Pipes", 1), ("Healing Potion", 7)),
        L::new(("Angry Crystal", 1), ("Elixir of Vigor", 20)),
        L::new(("Gilnean Dagger", 1), ("Sapphire Wand", 2)),
        L::new(("Sphere of Wisdom", 1), ("Golden Goblet", 10)),
        L::new(("Sapphire Wand", 1), ("Stormwind Cheddar", 15)),

        L::new(("Elixir of Vigor", 1), ("g", 3)),
        L::new(("Goblin Fishing Pole", 1), ("Hand Axe", 4)),
        L::new(("Sapphire Wand", 1), ("Very Nice Hat", 5)),
        L::new(("Everburning Candle", 1), ("Alliance Mace", 1)),
        L::new(("Angry Crystal", 1), ("Cute Doll", 5)),
        L::new(("Ruby Crown", 1), ("Captivating Pipes", 3)),
        L::new(("Draught of Angels", 1), ("Golden Goblet", 9)),

        L::new(("Stormwind Cheddar", 1), ("g", 2)),
        L::new(("Goblin Fishing Pole", 1), ("Stormwind Cheddar", 5)),
        L::new(("Loyal Pet Whistle", 1), ("Iron Dagger", 7)),
        L::new(("Shadowy Gem", 1), ("Elixir of Vigor", 9)),
        L::new(("Gilnean Dagger", 1), ("Ruby Crown", 1)),
        L::new(("Tiger Amulet", 1), ("Gnomish Shield", 4)),
        L::new(("Alliance Mace", 1), ("Cute Doll", 3)),
    ]
}

fn buy() -> Vec<L> {
    vec![
        L::new(("g", 10), ("Hand Axe", 6)),
        L::new(("g", 18), ("Goblin Fishing Pole", 2)),
        L::new(("g", 60), ("Angry Crystal", 1)),
        L::new(("g", 138), ("Arcane Scroll", 6)),
        L::new(("g", 205), ("Sphere of Wisdom", 3)),

        L::new(("g", 18), ("Cute Doll", 1)),
        L::new(("g", 25), ("Stormwind Cheddar", 10)),
        L::new(("g", 120), ("Goblin Fishing Pole", 10)),
        L::new(("g", 92), ("Ruby Crown", 4)),
        L::new(("g", 240), ("Potion of Night", 8)),

        L::new(("g", 13), ("Linen Bandage", 3)),
        L::new(("g", 14), ("Very Nice Hat", 4)),
        L::new(("g", 30), ("Draught of Angels", 1)),
        L::new(("g", 150), ("Angry Crystal", 3)),
        L::new(("g", 166), ("Cute Doll", 9)),

        L::new(("g", 11), ("Jade Locket", 1)),
        L::new(("g", 42), ("Captivating Pipes", 6)),
        L::new(("g", 72), ("Ruby Crown", 2)),
        L::new(("g", 114), ("Tiger Amulet", 2)),
        L::new(("g", 125), ("Sapphire Wand", 10)),

        L::new(("g", 6), ("Iron Dagger", 3)),
        L::new(("g", 70), ("Gilnean Dagger", 1)),
        L::new(("g", 50), ("Captivating Pipes", 4)),
        L::new(("g", 125), ("Alliance Mace", 5)),
        L::new(("g", 166), ("Shadowy Gem", 7)),

        L::new(("g", 15), ("Elixir of Vigor", 10)),
        L::new(("g", 25), ("Gnomish Shield", 2)),
        L::new(("g", 65), ("Golden Goblet", 7)),
        L::new(("g", 70), ("Alliance Mace", 4)),
        L::new(("g", 180), ("Everburning Candle", 7)),

        L::new(("g", 10), ("Healing Potion", 8)),
        L::new(("g", 22), ("Loyal Pet Whistle", 3)),
        L::new(("g", 70), ("Arcane Scroll", 2)),
        L::new(("g", 60), ("Gnomish Shield", 7)),
        L::new(("g", 204), ("Draught of Angels", 4)),
    ]
}
