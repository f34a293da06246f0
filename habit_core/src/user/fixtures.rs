//! Shared user records for unit tests

/// Public member record: no balance, purchases, preferences or party
pub(crate) const MEMBER_JSON: &str = r#"{
    "stats": {
        "gp": 1234.56, "lvl": 24, "class": "wizard",
        "exp": 310.7, "toNextLevel": 880.2,
        "mp": 45.9, "maxMP": 87.4,
        "hp": 41.3, "maxHealth": 50,
        "str": 0, "con": 4, "int": 18, "per": 2,
        "buffs": { "str": 1, "con": 2, "int": 3, "per": 4, "stealth": 0 }
    },
    "profile": { "name": "Tess" },
    "items": {
        "gear": {
            "equipped": { "weapon": "weapon_wizard_2", "armor": "armor_base_0" },
            "costume": { "head": "head_special_nye" }
        }
    }
}"#;

/// Authenticated user record on a boss quest
pub(crate) const OWN_USER_JSON: &str = r#"{
    "balance": 12.5,
    "purchased": { "plan": { "consecutive": { "trinkets": 3 } } },
    "stats": {
        "gp": 98.5, "lvl": 10, "class": "rogue",
        "exp": 120.9, "toNextLevel": 290.4,
        "mp": 30.2, "maxMP": 44.6,
        "hp": 47.8, "maxHealth": 50,
        "str": 2, "con": 3, "int": 0, "per": 4,
        "buffs": { "str": 0, "con": 0, "int": 0, "per": 0, "stealth": 1 }
    },
    "profile": { "name": "Rook", "blurb": "Sneaky *and* punctual." },
    "items": {
        "gear": {
            "equipped": { "weapon": "weapon_rogue_1", "armor": "armor_rogue_1" },
            "costume": { "armor": "armor_special_bardRobes" }
        }
    },
    "preferences": { "costume": true, "sleep": false },
    "party": { "quest": { "key": "vice1" } }
}"#;
