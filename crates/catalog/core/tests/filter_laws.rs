use catalog_core::filter::{self, Criteria};
use catalog_core::{
    ArmorClass, ArmorData, ArmorFilters, ArmorTrait, ArmorTraitKind, BoosterData,
    BoosterFilters, CatalogQuery, CommonFilters, Cost, DamageType, Item, ItemCategory, ItemKind,
    NumericRange, Penetration, Resistances, StrategemClass, StrategemData, StrategemFilters,
    WeaponClass, WeaponData, WeaponFilters,
};

fn item(id: &str, name: &str, description: &str, unlocked: bool, kind: ItemKind) -> Item {
    Item {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        warbond_id: "helldivers_mobilize".into(),
        warbond_page: 1,
        cost: Cost::medals(50),
        unlocked,
        kind,
    }
}

fn armor_trait(id: &str, kind: ArmorTraitKind) -> ArmorTrait {
    ArmorTrait {
        id: id.into(),
        name: id.into(),
        description: String::new(),
        value: 2,
        kind,
    }
}

fn armor(
    id: &str,
    name: &str,
    class: ArmorClass,
    rating: u8,
    unlocked: bool,
    traits: Vec<ArmorTrait>,
) -> Item {
    item(
        id,
        name,
        "armor",
        unlocked,
        ItemKind::Armor(ArmorData {
            class,
            armor_rating: rating,
            speed_modifier: 0,
            stamina_regen_modifier: 0,
            traits,
            resistances: Resistances::default(),
        }),
    )
}

fn weapon(
    id: &str,
    name: &str,
    damage: u32,
    damage_type: DamageType,
    penetration: Penetration,
) -> Item {
    item(
        id,
        name,
        "weapon",
        true,
        ItemKind::Weapon(WeaponData {
            class: WeaponClass::Primary,
            damage,
            damage_type,
            penetration,
            fire_rate: 600,
            magazine_size: 30,
            total_ammo: 300,
            reload_time: 2.5,
            range: 200,
            accuracy: 75,
            recoil: 30,
            traits: vec![],
        }),
    )
}

fn armor_set() -> Vec<Item> {
    vec![
        armor(
            "armor_1",
            "Light Armor",
            ArmorClass::Light,
            25,
            true,
            vec![
                armor_trait("grenade_capacity_2", ArmorTraitKind::GrenadeCapacity),
                armor_trait("speed_10", ArmorTraitKind::Speed),
            ],
        ),
        armor(
            "armor_2",
            "Heavy Assault Armor",
            ArmorClass::Heavy,
            75,
            false,
            vec![
                armor_trait("armor_rating_50", ArmorTraitKind::ArmorRating),
                armor_trait("fire_resistance_25", ArmorTraitKind::Resistance),
            ],
        ),
        armor("armor_3", "Scout Vest", ArmorClass::Light, 40, false, vec![]),
        armor(
            "armor_4",
            "Medium Trooper Armor",
            ArmorClass::Medium,
            50,
            true,
            vec![armor_trait("stim_capacity_2", ArmorTraitKind::StimCapacity)],
        ),
    ]
}

fn weapon_set() -> Vec<Item> {
    vec![
        weapon("weapon_1", "AR-23 Liberator", 45, DamageType::Kinetic, Penetration::Light),
        weapon("weapon_2", "SG-8 Punisher", 120, DamageType::Kinetic, Penetration::Heavy),
        weapon("weapon_3", "FLAM-40 Incinerator", 30, DamageType::Fire, Penetration::None),
        weapon("weapon_4", "LAS-5 Scythe", 60, DamageType::Laser, Penetration::Medium),
        weapon("weapon_5", "R-36 Eruptor", 230, DamageType::Explosive, Penetration::Medium),
    ]
}

fn ids(items: &[Item]) -> Vec<&str> {
    items.iter().map(|item| item.id.as_str()).collect()
}

fn is_subsequence(sub: &[Item], full: &[Item]) -> bool {
    let mut rest = full.iter();
    sub.iter().all(|wanted| rest.any(|candidate| candidate == wanted))
}

fn armor_queries() -> Vec<ArmorFilters> {
    vec![
        ArmorFilters::default(),
        ArmorFilters {
            class: Some(ArmorClass::Light),
            ..ArmorFilters::default()
        },
        ArmorFilters {
            common: CommonFilters::search("armor"),
            armor_rating: NumericRange::new(Some(30), Some(60)),
            ..ArmorFilters::default()
        },
        ArmorFilters {
            common: CommonFilters::unlocked(false),
            traits: vec!["resistance".into(), "stim_capacity_2".into()],
            ..ArmorFilters::default()
        },
    ]
}

// ============================================================================
// Laws
// ============================================================================

#[test]
fn unset_criteria_is_identity() {
    let armor = armor_set();
    let weapons = weapon_set();

    assert_eq!(filter::apply(&armor, &ArmorFilters::default()), armor);
    assert_eq!(filter::apply(&weapons, &WeaponFilters::default()), weapons);
    assert_eq!(filter::apply(&armor, &CommonFilters::default()), armor);
}

#[test]
fn results_preserve_input_order() {
    let armor = armor_set();
    for query in armor_queries() {
        let filtered = filter::apply(&armor, &query);
        assert!(is_subsequence(&filtered, &armor), "{query:?}");
    }
}

#[test]
fn filtering_is_idempotent() {
    let armor = armor_set();
    for query in armor_queries() {
        let once = filter::apply(&armor, &query);
        let twice = filter::apply(&once, &query);
        assert_eq!(once, twice, "{query:?}");
    }
}

#[test]
fn numeric_range_selects_exactly_the_inclusive_band() {
    let weapons = weapon_set();
    let query = WeaponFilters {
        damage: NumericRange::new(Some(45), Some(120)),
        ..WeaponFilters::default()
    };

    let filtered = filter::apply(&weapons, &query);
    assert_eq!(ids(&filtered), ["weapon_1", "weapon_2", "weapon_4"]);

    let expected: Vec<&Item> = weapons
        .iter()
        .filter(|item| item.as_weapon().is_some_and(|w| (45..=120).contains(&w.damage)))
        .collect();
    assert_eq!(filtered.iter().collect::<Vec<_>>(), expected);
}

#[test]
fn unreachable_minimum_yields_nothing() {
    let weapons = weapon_set();
    let query = WeaponFilters {
        damage: NumericRange::at_least(1_000_000),
        ..WeaponFilters::default()
    };
    assert!(filter::apply(&weapons, &query).is_empty());

    let armor = armor_set();
    let query = ArmorFilters {
        armor_rating: NumericRange::at_least(u8::MAX),
        ..ArmorFilters::default()
    };
    assert!(filter::apply(&armor, &query).is_empty());
}

#[test]
fn multi_select_is_union_of_single_selects() {
    let weapons = weapon_set();
    let single = |damage_type| WeaponFilters {
        damage_types: vec![damage_type],
        ..WeaponFilters::default()
    };
    let both = WeaponFilters {
        damage_types: vec![DamageType::Fire, DamageType::Laser],
        ..WeaponFilters::default()
    };

    let union: Vec<Item> = weapons
        .iter()
        .filter(|item| {
            single(DamageType::Fire).matches(item) || single(DamageType::Laser).matches(item)
        })
        .cloned()
        .collect();

    assert_eq!(filter::apply(&weapons, &both), union);
    assert_eq!(ids(&union), ["weapon_3", "weapon_4"]);
}

#[test]
fn penetration_and_damage_type_combine_with_and() {
    let weapons = weapon_set();
    let query = WeaponFilters {
        damage_types: vec![DamageType::Kinetic, DamageType::Explosive],
        penetration: vec![Penetration::Medium, Penetration::Heavy],
        ..WeaponFilters::default()
    };
    assert_eq!(ids(&filter::apply(&weapons, &query)), ["weapon_2", "weapon_5"]);
}

// ============================================================================
// Armor scenarios
// ============================================================================

#[test]
fn armor_class_selects_heavy_item() {
    let armor = armor_set();
    let query = ArmorFilters {
        class: Some(ArmorClass::Heavy),
        ..ArmorFilters::default()
    };
    assert_eq!(ids(&filter::apply(&armor, &query)), ["armor_2"]);
}

#[test]
fn unlocked_flag_requires_equality() {
    let armor = armor_set();
    let unlocked = ArmorFilters {
        common: CommonFilters::unlocked(true),
        ..ArmorFilters::default()
    };
    let locked = ArmorFilters {
        common: CommonFilters::unlocked(false),
        ..ArmorFilters::default()
    };
    assert_eq!(ids(&filter::apply(&armor, &unlocked)), ["armor_1", "armor_4"]);
    assert_eq!(ids(&filter::apply(&armor, &locked)), ["armor_2", "armor_3"]);
}

#[test]
fn trait_selectors_match_by_id_or_category() {
    let armor = armor_set();
    let by_kind = ArmorFilters {
        traits: vec!["grenade_capacity".into()],
        ..ArmorFilters::default()
    };
    let by_id = ArmorFilters {
        traits: vec!["fire_resistance_25".into()],
        ..ArmorFilters::default()
    };
    let either = ArmorFilters {
        traits: vec!["speed".into(), "armor_rating_50".into()],
        ..ArmorFilters::default()
    };

    assert_eq!(ids(&filter::apply(&armor, &by_kind)), ["armor_1"]);
    assert_eq!(ids(&filter::apply(&armor, &by_id)), ["armor_2"]);
    assert_eq!(ids(&filter::apply(&armor, &either)), ["armor_1", "armor_2"]);
}

#[test]
fn armor_search_ignores_description() {
    let armor = armor_set();
    let query = ArmorFilters {
        common: CommonFilters::search("ARMOR"),
        ..ArmorFilters::default()
    };
    // "Scout Vest" only mentions armor in its description.
    assert_eq!(
        ids(&filter::apply(&armor, &query)),
        ["armor_1", "armor_2", "armor_4"]
    );
}

// ============================================================================
// Cross-category behavior
// ============================================================================

#[test]
fn strategem_and_booster_search_covers_description() {
    let items = vec![
        item(
            "strategem_1",
            "Orbital Precision Strike",
            "Calls in a precision orbital strike",
            true,
            ItemKind::Strategem(StrategemData {
                class: StrategemClass::Offensive,
                cooldown: 30,
                uses: 2,
                call_time: 2,
                effects: vec![],
            }),
        ),
        item(
            "booster_1",
            "Stamina Enhancement",
            "Increases stamina regeneration for the entire mission",
            true,
            ItemKind::Booster(BoosterData {
                effect: "Enhanced stamina regeneration".into(),
                duration: 0,
                stackable: false,
                effects: vec![],
            }),
        ),
    ];

    let strategems = StrategemFilters {
        common: CommonFilters::search("calls in"),
        ..StrategemFilters::default()
    };
    let boosters = BoosterFilters {
        common: CommonFilters::search("regeneration"),
    };

    assert_eq!(ids(&filter::apply(&items, &strategems)), ["strategem_1"]);
    assert_eq!(ids(&filter::apply(&items, &boosters)), ["booster_1"]);
}

#[test]
fn category_criteria_reject_other_categories() {
    let mut mixed = armor_set();
    mixed.extend(weapon_set());

    let armor_only = filter::apply(&mixed, &CatalogQuery::all(ItemCategory::Armor));
    assert_eq!(armor_only, armor_set());

    let weapons_only = filter::apply(&mixed, &CatalogQuery::all(ItemCategory::Weapon));
    assert_eq!(weapons_only, weapon_set());

    let by_common = CommonFilters {
        category: Some(ItemCategory::Weapon),
        ..CommonFilters::default()
    };
    assert_eq!(filter::apply(&mixed, &by_common), weapon_set());
}

#[test]
fn warbond_filter_matches_owning_track() {
    let mut armor = armor_set();
    armor[1].warbond_id = "steeled_veterans".into();

    let query = ArmorFilters {
        common: CommonFilters {
            warbond_id: Some("steeled_veterans".into()),
            ..CommonFilters::default()
        },
        ..ArmorFilters::default()
    };
    assert_eq!(ids(&filter::apply(&armor, &query)), ["armor_2"]);
}
