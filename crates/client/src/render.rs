//! Plain-text views over catalog and war data.
use std::fmt::Write;

use catalog_core::{
    Cost, Item, ItemCategory, ItemKind, MajorOrder, Progress, WarEffort, Warbond, WarbondPage,
};
use catalog_service::{Dashboard, ItemDetail, average_progress, total_helldivers};
use chrono::{DateTime, Utc};
use console::style;

use crate::glyph::Glyph;

const BAR_WIDTH: usize = 20;

pub fn item_list(category: ItemCategory, items: &[Item]) -> String {
    let mut out = String::new();
    let heading = format!("{} ({})", capitalize(category.plural()), items.len());
    let _ = writeln!(out, "{} {}", Glyph::category(category), style(heading).bold());

    if items.is_empty() {
        let _ = writeln!(out, "  No {} match the current filters.", category.plural());
        return out;
    }

    for item in items {
        let _ = writeln!(
            out,
            "  {} {:<28} {:<36} {}",
            Glyph::lock(item.unlocked),
            item.name,
            summary(item),
            cost(&item.cost)
        );
    }
    out
}

pub fn item_detail(detail: &ItemDetail) -> String {
    let ItemDetail {
        item,
        warbond,
        page,
    } = detail;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} {}  {}",
        Glyph::category(item.category()),
        style(&item.name).bold(),
        style(format!("[{}]", item.id)).dim()
    );
    let _ = writeln!(out, "  {}", item.description);
    let _ = writeln!(
        out,
        "  {} {} · page {} \"{}\" ({} {} required)",
        Glyph::Warbond,
        warbond.name,
        page.page_number,
        page.name,
        Glyph::Medal,
        page.required_medals
    );
    let _ = writeln!(out, "  {} {}", Glyph::lock(item.unlocked), cost(&item.cost));
    let _ = writeln!(out);

    match &item.kind {
        ItemKind::Armor(armor) => {
            let _ = writeln!(out, "  class            {}", armor.class);
            let _ = writeln!(out, "  armor rating     {}", armor.armor_rating);
            let _ = writeln!(out, "  speed            {:+}", armor.speed_modifier);
            let _ = writeln!(out, "  stamina regen    {:+}", armor.stamina_regen_modifier);
            let _ = writeln!(
                out,
                "  resistances      fire {} / explosion {} / acid {}",
                armor.resistances.fire, armor.resistances.explosion, armor.resistances.acid
            );
            for armor_trait in &armor.traits {
                let _ = writeln!(
                    out,
                    "  {} {} ({:+}): {}",
                    Glyph::Objective,
                    armor_trait.name,
                    armor_trait.value,
                    armor_trait.description
                );
            }
        }
        ItemKind::Weapon(weapon) => {
            let _ = writeln!(out, "  class            {}", weapon.class);
            let _ = writeln!(out, "  damage           {} {}", weapon.damage, weapon.damage_type);
            let _ = writeln!(out, "  penetration      {}", weapon.penetration);
            let _ = writeln!(out, "  fire rate        {} rpm", weapon.fire_rate);
            let _ = writeln!(
                out,
                "  ammo             {} / {}",
                weapon.magazine_size, weapon.total_ammo
            );
            let _ = writeln!(out, "  reload           {:.1}s", weapon.reload_time);
            let _ = writeln!(out, "  range            {}m", weapon.range);
            let _ = writeln!(
                out,
                "  accuracy/recoil  {} / {}",
                weapon.accuracy, weapon.recoil
            );
            for weapon_trait in &weapon.traits {
                let _ = writeln!(
                    out,
                    "  {} {}: {}",
                    Glyph::Objective,
                    weapon_trait.name,
                    weapon_trait.description
                );
            }
        }
        ItemKind::Strategem(strategem) => {
            let _ = writeln!(out, "  class            {}", strategem.class);
            let _ = writeln!(out, "  cooldown         {}s", strategem.cooldown);
            let _ = writeln!(out, "  uses             {}", strategem.uses);
            let _ = writeln!(out, "  call-in time     {}s", strategem.call_time);
            for effect in &strategem.effects {
                let _ = writeln!(
                    out,
                    "  {} {}: {}",
                    Glyph::Objective,
                    effect.name,
                    effect.description
                );
            }
        }
        ItemKind::Booster(booster) => {
            let duration = if booster.lasts_whole_mission() {
                "whole mission".to_string()
            } else {
                format!("{}s", booster.duration)
            };
            let _ = writeln!(out, "  effect           {}", booster.effect);
            let _ = writeln!(out, "  duration         {duration}");
            let stackable = if booster.stackable { "yes" } else { "no" };
            let _ = writeln!(out, "  stackable        {stackable}");
            for effect in &booster.effects {
                let _ = writeln!(
                    out,
                    "  {} {} ({:+}): {}",
                    Glyph::Objective,
                    effect.name,
                    effect.value,
                    effect.description
                );
            }
        }
    }
    out
}

pub fn warbond_list(warbonds: &[Warbond]) -> String {
    let mut out = String::new();
    let title = format!("Warbonds ({})", warbonds.len());
    let _ = writeln!(out, "{} {}", Glyph::Warbond, style(title).bold());
    for warbond in warbonds {
        let item_count = warbond.item_ids().count();
        let _ = writeln!(
            out,
            "  {} {:<24} {} {:>5}  {} pages, {} items  {}",
            Glyph::lock(warbond.unlocked),
            warbond.name,
            Glyph::Medal,
            warbond.total_medals,
            warbond.pages.len(),
            item_count,
            style(format!("[{}]", warbond.id)).dim()
        );
    }
    out
}

/// A warbond with each listed page's resolved items.
pub fn warbond_detail(warbond: &Warbond, pages: &[(&WarbondPage, Vec<Item>)]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {}", Glyph::Warbond, style(&warbond.name).bold());
    let _ = writeln!(out, "  {}", warbond.description);
    let _ = writeln!(out, "  {} {} medals to complete", Glyph::Medal, warbond.total_medals);

    for (page, items) in pages {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "  Page {}: {} ({} {} required)",
            page.page_number,
            style(&page.name).underlined(),
            Glyph::Medal,
            page.required_medals
        );
        if items.is_empty() {
            let _ = writeln!(out, "    (empty)");
        }
        for item in items {
            let _ = writeln!(
                out,
                "    {} {} {:<28} {}",
                Glyph::category(item.category()),
                Glyph::lock(item.unlocked),
                item.name,
                cost(&item.cost)
            );
        }
    }
    out
}

pub fn war_efforts(efforts: &[WarEffort]) -> String {
    let mut out = String::new();
    let title = format!("Active campaigns ({})", efforts.len());
    let _ = writeln!(out, "{} {}", Glyph::Planet, style(title).bold());
    let _ = writeln!(
        out,
        "  {} {} helldivers · {}% average progress",
        Glyph::Helldivers,
        total_helldivers(efforts),
        average_progress(efforts).round()
    );
    for effort in efforts {
        let _ = write!(out, "{}", war_effort(effort));
    }
    out
}

fn war_effort(effort: &WarEffort) -> String {
    let mut out = String::new();
    let planet = &effort.planet;
    let _ = writeln!(
        out,
        "  {} {:<16} {} hazard {} · {}",
        Glyph::status(effort.status),
        planet.name,
        Glyph::hazard(planet.hazard_band()),
        planet.hazard_level,
        planet.biome
    );
    let _ = writeln!(
        out,
        "      {} {:>8}  {}",
        Glyph::Helldivers,
        effort.helldiver_count,
        progress_bar(&effort.progress)
    );
    for objective in &effort.objectives {
        let _ = writeln!(
            out,
            "      {} {:<28} {:>5.1}% ({})",
            Glyph::Objective,
            objective.title,
            objective.progress.percent(),
            objective.kind
        );
    }
    out
}

pub fn home(dashboard: &Dashboard, now: DateTime<Utc>) -> String {
    let mut out = major_order(&dashboard.major_order, now);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{} {} helldivers deployed across {} campaigns",
        Glyph::Helldivers,
        dashboard.total_helldivers(),
        dashboard.war_efforts.len()
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "{} {}", Glyph::Planet, style("Most contested planets").bold());
    for effort in dashboard.top_planets(3) {
        let _ = write!(out, "{}", war_effort(effort));
    }
    out
}

fn major_order(order: &MajorOrder, now: DateTime<Utc>) -> String {
    let mut out = String::new();
    let title = format!("MAJOR ORDER: {}", order.title);
    let _ = writeln!(out, "{} {}", Glyph::MajorOrder, style(title).bold());
    if let Some(planet) = &order.planet {
        let _ = writeln!(out, "  {} {}", Glyph::Planet, planet.name);
    }
    let _ = writeln!(out, "  {}", order.description);
    let _ = writeln!(out, "  {}", style(&order.briefing).italic());
    let _ = writeln!(out, "  {}", progress_bar(&order.progress));
    let _ = writeln!(
        out,
        "  {} reward {} {}",
        Glyph::reward(order.reward.kind),
        order.reward.amount,
        order.reward.kind
    );
    let _ = writeln!(out, "  {} {}", Glyph::Expiry, time_remaining(order.expires_at, now));
    out
}

fn summary(item: &Item) -> String {
    match &item.kind {
        ItemKind::Armor(armor) => format!("{} · rating {}", armor.class, armor.armor_rating),
        ItemKind::Weapon(weapon) => format!(
            "{} · {} {} · {} pen",
            weapon.class, weapon.damage, weapon.damage_type, weapon.penetration
        ),
        ItemKind::Strategem(strategem) => format!(
            "{} · {}s cooldown · {} uses",
            strategem.class, strategem.cooldown, strategem.uses
        ),
        ItemKind::Booster(booster) => booster.effect.clone(),
    }
}

fn cost(cost: &Cost) -> String {
    let mut out = format!("{} {}", Glyph::Medal, cost.medals);
    if let Some(requisition) = cost.requisition {
        let _ = write!(out, "  {} {}", Glyph::Requisition, requisition);
    }
    if let Some(samples) = cost.samples {
        let _ = write!(out, "  {} {}", Glyph::Samples, samples);
    }
    out
}

fn progress_bar(progress: &Progress) -> String {
    let percent = progress.percent();
    let filled = ((percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!(
        "[{}{}] {:>5.1}%",
        "█".repeat(filled),
        "░".repeat(BAR_WIDTH - filled),
        percent
    )
}

fn time_remaining(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let remaining = expires_at - now;
    if remaining.num_seconds() <= 0 {
        return "expired".to_string();
    }
    let days = remaining.num_days();
    let hours = remaining.num_hours() % 24;
    if days > 0 {
        format!("{days}d {hours}h remaining")
    } else {
        format!("{hours}h {}m remaining", remaining.num_minutes() % 60)
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
