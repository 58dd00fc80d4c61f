//! `pocket convert` and `pocket records`.

use anyhow::Result;
use pocket_core::{EffectivenessProfile, RecordKey, RecordSource, StatConverter, StatKind};

use super::{join_categories, join_or_dash};
use crate::App;

pub fn run(app: &App, key: &RecordKey) -> Result<String> {
    let record = app.records.fetch(key)?;
    let derived = StatConverter::from_config(&app.config).convert(&record);
    let profile = EffectivenessProfile::resolve(&record.categories, app.config.effectiveness_policy);

    let mut lines = vec![
        format!(
            "{} {} [{}]",
            record.id,
            record.name,
            join_or_dash(record.categories.iter().map(String::as_str))
        ),
        format!(
            "Hit die {}  AC {}  Initiative {:+}  Speed {} ft",
            derived.hit_die.label(),
            derived.armor_class,
            derived.initiative,
            derived.movement_feet
        ),
    ];

    for kind in StatKind::ALL {
        lines.push(format!(
            "  {:<7} {:>2} ({:+})",
            kind.label(),
            derived.stat(kind),
            derived.modifier(kind)
        ));
    }

    lines.push(format!("Vulnerable to: {}", join_categories(&profile.vulnerable_to)));
    lines.push(format!("Resistant to: {}", join_categories(&profile.resistant_to)));

    if let Some(link) = record.evolution {
        lines.push(format!(
            "Evolves into {} at level {}",
            link.target,
            link.roster_level()
        ));
    }

    lines.push("Moves by tier:".to_string());
    if derived.moves_by_tier.is_empty() {
        lines.push("  -".to_string());
    }
    for (tier, moves) in &derived.moves_by_tier {
        lines.push(format!("  {tier}: {}", moves.join(", ")));
    }

    Ok(lines.join("\n"))
}

pub fn records(app: &App, offset: usize, limit: usize) -> Result<String> {
    let page = app.records.page(offset, limit)?;
    if page.is_empty() {
        return Ok("No records.".to_string());
    }
    Ok(page
        .iter()
        .map(|summary| format!("{:>5}  {}", summary.id, summary.name))
        .collect::<Vec<_>>()
        .join("\n"))
}
