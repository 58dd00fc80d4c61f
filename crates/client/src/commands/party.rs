//! `pocket party ...`

use anyhow::{Result, anyhow};
use pocket_core::{
    PocketConfig, RecordId, RecordKey, RecordSource, RosterEntry, StatKind, energy_slots,
};
use pocket_runtime::RosterError;

use super::{join_categories, join_or_dash};
use crate::App;
use crate::cli::{ConditionCommand, MoveCommand, PartyCommand};

pub fn run(app: &App, command: PartyCommand) -> Result<String> {
    match command {
        PartyCommand::List => list(app),
        PartyCommand::Show { id } => {
            let entry = find(app, RecordId(id))?;
            Ok(sheet(app, &entry))
        }
        PartyCommand::Add {
            creature,
            personality,
        } => add(app, &creature, personality.as_deref()),
        PartyCommand::Remove { id } => {
            let removed = app.roster.remove(RecordId(id))?;
            Ok(format!("Removed {} {}", removed.id(), removed.name()))
        }
        PartyCommand::Xp { id, amount } => experience(app, RecordId(id), amount),
        PartyCommand::Hp { id, hp } => {
            let entry = app.roster.update_hp(RecordId(id), hp)?;
            let mut line = format!(
                "{} {}: HP {}/{}",
                entry.id(),
                entry.name(),
                entry.current_hp(),
                entry.max_hp()
            );
            if entry.is_fainted() {
                line.push_str(" (fainted)");
            }
            Ok(line)
        }
        PartyCommand::Move(command) => moves(app, command),
        PartyCommand::Condition(command) => conditions(app, command),
        PartyCommand::Evolve { id } => {
            let from = find(app, RecordId(id))?;
            let evolved = app.roster.evolve(RecordId(id), &app.records)?;
            Ok(format!(
                "{} evolved into {}!\n\n{}",
                from.name(),
                evolved.name(),
                sheet(app, &evolved)
            ))
        }
    }
}

fn find(app: &App, id: RecordId) -> Result<RosterEntry> {
    Ok(app.roster.get(id)?.ok_or(RosterError::NotFound(id))?)
}

fn list(app: &App) -> Result<String> {
    let entries = app.roster.list()?;
    if entries.is_empty() {
        return Ok("The party is empty.".to_string());
    }

    let mut lines: Vec<String> = entries.iter().map(summary).collect();
    lines.push(format!(
        "{}/{} members",
        entries.len(),
        PocketConfig::MAX_ROSTER_SIZE
    ));
    Ok(lines.join("\n"))
}

fn add(app: &App, key: &RecordKey, personality: Option<&str>) -> Result<String> {
    let entry = match personality {
        Some(name) => {
            let personality = pocket_core::Personality::by_name(name)
                .ok_or_else(|| anyhow!("unknown personality '{name}'"))?;
            if app.roster.is_full()? {
                return Err(RosterError::RosterFull {
                    max: PocketConfig::MAX_ROSTER_SIZE,
                }
                .into());
            }
            let record = app.records.fetch(key).map_err(RosterError::from)?;
            app.roster.add_with_personality(record, personality)?
        }
        None => app.roster.add_from_source(key, &app.records)?,
    };

    Ok(format!("Added {} {}\n\n{}", entry.id(), entry.name(), sheet(app, &entry)))
}

fn experience(app: &App, id: RecordId, amount: i64) -> Result<String> {
    let (entry, outcome) = app.roster.apply_experience(id, amount)?;

    let mut lines = vec![
        outcome.message.text().to_string(),
        format!(
            "{} {}: level {} ({} XP, {} to next)",
            entry.id(),
            entry.name(),
            entry.level(),
            entry.experience(),
            entry.experience_to_next()
        ),
    ];
    if outcome.proficiency_changed {
        lines.push(format!("Proficiency bonus is now {:+}", entry.proficiency_bonus()));
    }
    if outcome.evolution_ready {
        lines.push(format!(
            "{} can evolve: pocket party evolve {}",
            entry.name(),
            entry.id().0
        ));
    }
    Ok(lines.join("\n"))
}

fn moves(app: &App, command: MoveCommand) -> Result<String> {
    let (id, note) = match command {
        MoveCommand::Add { id, name } => {
            app.roster.add_move(RecordId(id), &name)?;
            (id, format!("Learned {name}"))
        }
        MoveCommand::Remove { id, name } => {
            let removed = app.roster.remove_move(RecordId(id), &name)?;
            let note = if removed {
                format!("Forgot {name}")
            } else {
                format!("{name} was not selected")
            };
            (id, note)
        }
        MoveCommand::Set { id, names } => {
            app.roster.set_moves(RecordId(id), &names)?;
            (id, "Moves replaced".to_string())
        }
    };

    let entry = find(app, RecordId(id))?;
    Ok(format!(
        "{note}\nMoves: {}",
        join_or_dash(entry.moves().iter())
    ))
}

fn conditions(app: &App, command: ConditionCommand) -> Result<String> {
    let (id, note) = match command {
        ConditionCommand::Add { id, condition } => {
            let added = app.roster.add_condition(RecordId(id), condition)?;
            let note = if added {
                format!("Now {}", condition.display_name())
            } else {
                format!("Already {}", condition.display_name())
            };
            (id, note)
        }
        ConditionCommand::Remove { id, condition } => {
            let removed = app.roster.remove_condition(RecordId(id), condition)?;
            let note = if removed {
                format!("No longer {}", condition.display_name())
            } else {
                format!("Was not {}", condition.display_name())
            };
            (id, note)
        }
    };

    let entry = find(app, RecordId(id))?;
    Ok(format!(
        "{note}\nConditions: {}",
        join_or_dash(entry.conditions().iter().map(|c| c.display_name()))
    ))
}

fn summary(entry: &RosterEntry) -> String {
    format!(
        "{:<5} {:<12} Lv {:>2}  HP {:>3}/{:<3}  XP {:>6}  {}",
        entry.id().to_string(),
        entry.name(),
        entry.level(),
        entry.current_hp(),
        entry.max_hp(),
        entry.experience(),
        entry.personality()
    )
}

fn sheet(app: &App, entry: &RosterEntry) -> String {
    let mut lines = vec![
        format!("{} {}  Lv {}  {}", entry.id(), entry.name(), entry.level(), entry.personality()),
        format!(
            "HP {}/{}  AC {}  Initiative {:+}  Speed {} ft",
            entry.current_hp(),
            entry.max_hp(),
            entry.armor_class(),
            entry.initiative(),
            entry.movement_feet(app.config.movement_weight_rule)
        ),
        format!(
            "XP {} ({} to next)  Proficiency {:+}",
            entry.experience(),
            entry.experience_to_next(),
            entry.proficiency_bonus()
        ),
        format!("Size {}  Weight {}", entry.actual_size(), entry.actual_weight()),
    ];

    for kind in StatKind::ALL {
        let mut line = format!(
            "  {:<7} {:>2} ({:+})",
            kind.label(),
            entry.current_stats().get(kind),
            entry.stat_modifier(kind)
        );
        let bonus = entry.stat_proficiency_bonus(kind);
        if bonus != 0 {
            line.push_str(&format!(" [{bonus:+}]"));
        }
        lines.push(line);
    }

    lines.push(format!("Vulnerable to: {}", join_categories(entry.vulnerable_to())));
    lines.push(format!("Resistant to: {}", join_categories(entry.resistant_to())));
    lines.push(format!("Moves: {}", join_or_dash(entry.moves().iter())));
    lines.push(format!(
        "Unlocked: {}",
        join_or_dash(entry.unlocked_abilities().iter().map(|a| a.name.as_str()))
    ));
    lines.push(format!(
        "Conditions: {}",
        join_or_dash(entry.conditions().iter().map(|c| c.display_name()))
    ));

    let slots = energy_slots(entry.level());
    let slots = slots
        .iter()
        .take_while(|&&count| count > 0)
        .map(|count| count.to_string())
        .collect::<Vec<_>>();
    lines.push(format!("Energy slots: {}", join_or_dash(slots.iter().map(String::as_str))));

    if let Some(link) = entry.record().evolution {
        let status = if entry.evolution_level_reached() {
            "ready"
        } else {
            "not yet"
        };
        lines.push(format!(
            "Evolves into {} at level {} ({status})",
            link.target,
            link.roster_level()
        ));
    }

    lines.join("\n")
}
