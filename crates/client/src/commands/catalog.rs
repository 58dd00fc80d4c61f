//! `pocket catalog personalities|conditions`

use pocket_core::{ConditionSet, Personality};

use crate::cli::CatalogCommand;

pub fn run(command: CatalogCommand) -> String {
    match command {
        CatalogCommand::Personalities => Personality::catalog()
            .map(|p| format!("{:<28} {}", p.to_string(), p.description))
            .collect::<Vec<_>>()
            .join("\n"),
        CatalogCommand::Conditions => ConditionSet::new()
            .available()
            .into_iter()
            .map(|c| format!("{:<14} {}", c.display_name(), c.description()))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_entry() {
        assert_eq!(
            run(CatalogCommand::Personalities).lines().count(),
            Personality::CATALOG_SIZE
        );
        let conditions = run(CatalogCommand::Conditions);
        assert_eq!(conditions.lines().count(), 18);
        assert!(conditions.starts_with("Poisoned"));
    }
}
