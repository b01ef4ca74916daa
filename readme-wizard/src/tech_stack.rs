//! Tech stack inference from selected badges
//!
//! Bullets come out in table order, not in badge selection order.

/// Badge id to tech stack bullet, in output order
pub const TECH_STACK: &[(&str, &str)] = &[
    ("nextjs", "**Framework:** Next.js"),
    ("react", "**UI Library:** React"),
    ("vue", "**Framework:** Vue.js"),
    ("tailwind", "**Styling:** Tailwind CSS"),
    ("bootstrap", "**Styling:** Bootstrap"),
    ("nodejs", "**Runtime:** Node.js"),
    ("express", "**Backend:** Express"),
    ("firebase", "**Backend:** Firebase"),
    ("mongodb", "**Database:** MongoDB"),
    ("postgresql", "**Database:** PostgreSQL"),
    ("typescript", "**Language:** TypeScript"),
    ("zustand", "**State Management:** Zustand"),
    ("framer", "**Animations:** Framer Motion"),
    ("vercel", "**Deployment:** Vercel"),
];

/// Descriptions for every recognized badge present in `badges`
pub fn infer_tech_stack<S: AsRef<str>>(badges: &[S]) -> Vec<&'static str> {
    TECH_STACK
        .iter()
        .filter(|(id, _)| badges.iter().any(|badge| badge.as_ref() == *id))
        .map(|&(_, description)| description)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follows_table_order() {
        let badges = ["vercel", "mit", "react", "nextjs"];
        assert_eq!(
            infer_tech_stack(&badges),
            vec![
                "**Framework:** Next.js",
                "**UI Library:** React",
                "**Deployment:** Vercel"
            ]
        );
    }

    #[test]
    fn test_unrecognized_badges_yield_nothing() {
        let badges = vec!["mit".to_string(), "maintained".to_string()];
        assert!(infer_tech_stack(&badges).is_empty());
    }

    #[test]
    fn test_table_ids_are_in_builtin_catalog() {
        let catalog = crate::badge_catalog::BadgeCatalog::builtin().unwrap();
        for (id, _) in TECH_STACK {
            assert!(catalog.contains(id), "missing catalog entry for {}", id);
        }
    }
}
