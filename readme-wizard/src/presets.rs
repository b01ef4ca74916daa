//! Starter content for the project structure and environment steps

use crate::document_state::EnvironmentVariable;

/// A named directory tree
#[derive(Debug, Clone, Copy)]
pub struct StructurePreset {
    pub id: &'static str,
    pub name: &'static str,
    pub tree: &'static str,
}

pub const STRUCTURE_PRESETS: &[StructurePreset] = &[
    StructurePreset {
        id: "nextjs",
        name: "Next.js App Router",
        tree: "src/
├── app/
│   ├── (routes)/
│   ├── api/
│   └── globals.css
├── components/
│   ├── ui/
│   └── layout/
├── lib/
│   ├── utils/
│   └── api/
└── public/",
    },
    StructurePreset {
        id: "vite",
        name: "React + Vite",
        tree: "src/
├── components/
│   ├── common/
│   └── features/
├── hooks/
├── utils/
├── styles/
├── assets/
└── App.jsx",
    },
    StructurePreset {
        id: "node",
        name: "Node.js API",
        tree: "src/
├── controllers/
├── models/
├── routes/
├── middleware/
├── utils/
├── config/
└── server.js",
    },
];

pub fn structure_preset(id: &str) -> Option<&'static StructurePreset> {
    STRUCTURE_PRESETS.iter().find(|preset| preset.id == id)
}

/// Environment variable template: (name, example value, secret)
type EnvTemplate = &'static [(&'static str, &'static str, bool)];

const ENV_PRESETS: &[(&str, EnvTemplate)] = &[
    (
        "nextjs",
        &[
            ("NEXT_PUBLIC_API_URL", "https://api.example.com", false),
            ("NEXT_PUBLIC_APP_URL", "https://app.example.com", false),
            ("DATABASE_URL", "postgresql://...", true),
            ("NEXTAUTH_SECRET", "", true),
            ("NEXTAUTH_URL", "https://app.example.com", false),
        ],
    ),
    (
        "node",
        &[
            ("PORT", "3000", false),
            ("NODE_ENV", "development", false),
            ("DATABASE_URL", "postgresql://...", true),
            ("JWT_SECRET", "", true),
            ("API_KEY", "", true),
        ],
    ),
    (
        "react",
        &[
            ("REACT_APP_API_URL", "https://api.example.com", false),
            ("REACT_APP_FIREBASE_API_KEY", "", true),
            ("REACT_APP_GA_TRACKING_ID", "UA-XXXXX-Y", false),
        ],
    ),
    (
        "firebase",
        &[
            ("FIREBASE_API_KEY", "", true),
            ("FIREBASE_AUTH_DOMAIN", "your-project.firebaseapp.com", false),
            ("FIREBASE_PROJECT_ID", "your-project-id", false),
            ("FIREBASE_STORAGE_BUCKET", "your-project.appspot.com", false),
        ],
    ),
];

/// Names of the environment presets
pub fn environment_preset_ids() -> impl Iterator<Item = &'static str> {
    ENV_PRESETS.iter().map(|(id, _)| *id)
}

/// Variables for an environment preset
pub fn environment_preset(id: &str) -> Option<Vec<EnvironmentVariable>> {
    ENV_PRESETS
        .iter()
        .find(|(preset, _)| *preset == id)
        .map(|(_, variables)| {
            variables
                .iter()
                .map(|&(name, value, is_secret)| EnvironmentVariable {
                    name: name.to_string(),
                    value: value.to_string(),
                    is_secret,
                })
                .collect()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structure_lookup() {
        let preset = structure_preset("node").unwrap();
        assert_eq!(preset.name, "Node.js API");
        assert!(preset.tree.ends_with("└── server.js"));
        assert!(structure_preset("rails").is_none());
    }

    #[test]
    fn test_environment_presets() {
        let node = environment_preset("node").unwrap();
        assert_eq!(node[0], EnvironmentVariable::new("PORT", "3000"));
        assert!(node.iter().any(|v| v.name == "JWT_SECRET" && v.is_secret));

        assert_eq!(environment_preset_ids().count(), 4);
        assert!(environment_preset("django").is_none());
    }

    #[test]
    fn test_preset_names_pass_validation() {
        let catalog = crate::badge_catalog::BadgeCatalog::builtin().unwrap();
        for id in environment_preset_ids() {
            let mut state = crate::document_state::DocumentState::default();
            state.environment_variables = environment_preset(id).unwrap();
            let issues = crate::validation::validate(&state, &catalog);
            assert!(issues.is_empty(), "{}: {:?}", id, issues);
        }
    }
}
