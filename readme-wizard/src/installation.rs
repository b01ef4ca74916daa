//! Installation guide builder
//!
//! Produces the pre-formatted Markdown stored in
//! `DocumentState::installation`. The README generator supplies the
//! `## 🚀 Getting Started` heading, so the guide only emits `###` groups.

use crate::markdown_format::fenced_block;

/// Width commands are padded to in the scripts block
const SCRIPT_COLUMN_WIDTH: usize = 20;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallStep {
    pub title: String,
    pub code: String,
}

impl InstallStep {
    pub fn new(title: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            code: code.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    pub command: String,
    pub description: String,
}

impl Script {
    pub fn new(command: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            description: description.into(),
        }
    }
}

/// Everything the installation step collects
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallationGuide {
    pub prerequisites: Vec<String>,
    pub steps: Vec<InstallStep>,
    pub scripts: Vec<Script>,
    pub notes: String,
}

impl InstallationGuide {
    /// Look up a built-in guide by name (`simple` or `detailed`)
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "simple" => Some(Self::simple()),
            "detailed" => Some(Self::detailed()),
            _ => None,
        }
    }

    pub const PRESETS: [&'static str; 2] = ["simple", "detailed"];

    pub fn simple() -> Self {
        Self {
            prerequisites: vec![
                "Node.js 18+ (LTS recommended)".to_string(),
                "npm or yarn".to_string(),
                "Git".to_string(),
            ],
            steps: vec![
                InstallStep::new(
                    "Clone repository",
                    "git clone https://github.com/username/project.git\ncd project",
                ),
                InstallStep::new("Install dependencies", "npm install"),
                InstallStep::new("Start development", "npm run dev"),
            ],
            scripts: vec![
                Script::new("npm run dev", "Start dev server"),
                Script::new("npm run build", "Build for production"),
            ],
            notes: String::new(),
        }
    }

    pub fn detailed() -> Self {
        Self {
            prerequisites: vec![
                "Node.js 18+".to_string(),
                "npm 10+".to_string(),
                "Git".to_string(),
                "Code editor".to_string(),
                "Firebase account".to_string(),
            ],
            steps: vec![
                InstallStep::new(
                    "Clone the repository",
                    "git clone https://github.com/username/project.git\ncd project",
                ),
                InstallStep::new("Install dependencies", "npm install"),
                InstallStep::new("Setup environment", "cp .env.example .env.local"),
                InstallStep::new("Start server", "npm run dev"),
            ],
            scripts: vec![
                Script::new("npm run dev", "Start dev server"),
                Script::new("npm run build", "Build for production"),
                Script::new("npm start", "Start production"),
                Script::new("npm run lint", "Run linting"),
            ],
            notes: String::new(),
        }
    }

    /// Render the guide; an empty guide renders to an empty string
    pub fn to_markdown(&self) -> String {
        let mut blocks: Vec<String> = Vec::new();

        let prerequisites: Vec<&str> = self
            .prerequisites
            .iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .collect();
        if !prerequisites.is_empty() {
            blocks.push("### Prerequisites".to_string());
            blocks.push(
                prerequisites
                    .iter()
                    .map(|p| format!("- {}", p))
                    .collect::<Vec<_>>()
                    .join("\n"),
            );
        }

        let steps: Vec<&InstallStep> = self
            .steps
            .iter()
            .filter(|s| !s.title.trim().is_empty() && !s.code.trim().is_empty())
            .collect();
        if !steps.is_empty() {
            blocks.push("### Installation".to_string());
            for (index, step) in steps.iter().enumerate() {
                blocks.push(format!("{}. **{}**", index + 1, step.title.trim()));
                blocks.push(fenced_block("bash", step.code.trim()));
            }
        }

        let scripts: Vec<&Script> = self
            .scripts
            .iter()
            .filter(|s| !s.command.trim().is_empty() && !s.description.trim().is_empty())
            .collect();
        if !scripts.is_empty() {
            let lines = scripts
                .iter()
                .map(|s| {
                    format!(
                        "{:<width$} # {}",
                        s.command.trim(),
                        s.description.trim(),
                        width = SCRIPT_COLUMN_WIDTH
                    )
                })
                .collect::<Vec<_>>()
                .join("\n");
            blocks.push("### Available Scripts".to_string());
            blocks.push(fenced_block("bash", &lines));
        }

        if !self.notes.trim().is_empty() {
            blocks.push("### Additional Notes".to_string());
            blocks.push(self.notes.trim().to_string());
        }

        blocks.join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_guide_renders_nothing() {
        assert_eq!(InstallationGuide::default().to_markdown(), "");
    }

    #[test]
    fn test_full_guide() {
        // Arrange
        let guide = InstallationGuide {
            prerequisites: vec!["Rust 1.80+".to_string(), "  ".to_string()],
            steps: vec![
                InstallStep::new("Clone", "git clone x"),
                InstallStep::new("Untitled", ""),
                InstallStep::new("Build", "cargo build"),
            ],
            scripts: vec![Script::new("cargo test", "Run tests")],
            notes: "Works offline.\n".to_string(),
        };

        // Act
        let markdown = guide.to_markdown();

        // Assert
        let expected = "### Prerequisites\n\n- Rust 1.80+\n\n\
### Installation\n\n1. **Clone**\n\n```bash\ngit clone x\n```\n\n\
2. **Build**\n\n```bash\ncargo build\n```\n\n\
### Available Scripts\n\n```bash\ncargo test           # Run tests\n```\n\n\
### Additional Notes\n\nWorks offline.";
        assert_eq!(markdown, expected);
    }

    #[test]
    fn test_presets() {
        for name in InstallationGuide::PRESETS {
            let guide = InstallationGuide::preset(name).unwrap();
            let markdown = guide.to_markdown();
            assert!(markdown.starts_with("### Prerequisites"), "{}", name);
            assert!(markdown.contains("npm run dev"), "{}", name);
        }
        assert!(InstallationGuide::preset("exotic").is_none());
    }

    #[test]
    fn test_guide_feeds_generator_verbatim() {
        let catalog = crate::badge_catalog::BadgeCatalog::builtin().unwrap();
        let mut state = crate::document_state::DocumentState::default();
        state.installation = InstallationGuide::simple().to_markdown();

        let markdown = crate::markdown_generator::generate(
            &state,
            &catalog,
            &crate::markdown_generator::GeneratorOptions::default(),
        );

        assert!(markdown.contains("## 🚀 Getting Started\n\n### Prerequisites\n\n- Node.js 18+"));
    }
}
