//! Prompt Loader
//!
//! Loads prompt templates from files or falls back to embedded defaults.

use std::path::{Path, PathBuf};

use eyre::{Result, eyre};
use handlebars::Handlebars;
use serde::Serialize;
use tracing::debug;

use super::embedded;

/// Name of the conversation template
pub const CHAT_TEMPLATE: &str = "chat";

/// The two fields substituted into the conversation template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptVars {
    /// Rendered transcript of every earlier exchange (may be empty)
    pub context: String,
    /// The user's latest line
    pub question: String,
}

impl PromptVars {
    pub fn new(context: impl Into<String>, question: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            question: question.into(),
        }
    }
}

/// Loads and renders prompt templates
pub struct PromptLoader {
    /// Handlebars template engine
    hbs: Handlebars<'static>,
    /// User override directory (e.g., `.chatbot/prompts/`)
    user_dir: Option<PathBuf>,
}

impl PromptLoader {
    /// Create a loader that also looks in `{workdir}/.chatbot/prompts/`
    pub fn new(workdir: impl AsRef<Path>) -> Self {
        let user_dir = workdir.as_ref().join(".chatbot/prompts");
        let user_dir_exists = user_dir.exists();
        debug!(?user_dir, %user_dir_exists, "PromptLoader::new: checking override directory");

        Self {
            hbs: Self::engine(),
            user_dir: if user_dir_exists { Some(user_dir) } else { None },
        }
    }

    /// Create a loader that only uses embedded prompts
    pub fn embedded_only() -> Self {
        debug!("PromptLoader::embedded_only: called");
        Self {
            hbs: Self::engine(),
            user_dir: None,
        }
    }

    // Prompts go to a model, not a browser; HTML escaping would mangle
    // quotes and ampersands in the transcript.
    fn engine() -> Handlebars<'static> {
        let mut hbs = Handlebars::new();
        hbs.register_escape_fn(handlebars::no_escape);
        hbs
    }

    /// Load a template by name
    ///
    /// Checks in order:
    /// 1. User override: `.chatbot/prompts/{name}.pmt`
    /// 2. Embedded fallback
    fn load_template(&self, name: &str) -> Result<String> {
        debug!(%name, "PromptLoader::load_template: called");
        if let Some(ref user_dir) = self.user_dir {
            let path = user_dir.join(format!("{}.pmt", name));
            if path.exists() {
                debug!(?path, "PromptLoader::load_template: found in user override");
                return std::fs::read_to_string(&path)
                    .map_err(|e| eyre!("Failed to read user prompt {}: {}", path.display(), e));
            }
            debug!(?path, "PromptLoader::load_template: not found in user override");
        }

        if let Some(content) = embedded::get_embedded(name) {
            debug!(%name, "PromptLoader::load_template: found in embedded");
            return Ok(content.to_string());
        }

        Err(eyre!("Prompt template not found: {}", name))
    }

    /// Render a template with the given variables
    pub fn render(&self, template_name: &str, vars: &PromptVars) -> Result<String> {
        debug!(
            %template_name,
            context_len = vars.context.len(),
            question_len = vars.question.len(),
            "PromptLoader::render: called"
        );
        let template = self.load_template(template_name)?;

        self.hbs
            .render_template(&template, vars)
            .map_err(|e| eyre!("Failed to render template {}: {}", template_name, e))
    }

    /// Render the conversation template
    pub fn render_chat(&self, vars: &PromptVars) -> Result<String> {
        self.render(CHAT_TEMPLATE, vars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_render_chat_substitutes_both_fields() {
        let loader = PromptLoader::embedded_only();
        let vars = PromptVars::new("\nUser: Hello\nAI: Hi!", "How are you");

        let prompt = loader.render_chat(&vars).unwrap();
        assert!(prompt.contains("여기 대화 기록이 있습니다: \nUser: Hello\nAI: Hi!"));
        assert!(prompt.contains("질문: How are you"));
        assert!(!prompt.contains("{{"));
    }

    #[test]
    fn test_render_chat_empty_context() {
        let loader = PromptLoader::embedded_only();
        let prompt = loader.render_chat(&PromptVars::new("", "Hello")).unwrap();

        assert!(prompt.contains("여기 대화 기록이 있습니다: \""));
        assert!(prompt.contains("질문: Hello"));
    }

    #[test]
    fn test_render_is_pure() {
        let loader = PromptLoader::embedded_only();
        let vars = PromptVars::new("\nUser: a\nAI: b", "c");

        let first = loader.render_chat(&vars).unwrap();
        let second = loader.render_chat(&vars).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_does_not_html_escape() {
        let loader = PromptLoader::embedded_only();
        let prompt = loader
            .render_chat(&PromptVars::new("", "is <b> & \"quoted\" ok?"))
            .unwrap();

        assert!(prompt.contains("is <b> & \"quoted\" ok?"));
    }

    #[test]
    fn test_user_override_wins() {
        let dir = TempDir::new().unwrap();
        let prompts = dir.path().join(".chatbot/prompts");
        std::fs::create_dir_all(&prompts).unwrap();
        std::fs::write(prompts.join("chat.pmt"), "CTX[{{context}}] Q[{{question}}]").unwrap();

        let loader = PromptLoader::new(dir.path());
        let prompt = loader.render_chat(&PromptVars::new("x", "y")).unwrap();
        assert_eq!(prompt, "CTX[x] Q[y]");
    }

    #[test]
    fn test_missing_override_dir_falls_back_to_embedded() {
        let dir = TempDir::new().unwrap();
        let loader = PromptLoader::new(dir.path());

        let prompt = loader.render_chat(&PromptVars::new("", "q")).unwrap();
        assert!(prompt.contains("질문: q"));
    }

    #[test]
    fn test_unknown_template() {
        let loader = PromptLoader::embedded_only();
        assert!(loader.render("nonexistent-template", &PromptVars::new("", "")).is_err());
    }
}
