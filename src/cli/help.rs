//! Help command rendering usage for every subcommand.

use anyhow::Result;
use clap::{Command, CommandFactory, Parser};

/// Help command for displaying usage of all commands at once.
#[derive(Parser)]
pub struct HelpCommand {}

/// Renders the help of the CLI and all of its subcommands.
pub struct HelpGenerator {
    app: Command,
}

impl HelpGenerator {
    /// Creates a help generator for the merge-checks CLI.
    pub fn new() -> Self {
        Self {
            app: crate::cli::Cli::command(),
        }
    }

    /// Generates help for the top-level command followed by each subcommand.
    pub fn generate_all_help(&self) -> Result<String> {
        let mut sections = vec![self.render_command_help(&self.app, "")];
        self.collect_help_recursive(&self.app, "", &mut sections);

        let separator = format!("\n\n{}\n\n", "=".repeat(80));
        Ok(sections.join(&separator))
    }

    /// Subcommands are visited in lexicographic order so the output is stable.
    fn collect_help_recursive(&self, cmd: &Command, prefix: &str, sections: &mut Vec<String>) {
        let mut subcommands: Vec<_> = cmd
            .get_subcommands()
            .filter(|sub| sub.get_name() != "help")
            .collect();
        subcommands.sort_by(|a, b| a.get_name().cmp(b.get_name()));

        for subcmd in subcommands {
            let path = if prefix.is_empty() {
                subcmd.get_name().to_string()
            } else {
                format!("{prefix} {}", subcmd.get_name())
            };

            sections.push(self.render_command_help(subcmd, &path));
            self.collect_help_recursive(subcmd, &path, sections);
        }
    }

    fn render_command_help(&self, cmd: &Command, path: &str) -> String {
        let name = if path.is_empty() {
            cmd.get_name().to_string()
        } else {
            format!("merge-checks {path}")
        };
        let about = cmd
            .get_about()
            .map_or_else(|| "No description available".to_string(), ToString::to_string);

        format!("{name} - {about}\n\n{}", cmd.clone().render_help())
    }
}

impl Default for HelpGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpCommand {
    /// Prints help for every command.
    pub fn execute(self) -> Result<()> {
        let help_output = HelpGenerator::new().generate_all_help()?;
        println!("{help_output}");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn help_generator_default() {
        let gen = HelpGenerator::default();
        assert_eq!(gen.app.get_name(), "merge-checks");
    }

    #[test]
    fn all_commands_are_rendered() {
        let output = HelpGenerator::new().generate_all_help().unwrap();
        assert!(output.contains("merge-checks check"));
        assert!(output.contains("merge-checks config"));
        assert!(output.contains("merge-checks config show"));
        assert!(output.contains("merge-checks help-all"));
        assert!(output.contains(&"=".repeat(80)));
    }

    #[test]
    fn check_help_lists_arguments() {
        let output = HelpGenerator::new().generate_all_help().unwrap();
        assert!(output.contains("<HEAD_HASH>"));
        assert!(output.contains("<BASE_REF>"));
        assert!(output.contains("--remote"));
    }

    #[test]
    fn help_is_deterministic() {
        assert_eq!(
            HelpGenerator::new().generate_all_help().unwrap(),
            HelpGenerator::new().generate_all_help().unwrap()
        );
    }
}
