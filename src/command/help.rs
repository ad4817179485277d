//! Help rendering
//!
//! [`Help`] is a plain model of one command group: its usage line, its
//! operations, its child groups and its options. It serializes to JSON
//! as-is and renders to text through [`Help::render`].

use std::fmt;

use serde::{Deserialize, Serialize};

use super::group::CommandGroup;
use super::tokens::OPTION_PREFIX;

/// Help for one command group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Help {
    /// Usage line without its prefix, e.g. `app [options] <command>`
    pub usage: String,
    pub commands: Vec<CommandHelp>,
    pub groups: Vec<String>,
    pub options: Vec<OptionHelp>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandHelp {
    pub name: String,
    pub params: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionHelp {
    /// Option as typed, including its prefix
    pub name: String,
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

/// Text layout of rendered help
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelpLayout {
    /// Text placed before the usage line
    pub usage_prefix: String,

    /// Indentation of entries under a section heading
    pub indent: usize,
}

impl Default for HelpLayout {
    fn default() -> Self {
        Self {
            usage_prefix: "Usage:".to_string(),
            indent: 2,
        }
    }
}

impl Help {
    /// Help with a usage line only, for a program whose group could not be built
    pub fn bare(program: &str) -> Self {
        Self {
            usage: format!("{} <command>", program),
            commands: Vec::new(),
            groups: Vec::new(),
            options: Vec::new(),
        }
    }

    /// Renders the help as text
    pub fn render(&self, layout: &HelpLayout) -> String {
        let indent = " ".repeat(layout.indent);
        let mut lines = vec![format!("{} {}", layout.usage_prefix, self.usage)];

        if !self.commands.is_empty() || !self.groups.is_empty() {
            let entries: Vec<(String, Option<&str>)> = self
                .commands
                .iter()
                .map(|command| {
                    let mut entry = command.name.clone();
                    for param in &command.params {
                        entry.push_str(&format!(" <{}>", param));
                    }
                    (entry, command.about.as_deref())
                })
                .chain(self.groups.iter().map(|group| (format!("{} ...", group), None)))
                .collect();
            let width = entries.iter().map(|(entry, _)| entry.len()).max().unwrap_or(0);

            lines.push(String::new());
            lines.push("Commands:".to_string());
            for (entry, about) in entries {
                match about {
                    Some(about) => lines.push(format!("{}{:<width$}  {}", indent, entry, about)),
                    None => lines.push(format!("{}{}", indent, entry)),
                }
            }
        }

        if !self.options.is_empty() {
            let name_width = self.options.iter().map(|o| o.name.len()).max().unwrap_or(0);
            let kind_width = self.options.iter().map(|o| o.kind.len()).max().unwrap_or(0);

            lines.push(String::new());
            lines.push("Options:".to_string());
            for option in &self.options {
                let line = match &option.tag {
                    Some(tag) => format!(
                        "{}{:<name_width$}  {:<kind_width$}  {}",
                        indent, option.name, option.kind, tag
                    ),
                    None => format!("{}{:<name_width$}  {}", indent, option.name, option.kind),
                };
                lines.push(line);
            }
        }

        lines.join("\n")
    }
}

impl fmt::Display for Help {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&HelpLayout::default()))
    }
}

/// Lower-cases the first character, the inverse of option matching
fn option_flag(name: &str) -> String {
    let mut chars = name.chars();
    let flag: String = match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    };
    format!("{}{}", OPTION_PREFIX, flag)
}

impl<T> CommandGroup<T> {
    /// Help for this group addressed by its own name
    pub fn help(&self) -> Help {
        self.help_at(self.name())
    }

    /// Help for this group reached through `path`
    pub(crate) fn help_at(&self, path: &str) -> Help {
        let usage = if self.options.is_empty() {
            format!("{} <command>", path)
        } else {
            format!("{} [options] <command>", path)
        };

        let commands = self
            .operations
            .iter()
            .map(|(key, operation)| CommandHelp {
                name: key.clone(),
                params: operation.params.iter().map(|kind| kind.to_string()).collect(),
                about: operation.about.clone(),
            })
            .collect();

        let options = self
            .options
            .values()
            .map(|option| OptionHelp {
                name: option_flag(&option.name),
                kind: option.kind.to_string(),
                tag: option.tag.clone(),
            })
            .collect();

        Help {
            usage,
            commands,
            groups: self.children.keys().cloned().collect(),
            options,
        }
    }
}
