use std::{io, path::PathBuf};

use anyhow::{anyhow, bail, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use output::{OutputFormat, Renderer};
use profile_readme_core::{
    check, generate, profile_document, profile_items, CheckOutcome, GeneratorConfig,
};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, Parser, Clone)]
#[command(
    name = "profile-readme",
    version,
    about = "Render the technology badge profile into a README."
)]
struct Cli {
    /// Disable ANSI colors in log output.
    #[arg(long, global = true)]
    no_color: bool,
    /// Only log warnings and errors.
    #[arg(long, global = true)]
    quiet: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand, Clone)]
enum Command {
    /// Write the README (the default when no command is given).
    Generate {
        /// Output path; overrides PROFILE_README_OUTPUT.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the rendered README to stdout without writing it.
    Print,
    /// Fail if the README on disk differs from a fresh render.
    Check {
        /// Path to compare; overrides PROFILE_README_OUTPUT.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the headers and badges that make up the profile.
    Items {
        #[arg(long, value_enum, default_value = "markdown")]
        format: OutputFormat,
    },
    /// Generate shell completion scripts.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli)?;

    match cli.command.clone().unwrap_or(Command::Generate { output: None }) {
        Command::Generate { output } => {
            let config = resolve_config(output, std::env::vars())?;
            let written = generate(&config)?;
            info!(
                target: "profile_readme_cli",
                path = %written.display(),
                "README generated"
            );
        }
        Command::Print => {
            println!("{}", profile_document().render());
        }
        Command::Check { output } => {
            let config = resolve_config(output, std::env::vars())?;
            run_check(&config)?;
        }
        Command::Items { format } => {
            Renderer::new(format).items(&mut io::stdout().lock(), profile_items())?;
        }
        Command::Completions { shell } => {
            let mut command = Cli::command();
            clap_complete::generate(shell, &mut command, "profile-readme", &mut io::stdout());
        }
    }

    Ok(())
}

/// Applies an `--output` flag on top of defaults and `PROFILE_README_*` vars.
fn resolve_config<I, K, V>(output: Option<PathBuf>, vars: I) -> Result<GeneratorConfig>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let config = GeneratorConfig::load_from_vars(vars)?;
    Ok(match output {
        Some(path) => config.with_output(path),
        None => config,
    })
}

fn run_check(config: &GeneratorConfig) -> Result<()> {
    match check(config)? {
        CheckOutcome::UpToDate => {
            info!(
                target: "profile_readme_cli",
                path = %config.output.display(),
                "README is up to date"
            );
            Ok(())
        }
        CheckOutcome::Stale => bail!(
            "{} is out of date; run `profile-readme generate`",
            config.output.display()
        ),
        CheckOutcome::Missing => bail!(
            "{} does not exist; run `profile-readme generate`",
            config.output.display()
        ),
    }
}

fn init_tracing(cli: &Cli) -> Result<()> {
    let default_filter = if cli.quiet {
        "warn"
    } else {
        "warn,profile_readme_cli=info,profile_readme_core=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .without_time()
        .with_ansi(!cli.no_color)
        .compact()
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow!("failed to initialize logging: {error}"))
}

mod output {
    use std::io::Write;

    use anyhow::Result;
    use clap::ValueEnum;
    use profile_readme_core::{Item, SimpleIcon};
    use serde_json::json;

    #[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
    pub enum OutputFormat {
        Json,
        Markdown,
        Text,
    }

    #[derive(Copy, Clone, Debug)]
    pub struct Renderer {
        format: OutputFormat,
    }

    impl Renderer {
        pub fn new(format: OutputFormat) -> Self {
            Self { format }
        }

        pub fn items(&self, out: &mut impl Write, items: &[Item]) -> Result<()> {
            match self.format {
                OutputFormat::Json => {
                    let payload = json!({ "items": items });
                    writeln!(out, "{}", serde_json::to_string_pretty(&payload)?)?;
                }
                OutputFormat::Markdown => {
                    writeln!(out, "| Section | Badge | Logo | Color | Link |")?;
                    writeln!(out, "| --- | --- | --- | --- | --- |")?;
                    let mut section = "";
                    for item in items {
                        match item {
                            Item::Header(header) => section = header.text(),
                            Item::Icon(icon) => writeln!(
                                out,
                                "| {} | {} | {} | {} | {} |",
                                section,
                                icon.label(),
                                logo_cell(icon),
                                icon.color().unwrap_or("-"),
                                icon.link().unwrap_or("-"),
                            )?,
                        }
                    }
                }
                OutputFormat::Text => {
                    for item in items {
                        match item {
                            Item::Header(header) => writeln!(out, "{}", header.text())?,
                            Item::Icon(icon) => {
                                writeln!(out, "  • {} ({})", icon.label(), logo_cell(icon))?;
                                if let Some(href) = icon.link() {
                                    writeln!(out, "    link: {href}")?;
                                }
                            }
                        }
                    }
                }
            }
            Ok(())
        }
    }

    fn logo_cell(icon: &SimpleIcon) -> String {
        if icon.has_inline_logo() {
            "inline".to_string()
        } else {
            format!("`{}`", icon.logo())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use profile_readme_core::profile_items;
        use serde_json::Value;

        fn render(format: OutputFormat) -> String {
            let mut out = Vec::new();
            Renderer::new(format)
                .items(&mut out, profile_items())
                .expect("render items");
            String::from_utf8(out).expect("utf-8 output")
        }

        #[test]
        fn markdown_rows_carry_section_and_placeholders() {
            let rendered = render(OutputFormat::Markdown);
            let lines: Vec<&str> = rendered.lines().collect();

            assert_eq!(lines[0], "| Section | Badge | Logo | Color | Link |");
            assert_eq!(lines[2], "| Frontend | TypeScript | `typescript` | - | - |");
            assert!(lines.contains(&"| Frontend | Redux Toolkit | `redux` | 7248b6 | - |"));
            assert!(lines.contains(
                &"| Backend | SuperTokens | inline | - | https://supertokens.com/ |"
            ));
            assert!(lines.contains(&"| Teamwork | Confluence | `confluence` | 2484fc | - |"));
            assert!(!rendered.contains("Technologies I work with"));
        }

        #[test]
        fn json_lists_items_with_kind_tag() {
            let value: Value = serde_json::from_str(&render(OutputFormat::Json)).expect("json");
            let items = value["items"].as_array().expect("items array");

            assert_eq!(items.len(), profile_items().len());
            assert_eq!(items[0]["kind"], "header");
            assert_eq!(items[0]["text"], "Technologies I work with");
            assert_eq!(items[2]["kind"], "icon");
            assert_eq!(items[2]["label"], "TypeScript");
            assert!(items[2].get("href").is_none());
        }

        #[test]
        fn text_indents_badges_under_headers() {
            let rendered = render(OutputFormat::Text);

            assert!(rendered.starts_with(
                "Technologies I work with\nFrontend\n  • TypeScript (`typescript`)\n"
            ));
            assert!(rendered.contains(
                "  • Drizzle ORM (`drizzle`)\n    link: https://orm.drizzle.team/\n"
            ));
            assert!(rendered.contains("  • Playwright (inline)\n"));
        }
    }
}
