use clap::{CommandFactory, Parser, Subcommand};

/// Returns the version string, including the git hash for non-release builds.
/// Format: "0.1.0" for releases, "0.1.0@abc1234" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "notepass", bin_name = "notepass", version = get_version())]
#[command(about = "Keep notes and passwords in memory for one session", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start an interactive session (the default)
    Repl,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., prompt, mask-passwords)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

/// One line typed into an interactive session.
#[derive(Parser, Debug)]
#[command(
    name = "notepass",
    no_binary_name = true,
    disable_help_flag = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    /// Add a note (prompts when TEXT is omitted)
    #[command(alias = "an")]
    AddNote {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// List all notes
    #[command(alias = "ln")]
    ListNotes,

    /// Delete a note by ID (prompts when ID is omitted)
    #[command(alias = "dn")]
    DeleteNote {
        #[arg(allow_hyphen_values = true)]
        id: Option<String>,
    },

    /// Store a password for a service (the password is always prompted)
    #[command(alias = "ap")]
    AddPassword {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        service: Vec<String>,
    },

    /// Show the password stored for a service
    #[command(alias = "gp")]
    GetPassword {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        service: Vec<String>,
    },

    /// Delete the password stored for a service
    #[command(alias = "dp")]
    DeletePassword {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        service: Vec<String>,
    },

    /// List services that have a stored password
    Services,

    /// Show this help
    #[command(alias = "?")]
    Help,

    /// End the session
    #[command(alias = "exit")]
    Quit,
}

impl SessionLine {
    /// Parses one session line. Free-text arguments (note text, service names)
    /// are taken verbatim from the rest of the line so inner spacing survives.
    pub fn parse_line(line: &str) -> Result<SessionCommand, clap::Error> {
        let parsed = SessionLine::try_parse_from(line.split_whitespace())?;
        let rest = rest_of_line(line);

        Ok(match parsed.command {
            SessionCommand::AddNote { text } if !text.is_empty() => SessionCommand::AddNote {
                text: vec![rest.to_string()],
            },
            SessionCommand::AddPassword { service } if !service.is_empty() => {
                SessionCommand::AddPassword {
                    service: vec![rest.to_string()],
                }
            }
            SessionCommand::GetPassword { service } if !service.is_empty() => {
                SessionCommand::GetPassword {
                    service: vec![rest.to_string()],
                }
            }
            SessionCommand::DeletePassword { service } if !service.is_empty() => {
                SessionCommand::DeletePassword {
                    service: vec![rest.to_string()],
                }
            }
            other => other,
        })
    }
}

/// Everything after the first word, with the separating whitespace removed.
fn rest_of_line(line: &str) -> &str {
    let line = line.trim_start();
    match line.find(char::is_whitespace) {
        Some(pos) => line[pos..].trim_start(),
        None => "",
    }
}

/// Help text for an interactive session, one line per command.
pub fn session_help() -> String {
    let cmd = SessionLine::command();

    let mut output = String::from("Commands:\n");
    for sc in cmd.get_subcommands().filter(|sc| !sc.is_hide_set()) {
        let aliases: Vec<_> = sc.get_all_aliases().collect();
        let name = if aliases.is_empty() {
            sc.get_name().to_string()
        } else {
            format!("{} ({})", sc.get_name(), aliases.join(", "))
        };
        let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
        output.push_str(&format!("  {:<26} {}\n", name, about));
    }
    output
}
