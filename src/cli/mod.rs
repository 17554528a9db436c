//! Command-line front-end.
//!
//! `aula login` drives the login modal with terminal prompts; `aula students`
//! and `aula teachers` call the admin backend and print JSON.

pub mod admin;
pub mod console;
pub mod login;

use std::path::PathBuf;

use aula_client::AdminClient;
use aula_config::{ApiConfig, LoginConfig};
use aula_models::Role;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "aula")]
#[command(about = "Aula - login cards and admin tools for the school platform", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in through one of the four login cards
    Login {
        /// parent, student, teacher or admin (prompted when omitted)
        #[arg(short, long)]
        role: Option<Role>,
    },
    /// Manage student records
    Students {
        #[command(subcommand)]
        action: StudentAction,
    },
    /// Manage teacher records
    Teachers {
        #[command(subcommand)]
        action: TeacherAction,
    },
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum StudentAction {
    /// List students
    List {
        /// Raw query string forwarded to the backend (e.g. "curso=3ro")
        #[arg(short, long, default_value = "")]
        query: String,
    },
    /// Show one student
    Get { id: String },
    /// Create a student from a JSON payload file
    Create {
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Update a student from a JSON file holding the changed fields
    Update {
        id: String,
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Issue a new registration (RUDE) code
    RegenerateCode { id: String },
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum TeacherAction {
    /// List teachers
    List {
        #[arg(short, long, default_value = "")]
        query: String,
    },
    /// Show one teacher
    Get { id: String },
    /// Create a teacher from a JSON payload file
    Create {
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Update a teacher from a JSON file holding the changed fields
    Update {
        id: String,
        #[arg(short, long)]
        file: PathBuf,
    },
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Login { role } => login::run_login(role, LoginConfig::from_env()).await,
        Commands::Students { action } => {
            let client = AdminClient::new(ApiConfig::from_env())?;
            admin::run_students(&client, action).await
        }
        Commands::Teachers { action } => {
            let client = AdminClient::new(ApiConfig::from_env())?;
            admin::run_teachers(&client, action).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_login_with_role() {
        let cli = Cli::try_parse_from(["aula", "login", "--role", "teacher"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Login {
                role: Some(Role::Teacher)
            }
        ));
    }

    #[test]
    fn test_parse_login_rejects_unknown_role() {
        assert!(Cli::try_parse_from(["aula", "login", "--role", "janitor"]).is_err());
    }

    #[test]
    fn test_parse_students_list_defaults_to_empty_query() {
        let cli = Cli::try_parse_from(["aula", "students", "list"]).unwrap();
        match cli.command {
            Commands::Students { action } => {
                assert_eq!(
                    action,
                    StudentAction::List {
                        query: String::new()
                    }
                );
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_regenerate_code() {
        let cli = Cli::try_parse_from(["aula", "students", "regenerate-code", "42"]).unwrap();
        match cli.command {
            Commands::Students { action } => {
                assert_eq!(action, StudentAction::RegenerateCode { id: "42".into() });
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_teacher_update() {
        let cli = Cli::try_parse_from(["aula", "teachers", "update", "t-7", "--file", "t.json"])
            .unwrap();
        match cli.command {
            Commands::Teachers { action } => {
                assert_eq!(
                    action,
                    TeacherAction::Update {
                        id: "t-7".into(),
                        file: PathBuf::from("t.json")
                    }
                );
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
