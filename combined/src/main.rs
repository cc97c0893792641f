//! Login demo binary - seeds an in-memory directory and runs one login.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::{error, info};

use auth_service_lib::{LoginInputBoundary, LoginInteractor, LoginOutcome, LoginPresenter};
use common::{init_tracing, AppResult, LoginConfig, OutputFormat};
use domain::{AuthenticationRequest, CommonUserFactory};
use user_service_lib::{load_users_file, parse_credential_pair, seed_directory, InMemoryUserDirectory};

#[derive(Parser)]
#[command(name = "login-demo")]
#[command(about = "Run the login use case against an in-memory user directory")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Attempt a single login
    Login {
        /// Username to log in as
        #[arg(long)]
        username: String,
        /// Password to log in with
        #[arg(long)]
        password: String,
        /// Register a user before logging in (NAME:PASS, repeatable)
        #[arg(long = "user", value_name = "NAME:PASS")]
        users: Vec<String>,
        /// JSON file of users to register
        #[arg(long, env = "LOGIN_USERS_FILE")]
        users_file: Option<PathBuf>,
        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Arguments of one login run after merging with the environment.
struct LoginRun {
    username: String,
    password: String,
    users: Vec<String>,
    users_file: Option<PathBuf>,
    output: OutputFormat,
}

impl LoginRun {
    fn from_command(command: Commands, config: &LoginConfig) -> Self {
        match command {
            Commands::Login {
                username,
                password,
                users,
                users_file,
                json,
            } => Self {
                username,
                password,
                users,
                users_file: users_file.or_else(|| config.users_file.clone()),
                output: if json { OutputFormat::Json } else { config.output },
            },
        }
    }
}

/// Seed the directory, run the interactor, and render the view.
fn run(login: LoginRun) -> AppResult<(LoginOutcome, String)> {
    let directory = Arc::new(InMemoryUserDirectory::new());

    if let Some(path) = &login.users_file {
        info!("Loading users from {}", path.display());
        seed_directory(directory.as_ref(), load_users_file(path)?)?;
    }

    let pairs = login
        .users
        .iter()
        .map(|pair| parse_credential_pair(pair, &CommonUserFactory))
        .collect::<AppResult<Vec<_>>>()?;
    seed_directory(directory.as_ref(), pairs)?;

    let presenter = Arc::new(LoginPresenter::new(login.output));
    let interactor = LoginInteractor::new(directory, presenter.clone());

    let outcome = interactor.execute(AuthenticationRequest::new(login.username, login.password))?;
    Ok((outcome, presenter.render()?))
}

fn main() -> ExitCode {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = match LoginConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e.user_message());
            return ExitCode::from(2);
        }
    };

    init_tracing(&config.log_level);

    let cli = Cli::parse();
    let login = LoginRun::from_command(cli.command, &config);

    match run(login) {
        Ok((outcome, rendered)) => {
            println!("{}", rendered);
            if outcome.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            }
        }
        Err(e) => {
            error!(code = e.code(), "Login run failed: {}", e);
            eprintln!("{}", e.user_message());
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login_run(args: &[&str]) -> LoginRun {
        let cli = Cli::try_parse_from(args).unwrap();
        LoginRun::from_command(cli.command, &LoginConfig::default())
    }

    #[test]
    fn test_parses_repeated_users() {
        let login = login_run(&[
            "login-demo", "login", "--username", "Paul", "--password", "pw",
            "--user", "Paul:pw", "--user", "Anna:x",
        ]);
        assert_eq!(login.username, "Paul");
        assert_eq!(login.users, vec!["Paul:pw", "Anna:x"]);
        assert_eq!(login.output, OutputFormat::Text);
    }

    #[test]
    fn test_json_flag_overrides_config() {
        let login = login_run(&[
            "login-demo", "login", "--username", "Paul", "--password", "pw", "--json",
        ]);
        assert_eq!(login.output, OutputFormat::Json);
    }

    #[test]
    fn test_missing_password_is_rejected() {
        assert!(Cli::try_parse_from(["login-demo", "login", "--username", "Paul"]).is_err());
    }

    #[test]
    fn test_run_success() {
        let (outcome, rendered) = run(login_run(&[
            "login-demo", "login", "--username", "Paul", "--password", "password",
            "--user", "Paul:password",
        ]))
        .unwrap();
        assert_eq!(outcome, LoginOutcome::Success);
        assert_eq!(rendered, "Logged in as Paul");
    }

    #[test]
    fn test_run_unknown_account() {
        let (outcome, rendered) = run(login_run(&[
            "login-demo", "login", "--username", "Paul", "--password", "password",
        ]))
        .unwrap();
        assert_eq!(outcome, LoginOutcome::NotFound);
        assert_eq!(rendered, "Paul: Account does not exist.");
    }

    #[test]
    fn test_run_bad_pair_is_fault() {
        let result = run(login_run(&[
            "login-demo", "login", "--username", "Paul", "--password", "pw", "--user", "Paul",
        ]));
        assert!(result.is_err());
    }
}
