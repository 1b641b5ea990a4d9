use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use dotenvy::dotenv;

use mergington::client::{ActivitiesClient, ClientError};
use mergington::config::DEFAULT_API_URL;
use mergington::page::controller::SIGNUP_REJECTED_FALLBACK;
use mergington::page::{ActivitiesList, Confirm, MessageKind, PageController, SubmitOutcome};

#[derive(Debug, Parser)]
#[command(name = "activities_cli", about = "Browse and sign up for Mergington activities")]
struct Cli {
    /// Base url of the activities API.
    #[arg(long, env = "MERGINGTON_API_URL", default_value = DEFAULT_API_URL, global = true)]
    api_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show every activity with its capacity and participants.
    List,
    /// Sign up for an activity.
    Signup {
        #[arg(long)]
        email: String,
        #[arg(long)]
        activity: String,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
    /// Cancel a signup.
    Cancel {
        #[arg(long)]
        email: String,
        #[arg(long)]
        activity: String,
    },
}

struct StdinConfirm {
    assume_yes: bool,
}

impl Confirm for StdinConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        print!("{} [y/N] ", prompt);
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    }
}

fn print_activities<C: Confirm>(page: &PageController<C>) -> bool {
    match page.activities() {
        ActivitiesList::Loaded(cards) => {
            for card in cards {
                println!("{}", card);
            }
            true
        }
        ActivitiesList::Failed(message) => {
            eprintln!("{}", message);
            false
        }
        ActivitiesList::Loading => false,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    mergington::init_tracing("warn");

    let cli = Cli::parse();
    let client = match ActivitiesClient::new(&cli.api_url) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(api = %client.base_url(), "using activities API");

    match cli.command {
        Command::List => {
            let mut page = PageController::new(client, StdinConfirm { assume_yes: false });
            page.fetch_activities().await;
            if print_activities(&page) {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Command::Signup {
            email,
            activity,
            yes,
        } => {
            let mut page = PageController::new(client, StdinConfirm { assume_yes: yes });
            page.fetch_activities().await;
            page.set_email(email);
            if let Some(hint) = page.email_feedback() {
                eprintln!("{}", hint);
            }
            page.select_activity(activity);

            let outcome = page.submit().await;
            if let Some(message) = page.message() {
                match message.kind {
                    MessageKind::Success => println!("{}", message.text),
                    MessageKind::Error => eprintln!("{}", message.text),
                }
            }
            match outcome {
                SubmitOutcome::SignedUp => {
                    println!();
                    print_activities(&page);
                    ExitCode::SUCCESS
                }
                SubmitOutcome::Declined => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            }
        }
        Command::Cancel { email, activity } => {
            match client.cancel_signup(&activity, email.trim()).await {
                Ok(message) => {
                    println!("{}", message);
                    ExitCode::SUCCESS
                }
                Err(e @ ClientError::Rejected { .. }) => {
                    eprintln!("{}", e.detail().unwrap_or(SIGNUP_REJECTED_FALLBACK));
                    ExitCode::FAILURE
                }
                Err(e) => {
                    tracing::error!(error = %e, "Error cancelling signup");
                    eprintln!("Failed to cancel signup. Please try again.");
                    ExitCode::FAILURE
                }
            }
        }
    }
}
