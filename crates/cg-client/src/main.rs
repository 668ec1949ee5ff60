//! cg - campus guidance API client
//!
//! A command-line front end over `cg-client`. Every command prints JSON to
//! stdout; logs go to stderr.
//!
//! # Examples
//!
//! ```bash
//! # Log in (the session is stored under .cg/storage.json)
//! cg auth login --email counselor@example.edu --password secret
//!
//! # Counselor intake queue, pending only
//! cg intake list --status pending --pretty
//!
//! # Admin dashboard with per-source results
//! cg admin overview --start-date 2024-01-01 --end-date 2024-06-30
//! ```

mod admin_commands;
mod appointment_commands;
mod args;
mod auth_commands;
mod cli;
mod commands;
mod intake_commands;
mod logger;
mod message_commands;
mod referral_commands;
mod score_commands;
mod session_commands;
mod student_commands;
mod watch_commands;

use crate::{
    admin_commands::AdminCommands, appointment_commands::AppointmentCommands,
    auth_commands::AuthCommands, cli::Cli, commands::Commands, intake_commands::IntakeCommands,
    message_commands::MessageCommands, referral_commands::ReferralCommands,
    score_commands::ScoreCommands, session_commands::SessionCommands,
    student_commands::StudentCommands, watch_commands::WatchCommands,
};

use cg_client::{ClientResult, FileStore, GuidanceClient, Poller, SessionStore};
use cg_config::Config;
use cg_core::{
    Credentials, NewIntakeRequest, NewManualScore, NewMessage, NewReferral, Registration, Role,
    Session, StatusUpdate,
};

use std::{process::ExitCode, sync::Arc, time::Duration};

use clap::Parser;
use serde_json::{Value, json};
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Some(url) = cli.base_url {
        config.api.base_url = Some(url);
    }
    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    if let Err(e) = logger::initialize(&config.logging) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    config.log_summary();

    let result = match cli.command {
        // Session commands work offline and need no base URL
        Commands::Session { action } => run_session(&config, action),
        command => match GuidanceClient::from_config(&config) {
            Ok(client) => run(&client, &config, command).await,
            Err(e) => Err(e),
        },
    };

    // Handle result
    match result {
        Ok(None) => ExitCode::SUCCESS,
        Ok(Some(value)) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            match e.data().filter(|data| !data.is_null()) {
                Some(data) => eprintln!("Error: {} {}", e.display_message(), data),
                None => eprintln!("Error: {}", e),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(client: &GuidanceClient, config: &Config, command: Commands) -> ClientResult<Option<Value>> {
    let value = match command {
        Commands::Auth { action } => match action {
            AuthCommands::Login { email, password } => {
                let session = client.auth().login(&Credentials { email, password }).await?;
                masked_session(&session)
            }
            AuthCommands::Register {
                name,
                email,
                password,
                role,
            } => {
                let registration = Registration {
                    name,
                    email,
                    password_confirmation: password.clone(),
                    password,
                    role,
                };
                let session = client.auth().register(&registration).await?;
                masked_session(&session)
            }
            AuthCommands::Me => serde_json::to_value(client.auth().me().await?)?,
            AuthCommands::Refresh => masked_session(&client.auth().refresh_session().await?),
            AuthCommands::Logout => {
                client.auth().logout().await?;
                json!({ "logged_out": true })
            }
        },

        Commands::Message { action } => match action {
            MessageCommands::List { role } => {
                serde_json::to_value(client.messages().list(role.into()).await?)?
            }
            MessageCommands::Inbox { roles } => {
                let roles: Vec<Role> = roles.into_iter().map(Role::from).collect();
                let inbox = client.messages().inbox(&roles).await;
                let failures: Vec<Value> = inbox
                    .failures
                    .iter()
                    .map(|(role, e)| {
                        json!({ "role": format!("{role:?}"), "error": e.display_message(), "status": e.status() })
                    })
                    .collect();
                json!({ "messages": inbox.messages, "failures": failures })
            }
            MessageCommands::Send {
                role,
                to,
                subject,
                body,
            } => {
                let message = NewMessage {
                    recipient_id: to,
                    subject,
                    body,
                };
                serde_json::to_value(client.messages().send(role.into(), &message).await?)?
            }
            MessageCommands::Read { role, id } => {
                client.messages().mark_read(role.into(), &id).await?;
                json!({ "id": id, "read": true })
            }
            MessageCommands::Unread { role } => {
                serde_json::to_value(client.messages().unread_count(role.into()).await?)?
            }
        },

        Commands::Intake { action } => match action {
            IntakeCommands::Submit {
                concern,
                description,
                urgency,
                preferred_date,
            } => {
                let request = NewIntakeRequest {
                    concern,
                    description,
                    urgency,
                    preferred_date,
                };
                serde_json::to_value(client.intake().submit(&request).await?)?
            }
            IntakeCommands::Mine => serde_json::to_value(client.intake().list_mine().await?)?,
            IntakeCommands::List { filters } => {
                serde_json::to_value(client.intake().list(&filters.into()).await?)?
            }
            IntakeCommands::Update { id, status, notes } => {
                let update = StatusUpdate { status, notes };
                serde_json::to_value(client.intake().update_status(&id, &update).await?)?
            }
        },

        Commands::Referral { action } => match action {
            ReferralCommands::Create {
                student_name,
                student_id,
                reason,
                urgency,
                notes,
            } => {
                let referral = NewReferral {
                    student_name,
                    student_id,
                    reason,
                    urgency,
                    notes,
                };
                serde_json::to_value(client.referrals().create(&referral).await?)?
            }
            ReferralCommands::Mine => serde_json::to_value(client.referrals().list_mine().await?)?,
            ReferralCommands::List { filters } => {
                serde_json::to_value(client.referrals().list(&filters.into()).await?)?
            }
            ReferralCommands::Update { id, status, notes } => {
                let update = StatusUpdate { status, notes };
                serde_json::to_value(client.referrals().update_status(&id, &update).await?)?
            }
        },

        Commands::Appointment { action } => match action {
            AppointmentCommands::List { filters } => serde_json::to_value(
                client
                    .appointments()
                    .list_for_counselor(&filters.into())
                    .await?,
            )?,
            AppointmentCommands::Mine => {
                serde_json::to_value(client.appointments().list_for_student().await?)?
            }
        },

        Commands::Analytics { range } => {
            serde_json::to_value(client.analytics().summary(&range.into()).await?)?
        }

        Commands::Score { action } => match action {
            ScoreCommands::List { filters } => {
                serde_json::to_value(client.manual_scores().list(&filters.into()).await?)?
            }
            ScoreCommands::Save {
                student_id,
                category,
                score,
                remarks,
            } => {
                let score = NewManualScore {
                    student_id,
                    category,
                    score,
                    remarks,
                };
                serde_json::to_value(client.manual_scores().save(&score).await?)?
            }
        },

        Commands::Student { action } => match action {
            StudentCommands::List { filters } => {
                serde_json::to_value(client.students().directory(&filters.into()).await?)?
            }
        },

        Commands::Admin { action } => match action {
            AdminCommands::Users { filters } => {
                serde_json::to_value(client.admin().users(&filters.into()).await?)?
            }
            AdminCommands::Overview { range } => {
                let overview = client.admin().overview(&range.into()).await;
                overview.to_report()
            }
        },

        Commands::Watch { action } => match action {
            WatchCommands::Unread { role, interval } => {
                let interval = interval.unwrap_or(config.polling.interval_secs);
                watch_unread(client.clone(), role.into(), Duration::from_secs(interval)).await;
                return Ok(None);
            }
        },

        Commands::Session { action } => return run_session(config, action),
    };

    Ok(Some(value))
}

fn run_session(config: &Config, action: SessionCommands) -> ClientResult<Option<Value>> {
    let store = FileStore::open(&config.storage_path()?)?;
    let session = SessionStore::new(Arc::new(store));

    let value = match action {
        SessionCommands::Show => masked_session(&session.get()),
        SessionCommands::Home => {
            let role = session
                .get()
                .user
                .map(|user| user.role_kind())
                .unwrap_or(Role::Unknown);
            json!({ "role": format!("{role:?}"), "home": role.home_path() })
        }
        SessionCommands::Clear => {
            session.clear()?;
            json!({ "cleared": true })
        }
    };

    Ok(Some(value))
}

/// Print `{"unread": n}` on every change until Ctrl-C; Enter forces a refresh
async fn watch_unread(client: GuidanceClient, role: Role, interval: Duration) {
    let mut poller = Poller::spawn("unread count", interval, None, move || {
        let client = client.clone();
        async move {
            client
                .messages()
                .unread_count(role)
                .await
                .map(|unread| Some(unread.count))
        }
    });

    let trigger = poller.focus_trigger();
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(_)) = lines.next_line().await {
            trigger.notify();
        }
    });

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            changed = poller.changed() => {
                if !changed {
                    break;
                }
                if let Some(count) = poller.latest() {
                    println!("{}", json!({ "unread": count }));
                }
            }
            _ = &mut ctrl_c => break,
        }
    }
}

/// Session as JSON with all but the first few token characters hidden
fn masked_session(session: &Session) -> Value {
    let token = session.token.as_deref().map(|token| {
        let visible: String = token.chars().take(6).collect();
        format!("{visible}...")
    });
    json!({ "user": session.user, "token": token })
}
