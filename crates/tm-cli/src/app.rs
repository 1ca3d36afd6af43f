use crate::commands::Commands;
use crate::render::{self, Format, Output};
use crate::task_commands::TaskCommands;
use crate::{Cli, CliError, CliResult, logger};

use std::time::Duration;

use log::{info, warn};
use tm_board::{BoardPolicy, LoginForm, TaskBoard};
use tm_client::{Client, Session, SessionStore};
use tm_config::Config;
use tm_core::{DraftField, Notification, StatusCommand};

/// Load configuration, start logging and execute one command.
pub async fn run(cli: Cli) -> CliResult<()> {
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;
    config.log_summary();

    let format = if cli.wants_json() {
        Format::Json { pretty: cli.pretty }
    } else {
        Format::Text
    };
    let base_url = cli.server.unwrap_or_else(|| config.api.base_url.clone());
    let timeout = Duration::from_secs(config.api.timeout_secs);
    let store = SessionStore::new(config.session_path()?);

    let output = match cli.command {
        Commands::Login { email, password } => {
            let client = Client::with_timeout(&base_url, None, timeout)?;
            let mut form = LoginForm::new(email, password);
            let result = form.submit(&client, &store).await;
            print_notification(form.notification());
            result?;
            Output::message(format!("Session stored at {}", store.path().display()))
        }

        Commands::Logout => {
            if store.clear()? {
                Output::message("Logged out.")
            } else {
                Output::message("No stored session.")
            }
        }

        Commands::Tasks(command) => {
            let session = if config.auth.enabled {
                Some(load_session(&store)?)
            } else {
                None
            };
            let client = Client::with_timeout(&base_url, session, timeout)?;
            let board = TaskBoard::new(client, BoardPolicy::from(&config.board));

            let result = run_board_command(&board, command).await;
            print_notification(&board.notification());
            result?
        }
    };

    println!("{}", render::render(&output, format)?);
    Ok(())
}

async fn run_board_command(
    board: &TaskBoard<Client>,
    command: TaskCommands,
) -> CliResult<Output> {
    board.mount().await?;

    let output = match command {
        TaskCommands::Board => Output::Lanes(board.lanes()),

        TaskCommands::List { lane } => match lane {
            Some(status) => Output::Tasks(board.lane_tasks(status)),
            None => Output::Tasks(board.tasks()),
        },

        TaskCommands::Create {
            lane,
            title,
            description,
            start,
            end,
        } => {
            board.select_lane(lane);
            board.update_draft_field(DraftField::Title, title);
            board.update_draft_field(DraftField::Description, description);
            board.update_draft_field(DraftField::StartedAt, start.unwrap_or_default());
            board.update_draft_field(DraftField::EndedAt, end.unwrap_or_default());

            let created = board.submit_draft(lane).await?;
            if created.is_none() {
                warn!("Title and description are required, nothing was created");
            }
            Output::Task(created)
        }

        TaskCommands::Move { id, command } => {
            board.change_status(id, command).await?;
            moved_task(board, id, command)
        }

        TaskCommands::Delete { id } => {
            board.change_status(id, StatusCommand::Delete).await?;
            Output::message(format!("Deleted task {id}."))
        }
    };

    Ok(output)
}

fn moved_task(board: &TaskBoard<Client>, id: i64, command: StatusCommand) -> Output {
    match command {
        StatusCommand::Delete => Output::message(format!("Deleted task {id}.")),
        StatusCommand::Change(_) => {
            Output::Task(board.tasks().into_iter().find(|task| task.id == id))
        }
    }
}

/// Stored session, moving a corrupted file aside first.
fn load_session(store: &SessionStore) -> CliResult<Session> {
    let loaded = store.load()?;

    if let Some(ref error) = loaded.corruption_error {
        warn!("Stored session is unreadable: {error}");
        if let Some(backup) = store.backup_corrupted()? {
            eprintln!(
                "Session file was corrupted and has been moved to {}",
                backup.display()
            );
        }
    }

    match loaded.session {
        Some(session) => {
            info!("Using session for {}", session.user.name);
            Ok(session)
        }
        None => Err(CliError::not_logged_in()),
    }
}

fn print_notification(notification: &Notification) {
    if let Some(line) = render::render_notification(notification) {
        eprintln!("{line}");
    }
}
