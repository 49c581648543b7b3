//! Console shell
//!
//! A minimal line-oriented front end standing in for the mobile screens:
//! reads commands from stdin, drives the auth core, prints one response per
//! command.

pub mod commands;
pub mod handlers;

pub use commands::{Command, parse_command};
pub use handlers::{CommandResult, CommandStatus, handle_command};

use log::info;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::auth::AuthContext;
use crate::feed::FeedCatalog;

/// Runs the shell until QUIT or end of input.
pub async fn run(ctx: &mut AuthContext, feed: &FeedCatalog) -> std::io::Result<()> {
    let stdin = tokio::io::stdin();
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(stdin).lines();

    stdout
        .write_all(b"Framez console. Type HELP for commands.\n")
        .await?;
    stdout.flush().await?;

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let command = parse_command(&line);
        let result = handle_command(ctx, feed, command);

        stdout.write_all(result.message.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await?;

        if result.status == CommandStatus::Quit {
            break;
        }
    }

    info!("Shell session ended");
    Ok(())
}
