//! Shell command handlers
//!
//! Dispatches parsed commands against the auth context and the feed catalog
//! and formats one response per command. This layer only collects input and
//! renders results; all decisions are made by the core.

use crate::auth::{AuthContext, LoginRequest, SignupRequest};
use crate::feed::FeedCatalog;

use super::commands::Command;

/// Whether the shell keeps running after a command.
#[derive(Debug, PartialEq)]
pub enum CommandStatus {
    Continue,
    Quit,
}

/// Result of one dispatched command.
#[derive(Debug)]
pub struct CommandResult {
    pub status: CommandStatus,
    pub message: String,
}

/// Dispatches a parsed command to its handler.
pub fn handle_command(ctx: &mut AuthContext, feed: &FeedCatalog, command: Command) -> CommandResult {
    match command {
        Command::Signup {
            username,
            email,
            password,
            confirm_password,
            full_name,
        } => handle_cmd_signup(ctx, username, email, password, confirm_password, full_name),
        Command::Login {
            username_or_email,
            password,
        } => handle_cmd_login(ctx, username_or_email, password),
        Command::Logout => handle_cmd_logout(ctx),
        Command::Whoami => handle_cmd_whoami(ctx),
        Command::Profile => handle_cmd_profile(ctx),
        Command::Feed => handle_cmd_feed(feed),
        Command::Help => handle_cmd_help(),
        Command::Quit => CommandResult {
            status: CommandStatus::Quit,
            message: "Goodbye".to_string(),
        },
        Command::Unknown(raw) => respond(format!(
            "Unknown command: {}. Type HELP for usage.",
            raw
        )),
    }
}

fn respond(message: impl Into<String>) -> CommandResult {
    CommandResult {
        status: CommandStatus::Continue,
        message: message.into(),
    }
}

fn handle_cmd_signup(
    ctx: &mut AuthContext,
    username: String,
    email: String,
    password: String,
    confirm_password: String,
    full_name: String,
) -> CommandResult {
    let req = SignupRequest {
        username,
        email,
        full_name,
        password,
        confirm_password,
    };
    match ctx.signup(&req) {
        Ok(user) => respond(format!("Welcome to Framez, {}!", user.full_name)),
        Err(e) => respond(format!("Signup failed: {}", e)),
    }
}

fn handle_cmd_login(
    ctx: &mut AuthContext,
    username_or_email: String,
    password: String,
) -> CommandResult {
    let req = LoginRequest {
        username_or_email,
        password,
    };
    match ctx.login(&req) {
        Ok(user) => respond(format!("Welcome back, {}!", user.username)),
        Err(e) => respond(format!("Login failed: {}", e)),
    }
}

fn handle_cmd_logout(ctx: &mut AuthContext) -> CommandResult {
    let was_signed_in = ctx.current_user().is_some();
    ctx.logout();
    if was_signed_in {
        respond("Signed out.")
    } else {
        respond("Nobody is signed in.")
    }
}

fn handle_cmd_whoami(ctx: &AuthContext) -> CommandResult {
    match ctx.current_user() {
        Some(user) => respond(user.username.clone()),
        None => respond("Not signed in."),
    }
}

/// Renders the signed-in user's profile the way the profile screen lays it
/// out: name, bio, counters, then the post grid placeholder.
fn handle_cmd_profile(ctx: &AuthContext) -> CommandResult {
    let Some(user) = ctx.current_user() else {
        return respond("Not signed in.");
    };

    let bio = if user.bio.is_empty() {
        "No bio yet"
    } else {
        user.bio.as_str()
    };
    let posts_line = if user.post_image_urls.is_empty() {
        "No posts yet".to_string()
    } else {
        format!("{} posts", user.post_image_urls.len())
    };
    respond(format!(
        "{} ({})\n{}\n{} posts | {} followers | {} following\n{}",
        user.full_name,
        user.username,
        bio,
        user.posts_count,
        user.followers_count,
        user.following_count,
        posts_line,
    ))
}

fn handle_cmd_feed(feed: &FeedCatalog) -> CommandResult {
    let lines: Vec<String> = feed
        .posts()
        .iter()
        .map(|post| {
            format!(
                "{}: {} ({} likes, {})",
                post.username, post.caption, post.likes, post.posted_ago
            )
        })
        .collect();
    respond(lines.join("\n"))
}

fn handle_cmd_help() -> CommandResult {
    respond(
        "Commands:\n\
         SIGNUP <username> <email> <password> <confirm> <full name>\n\
         LOGIN <username-or-email> <password>\n\
         LOGOUT | WHOAMI | PROFILE | FEED | HELP | QUIT",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::shell::commands::parse_command;

    fn run(ctx: &mut AuthContext, feed: &FeedCatalog, line: &str) -> CommandResult {
        handle_command(ctx, feed, parse_command(line))
    }

    #[test]
    fn test_signup_then_whoami() {
        let mut ctx = AuthContext::new(AppConfig::default());
        let feed = FeedCatalog::default();

        let result = run(
            &mut ctx,
            &feed,
            "SIGNUP alice alice@x.com secret1 secret1 Alice A",
        );
        assert_eq!(result.message, "Welcome to Framez, Alice A!");

        let result = run(&mut ctx, &feed, "WHOAMI");
        assert_eq!(result.message, "alice");
    }

    #[test]
    fn test_duplicate_signup_message() {
        let mut ctx = AuthContext::new(AppConfig::default());
        let feed = FeedCatalog::default();

        run(
            &mut ctx,
            &feed,
            "SIGNUP alice alice@x.com secret1 secret1 Alice A",
        );
        let result = run(
            &mut ctx,
            &feed,
            "SIGNUP alice other@x.com secret2 secret2 Bob B",
        );
        assert_eq!(
            result.message,
            "Signup failed: Username or email already exists"
        );
    }

    #[test]
    fn test_failed_login_message_is_generic() {
        let mut ctx = AuthContext::new(AppConfig::default());
        let feed = FeedCatalog::default();

        let result = run(&mut ctx, &feed, "LOGIN alice wrong");
        assert_eq!(result.message, "Login failed: Invalid credentials");
    }

    #[test]
    fn test_profile_requires_sign_in() {
        let mut ctx = AuthContext::new(AppConfig::default());
        let feed = FeedCatalog::default();

        let result = run(&mut ctx, &feed, "PROFILE");
        assert_eq!(result.message, "Not signed in.");

        run(
            &mut ctx,
            &feed,
            "SIGNUP alice alice@x.com secret1 secret1 Alice A",
        );
        let result = run(&mut ctx, &feed, "PROFILE");
        assert!(result.message.contains("Alice A (alice)"));
        assert!(result.message.contains("No bio yet"));
        assert!(result.message.contains("0 posts | 0 followers | 0 following"));
    }

    #[test]
    fn test_feed_lists_seeded_posts() {
        let mut ctx = AuthContext::new(AppConfig::default());
        let feed = FeedCatalog::default();

        let result = run(&mut ctx, &feed, "FEED");
        assert!(result.message.contains("sarah_wanderlust"));
        assert!(result.message.contains("1234 likes"));
    }

    #[test]
    fn test_quit_stops_the_shell() {
        let mut ctx = AuthContext::new(AppConfig::default());
        let feed = FeedCatalog::default();

        let result = run(&mut ctx, &feed, "QUIT");
        assert_eq!(result.status, CommandStatus::Quit);
    }
}
