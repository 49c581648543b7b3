// Command enum to represent console shell commands
#[derive(Debug, PartialEq)]
pub enum Command {
    Signup {
        username: String,
        email: String,
        password: String,
        confirm_password: String,
        full_name: String,
    },
    Login {
        username_or_email: String,
        password: String,
    },
    Logout,
    Whoami,
    Profile,
    Feed,
    Help,
    Quit,
    Unknown(String),
}

// Parse raw input line into Command enum
//
// The verb is case-insensitive; arguments keep their case. Missing
// arguments become empty fields so that validation reports them the same
// way it would for an empty form input.
pub fn parse_command(raw: &str) -> Command {
    let trimmed = raw.trim();
    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let verb = parts.next().unwrap_or("").to_ascii_uppercase();
    let rest = parts.next().unwrap_or("").trim();

    match verb.as_str() {
        "SIGNUP" => parse_signup(rest),
        "LOGIN" => parse_login(rest),
        "LOGOUT" => Command::Logout,
        "WHOAMI" => Command::Whoami,
        "PROFILE" => Command::Profile,
        "FEED" => Command::Feed,
        "HELP" => Command::Help,
        "QUIT" | "Q" => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    }
}

// SIGNUP <username> <email> <password> <confirm> <full name...>
fn parse_signup(args: &str) -> Command {
    let mut parts = args.splitn(5, char::is_whitespace);
    Command::Signup {
        username: parts.next().unwrap_or("").to_string(),
        email: parts.next().unwrap_or("").to_string(),
        password: parts.next().unwrap_or("").to_string(),
        confirm_password: parts.next().unwrap_or("").to_string(),
        full_name: parts.next().unwrap_or("").trim().to_string(),
    }
}

// LOGIN <username-or-email> <password>
fn parse_login(args: &str) -> Command {
    let mut parts = args.splitn(2, char::is_whitespace);
    Command::Login {
        username_or_email: parts.next().unwrap_or("").to_string(),
        password: parts.next().unwrap_or("").trim().to_string(),
    }
}
