//! Interactive sign-in and chat loop

use anyhow::{Context, Result};
use chrono::NaiveDate;
use load_chat::{
    CredentialStore, Dispatcher, InMemoryCredentialStore, Response, SessionContext, SignupForm,
};
use load_forecast::LoadModel;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Settings for one chat session
#[derive(Debug, Clone)]
pub struct ChatOptions {
    pub user: Option<String>,
    pub today: NaiveDate,
    pub export: Option<PathBuf>,
}

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> Result<Option<String>> {
    write!(output, "{}", label)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Ask for credentials until a login succeeds. `None` on end of input.
fn sign_in<R: BufRead, W: Write, S: CredentialStore>(
    input: &mut R,
    output: &mut W,
    store: &mut S,
) -> Result<Option<String>> {
    loop {
        let Some(choice) = prompt(input, output, "Login or sign up? [l/s]: ")? else {
            return Ok(None);
        };

        match choice.to_lowercase().as_str() {
            "s" | "signup" | "sign up" => {
                let mut fields = Vec::with_capacity(4);
                for label in ["Username: ", "Email: ", "Password: ", "Confirm Password: "] {
                    match prompt(input, output, label)? {
                        Some(value) => fields.push(value),
                        None => return Ok(None),
                    }
                }
                let form = SignupForm {
                    username: fields[0].clone(),
                    email: fields[1].clone(),
                    password: fields[2].clone(),
                    confirm_password: fields[3].clone(),
                };
                match form.submit(store) {
                    Ok(()) => writeln!(output, "Account created! Please log in.")?,
                    Err(e) => writeln!(output, "{}", e)?,
                }
            }
            "l" | "login" => {
                let Some(username) = prompt(input, output, "Username: ")? else {
                    return Ok(None);
                };
                let Some(password) = prompt(input, output, "Password: ")? else {
                    return Ok(None);
                };
                match store.validate(&username, &password)? {
                    Some(user) => return Ok(Some(user.username)),
                    None => writeln!(output, "Invalid username or password")?,
                }
            }
            _ => writeln!(output, "Please answer 'l' or 's'")?,
        }
    }
}

/// Run the chat session until `exit` or end of input
pub fn run<M, R, W>(dispatcher: &Dispatcher<M>, mut input: R, mut output: W, options: ChatOptions) -> Result<()>
where
    M: LoadModel,
    R: BufRead,
    W: Write,
{
    let username = match options.user {
        Some(user) => user,
        None => {
            let mut store = InMemoryCredentialStore::new();
            match sign_in(&mut input, &mut output, &mut store)? {
                Some(user) => user,
                None => return Ok(()),
            }
        }
    };

    writeln!(output, "Welcome, {}!", username)?;
    writeln!(output, "Ask about electricity load forecasts. Type 'exit' to quit.")?;

    let mut session = SessionContext::new(username, options.today);

    while let Some(line) = prompt(&mut input, &mut output, "> ")? {
        if line.is_empty() {
            continue;
        }
        if matches!(line.to_lowercase().as_str(), "exit" | "quit") {
            break;
        }

        match dispatcher.handle(&mut session, &line) {
            Ok(response) => {
                write!(output, "{}", response.render_text())?;
                if !response.is_table() {
                    writeln!(output)?;
                }
                if let (Response::Table(table), Some(path)) = (&response, &options.export) {
                    table
                        .to_csv_file(path)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    writeln!(output, "Saved {} rows to {}", table.len(), path.display())?;
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "message failed");
                writeln!(output, "Error: {}", e)?;
            }
        }
    }

    tracing::info!(turns = session.history().len(), "chat session ended");
    Ok(())
}
