use crate::models::LoginRequest;
use crate::services::{CatalogClient, SessionStore};
use std::io::{self, BufRead, Write};
use validator::Validate;

/// Fixed user-facing failure message; transport detail is never echoed
pub const LOGIN_FAILED: &str = "Login failed. Please check your details.";

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
    previous: &str,
) -> io::Result<Option<String>> {
    if previous.is_empty() {
        write!(output, "{}: ", label)?;
    } else {
        write!(output, "{} [{}]: ", label, previous)?;
    }
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let entered = line.trim();
    if entered.is_empty() && !previous.is_empty() {
        // Keep the previously entered value, as a failed form submit would
        return Ok(Some(previous.to_string()));
    }
    Ok(Some(entered.to_string()))
}

/// Login view: collect name and email, submit, transition on success
///
/// On failure the fixed error message is shown and the entered values are
/// retained for the next attempt. Returns `false` on end of input.
pub async fn run<R: BufRead, W: Write>(
    client: &CatalogClient,
    session: &SessionStore,
    input: &mut R,
    output: &mut W,
) -> io::Result<bool> {
    writeln!(output, "Log in to search the adoption catalog.")?;

    let mut name = String::new();
    let mut email = String::new();

    loop {
        name = match prompt(input, output, "Name", &name)? {
            Some(value) => value,
            None => return Ok(false),
        };
        email = match prompt(input, output, "Email", &email)? {
            Some(value) => value,
            None => return Ok(false),
        };

        let request = LoginRequest {
            name: name.clone(),
            email: email.clone(),
        };

        // Both fields are required and the email must look like one
        if request.validate().is_err() {
            writeln!(output, "Please enter a name and a valid email address.")?;
            continue;
        }

        match client.login(&request).await {
            Ok(()) => {
                if let Err(e) = session.set_authenticated() {
                    tracing::warn!("Failed to persist session flag: {}", e);
                }
                writeln!(output, "Welcome, {}!", request.name)?;
                return Ok(true);
            }
            Err(e) => {
                tracing::debug!("Login rejected: {}", e);
                writeln!(output, "{}", LOGIN_FAILED)?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_reads_value() {
        let mut input = Cursor::new(b"Ada\n".to_vec());
        let mut output = Vec::new();

        let value = prompt(&mut input, &mut output, "Name", "").unwrap();
        assert_eq!(value.as_deref(), Some("Ada"));
        assert_eq!(String::from_utf8(output).unwrap(), "Name: ");
    }

    #[test]
    fn test_prompt_retains_previous_on_empty() {
        let mut input = Cursor::new(b"\n".to_vec());
        let mut output = Vec::new();

        let value = prompt(&mut input, &mut output, "Name", "Ada").unwrap();
        assert_eq!(value.as_deref(), Some("Ada"));
    }

    #[test]
    fn test_prompt_none_on_eof() {
        let mut input = Cursor::new(Vec::new());
        let mut output = Vec::new();

        let value = prompt(&mut input, &mut output, "Name", "").unwrap();
        assert!(value.is_none());
    }
}
