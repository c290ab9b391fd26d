//! Interactive command loop.
//!
//! Reads one command per line, hands it to the [`CommandHandler`] and writes
//! the reply. The line read is the only await point; everything else runs
//! synchronously on the calling task.

pub mod handlers;
pub mod parser;

pub use handlers::{CommandHandler, Outcome};
pub use parser::{parse_input, Command, ParsedInput};

use crate::repositories::ContactRepository;
use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";

/// Run the prompt/read/dispatch loop until `exit`, `close` or end of input.
///
/// # Errors
///
/// Only I/O failures on `input` or `output` end the loop with an error.
/// Command failures are printed and the loop continues.
pub async fn run_repl<I, O, R>(
    input: I,
    mut output: O,
    handler: &mut CommandHandler<R>,
) -> Result<()>
where
    I: AsyncBufRead + Unpin,
    O: AsyncWrite + Unpin,
    R: ContactRepository,
{
    output.write_all(format!("{}\n", WELCOME).as_bytes()).await?;

    let mut lines = input.lines();
    loop {
        output.write_all(PROMPT.as_bytes()).await?;
        output.flush().await?;

        let outcome = match lines.next_line().await? {
            Some(line) => handler.handle_line(&line),
            None => {
                tracing::info!("End of input, leaving command loop");
                output.write_all(b"\n").await?;
                Outcome::Exit(handlers::GOODBYE.to_string())
            }
        };

        output
            .write_all(format!("{}\n", outcome.text()).as_bytes())
            .await?;

        if let Outcome::Exit(_) = outcome {
            break;
        }
    }

    output.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn run(script: &str) -> String {
        let mut handler = CommandHandler::<crate::repositories::AddressBook>::default();
        let mut out: Vec<u8> = Vec::new();
        run_repl(script.as_bytes(), &mut out, &mut handler)
            .await
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn test_repl_greets_and_exits() {
        let out = run("exit\n").await;
        assert_eq!(
            out,
            "Welcome to the assistant bot!\nEnter a command: Exiting program...\n"
        );
    }

    #[tokio::test]
    async fn test_repl_stops_at_exit() {
        let out = run("hello\nclose\nhello\n").await;
        assert_eq!(out.matches("How can I help you?").count(), 1);
        assert!(out.ends_with("Exiting program...\n"));
    }

    #[tokio::test]
    async fn test_repl_end_of_input_exits() {
        let out = run("hello\n").await;
        assert!(out.ends_with("Enter a command: \nExiting program...\n"));
    }
}
