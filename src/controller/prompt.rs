//! Line-oriented command prompt fed from a blocking reader

use std::io::BufRead;
use tokio::sync::mpsc;
use tracing::{info, warn};
use super::command::{Command, COMMAND_HELP};

/// Reads commands line by line and forwards them to the runtime.
///
/// Blocks the calling thread, so run it off the async runtime. Returns the number of
/// commands forwarded. Stops after `Shutdown`, at end of input, or once the runtime has
/// dropped its receiver; it never starts another read after any of those.
pub fn forward_commands<R: BufRead>(reader: R, commands: &mpsc::Sender<Command>) -> usize {
    let mut forwarded = 0;

    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!("Prompt input closed: {}", e);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(command) => {
                let stop = command == Command::Shutdown;
                if commands.blocking_send(command).is_err() {
                    break;
                }
                forwarded += 1;
                if stop {
                    break;
                }
            }
            Err(e) => {
                warn!("{}", e.user_message());
                info!("{}", COMMAND_HELP);
            }
        }
    }

    forwarded
}

/// Starts the prompt on a dedicated OS thread.
///
/// The thread is detached: a read still pending at shutdown does not hold the process open.
pub fn spawn_stdin_prompt(commands: mpsc::Sender<Command>) -> std::io::Result<()> {
    std::thread::Builder::new()
        .name("command-prompt".to_string())
        .spawn(move || {
            info!("⌨️  {}", COMMAND_HELP);
            let stdin = std::io::stdin();
            forward_commands(stdin.lock(), &commands);
        })
        .map(|_| ())
}
