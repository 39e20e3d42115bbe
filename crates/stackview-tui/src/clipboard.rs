//! System clipboard access via whichever copy command is installed

use std::io::Write;
use std::process::{Command, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

/// Copy commands tried in order, with their arguments
const CLIPBOARD_COMMANDS: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("pbcopy", &[]),
];

/// How long the UI waits for the copy command before assuming success
const FEEDBACK_WAIT: Duration = Duration::from_millis(100);

/// Copy text to the system clipboard without blocking the UI.
///
/// The copy runs on a background thread. If it has not finished within
/// a short wait it is assumed to succeed.
pub fn copy_to_clipboard(content: &str) -> Result<(), String> {
    let (tx, rx) = mpsc::channel();
    let content = content.to_string();

    thread::spawn(move || {
        let _ = tx.send(copy_blocking(&content));
    });

    match rx.recv_timeout(FEEDBACK_WAIT) {
        Ok(result) => result,
        Err(mpsc::RecvTimeoutError::Timeout) => Ok(()),
        Err(mpsc::RecvTimeoutError::Disconnected) => {
            Err("Clipboard thread terminated unexpectedly".to_string())
        }
    }
}

fn command_exists(cmd: &str) -> bool {
    Command::new("which")
        .arg(cmd)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

fn copy_blocking(content: &str) -> Result<(), String> {
    copy_with(CLIPBOARD_COMMANDS, content)
}

/// Try each installed command in turn. Runs off the UI thread, so failures are
/// returned rather than logged.
fn copy_with(commands: &[(&str, &[&str])], content: &str) -> Result<(), String> {
    let mut last_failure = None;
    for (cmd, args) in commands {
        if !command_exists(cmd) {
            continue;
        }
        match pipe_into(cmd, args, content) {
            Ok(()) => return Ok(()),
            Err(e) => last_failure = Some(format!("{} failed: {}", cmd, e)),
        }
    }

    match last_failure {
        Some(failure) => Err(failure),
        None => {
            let tried: Vec<&str> = commands.iter().map(|(cmd, _)| *cmd).collect();
            Err(format!(
                "No clipboard command available (tried {})",
                tried.join(", ")
            ))
        }
    }
}

/// Write `content` to the command's stdin and wait up to five seconds for it to exit
fn pipe_into(cmd: &str, args: &[&str], content: &str) -> Result<(), String> {
    let mut child = Command::new(cmd)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| e.to_string())?;

    {
        let mut stdin = child.stdin.take().ok_or("stdin unavailable")?;
        stdin
            .write_all(content.as_bytes())
            .map_err(|e| e.to_string())?;
    }

    let timeout = Duration::from_secs(5);
    let start = Instant::now();
    loop {
        match child.try_wait() {
            Ok(Some(status)) if status.success() => return Ok(()),
            Ok(Some(status)) => return Err(format!("exited with {}", status)),
            Ok(None) if start.elapsed() > timeout => {
                let _ = child.kill();
                return Err("timed out".to_string());
            }
            Ok(None) => thread::sleep(Duration::from_millis(50)),
            Err(e) => return Err(e.to_string()),
        }
    }
}
