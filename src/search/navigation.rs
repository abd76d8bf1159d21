//! Opening search results in the system browser

use std::process::{Command, ExitStatus};
use std::thread::JoinHandle;

fn opener(url: &str) -> Command {
    opener_for(std::env::consts::OS, url)
}

fn opener_for(os: &str, url: &str) -> Command {
    match os {
        "macos" => {
            let mut cmd = Command::new("open");
            cmd.arg(url);
            cmd
        }
        "windows" => {
            // not `cmd /C start`: cmd splits unquoted URLs at `&`
            let mut cmd = Command::new("rundll32");
            cmd.arg("url.dll,FileProtocolHandler").arg(url);
            cmd
        }
        _ => {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(url);
            cmd
        }
    }
}

/// Hand `url` to the desktop's default browser.
pub fn open(url: &str) -> Result<(), String> {
    tracing::info!("Navigating to {}", url);
    launch(opener(url)).map_err(|e| format!("Failed to open {}: {}", url, e))?;
    Ok(())
}

/// Spawn `cmd` and reap it on a helper thread so it never lingers as a zombie.
fn launch(mut cmd: Command) -> std::io::Result<JoinHandle<Option<ExitStatus>>> {
    let mut child = cmd.spawn()?;
    Ok(std::thread::spawn(move || match child.wait() {
        Ok(status) => {
            if !status.success() {
                tracing::warn!("Browser launcher exited with {}", status);
            }
            Some(status)
        }
        Err(e) => {
            tracing::warn!("Could not wait for browser launcher: {}", e);
            None
        }
    }))
}

/// Navigate if there is somewhere to go; launch failures are only logged.
pub fn follow(target: Option<String>) {
    if let Some(url) = target {
        if let Err(e) = open(&url) {
            tracing::warn!("{}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(cmd: &Command) -> Vec<String> {
        std::iter::once(cmd.get_program())
            .chain(cmd.get_args())
            .map(|a| a.to_string_lossy().to_string())
            .collect()
    }

    #[test]
    fn test_opener_passes_url_last() {
        let cmd = opener("http://clinic.test/search?q=flu");
        let last = cmd.get_args().last().map(|a| a.to_string_lossy().to_string());
        assert_eq!(last.as_deref(), Some("http://clinic.test/search?q=flu"));
    }

    #[test]
    fn test_windows_opener_keeps_ampersand_out_of_cmd() {
        let url = "http://clinic.test/search?lang=vi&q=flu";
        assert_eq!(
            argv(&opener_for("windows", url)),
            vec!["rundll32", "url.dll,FileProtocolHandler", url]
        );
    }

    #[test]
    fn test_unix_openers_take_url_whole() {
        let url = "http://clinic.test/search?lang=vi&q=flu";
        assert_eq!(argv(&opener_for("macos", url)), vec!["open", url]);
        assert_eq!(argv(&opener_for("linux", url)), vec!["xdg-open", url]);
    }

    #[cfg(unix)]
    #[test]
    fn test_launched_process_is_reaped() {
        let reaper = launch(Command::new("true")).unwrap();
        let status = reaper.join().unwrap();
        assert!(status.is_some_and(|s| s.success()));
    }

    #[test]
    fn test_launch_missing_program_fails() {
        assert!(launch(Command::new("medsearch-no-such-launcher")).is_err());
    }

    #[test]
    fn test_follow_none_is_noop() {
        follow(None);
    }
}
