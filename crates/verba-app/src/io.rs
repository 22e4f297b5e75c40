use kanal::AsyncSender;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio_util::sync::CancellationToken;

use crate::types::AppEvent;

/// Typed instead of text to translate the last input again
pub const RETRY_COMMAND: &str = "/retry";

/// Input event for one line, `None` for blank lines
pub fn parse_line(line: &str) -> Option<AppEvent> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return None;
    }

    if line.trim() == RETRY_COMMAND {
        return Some(AppEvent::Retry);
    }

    Some(AppEvent::TextInput {
        text: line.to_string(),
        force: false,
    })
}

/// Feed lines from `reader` to the event loop until EOF or cancellation
pub async fn watcher_io<B>(
    reader: B,
    cancel: CancellationToken,
    event_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()>
where
    B: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();

    loop {
        let line = tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Input watcher stopping");
                return Ok(());
            }
            line = lines.next_line() => line?,
        };

        let Some(line) = line else {
            tracing::info!("Input closed");
            event_tx.send(AppEvent::Shutdown).await?;
            return Ok(());
        };

        if let Some(event) = parse_line(&line) {
            event_tx.send(event).await?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line() {
        assert_eq!(parse_line("   "), None);
        assert_eq!(parse_line(" /retry \r\n"), Some(AppEvent::Retry));
        assert_eq!(
            parse_line("Bonjour\n"),
            Some(AppEvent::TextInput {
                text: "Bonjour".to_string(),
                force: false,
            })
        );
    }
}
