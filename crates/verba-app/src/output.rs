use kanal::AsyncReceiver;

use crate::types::AppEvent;

/// Terminal line for an output event
pub fn render(event: &AppEvent) -> Option<String> {
    match event {
        AppEvent::ShowTranslation { translation, .. } => Some(translation.clone()),
        AppEvent::ShowError { category, message } => Some(format!("[{category}] {message}")),
        AppEvent::TextInput { .. } | AppEvent::Retry | AppEvent::Shutdown => None,
    }
}

pub async fn output_loop(output_rx: AsyncReceiver<AppEvent>) -> anyhow::Result<()> {
    while let Ok(event) = output_rx.recv().await {
        match &event {
            AppEvent::ShowTranslation { .. } => {
                if let Some(line) = render(&event) {
                    println!("{line}");
                }
            }
            AppEvent::ShowError { .. } => {
                if let Some(line) = render(&event) {
                    eprintln!("{line}");
                }
            }
            AppEvent::Shutdown => break,
            _ => {}
        }
    }

    tracing::info!("Output loop stopping");
    Ok(())
}
