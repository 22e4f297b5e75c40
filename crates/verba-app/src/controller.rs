use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::io::BufReader;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::io::watcher_io;
use crate::output::output_loop;
use crate::state::AppState;
use crate::types::AppEvent;

/// Centralized channel management
pub struct ChannelSet {
    pub input: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub output: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            input: kanal::bounded_async(64),
            output: kanal::bounded_async(256),
        }
    }
}

impl Default for ChannelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>, cancel_token: CancellationToken) -> Self {
        Self {
            channels: ChannelSet::new(),
            state,
            cancel_token,
        }
    }

    pub fn spawn_tasks(&self) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        // Event loop
        tasks.spawn(event_loop(
            Arc::clone(&self.state.service),
            self.state.config.translator.clone(),
            self.channels.input.1.clone(),
            self.channels.output.0.clone(),
            self.cancel_token.child_token(),
        ));

        // Output
        tasks.spawn(output_loop(self.channels.output.1.clone()));

        // Input watcher
        tasks.spawn(watcher_io(
            BufReader::new(tokio::io::stdin()),
            self.cancel_token.child_token(),
            self.channels.input.0.clone(),
        ));

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
