use std::sync::Arc;

use tokio::{sync::mpsc, task::JoinHandle};
use tokio_util::sync::CancellationToken;

use crate::{core::raw_msg::RawMsg, infrastructure::movie_source::MovieSource, trace_dbg};

/// Requests the movie service understands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MovieOperation {
    FetchNowPlaying,
}

/// Background task that owns the movie source.
///
/// Results come back to the runtime as `RawMsg::NowPlayingLoaded` or
/// `RawMsg::NowPlayingFailed`.
pub struct MovieService {
    source: Arc<dyn MovieSource>,
    // Incoming channels
    op_rx: mpsc::UnboundedReceiver<MovieOperation>,
    cancel_token: CancellationToken,
    // Outgoing channels
    raw_tx: mpsc::UnboundedSender<RawMsg>,
}

pub type NewMovieService = (
    mpsc::UnboundedSender<MovieOperation>, // op_tx - operations to send
    CancellationToken,                     // shutdown signal
    MovieService,
);

impl MovieService {
    pub fn new(source: Arc<dyn MovieSource>, raw_tx: mpsc::UnboundedSender<RawMsg>) -> NewMovieService {
        let (op_tx, op_rx) = mpsc::unbounded_channel();
        let cancel_token = CancellationToken::new();

        (
            op_tx,
            cancel_token.clone(),
            Self {
                source,
                op_rx,
                cancel_token,
                raw_tx,
            },
        )
    }

    /// Run the MovieService in a background task
    pub fn run(mut self) -> JoinHandle<()> {
        tokio::spawn(async move {
            log::info!("MovieService started with {} source", self.source.name());
            self.run_service().await;
            log::info!("MovieService stopped");
        })
    }

    /// Main service loop
    async fn run_service(&mut self) {
        loop {
            tokio::select! {
                _ = self.cancel_token.cancelled() => {
                    log::info!("MovieService received cancellation signal");
                    break;
                }

                op = self.op_rx.recv() => {
                    let Some(op) = op else {
                        break;
                    };
                    if !self.handle_operation(op).await {
                        break;
                    }
                }
            }
        }
    }

    /// Returns false if the service was cancelled while handling `op`
    async fn handle_operation(&self, op: MovieOperation) -> bool {
        match trace_dbg!(op) {
            MovieOperation::FetchNowPlaying => {
                let result = tokio::select! {
                    result = self.source.fetch_now_playing() => result,
                    _ = self.cancel_token.cancelled() => return false,
                };

                let reply = match result {
                    Ok(movies) => {
                        log::info!("Fetched {} now-playing movies", movies.len());
                        RawMsg::NowPlayingLoaded(movies)
                    }
                    Err(e) => {
                        log::error!("Failed to fetch now-playing movies: {e:?}");
                        RawMsg::NowPlayingFailed(format!("{e:#}"))
                    }
                };
                if self.raw_tx.send(reply).is_err() {
                    log::warn!("MovieService: runtime receiver dropped");
                }
            }
        }
        true
    }
}
