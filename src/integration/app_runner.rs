use std::sync::Arc;
use std::time::{Duration, Instant};

use color_eyre::eyre::{eyre, Result};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::prelude::Rect;
use tokio::{sync::mpsc, task::JoinHandle};
use tokio_util::sync::CancellationToken;

use crate::{
    core::{
        cmd::TuiCommand,
        msg::{catalog::CatalogMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    infrastructure::{
        movie_service::MovieService,
        movie_source::MovieSource,
        tui::{Event, Frame, TuiLike},
    },
    integration::{coalescer::Coalescer, runtime::Runtime},
    presentation::components::Components,
};

/// One wake-up of the event loop
enum LoopInput {
    Service(RawMsg),
    Terminal(Option<Event>),
}

/// Drives the Elm runtime from terminal events and movie service replies,
/// and draws the home page.
pub struct AppRunner<T: TuiLike> {
    runtime: Runtime,
    tui: T,
    components: Components,
    tui_cmd_rx: mpsc::UnboundedReceiver<TuiCommand>,
    render_req_rx: mpsc::UnboundedReceiver<()>,
    coalescer: Coalescer,
    movie_cancel: CancellationToken,
    movie_task: JoinHandle<()>,
    last_frame: Option<Instant>,
}

impl<T: TuiLike> AppRunner<T> {
    /// Wires the runtime to a freshly started movie service. Must be called
    /// inside a tokio runtime.
    pub fn new(initial_state: AppState, source: Arc<dyn MovieSource>, tui: T) -> Result<Self> {
        let mut runtime = Runtime::new(initial_state);
        runtime.set_executor();

        let (movie_tx, movie_cancel, movie_service) =
            MovieService::new(source, runtime.get_raw_sender());
        runtime.add_movie_sender(movie_tx)?;
        let movie_task = movie_service.run();

        let (tui_cmd_tx, tui_cmd_rx) = mpsc::unbounded_channel();
        runtime.add_tui_sender(tui_cmd_tx)?;
        let (render_req_tx, render_req_rx) = mpsc::unbounded_channel();
        runtime.add_render_request_sender(render_req_tx)?;

        Ok(Self {
            runtime,
            tui,
            components: Components::new(),
            tui_cmd_rx,
            render_req_rx,
            coalescer: Coalescer::default(),
            movie_cancel,
            movie_task,
            last_frame: None,
        })
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    pub fn state(&self) -> &AppState {
        self.runtime.state()
    }

    pub fn tui(&self) -> &T {
        &self.tui
    }

    pub fn tui_mut(&mut self) -> &mut T {
        &mut self.tui
    }

    /// Enter the terminal, fetch, loop until quit, then clean up
    pub async fn run(&mut self) -> Result<()> {
        self.start()?;
        let result = self.event_loop().await;
        self.shutdown().await?;
        result
    }

    /// Enters the terminal, requests the now-playing list and draws the
    /// loading state
    pub fn start(&mut self) -> Result<()> {
        self.tui.enter()?;
        self.runtime.send_msg(Msg::Catalog(CatalogMsg::Load));
        self.cycle()?;
        self.render()
    }

    /// Waits for the movie service to answer and applies the reply
    pub async fn await_service_reply(&mut self, timeout: Duration) -> Result<()> {
        let raw = tokio::time::timeout(timeout, self.runtime.recv_raw())
            .await
            .map_err(|_| eyre!("Movie service did not answer within {timeout:?}"))?
            .ok_or_else(|| eyre!("Movie service channel closed"))?;
        self.runtime.send_raw_msg(raw);
        self.cycle()
    }

    /// Processes events until quit is requested or the terminal stops
    /// producing events
    pub async fn event_loop(&mut self) -> Result<()> {
        loop {
            let input = tokio::select! {
                Some(raw) = self.runtime.recv_raw() => LoopInput::Service(raw),
                event = self.tui.next() => LoopInput::Terminal(event),
            };

            match input {
                LoopInput::Service(raw) => self.runtime.send_raw_msg(raw),
                LoopInput::Terminal(Some(event)) => self.handle_event(event)?,
                LoopInput::Terminal(None) => {
                    log::debug!("Terminal event stream ended");
                    break;
                }
            }

            self.cycle()?;

            if self.runtime.state().system.should_suspend {
                self.suspend()?;
            }
            if self.runtime.state().system.should_quit {
                log::info!("Quit requested");
                break;
            }
        }
        Ok(())
    }

    /// Stops the movie service and restores the terminal
    pub async fn shutdown(&mut self) -> Result<()> {
        self.movie_cancel.cancel();
        if tokio::time::timeout(Duration::from_millis(100), &mut self.movie_task)
            .await
            .is_err()
        {
            log::warn!("Movie service did not stop in time, aborting");
            self.movie_task.abort();
        }
        self.tui.exit()
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Quit | Event::Closed => self.runtime.send_raw_msg(RawMsg::Quit),
            Event::Tick => self.runtime.send_raw_msg(RawMsg::Tick),
            Event::Render => {
                let now = Instant::now();
                let elapsed_ms = self
                    .last_frame
                    .map_or(0, |last| now.duration_since(last).as_millis() as u64);
                self.last_frame = Some(now);
                self.runtime.send_raw_msg(RawMsg::Frame { elapsed_ms });
                self.coalescer.saw_render_tick();
            }
            Event::Resize(width, height) => {
                self.runtime.send_raw_msg(RawMsg::Resize(width, height));
            }
            Event::Key(key) => self.runtime.send_raw_msg(RawMsg::Key(key)),
            Event::Mouse(mouse) => self.handle_mouse(mouse)?,
            Event::Error => {
                log::warn!("Terminal reported an input error");
            }
            Event::Init | Event::FocusGained | Event::FocusLost | Event::Paste(_) => {}
        }
        Ok(())
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        let area = self.tui.area()?;
        let state = self.runtime.state();
        let target = Components::layout(state, area).hit_test(state, mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(target) = target {
                    self.runtime.send_raw_msg(RawMsg::Click(target));
                }
            }
            MouseEventKind::Moved => self.runtime.send_raw_msg(RawMsg::Hover(target)),
            _ => {}
        }
        Ok(())
    }

    /// Runs one update cycle and applies the coalesced host reactions
    fn cycle(&mut self) -> Result<()> {
        if let Err(e) = self.runtime.run_update_cycle() {
            log::error!("Runtime error: {e}");
            self.runtime
                .send_raw_msg(RawMsg::Error(format!("Runtime error: {e}")));
        }

        while let Ok(cmd) = self.tui_cmd_rx.try_recv() {
            match cmd {
                TuiCommand::Resize { width, height } => self.coalescer.push_resize(width, height),
            }
        }
        while self.render_req_rx.try_recv().is_ok() {
            self.coalescer.request_render();
        }

        let decision = self.coalescer.take();
        if let Some((width, height)) = decision.resize {
            self.tui.resize(Rect::new(0, 0, width, height))?;
        }
        if decision.render {
            self.render()?;
        }
        Ok(())
    }

    fn suspend(&mut self) -> Result<()> {
        log::info!("Suspending");
        self.tui.suspend()?;
        self.tui.resume()?;
        // Time spent in the background is not animation time
        self.last_frame = None;
        self.runtime.send_raw_msg(RawMsg::Resume);
        self.cycle()
    }

    fn render(&mut self) -> Result<()> {
        let state = self.runtime.state();
        let components = &self.components;
        self.tui
            .draw(&mut |frame: &mut Frame<'_>| components.render(frame, state))
    }
}
