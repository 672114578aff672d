use std::sync::Arc;

use color_eyre::eyre::Result;

use crate::{
    core::{raw_msg::RawMsg, state::AppState},
    domain::{
        clock::{Clock, SystemClock},
        schedule::TickSource,
    },
    infrastructure::{
        config::Config,
        tui::{Event, TuiLike},
    },
    integration::{cmd_executor::CmdExecutor, renderer::Renderer, runtime::Runtime},
};

/// What woke the runner up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Wake {
    Terminal(Event),
    Tick(TickSource),
    /// The terminal event source is exhausted
    Closed,
}

/// Drives the application: terminal events and due ticks go in, commands
/// come out and are executed, frames are drawn on render events.
pub struct AppRunner<T: TuiLike> {
    runtime: Runtime,
    executor: CmdExecutor,
    renderer: Renderer,
    tui: T,
}

impl<T: TuiLike> AppRunner<T> {
    pub fn new(config: Config, tui: T) -> Self {
        Self::new_with_clock(config, tui, Arc::new(SystemClock))
    }

    pub fn new_with_clock(config: Config, tui: T, clock: Arc<dyn Clock>) -> Self {
        let state = AppState::new_with_config(config);
        Self {
            runtime: Runtime::new(state, clock),
            executor: CmdExecutor::new(),
            renderer: Renderer::new(),
            tui,
        }
    }

    pub fn state(&self) -> &AppState {
        self.runtime.state()
    }

    pub fn tui(&self) -> &T {
        &self.tui
    }

    pub fn executor(&self) -> &CmdExecutor {
        &self.executor
    }

    /// Enters the terminal and starts the session loops
    pub fn start(&mut self) -> Result<()> {
        self.tui.enter()?;
        let cmds = self.runtime.init();
        self.executor.execute_all(cmds, &mut self.tui)?;
        self.renderer.render(&mut self.tui, self.runtime.state())
    }

    /// Run until quit or until the terminal event source closes
    pub async fn run(&mut self) -> Result<()> {
        self.start()?;
        while self.step().await? {}
        self.tui.exit()
    }

    /// Waits for one wake-up and handles it. Returns false once the runner
    /// should stop.
    pub async fn step(&mut self) -> Result<bool> {
        let wake = tokio::select! {
            event = self.tui.next() => event.map_or(Wake::Closed, Wake::Terminal),
            source = self.executor.next_due() => Wake::Tick(source),
        };
        self.handle(wake)
    }

    /// Handles a single wake-up
    pub fn handle(&mut self, wake: Wake) -> Result<bool> {
        match wake {
            Wake::Closed => return Ok(false),
            Wake::Tick(source) => {
                // A tick is consumed before its handler may arm the next one
                self.executor.disarm(source);
                self.dispatch(RawMsg::Tick(source))?;
            }
            Wake::Terminal(Event::Render) => {
                self.renderer
                    .render_if_dirty(&mut self.tui, self.runtime.state())?;
            }
            Wake::Terminal(event) => {
                if let Some(raw) = raw_from_event(event) {
                    let resized = matches!(raw, RawMsg::Resize(..));
                    self.dispatch(raw)?;
                    if resized {
                        self.renderer.render(&mut self.tui, self.runtime.state())?;
                    }
                }
            }
        }

        if self.runtime.state().system.should_suspend {
            self.tui.suspend()?;
            self.tui.resume()?;
            self.dispatch(RawMsg::Resume)?;
            self.renderer.render(&mut self.tui, self.runtime.state())?;
        }

        Ok(!self.runtime.state().system.should_quit)
    }

    fn dispatch(&mut self, raw: RawMsg) -> Result<()> {
        self.runtime.send_raw_msg(raw);
        let cmds = self.runtime.run_update_cycle();
        self.executor.execute_all(cmds, &mut self.tui)?;
        self.renderer.mark_dirty();
        Ok(())
    }
}

fn raw_from_event(event: Event) -> Option<RawMsg> {
    match event {
        Event::Key(key) => Some(RawMsg::Key(key)),
        Event::Resize(width, height) => Some(RawMsg::Resize(width, height)),
        Event::Quit | Event::Closed => Some(RawMsg::Quit),
        Event::Error => Some(RawMsg::Error("terminal event error".to_string())),
        Event::Init
        | Event::Render
        | Event::FocusGained
        | Event::FocusLost
        | Event::Paste(_)
        | Event::Mouse(_) => None,
    }
}
