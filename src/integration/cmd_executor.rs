use color_eyre::eyre::Result;
use ratatui::layout::Rect;

use crate::{
    core::cmd::{Cmd, TuiCommand},
    domain::schedule::TickSource,
    infrastructure::{timer_service::TimerService, tui::TuiLike},
};

/// Executes commands raised by update against the timers and the terminal
#[derive(Debug, Default)]
pub struct CmdExecutor {
    timers: TimerService,
    executed: usize,
}

impl CmdExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn timers(&self) -> &TimerService {
        &self.timers
    }

    /// Number of commands executed so far, batches counted once per member
    pub fn executed(&self) -> usize {
        self.executed
    }

    pub fn disarm(&mut self, source: TickSource) -> bool {
        self.timers.cancel(source)
    }

    /// Waits for the next scheduled tick
    pub async fn next_due(&mut self) -> TickSource {
        self.timers.next_due().await
    }

    pub fn execute_all(&mut self, cmds: Vec<Cmd>, tui: &mut dyn TuiLike) -> Result<()> {
        for cmd in cmds {
            self.execute_command(cmd, tui)?;
        }
        Ok(())
    }

    /// Execute a single command
    pub fn execute_command(&mut self, cmd: Cmd, tui: &mut dyn TuiLike) -> Result<()> {
        match cmd {
            Cmd::Schedule { source, after } => self.timers.arm(source, after),

            Cmd::Tui(TuiCommand::Resize { width, height }) => {
                tui.resize(Rect::new(0, 0, width, height))?;
            }

            Cmd::Tui(TuiCommand::Bell) => tui.bell()?,

            Cmd::LogError { message } => log::error!("{message}"),
            Cmd::LogInfo { message } => log::info!("{message}"),
        }
        self.executed += 1;
        Ok(())
    }
}
