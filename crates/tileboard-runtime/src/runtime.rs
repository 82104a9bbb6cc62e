use crate::command::{Command, CommandInner};
use crate::event::TerminalEvent;
use crate::model::Model;
use crossterm::{
    cursor,
    event::{DisableBracketedPaste, EnableBracketedPaste, EventStream},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout, Stdout};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

/// Errors that can occur while initializing or running a [`Program`].
#[derive(Debug, thiserror::Error)]
pub enum ProgramError {
    /// An I/O error from terminal setup, input, rendering, or teardown.
    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Configuration options for a [`Program`].
///
/// Override only what you need with struct update syntax:
///
/// ```rust,ignore
/// let opts = ProgramOptions {
///     fps: 30,
///     title: Some("tileboard".into()),
///     ..ProgramOptions::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramOptions {
    /// Target frames per second (default: 60, clamped to 1..=120).
    pub fps: u32,
    /// Draw on the alternate screen (default: true). `false` renders inline.
    pub alt_screen: bool,
    /// Enable bracketed paste (default: true).
    pub bracketed_paste: bool,
    /// Set terminal title.
    pub title: Option<String>,
    /// Restore the terminal before the panic message prints (default: true).
    pub catch_panics: bool,
    /// Exit cleanly on SIGINT (default: true).
    pub handle_signals: bool,
}

impl Default for ProgramOptions {
    fn default() -> Self {
        Self {
            fps: 60,
            alt_screen: true,
            bracketed_paste: true,
            title: None,
            catch_panics: true,
            handle_signals: true,
        }
    }
}

/// The program runtime. Owns the terminal and drives a [`Model`] until it
/// returns [`Command::quit()`], input ends, or the process receives SIGINT.
///
/// Messages are processed strictly one at a time; rendering happens on the
/// frame tick and only when something changed.
///
/// ```rust,ignore
/// let model = Program::<Dashboard>::with_options(flags, options)?.run().await?;
/// ```
pub struct Program<M: Model> {
    model: M,
    terminal: Terminal<CrosstermBackend<Stdout>>,
    msg_tx: mpsc::UnboundedSender<M::Message>,
    msg_rx: mpsc::UnboundedReceiver<M::Message>,
    options: ProgramOptions,
    needs_redraw: bool,
    should_quit: bool,
}

impl<M: Model> Program<M> {
    /// Create a new program with custom options.
    ///
    /// The model is initialized before the terminal is touched, so a model
    /// that quits from `init` never enters raw mode for long.
    pub fn with_options(flags: M::Flags, options: ProgramOptions) -> Result<Self, ProgramError> {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        let (model, init_cmd) = M::init(flags);
        let terminal = init_terminal(&options)?;

        let mut program = Self {
            model,
            terminal,
            msg_tx,
            msg_rx,
            options,
            needs_redraw: true,
            should_quit: false,
        };
        tracing::info!(fps = program.options.fps, alt_screen = program.options.alt_screen, "program initialized");
        program.execute_command(init_cmd);
        Ok(program)
    }

    /// Run the program until it quits, then restore the terminal and return
    /// the final model.
    pub async fn run(mut self) -> Result<M, ProgramError> {
        let result = self.event_loop().await;
        tracing::info!("shutting down");
        restore_terminal(self.options.alt_screen)?;
        result?;
        Ok(self.model)
    }

    async fn event_loop(&mut self) -> Result<(), ProgramError> {
        self.render()?;

        let fps = self.options.fps.clamp(1, 120);
        let mut frame_interval = tokio::time::interval(Duration::from_secs_f64(1.0 / f64::from(fps)));
        frame_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut events = EventStream::new();
        let handle_signals = self.options.handle_signals;

        loop {
            if self.should_quit {
                return Ok(());
            }

            tokio::select! {
                biased;

                _ = tokio::signal::ctrl_c(), if handle_signals => {
                    tracing::info!("received ctrl+c signal");
                    return Ok(());
                }

                Some(msg) = self.msg_rx.recv() => {
                    self.process_message(msg);
                }

                event = events.next() => match event {
                    Some(Ok(event)) => self.process_event(TerminalEvent::from(event)),
                    Some(Err(err)) => return Err(err.into()),
                    None => {
                        tracing::info!("terminal input closed");
                        return Ok(());
                    }
                },

                _ = frame_interval.tick() => {
                    if self.needs_redraw {
                        self.render()?;
                        self.needs_redraw = false;
                    }
                }
            }
        }
    }

    fn process_event(&mut self, event: TerminalEvent) {
        if let TerminalEvent::Resize(..) = event {
            self.needs_redraw = true;
        }
        if let Some(msg) = self.model.handle_event(event) {
            self.process_message(msg);
        }
    }

    fn process_message(&mut self, msg: M::Message) {
        let cmd = self.model.update(msg);
        self.execute_command(cmd);
        self.needs_redraw = true;
    }

    fn execute_command(&mut self, cmd: Command<M::Message>) {
        match cmd.inner {
            CommandInner::None => {}
            CommandInner::Message(msg) => {
                // The receiver lives as long as `self`, so this cannot fail.
                let _ = self.msg_tx.send(msg);
            }
            CommandInner::Quit => {
                self.should_quit = true;
            }
        }
    }

    fn render(&mut self) -> Result<(), ProgramError> {
        self.terminal.draw(|frame| {
            self.model.view(frame);
        })?;
        Ok(())
    }
}

fn init_terminal(options: &ProgramOptions) -> Result<Terminal<CrosstermBackend<Stdout>>, ProgramError> {
    // Install panic hook that restores terminal (only once to avoid stacking)
    if options.catch_panics {
        use std::sync::Once;
        static HOOK_INSTALLED: Once = Once::new();
        let alt_screen = options.alt_screen;
        HOOK_INSTALLED.call_once(|| {
            let original_hook = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                let _ = restore_terminal(alt_screen);
                original_hook(info);
            }));
        });
    }

    enable_raw_mode()?;
    let mut writer = stdout();

    if options.alt_screen {
        execute!(writer, EnterAlternateScreen)?;
    }
    if options.bracketed_paste {
        execute!(writer, EnableBracketedPaste)?;
    }
    if let Some(ref title) = options.title {
        execute!(writer, SetTitle(title))?;
    }
    execute!(writer, cursor::Hide)?;

    let terminal = Terminal::new(CrosstermBackend::new(writer))?;
    Ok(terminal)
}

fn restore_terminal(alt_screen: bool) -> Result<(), io::Error> {
    // Best-effort: keep restoring even if a step fails, report raw mode last.
    let raw = disable_raw_mode();
    let mut writer = stdout();
    execute!(writer, DisableBracketedPaste).ok();
    execute!(writer, cursor::Show).ok();
    if alt_screen {
        execute!(writer, LeaveAlternateScreen).ok();
    }
    raw
}
