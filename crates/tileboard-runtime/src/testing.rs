use crate::command::{Command, CommandInner};
use crate::event::TerminalEvent;
use crate::model::Model;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Terminal;

/// A headless test harness that drives a [`Model`] without a real terminal.
///
/// `TestProgram` exercises the whole init/update/view cycle in a plain
/// `#[test]`: no tokio runtime or TTY required. Messages produced by
/// [`Command::message`] are queued and delivered by
/// [`drain_messages`](TestProgram::drain_messages); quit requests are
/// recorded so tests can assert on them.
///
/// # Example
///
/// ```rust,ignore
/// use tileboard_runtime::testing::TestProgram;
///
/// let mut prog = TestProgram::<Dashboard>::new(flags);
/// prog.press(KeyCode::Char('a'));
/// assert!(prog.model().board().is_picker_open());
///
/// let output = prog.render_string(80, 24);
/// assert!(output.contains("Add Widgets"));
/// ```
pub struct TestProgram<M: Model> {
    model: M,
    pending_messages: Vec<M::Message>,
    quit_requested: bool,
}

impl<M: Model> TestProgram<M> {
    /// Create a test program by calling [`Model::init`] with the given flags.
    pub fn new(flags: M::Flags) -> Self {
        let (model, init_cmd) = M::init(flags);
        let mut program = Self {
            model,
            pending_messages: Vec::new(),
            quit_requested: false,
        };
        program.collect(init_cmd);
        program.drain_messages();
        program
    }

    /// Send a message, triggering a single update cycle.
    ///
    /// Follow-up messages are queued, not delivered; call
    /// [`drain_messages`](TestProgram::drain_messages) to flush them.
    pub fn send(&mut self, msg: M::Message) {
        let cmd = self.model.update(msg);
        self.collect(cmd);
    }

    /// Route a terminal event through [`Model::handle_event`] the way the
    /// runtime does, then flush any follow-up messages.
    pub fn event(&mut self, event: TerminalEvent) {
        if let Some(msg) = self.model.handle_event(event) {
            self.send(msg);
            self.drain_messages();
        }
    }

    /// Shorthand for a plain key press with no modifiers.
    pub fn press(&mut self, code: crossterm::event::KeyCode) {
        self.event(TerminalEvent::Key(crossterm::event::KeyEvent::new(
            code,
            crossterm::event::KeyModifiers::NONE,
        )));
    }

    /// Deliver queued messages until none remain.
    pub fn drain_messages(&mut self) {
        while !self.pending_messages.is_empty() {
            let messages: Vec<_> = self.pending_messages.drain(..).collect();
            for msg in messages {
                let cmd = self.model.update(msg);
                self.collect(cmd);
            }
        }
    }

    /// Whether any update so far returned [`Command::quit`].
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Render the model to a ratatui [`Buffer`] of the given dimensions.
    pub fn render(&self, width: u16, height: u16) -> Buffer {
        let backend = ratatui::backend::TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).expect("test backend never fails");
        terminal
            .draw(|frame| {
                self.model.view(frame);
            })
            .expect("test backend never fails");
        terminal.backend().buffer().clone()
    }

    /// Render the model and return the visible content as a plain string,
    /// one line per row.
    pub fn render_string(&self, width: u16, height: u16) -> String {
        buffer_to_string(&self.render(width, height))
    }

    fn collect(&mut self, cmd: Command<M::Message>) {
        match cmd.inner {
            CommandInner::None => {}
            CommandInner::Message(msg) => self.pending_messages.push(msg),
            CommandInner::Quit => self.quit_requested = true,
        }
    }
}

/// Flatten a buffer into newline-separated rows of cell symbols.
pub fn buffer_to_string(buf: &Buffer) -> String {
    let area: Rect = buf.area;
    let mut output = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            output.push_str(buf[(x, y)].symbol());
        }
        if y + 1 < area.bottom() {
            output.push('\n');
        }
    }
    output
}
