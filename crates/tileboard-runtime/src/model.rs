use crate::command::Command;
use crate::event::TerminalEvent;
use ratatui::Frame;

/// The top-level application trait, following the [Elm Architecture].
///
/// The runtime drives an **init -> update -> view** cycle:
///
/// 1. [`init`](Model::init) builds the initial state.
/// 2. [`view`](Model::view) draws the current state to a [`ratatui::Frame`].
/// 3. Terminal input is offered to [`handle_event`](Model::handle_event),
///    which may turn it into a message.
/// 4. [`update`](Model::update) applies each message and may return a
///    [`Command`] for follow-up work.
/// 5. Steps 2-4 repeat until a [`Command::quit`] is returned.
///
/// [Elm Architecture]: https://guide.elm-lang.org/architecture/
pub trait Model: Sized + Send + 'static {
    /// Every event that can change the model.
    type Message: Send + 'static;

    /// Startup data handed to [`Model::init`]. Use `()` when none is needed.
    type Flags: Send + 'static;

    /// Create the initial state and an optional startup command.
    fn init(flags: Self::Flags) -> (Self, Command<Self::Message>);

    /// Apply a message to the state.
    ///
    /// Runs to completion before the next message is delivered; the runtime
    /// never calls `update` concurrently.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render the current state. Must not mutate anything.
    fn view(&self, frame: &mut Frame);

    /// Translate a terminal event into a message, or `None` to ignore it.
    ///
    /// Receives `&self` so routing can depend on state (for example, sending
    /// keys to an open dialog). The default ignores every event.
    fn handle_event(&self, event: TerminalEvent) -> Option<Self::Message> {
        let _ = event;
        None
    }
}
