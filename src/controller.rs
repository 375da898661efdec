//! The chat controller.
//!
//! This module provides [`ChatController`], which owns the submit pipeline
//! for one conversation: input validation, the single-flight guard, the
//! typing indicator lifecycle, the exchange with the service, and the
//! rendering of exactly one user message and one bot-or-system message per
//! accepted submission.

use crate::client::ChatEndpoint;
use crate::error::Error;
use crate::observability;
use crate::render::Renderer;
use crate::session::Session;
use crate::types::{ChatRequest, Message};

/// The outcome of one submit call.
#[derive(Debug)]
pub enum Turn {
    /// The input was empty after trimming; nothing was rendered or sent.
    Skipped,

    /// An exchange was already pending; the submission was rejected.
    Busy,

    /// The exchange completed and the answer was rendered.
    Answered,

    /// The exchange failed; a system message was rendered. The underlying
    /// error is attached for callers that want to inspect it.
    Failed(Error),
}

impl Turn {
    /// Returns true if the exchange completed with an answer.
    pub fn is_answered(&self) -> bool {
        matches!(self, Turn::Answered)
    }
}

/// Aggregated counts for a controller's lifetime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControllerStats {
    /// Submissions accepted (an exchange was issued).
    pub submissions: u64,
    /// Submissions skipped because the input was empty.
    pub skipped_empty: u64,
    /// Submissions rejected because an exchange was pending.
    pub rejected_busy: u64,
    /// Exchanges that completed with an answer.
    pub answered: u64,
    /// Exchanges that failed with a server-reported error.
    pub server_errors: u64,
    /// Exchanges that failed at the transport level.
    pub transport_errors: u64,
}

/// A controller that drives chat exchanges against a [`ChatEndpoint`].
///
/// The controller is deliberately headless: the transcript surface is an
/// injected [`Renderer`] and the session token is an explicit [`Session`]
/// owned by the caller. Per exchange the controller moves
/// Idle → Sending → terminal → Idle; the busy guard makes the
/// one-outstanding-exchange invariant explicit rather than relying on a UI
/// to disable its widgets.
pub struct ChatController<E: ChatEndpoint> {
    endpoint: E,
    busy: bool,
    stats: ControllerStats,
}

impl<E: ChatEndpoint> ChatController<E> {
    /// Creates a new controller over the given endpoint.
    pub fn new(endpoint: E) -> Self {
        Self {
            endpoint,
            busy: false,
            stats: ControllerStats::default(),
        }
    }

    /// Returns true while an exchange is pending.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Returns the lifetime counters for this controller.
    pub fn stats(&self) -> ControllerStats {
        self.stats
    }

    /// Submits user input for one exchange.
    ///
    /// Whitespace-only input is ignored without side effects. A submission
    /// while an exchange is pending is rejected, not queued. Otherwise the
    /// controller renders the user message, shows the typing indicator,
    /// performs the exchange, and renders the terminal message:
    ///
    /// - success: the answer as a bot message, and the session absorbs any
    ///   token the response carried;
    /// - server-reported failure: the server's detail text as a system
    ///   message, with a generic fallback;
    /// - transport failure: a fixed connection-error system message, with
    ///   the underlying fault left to the client's logger.
    ///
    /// Errors are not propagated: every failure has already been rendered
    /// by the time this returns, and the controller is Idle again.
    pub async fn submit(
        &mut self,
        raw: &str,
        session: &mut Session,
        renderer: &mut dyn Renderer,
    ) -> Turn {
        let message = raw.trim();
        if message.is_empty() {
            observability::SUBMITS_EMPTY.click();
            self.stats.skipped_empty += 1;
            return Turn::Skipped;
        }
        if self.busy {
            observability::SUBMITS_BUSY.click();
            self.stats.rejected_busy += 1;
            return Turn::Busy;
        }
        self.busy = true;
        observability::SUBMITS.click();
        self.stats.submissions += 1;

        renderer.append(&Message::user(message));
        renderer.show_typing();

        let mut request = ChatRequest::new(message);
        if let Some(token) = session.token() {
            request = request.with_session_id(token);
        }

        let outcome = match self.endpoint.exchange(&request).await {
            Ok(response) => {
                renderer.clear_typing();
                renderer.append(&Message::bot(response.answer.as_str()));
                session.absorb(&response);
                observability::TURNS_ANSWERED.click();
                self.stats.answered += 1;
                Turn::Answered
            }
            Err(err) if err.is_server() => {
                renderer.clear_typing();
                let detail = err.detail().unwrap_or("Something went wrong");
                renderer.append(&Message::system(format!("Error: {detail}")));
                observability::TURNS_FAILED.click();
                self.stats.server_errors += 1;
                Turn::Failed(err)
            }
            Err(err) => {
                renderer.clear_typing();
                renderer.append(&Message::system("Error: Could not connect to server."));
                observability::TURNS_FAILED.click();
                self.stats.transport_errors += 1;
                Turn::Failed(err)
            }
        };

        self.busy = false;
        outcome
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::*;
    use crate::error::Result;
    use crate::types::ChatResponse;

    /// A scripted endpoint that records every request it sees.
    struct MockEndpoint {
        responses: Mutex<VecDeque<Result<ChatResponse>>>,
        requests: Mutex<Vec<ChatRequest>>,
    }

    impl MockEndpoint {
        fn new(responses: Vec<Result<ChatResponse>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn requests(&self) -> Vec<ChatRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl ChatEndpoint for &MockEndpoint {
        async fn exchange(&self, request: &ChatRequest) -> Result<ChatResponse> {
            self.requests.lock().unwrap().push(request.clone());
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(Error::unknown("mock script exhausted")))
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Event {
        User(String),
        Bot(String),
        System(String),
        Info(String),
        ShowTyping,
        ClearTyping,
    }

    #[derive(Default)]
    struct RecordingRenderer {
        events: Vec<Event>,
    }

    impl Renderer for RecordingRenderer {
        fn print_user(&mut self, text: &str) {
            self.events.push(Event::User(text.to_string()));
        }

        fn print_bot(&mut self, text: &str) {
            self.events.push(Event::Bot(text.to_string()));
        }

        fn print_system(&mut self, text: &str) {
            self.events.push(Event::System(text.to_string()));
        }

        fn print_info(&mut self, info: &str) {
            self.events.push(Event::Info(info.to_string()));
        }

        fn show_typing(&mut self) {
            self.events.push(Event::ShowTyping);
        }

        fn clear_typing(&mut self) {
            self.events.push(Event::ClearTyping);
        }
    }

    #[tokio::test]
    async fn empty_input_is_a_no_op() {
        let endpoint = MockEndpoint::new(vec![]);
        let mut controller = ChatController::new(&endpoint);
        let mut session = Session::new();
        let mut renderer = RecordingRenderer::default();

        let turn = controller.submit("", &mut session, &mut renderer).await;
        assert!(matches!(turn, Turn::Skipped));
        let turn = controller.submit("   \t  ", &mut session, &mut renderer).await;
        assert!(matches!(turn, Turn::Skipped));

        assert!(renderer.events.is_empty());
        assert!(endpoint.requests().is_empty());
        assert_eq!(controller.stats().skipped_empty, 2);
        assert_eq!(controller.stats().submissions, 0);
    }

    #[tokio::test]
    async fn answered_turn_renders_user_then_bot() {
        let endpoint = MockEndpoint::new(vec![Ok(
            ChatResponse::new("Hi there").with_session_id("abc")
        )]);
        let mut controller = ChatController::new(&endpoint);
        let mut session = Session::new();
        let mut renderer = RecordingRenderer::default();

        let turn = controller
            .submit("  Hello  ", &mut session, &mut renderer)
            .await;
        assert!(turn.is_answered());

        assert_eq!(
            renderer.events,
            vec![
                Event::User("Hello".to_string()),
                Event::ShowTyping,
                Event::ClearTyping,
                Event::Bot("Hi there".to_string()),
            ]
        );
        assert_eq!(session.token(), Some("abc"));
        assert!(!controller.is_busy());
    }

    #[tokio::test]
    async fn first_request_has_no_session_id() {
        let endpoint = MockEndpoint::new(vec![
            Ok(ChatResponse::new("Hi there").with_session_id("abc")),
            Ok(ChatResponse::new("Still here")),
        ]);
        let mut controller = ChatController::new(&endpoint);
        let mut session = Session::new();
        let mut renderer = RecordingRenderer::default();

        controller.submit("Hello", &mut session, &mut renderer).await;
        controller.submit("Again", &mut session, &mut renderer).await;

        let requests = endpoint.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0], ChatRequest::new("Hello"));
        assert_eq!(
            requests[1],
            ChatRequest::new("Again").with_session_id("abc")
        );
        // The second response carried no token, so the session keeps "abc".
        assert_eq!(session.token(), Some("abc"));
    }

    #[tokio::test]
    async fn session_token_overwritten_by_new_value() {
        let endpoint = MockEndpoint::new(vec![
            Ok(ChatResponse::new("a").with_session_id("abc")),
            Ok(ChatResponse::new("b").with_session_id("def")),
            Ok(ChatResponse::new("c")),
        ]);
        let mut controller = ChatController::new(&endpoint);
        let mut session = Session::new();
        let mut renderer = RecordingRenderer::default();

        controller.submit("1", &mut session, &mut renderer).await;
        controller.submit("2", &mut session, &mut renderer).await;
        controller.submit("3", &mut session, &mut renderer).await;

        let requests = endpoint.requests();
        assert_eq!(requests[1].session_id.as_deref(), Some("abc"));
        assert_eq!(requests[2].session_id.as_deref(), Some("def"));
        assert_eq!(session.token(), Some("def"));
    }

    #[tokio::test]
    async fn server_error_renders_detail() {
        let endpoint = MockEndpoint::new(vec![Err(Error::internal_server("overloaded"))]);
        let mut controller = ChatController::new(&endpoint);
        let mut session = Session::new();
        let mut renderer = RecordingRenderer::default();

        let turn = controller.submit("X", &mut session, &mut renderer).await;
        assert!(matches!(turn, Turn::Failed(ref err) if err.is_server()));

        assert_eq!(
            renderer.events,
            vec![
                Event::User("X".to_string()),
                Event::ShowTyping,
                Event::ClearTyping,
                Event::System("Error: overloaded".to_string()),
            ]
        );
        assert_eq!(controller.stats().server_errors, 1);
        assert!(!controller.is_busy());
    }

    #[tokio::test]
    async fn transport_error_renders_fixed_message() {
        let endpoint = MockEndpoint::new(vec![Err(Error::connection("refused", None))]);
        let mut controller = ChatController::new(&endpoint);
        let mut session = Session::new();
        let mut renderer = RecordingRenderer::default();

        let turn = controller.submit("X", &mut session, &mut renderer).await;
        assert!(matches!(turn, Turn::Failed(ref err) if err.is_transport()));

        assert_eq!(
            renderer.events,
            vec![
                Event::User("X".to_string()),
                Event::ShowTyping,
                Event::ClearTyping,
                Event::System("Error: Could not connect to server.".to_string()),
            ]
        );
        assert_eq!(controller.stats().transport_errors, 1);
        assert!(!controller.is_busy());
    }

    #[tokio::test]
    async fn malformed_success_body_is_a_transport_failure() {
        let endpoint = MockEndpoint::new(vec![Err(Error::serialization("bad json", None))]);
        let mut controller = ChatController::new(&endpoint);
        let mut session = Session::new();
        let mut renderer = RecordingRenderer::default();

        controller.submit("X", &mut session, &mut renderer).await;
        assert_eq!(
            renderer.events.last(),
            Some(&Event::System(
                "Error: Could not connect to server.".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn failure_does_not_disturb_session_token() {
        let endpoint = MockEndpoint::new(vec![
            Ok(ChatResponse::new("a").with_session_id("abc")),
            Err(Error::internal_server("boom")),
            Ok(ChatResponse::new("b")),
        ]);
        let mut controller = ChatController::new(&endpoint);
        let mut session = Session::new();
        let mut renderer = RecordingRenderer::default();

        controller.submit("1", &mut session, &mut renderer).await;
        controller.submit("2", &mut session, &mut renderer).await;
        controller.submit("3", &mut session, &mut renderer).await;

        let requests = endpoint.requests();
        assert_eq!(requests[1].session_id.as_deref(), Some("abc"));
        assert_eq!(requests[2].session_id.as_deref(), Some("abc"));
    }

    #[tokio::test]
    async fn busy_controller_rejects_submission() {
        let endpoint = MockEndpoint::new(vec![]);
        let mut controller = ChatController::new(&endpoint);
        controller.busy = true;
        let mut session = Session::new();
        let mut renderer = RecordingRenderer::default();

        let turn = controller.submit("Hello", &mut session, &mut renderer).await;
        assert!(matches!(turn, Turn::Busy));
        assert!(renderer.events.is_empty());
        assert!(endpoint.requests().is_empty());
        assert_eq!(controller.stats().rejected_busy, 1);
    }

    #[tokio::test]
    async fn stats_accumulate() {
        let endpoint = MockEndpoint::new(vec![
            Ok(ChatResponse::new("a")),
            Err(Error::internal_server("boom")),
            Err(Error::connection("refused", None)),
        ]);
        let mut controller = ChatController::new(&endpoint);
        let mut session = Session::new();
        let mut renderer = RecordingRenderer::default();

        controller.submit("", &mut session, &mut renderer).await;
        controller.submit("1", &mut session, &mut renderer).await;
        controller.submit("2", &mut session, &mut renderer).await;
        controller.submit("3", &mut session, &mut renderer).await;

        let stats = controller.stats();
        assert_eq!(stats.submissions, 3);
        assert_eq!(stats.skipped_empty, 1);
        assert_eq!(stats.answered, 1);
        assert_eq!(stats.server_errors, 1);
        assert_eq!(stats.transport_errors, 1);
    }
}
