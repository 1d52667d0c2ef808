//! Speech capture boundary: two interchangeable transcription engines
//! behind one surface.
//!
//! The parsing core never talks to a microphone; it consumes final
//! transcripts handed over by a `CaptureSession`. The session is a
//! single-active state machine (idle -> listening -> processing-result ->
//! idle, or -> error). At most one listening session is active per
//! instance; starting while already listening stops and restarts instead
//! of erroring the caller.

/// Which concrete engine ended up active. Callers observe this plus the
/// unified callback surface, never the engines' internals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineKind {
    /// Platform-native recognizer, preferred when present
    Native,
    /// In-process fallback recognizer
    Browser,
}

/// Discrete capture faults, mapped to user-facing messages by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureError {
    NoSpeech,
    PermissionDenied,
    NoMicrophone,
    Network,
    /// User-initiated cancel; a benign idle transition, not a fault
    Aborted,
    /// No engine can run on this device
    Unavailable,
}

impl CaptureError {
    /// Stable code string for logs and UI dispatch.
    pub fn code(&self) -> &'static str {
        match self {
            CaptureError::NoSpeech => "no-speech",
            CaptureError::PermissionDenied => "permission-denied",
            CaptureError::NoMicrophone => "no-microphone",
            CaptureError::Network => "network",
            CaptureError::Aborted => "aborted",
            CaptureError::Unavailable => "unavailable",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureState {
    Idle,
    Listening,
    ProcessingResult,
    Error,
}

/// Contract a concrete transcription engine must satisfy.
pub trait CaptureEngine {
    fn kind(&self) -> EngineKind;
    /// Whether this engine can run on the current device
    fn is_available(&self) -> bool;
    fn start_listening(&mut self, language: &str) -> Result<(), CaptureError>;
    /// Best-effort, fire-and-forget
    fn stop_listening(&mut self);
}

/// Pick the preferred engine at startup, falling back when it cannot run.
pub fn select_engine(
    native: Box<dyn CaptureEngine>,
    fallback: Box<dyn CaptureEngine>,
) -> Option<Box<dyn CaptureEngine>> {
    [native, fallback].into_iter().find(|e| e.is_available())
}

/// Drives one engine through the capture state machine and hands final
/// transcripts to the caller (who feeds them to the parser). Interim
/// transcripts are surfaced for live UI feedback only.
pub struct CaptureSession<E: CaptureEngine> {
    engine: E,
    state: CaptureState,
    language: String,
}

impl<E: CaptureEngine> CaptureSession<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            state: CaptureState::Idle,
            language: String::new(),
        }
    }

    pub fn is_available(&self) -> bool {
        self.engine.is_available()
    }

    pub fn state(&self) -> CaptureState {
        self.state
    }

    pub fn engine_kind(&self) -> EngineKind {
        self.engine.kind()
    }

    /// Language tag of the most recent start
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Begin listening in `language`. Tolerates being called while already
    /// listening: the running session is stopped and a new one started.
    pub fn start(&mut self, language: &str) -> Result<(), CaptureError> {
        if !self.engine.is_available() {
            return Err(CaptureError::Unavailable);
        }
        if self.state == CaptureState::Listening {
            self.engine.stop_listening();
            self.state = CaptureState::Idle;
        }
        self.engine.start_listening(language)?;
        self.language = language.to_string();
        self.state = CaptureState::Listening;
        Ok(())
    }

    /// Stop listening. Idempotent; safe when not listening.
    pub fn stop(&mut self) {
        if self.state == CaptureState::Listening {
            self.engine.stop_listening();
        }
        self.state = CaptureState::Idle;
    }

    /// Feed an engine transcript into the session. Returns the transcript
    /// when it is final (the parser's input); interim transcripts return
    /// None and leave the session listening.
    pub fn on_transcript(&mut self, transcript: &str, is_final: bool) -> Option<String> {
        if self.state != CaptureState::Listening {
            return None;
        }
        if is_final {
            self.state = CaptureState::ProcessingResult;
            Some(transcript.to_string())
        } else {
            None
        }
    }

    /// Feed an engine fault. Returns the error when the caller should
    /// surface it; `Aborted` is swallowed as a return to idle.
    pub fn on_engine_error(&mut self, error: CaptureError) -> Option<CaptureError> {
        if error == CaptureError::Aborted {
            self.state = CaptureState::Idle;
            None
        } else {
            self.state = CaptureState::Error;
            Some(error)
        }
    }

    /// Engine signaled end-of-session; completes the cycle back to idle.
    pub fn on_end(&mut self) {
        if self.state != CaptureState::Error {
            self.state = CaptureState::Idle;
        }
    }
}
