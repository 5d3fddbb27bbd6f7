//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Mouse left-button press at a terminal cell
    Click { column: u16, row: u16 },

    /// Frame tick from the event poll timeout (drives transitions)
    Tick,

    /// Scheduled tick for the rotating-text engine
    TypewriterTick,

    // ─────────────────────────────────────────────────────────
    // Section Navigation
    // ─────────────────────────────────────────────────────────
    /// Move to the next section tab
    NextSection,
    /// Move to the previous section tab
    PrevSection,
    /// Jump to a section by position (number keys)
    SelectSectionByIndex(usize),

    /// Next option of the active section's inner view (skills category,
    /// experience tab, project filter)
    InnerNext,
    /// Previous option of the active section's inner view
    InnerPrev,

    // ─────────────────────────────────────────────────────────
    // Routing
    // ─────────────────────────────────────────────────────────
    /// Push the full certifications listing route
    PushCertifications,
    /// Pop back to the previous route
    PopRoute,

    // ─────────────────────────────────────────────────────────
    // Certifications / Modal
    // ─────────────────────────────────────────────────────────
    /// Move the listing cursor down
    CertNext,
    /// Move the listing cursor up
    CertPrev,
    /// Open the detail lightbox for the certification under the cursor
    OpenCertModal,
    /// Close the lightbox (Esc or backdrop click)
    CloseModal,

    // ─────────────────────────────────────────────────────────
    // Contact Form
    // ─────────────────────────────────────────────────────────
    /// Start routing keystrokes into the form
    ContactStartEditing,
    /// Stop editing, back to section navigation
    ContactStopEditing,
    ContactFocusNext,
    ContactFocusPrev,
    ContactInput(char),
    ContactBackspace,
    /// Validate and hand the message to the mail collaborator
    ContactSubmit,
    /// Delivery finished (error stringified so the message stays `Clone`)
    ContactSendFinished { result: Result<(), String> },
    /// The 5-second success window elapsed
    SubmittedWindowElapsed,

    // ─────────────────────────────────────────────────────────
    // Misc
    // ─────────────────────────────────────────────────────────
    /// Fire-and-forget copy of the resume into the working directory
    ExportResume,

    /// Quit the application
    Quit,
}
