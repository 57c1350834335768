//! Typewriter terminal on the quickstart page

/// Delay between two revealed lines
pub const REVEAL_INTERVAL_MS: u32 = 700;

/// How long the "copy all" button shows its check mark
pub const COPY_ALL_FEEDBACK_MS: u32 = 1_500;

/// How long a single-line copy button shows its check mark
pub const COPY_LINE_FEEDBACK_MS: u32 = 1_200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalStep {
    pub command: &'static str,
    pub comment: Option<&'static str>,
}

impl TerminalStep {
    /// Command plus trailing comment, as printed
    pub fn display(&self) -> String {
        match self.comment {
            Some(comment) => format!("{}  {}", self.command, comment),
            None => self.command.to_string(),
        }
    }
}

pub const TERMINAL_SCRIPT: [TerminalStep; 6] = [
    TerminalStep {
        command: "pnpm add @trustplane/sdk",
        comment: None,
    },
    TerminalStep {
        command: "npx trustplane init --policy prod-us-1",
        comment: Some("# create policy scaffold"),
    },
    TerminalStep {
        command: "npx trustplane canary ap-matching --dataset golden:v1 --dry-run",
        comment: Some("# read-first"),
    },
    TerminalStep {
        command: "npx trustplane promote ap-matching --percent 10 --approvals security,finops",
        comment: None,
    },
    TerminalStep {
        command: "npx trustplane cert ap-matching --show",
        comment: Some("# Action Certificate"),
    },
    TerminalStep {
        command: "pnpm dev",
        comment: Some("🎉"),
    },
];

/// Commands only, newline separated
pub fn all_commands() -> String {
    TERMINAL_SCRIPT
        .iter()
        .map(|step| step.command)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Index of the last visible line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealState {
    last_visible: usize,
}

impl RevealState {
    /// First line only, or everything when motion is reduced
    pub fn new(reduced_motion: bool) -> Self {
        let mut state = Self::default();
        if reduced_motion {
            state.reveal_all();
        }
        state
    }

    pub fn is_visible(&self, index: usize) -> bool {
        index <= self.last_visible
    }

    pub fn is_complete(&self) -> bool {
        self.last_visible >= TERMINAL_SCRIPT.len() - 1
    }

    /// Reveal one more line; returns false once everything is shown
    pub fn advance(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        self.last_visible += 1;
        true
    }

    pub fn reveal_all(&mut self) {
        self.last_visible = TERMINAL_SCRIPT.len() - 1;
    }

    pub fn replay(&mut self) {
        self.last_visible = 0;
    }
}
