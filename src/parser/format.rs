//! Instruction format descriptors and detection
//!
//! An instruction is written either debit-first or credit-first. Both forms
//! share one grammar: a lead clause carrying the amount, currency and first
//! account, then a `for` clause naming the counter-party account. A
//! [`FormatDescriptor`] names the keywords of each form so a single parser can
//! handle both.

use crate::types::{InstructionError, InstructionType};

/// Keyword layout of one surface form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatDescriptor {
    pub instruction_type: InstructionType,

    /// Phrases that must all appear in the lowercased text
    pub detection_phrases: [&'static str; 3],

    /// Keyword opening the instruction, followed by amount and currency
    pub lead: &'static str,

    /// Preposition introducing the lead clause's account
    pub lead_preposition: &'static str,

    /// Keyword joining the two clauses
    pub link: &'static str,

    /// Keyword right after `link`
    pub counter: &'static str,

    /// Preposition introducing the counter clause's account
    pub counter_preposition: &'static str,
}

impl FormatDescriptor {
    /// True if the lead clause names the debit account
    pub fn lead_is_debit(&self) -> bool {
        self.instruction_type == InstructionType::Debit
    }

    fn matches(&self, lowercased: &str) -> bool {
        self.detection_phrases
            .iter()
            .all(|phrase| lowercased.contains(phrase))
    }
}

/// "Debit <amount> <currency> from account <id> for credit to account <id>"
pub const DEBIT_FORMAT: FormatDescriptor = FormatDescriptor {
    instruction_type: InstructionType::Debit,
    detection_phrases: ["debit", "from account", "for credit to account"],
    lead: "debit",
    lead_preposition: "from",
    link: "for",
    counter: "credit",
    counter_preposition: "to",
};

/// "Credit <amount> <currency> to account <id> for debit from account <id>"
pub const CREDIT_FORMAT: FormatDescriptor = FormatDescriptor {
    instruction_type: InstructionType::Credit,
    detection_phrases: ["credit", "to account", "for debit from account"],
    lead: "credit",
    lead_preposition: "to",
    link: "for",
    counter: "debit",
    counter_preposition: "from",
};

/// Checked in order; the first match wins
const FORMATS: [&FormatDescriptor; 2] = [&DEBIT_FORMAT, &CREDIT_FORMAT];

/// Choose the format of an already-lowercased instruction
///
/// Detection is by phrase containment only; keyword positions are checked
/// later by the parser.
///
/// # Errors
///
/// Returns `MalformedInstruction` if neither format's phrases are all present.
pub fn detect_format(lowercased: &str) -> Result<&'static FormatDescriptor, InstructionError> {
    FORMATS
        .into_iter()
        .find(|format| format.matches(lowercased))
        .ok_or(InstructionError::MalformedInstruction)
}
