// Rule-based reading of the form: confusion classification, strength tensions,
// and the shared context both generators consume. No LLM calls here.

pub mod conflicts;
pub mod confusion_parser;
pub mod context;
