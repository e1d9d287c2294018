pub mod grammar;
pub mod processing;
pub mod removal;

// Re-export main types for convenient access
pub use grammar::{Letter, Punctuation, Sentence, SentenceItem, Text, ValidationError, Word};
pub use processing::{process_text, write_stats, ProcessedText, RunStats};
pub use removal::RemovalConfig;

/// Passage processed when no input is given on the command line
pub const SAMPLE_TEXT: &str = concat!(
    "Велика вежа стояла на вершині гори, і вид з неї був просто неймовірний! ",
    "Як далеко тягнеться цей туман, що оповив все навколо? ",
    "Ранкове сонце теплом обіймало землю, чи може бути щось прекрасніше? ",
    "Вітер дув настільки легко, що здавалось, ніби він лагідно торкався кожного листочка. ",
    "Десь далеко чулося тихе дзюрчання струмка, а чи могли туристи оминути це місце? ",
    "Вони зупинялися тут, щоб відчути гармонію природи. ",
    "Кожен знаходив тут свій спокій.",
);
