use thiserror::Error;

use crate::config::MotionConfig;
use crate::timeline::Millis;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypePhase {
    Typing,
    PausingAtEnd,
    Deleting,
    PausingBeforeNext,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypeSpeeds {
    pub type_ms: Millis,
    pub delete_ms: Millis,
    pub end_pause_ms: Millis,
    pub next_pause_ms: Millis,
}

impl TypeSpeeds {
    pub fn from_motion(motion: &MotionConfig) -> Self {
        Self {
            type_ms: motion.type_delay_ms,
            delete_ms: motion.delete_delay_ms,
            end_pause_ms: motion.end_pause_ms,
            next_pause_ms: motion.next_pause_ms,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypewriterError {
    #[error("typewriter needs at least one phrase")]
    NoPhrases,
}

/// Types and deletes a cycle of phrases one character per tick.
///
/// `char_index` counts characters, never bytes, and always stays within
/// `0..=len(phrase)`.
#[derive(Clone, Debug)]
pub struct Typewriter {
    phrases: Vec<String>,
    phrase_index: usize,
    char_index: usize,
    phase: TypePhase,
    speeds: TypeSpeeds,
    text: String,
}

impl Typewriter {
    pub fn new(phrases: Vec<String>, speeds: TypeSpeeds) -> Result<Self, TypewriterError> {
        if phrases.is_empty() {
            return Err(TypewriterError::NoPhrases);
        }

        Ok(Self {
            phrases,
            phrase_index: 0,
            char_index: 0,
            phase: TypePhase::Typing,
            speeds,
            text: String::new(),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn phase(&self) -> TypePhase {
        self.phase
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn char_index(&self) -> usize {
        self.char_index
    }

    /// Advances one frame and returns the delay before the next one.
    pub fn tick(&mut self) -> Millis {
        let len = self.current_len();

        match self.phase {
            TypePhase::Typing | TypePhase::PausingBeforeNext => {
                self.char_index = (self.char_index + 1).min(len);
                self.phase = TypePhase::Typing;
            }
            TypePhase::Deleting | TypePhase::PausingAtEnd => {
                self.char_index = self.char_index.saturating_sub(1);
                self.phase = TypePhase::Deleting;
            }
        }

        self.text = prefix(&self.phrases[self.phrase_index], self.char_index).to_string();

        match self.phase {
            TypePhase::Typing if self.char_index == len => {
                self.phase = TypePhase::PausingAtEnd;
                self.speeds.end_pause_ms
            }
            TypePhase::Deleting if self.char_index == 0 => {
                self.phase = TypePhase::PausingBeforeNext;
                self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
                self.speeds.next_pause_ms
            }
            TypePhase::Deleting => self.speeds.delete_ms,
            _ => self.speeds.type_ms,
        }
    }

    fn current_len(&self) -> usize {
        self.phrases[self.phrase_index].chars().count()
    }
}

fn prefix(value: &str, chars: usize) -> &str {
    match value.char_indices().nth(chars) {
        Some((end, _)) => &value[..end],
        None => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn speeds() -> TypeSpeeds {
        TypeSpeeds::from_motion(&MotionConfig::default())
    }

    fn typewriter(phrases: &[&str]) -> Typewriter {
        Typewriter::new(phrases.iter().map(|p| p.to_string()).collect(), speeds())
            .expect("non-empty phrase list")
    }

    #[test]
    fn empty_phrase_list_is_rejected() {
        assert_eq!(
            Typewriter::new(Vec::new(), speeds()).err(),
            Some(TypewriterError::NoPhrases)
        );
    }

    #[test]
    fn cycles_through_every_character_count() {
        let mut writer = typewriter(&["A", "BB"]);
        let frames: Vec<String> = (0..8)
            .map(|_| {
                writer.tick();
                writer.text().to_string()
            })
            .collect();

        assert_eq!(frames, vec!["A", "", "B", "BB", "B", "", "A", ""]);
    }

    #[test]
    fn delays_follow_the_phase() {
        let mut writer = typewriter(&["AB"]);

        assert_eq!(writer.tick(), 100);
        assert_eq!(writer.phase(), TypePhase::Typing);
        assert_eq!(writer.tick(), 2_000);
        assert_eq!(writer.phase(), TypePhase::PausingAtEnd);
        assert_eq!(writer.tick(), 50);
        assert_eq!(writer.phase(), TypePhase::Deleting);
        assert_eq!(writer.tick(), 500);
        assert_eq!(writer.phase(), TypePhase::PausingBeforeNext);
        assert_eq!(writer.phrase_index(), 0);
    }

    #[test]
    fn multibyte_phrases_advance_by_character() {
        let mut writer = typewriter(&["né"]);

        writer.tick();
        assert_eq!(writer.text(), "n");
        writer.tick();
        assert_eq!(writer.text(), "né");
        assert_eq!(writer.char_index(), 2);
    }

    #[test]
    fn char_index_never_exceeds_phrase_length() {
        let mut writer = typewriter(&["abc", "", "de"]);

        for _ in 0..200 {
            writer.tick();
            let len = ["abc", "", "de"][writer.phrase_index()].chars().count();
            assert!(writer.char_index() <= len);
            assert_eq!(writer.text().chars().count(), writer.char_index());
        }
    }
}
