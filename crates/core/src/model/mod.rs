mod game;
mod ids;
mod lesson;
mod question;
mod session;

pub use ids::{LessonId, QuestionId, SessionId, WordId};

pub use game::{AnswerDirection, AnswerField, GameKind};
pub use lesson::{Lesson, LessonError, WordPair};
pub use question::{Answer, BLANK_MARKER, Question, QuestionKind, WordTiming};
pub use session::{
    AnswerOutcome, AnswerRecord, HintOutcome, Session, SessionError, SessionExtras,
    SessionProgress,
};
