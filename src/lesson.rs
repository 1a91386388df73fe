use serde::{Deserialize, Serialize};

use crate::ui::menu_table::{self, MenuId};

/// Highest grade a lesson can be played at.
pub const MAX_GRADE: u32 = 4;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    DesignTech,
    FoodTech,
    Pe,
    Chemistry,
    Ict,
}

impl Subject {
    pub const ALL: [Subject; 5] = [Subject::DesignTech, Subject::FoodTech, Subject::Pe, Subject::Chemistry, Subject::Ict];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Position in the grade table.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Subject::DesignTech => "DT",
            Subject::FoodTech => "Food Tech",
            Subject::Pe => "PE",
            Subject::Chemistry => "Chemistry",
            Subject::Ict => "ICT",
        }
    }

    /// Menu holding this lesson's answer options.
    pub fn menu(self) -> MenuId {
        match self {
            Subject::DesignTech => menu_table::LESSON_DT,
            Subject::FoodTech => menu_table::LESSON_FOOD,
            Subject::Pe => menu_table::LESSON_PE,
            Subject::Chemistry | Subject::Ict => menu_table::LESSON_SCIENCE,
        }
    }

    /// Time-of-day slot shown while the lesson runs.
    pub fn period(self) -> u32 {
        self.index() as u32 + 3
    }
}

/// Grade a lesson is played at, from the subject's accumulated value.
pub fn grade_for(value: u32) -> u32 {
    (value / 10 + 1).min(MAX_GRADE)
}

/// Starting concentration or energy for timed lessons.
pub fn starting_energy(grade: u32) -> u32 {
    grade.clamp(1, MAX_GRADE) - 1
}

/// Number of questions asked in quiz lessons.
pub fn question_count(grade: u32) -> u32 {
    match grade {
        2 => 7,
        3 => 9,
        4 => 12,
        _ => 5,
    }
}

/// Shared lifecycle state of a running lesson. The mini-game rules live
/// behind [`crate::hooks::GameHooks::lesson_action`].
#[derive(Clone, Debug, PartialEq)]
pub struct Lesson {
    pub subject: Subject,
    pub grade: u32,
    pub rounds: u32,
    pub score: f64,
    /// Feedback text is on screen; the next click on the lesson menu only
    /// dismisses it.
    pub feedback: bool,
    pub finished: bool,
    /// Time of day to return to afterwards.
    pub resume_time: u32,
}

impl Lesson {
    pub fn start(subject: Subject, grade_value: u32, resume_time: u32) -> Self {
        Self {
            subject,
            grade: grade_for(grade_value),
            rounds: 0,
            score: 0.0,
            feedback: false,
            finished: false,
            resume_time,
        }
    }

    pub fn record_round(&mut self, score: f64) {
        self.rounds += 1;
        self.score += score;
    }

    pub fn show_feedback(&mut self) {
        self.feedback = true;
    }

    pub fn dismiss_feedback(&mut self) {
        self.feedback = false;
    }

    pub fn mark_finished(&mut self) {
        self.finished = true;
    }

    /// Grade value gained: five times the mean round score, truncated.
    pub fn grade_increase(&self) -> u32 {
        if self.rounds == 0 {
            return 0;
        }
        ((self.score / self.rounds as f64) * 5.0).max(0.0) as u32
    }
}
