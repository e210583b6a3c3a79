mod navigation;
mod question;
mod timer;
mod view;

pub use navigation::NavigationPanel;
pub use question::QuestionCard;
pub use timer::QuizTimer;
pub use view::QuizView;
