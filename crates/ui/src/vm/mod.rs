mod quiz_list_vm;
mod quiz_vm;
mod result_vm;
mod time_fmt;

pub use quiz_list_vm::{
    ChapterCardVm, QuizCardVm, TextbookOptionVm, map_chapter_cards, map_quiz_cards,
    map_textbook_options,
};
pub use quiz_vm::{OptionTileVm, QuestionVm};
pub use result_vm::{ChartMarkerVm, ChartVm, ResultVm, map_result};
