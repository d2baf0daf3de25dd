//! Presentational building blocks shared by the page views.

mod announcement_card;
pub use announcement_card::AnnouncementCard;

mod confirm_dialog;
pub use confirm_dialog::ConfirmDialog;

mod header;
pub use header::Header;

mod notice;
pub use notice::Notice;

mod pagination;
pub use pagination::Pagination;

mod search_bar;
pub use search_bar::SearchBar;

mod subject_select;
pub use subject_select::SubjectSelect;

mod user_card;
pub use user_card::UserCard;
