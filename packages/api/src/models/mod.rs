//! Wire models exchanged with the REST backend.

mod announcement;
mod page;
mod user;

pub use announcement::{Announcement, AnnouncementDraft, Author, SearchFilter, Subject};
pub use page::Page;
pub use user::{Credentials, LoginResponse, ProfileUpdate, Registration, UserInfo};
