mod announcements;
pub use announcements::Announcements;

mod add;
pub use add::AddAnnouncement;

mod edit;
pub use edit::EditAnnouncement;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod profile;
pub use profile::Profile;

mod users;
pub use users::UserList;
