mod home;
pub use home::Home;

mod profile;
pub use profile::Profile;
