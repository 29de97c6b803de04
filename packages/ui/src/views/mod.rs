mod profile;
pub use profile::{ProfileForm, ProfileLoad, ProfileView};
