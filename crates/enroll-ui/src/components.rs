mod activity_card;
mod activity_listing;
mod participant_roster;
mod signup_form;
mod status_banner;

pub use activity_card::ActivityCard;
pub use activity_listing::ActivityListing;
pub use participant_roster::ParticipantRoster;
pub use signup_form::SignupForm;
pub use status_banner::StatusBanner;
