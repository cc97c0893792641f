//! Login business logic.

mod login_interactor;

pub use login_interactor::{LoginInteractor, LoginOutcome};
