//! Auth Service Library
//!
//! The login use case: an interactor that checks credentials against a
//! `UserDirectory` and reports the outcome through a `LoginOutputBoundary`.

pub mod boundary;
pub mod presenter;
pub mod service;

pub use boundary::{LoginInputBoundary, LoginOutputBoundary};
pub use presenter::{LoginPresenter, LoginViewModel};
pub use service::{LoginInteractor, LoginOutcome};
