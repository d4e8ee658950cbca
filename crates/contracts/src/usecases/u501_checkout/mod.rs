//! Storefront checkout
//!
//! Turns the cart into a persisted order, updated stock and generated reports
//! through a fixed sequence of REST calls. The sequence is not transactional:
//! a failure stops it where it is and nothing already applied is undone (see
//! [`steps::COMPENSATION_POLICY`]).

pub mod executor;
pub mod gateway;
pub mod request;
pub mod response;
pub mod steps;

pub use executor::{check_preconditions, CheckoutError, CheckoutSaga};
pub use gateway::CheckoutGateway;
pub use request::CheckoutRequest;
pub use response::CheckoutReceipt;
pub use steps::{CheckoutStep, CheckoutStepKind, Compensation, COMPENSATION_POLICY};
