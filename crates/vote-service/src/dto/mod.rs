//! Data transfer objects for form inputs and page view models
//!
//! This module provides:
//! - Request DTOs with validation for form submissions
//! - View models serialized as page responses
//! - Mappers for converting domain entities to view models

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{LoginRequest, RegisterRequest};

pub use responses::{
    BallotState, CandidateResponse, CastVoteResponse, DashboardView, Flash, FlashLevel,
    FormView, HealthChecks, HealthResponse, HomeView, Page, ReadinessResponse, ResultsView,
    TallyRowResponse, VoterResponse,
};
