//! # vote-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    BallotState, CandidateResponse, CastVoteResponse, DashboardView, Flash, FlashLevel,
    FormView, HealthChecks, HealthResponse, HomeView, LoginRequest, Page, ReadinessResponse,
    RegisterRequest, ResultsView, TallyRowResponse, VoterResponse,
};
pub use services::{
    AuthService, AuthenticatedSession, BallotService, ResultsService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult,
};
