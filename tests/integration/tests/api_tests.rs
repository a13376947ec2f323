//! Page Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_redirect, assert_status, check_test_env, fixtures::*, flash_of,
    sets_session, TestServer,
};
use reqwest::StatusCode;
use serde_json::Value;
use vote_service::FlashLevel;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let browser = server.browser().unwrap();
    let response = browser.get("/health").await.expect("Request failed");
    assert!(response.headers().contains_key("x-request-id"));
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let browser = server.browser().unwrap();
    let response = browser.get("/health/ready").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["database"], "healthy");
}

// ============================================================================
// Registration Tests
// ============================================================================

#[tokio::test]
async fn test_register_then_login_reaches_dashboard() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let browser = server.browser().unwrap();
    let registration = Registration::unique();

    let response = browser
        .post_form("/register", &registration.fields())
        .await
        .unwrap();
    let flash = assert_redirect(&response, "/login").unwrap().unwrap();
    assert_eq!(flash.level, FlashLevel::Success);
    assert!(!sets_session(&response));

    let response = browser
        .post_form("/login", &registration.login_fields())
        .await
        .unwrap();
    assert!(sets_session(&response));
    let flash = assert_redirect(&response, "/dashboard").unwrap().unwrap();
    assert_eq!(flash.message, format!("Welcome, {}!", registration.display_name));

    let response = browser.get("/dashboard").await.unwrap();
    let page: PageBody<DashboardBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.page, "dashboard");
    assert_eq!(page.data.voter.handle, registration.handle);
    assert_eq!(page.data.voter.display_name, registration.display_name);
    assert_eq!(page.data.status, "open");
    assert!(page.data.vote.is_none());

    // The welcome flash is shown once
    let welcome = page.flash.expect("welcome flash");
    assert_eq!(welcome.level, "success");
    let response = browser.get("/dashboard").await.unwrap();
    let page: PageBody<DashboardBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(page.flash.is_none());
}

#[tokio::test]
async fn test_home_sends_logged_in_voter_to_dashboard() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let browser = server.browser().unwrap();

    let response = browser.get("/").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    register_and_login(&browser).await.unwrap();
    // Consume the welcome flash first
    browser.get("/dashboard").await.unwrap();

    let response = browser.get("/").await.unwrap();
    assert_redirect(&response, "/dashboard").unwrap();
}

#[tokio::test]
async fn test_register_password_mismatch_creates_nothing() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let browser = server.browser().unwrap();
    let registration = Registration::unique();

    let response = browser
        .post_form(
            "/register",
            &[
                ("handle", registration.handle.as_str()),
                ("display_name", registration.display_name.as_str()),
                ("password", "first-password"),
                ("confirm_password", "second-password"),
            ],
        )
        .await
        .unwrap();
    let flash = assert_redirect(&response, "/register").unwrap().unwrap();
    assert_eq!(flash.level, FlashLevel::Danger);
    assert_eq!(flash.message, "Passwords do not match!");

    // No account was created, so logging in fails
    let response = browser
        .post_form(
            "/login",
            &[
                ("handle", registration.handle.as_str()),
                ("password", "first-password"),
            ],
        )
        .await
        .unwrap();
    assert_redirect(&response, "/login").unwrap();
    assert!(!sets_session(&response));
}

#[tokio::test]
async fn test_register_duplicate_handle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let browser = server.browser().unwrap();
    let registration = register(&browser).await.unwrap();

    let response = browser
        .post_form("/register", &registration.fields())
        .await
        .unwrap();
    let flash = assert_redirect(&response, "/register").unwrap().unwrap();
    assert_eq!(flash.message, "User ID already taken!");
}

#[tokio::test]
async fn test_register_short_handle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let browser = server.browser().unwrap();

    let response = browser
        .post_form(
            "/register",
            &[
                ("handle", "abc"),
                ("display_name", "Short"),
                ("password", "pw"),
                ("confirm_password", "pw"),
            ],
        )
        .await
        .unwrap();
    let flash = assert_redirect(&response, "/register").unwrap().unwrap();
    assert_eq!(flash.level, FlashLevel::Danger);
}

// ============================================================================
// Login Tests
// ============================================================================

#[tokio::test]
async fn test_login_wrong_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let browser = server.browser().unwrap();
    let registration = register(&browser).await.unwrap();

    let response = browser
        .post_form(
            "/login",
            &[
                ("handle", registration.handle.as_str()),
                ("password", "not-the-password"),
            ],
        )
        .await
        .unwrap();
    let flash = assert_redirect(&response, "/login").unwrap().unwrap();
    assert_eq!(flash.level, FlashLevel::Danger);
    assert_eq!(flash.message, "Invalid User ID or password");
    assert!(!sets_session(&response));

    // Still anonymous
    let response = browser.get("/dashboard").await.unwrap();
    assert_redirect(&response, "/login").unwrap();
}

#[tokio::test]
async fn test_login_unknown_handle_is_indistinguishable() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let browser = server.browser().unwrap();
    let stranger = Registration::unique();

    let response = browser
        .post_form("/login", &stranger.login_fields())
        .await
        .unwrap();
    let flash = assert_redirect(&response, "/login").unwrap().unwrap();
    assert_eq!(flash.message, "Invalid User ID or password");
}

#[tokio::test]
async fn test_logout_is_idempotent() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let browser = server.browser().unwrap();
    register_and_login(&browser).await.unwrap();

    for _ in 0..2 {
        let response = browser.get("/logout").await.unwrap();
        let flash = assert_redirect(&response, "/").unwrap().unwrap();
        assert_eq!(flash.level, FlashLevel::Info);
    }

    let response = browser.get("/dashboard").await.unwrap();
    assert_redirect(&response, "/login").unwrap();
}

// ============================================================================
// Voting Tests
// ============================================================================

#[tokio::test]
async fn test_vote_requires_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let browser = server.browser().unwrap();
    let candidates = seed_candidates(&server.pool, &["Solo"]).await.unwrap();

    let response = browser
        .post(&format!("/vote/{}", candidates[0].id))
        .await
        .unwrap();
    assert_redirect(&response, "/login").unwrap();

    let response = browser.get("/results").await.unwrap();
    let page: PageBody<ResultsBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.data.votes_for(&candidates[0]), Some(0));
}

#[tokio::test]
async fn test_vote_then_duplicate_vote() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let browser = server.browser().unwrap();
    register_and_login(&browser).await.unwrap();
    let candidates = seed_candidates(&server.pool, &["Left", "Right"]).await.unwrap();

    let response = browser
        .post(&format!("/vote/{}", candidates[0].id))
        .await
        .unwrap();
    let flash = assert_redirect(&response, "/dashboard").unwrap().unwrap();
    assert_eq!(flash.level, FlashLevel::Success);
    assert_eq!(flash.message, "Vote cast successfully!");

    let response = browser
        .post(&format!("/vote/{}", candidates[1].id))
        .await
        .unwrap();
    let flash = assert_redirect(&response, "/dashboard").unwrap().unwrap();
    assert_eq!(flash.level, FlashLevel::Warning);
    assert_eq!(flash.message, "You have already voted!");

    let response = browser.get("/dashboard").await.unwrap();
    let page: PageBody<DashboardBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.data.status, "voted");
    let vote = page.data.vote.expect("vote shown on dashboard");
    assert_eq!(vote.candidate.id, candidates[0].id.into_inner());
    assert_eq!(vote.candidate.name, candidates[0].name);

    let response = browser.get("/results").await.unwrap();
    let page: PageBody<ResultsBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.data.votes_for(&candidates[0]), Some(1));
    assert_eq!(page.data.votes_for(&candidates[1]), Some(0));
}

#[tokio::test]
async fn test_concurrent_votes_record_one() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let browser = server.browser().unwrap();
    register_and_login(&browser).await.unwrap();
    let candidates = seed_candidates(&server.pool, &["North", "South"]).await.unwrap();

    let first = format!("/vote/{}", candidates[0].id);
    let second = format!("/vote/{}", candidates[1].id);
    let (a, b) = tokio::join!(browser.post(&first), browser.post(&second));
    let (a, b) = (a.unwrap(), b.unwrap());

    let levels: Vec<_> = [flash_of(&a), flash_of(&b)]
        .into_iter()
        .map(|flash| flash.expect("flash on vote").level)
        .collect();
    assert_eq!(
        levels.iter().filter(|l| **l == FlashLevel::Success).count(),
        1
    );
    assert_eq!(
        levels.iter().filter(|l| **l == FlashLevel::Warning).count(),
        1
    );

    let response = browser.get("/results").await.unwrap();
    let page: PageBody<ResultsBody> = assert_json(response, StatusCode::OK).await.unwrap();
    let cast = page.data.votes_for(&candidates[0]).unwrap()
        + page.data.votes_for(&candidates[1]).unwrap();
    assert_eq!(cast, 1);
}

#[tokio::test]
async fn test_vote_for_unknown_candidate() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let browser = server.browser().unwrap();
    register_and_login(&browser).await.unwrap();
    browser.get("/dashboard").await.unwrap();

    let response = browser.post("/vote/-1").await.unwrap();
    let flash = assert_redirect(&response, "/dashboard").unwrap().unwrap();
    assert_eq!(flash.level, FlashLevel::Danger);

    // The ballot stays open
    let response = browser.get("/dashboard").await.unwrap();
    let page: PageBody<DashboardBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.data.status, "open");
}

// ============================================================================
// Results Tests
// ============================================================================

#[tokio::test]
async fn test_results_counts_and_order() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let candidates = seed_candidates(&server.pool, &["A", "B", "C"]).await.unwrap();

    // B twice, A once, C never
    for target in [&candidates[1], &candidates[1], &candidates[0]] {
        let voter = server.browser().unwrap();
        register_and_login(&voter).await.unwrap();
        let response = voter.post(&format!("/vote/{}", target.id)).await.unwrap();
        assert_redirect(&response, "/dashboard").unwrap();
    }

    // Anonymous visitors may view results
    let browser = server.browser().unwrap();
    let response = browser.get("/results").await.unwrap();
    let page: PageBody<ResultsBody> = assert_json(response, StatusCode::OK).await.unwrap();
    let results = page.data;

    let (a, b, c) = (&candidates[0], &candidates[1], &candidates[2]);
    assert_eq!(results.votes_for(b), Some(2));
    assert_eq!(results.votes_for(a), Some(1));
    assert_eq!(results.votes_for(c), Some(0));

    let position = |candidate: &vote_core::Candidate| {
        results
            .results
            .iter()
            .position(|row| row.id == candidate.id.into_inner())
            .unwrap()
    };
    assert!(position(b) < position(a));
    assert!(position(a) < position(c));

    // Highest first throughout, and the total is the sum of the rows
    assert!(results.results.windows(2).all(|w| w[0].votes >= w[1].votes));
    assert_eq!(
        results.total,
        results.results.iter().map(|row| row.votes).sum::<i64>()
    );
}
