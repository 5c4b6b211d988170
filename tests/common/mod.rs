//! Shared fixtures for backend tests.

use chrono::NaiveDate;
use task_planner::io::BackendClient;
use task_planner::model::Task;
use wiremock::MockServer;

pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

pub fn client_for(server: &MockServer, route: &str) -> BackendClient {
    let url = url::Url::parse(&format!("{}{}", server.uri(), route)).unwrap();
    BackendClient::new(url).unwrap()
}

/// Design (1) and Build (2, depends on 1).
pub fn sample_tasks() -> Vec<Task> {
    vec![
        Task::new(1, "Design", 3, NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()),
        Task::new(2, "Build", 5, NaiveDate::from_ymd_opt(2024, 1, 20).unwrap())
            .with_dependencies(vec![1]),
    ]
}
