mod common;

use axum::extract::State;
use deal_curator::routes::health::health_check;

#[tokio::test]
async fn health_check_reports_configuration() {
    let state = common::state(common::mock().into_connection());
    let response = health_check(State(state)).await;

    assert_eq!(response.0.status, "OK");
    assert_eq!(response.0.database_url, "SET");
    assert_eq!(response.0.anon_key, "MISSING");
}
