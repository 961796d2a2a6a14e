//! End-to-end tests for the simulated mission pipeline
//!
//! Drives the full stack through the public crate surface: request body in,
//! latency, orchestration, envelope out. Covers the wire contract (field
//! names and presence), status-code policy, and the scenario table for the
//! movement engine.

use std::time::Duration;

use roverlink::{
    CodecConfig, ErrorCode, EXECUTE_MISSION_METHOD, EXECUTE_MISSION_PATH, Intercept,
    MissionResponse, MissionSimulator, Outcome, SimulatedRequest, SimulatorConfig,
    ValidationLimits, status,
};

fn simulator() -> MissionSimulator {
    MissionSimulator::new(SimulatorConfig {
        latency: Duration::from_millis(0),
        ..SimulatorConfig::default()
    })
}

fn mission_body(
    plateau: (i32, i32),
    start: (i32, i32),
    direction: &str,
    movements: &str,
) -> String {
    format!(
        r#"{{"topRightCorner":{{"x":{},"y":{}}},"roverPosition":{{"x":{},"y":{}}},"roverDirection":"{}","movements":"{}"}}"#,
        plateau.0, plateau.1, start.0, start.1, direction, movements
    )
}

async fn exchange(body: String) -> (u16, MissionResponse) {
    let request = SimulatedRequest::new(EXECUTE_MISSION_METHOD, EXECUTE_MISSION_PATH, body);
    match simulator().handle(request).await {
        Intercept::Handled(response) => (
            response.status,
            serde_json::from_str(&response.body).expect("envelope parses"),
        ),
        Intercept::PassThrough(_) => panic!("execute request should be intercepted"),
    }
}

#[tokio::test]
async fn test_canonical_mission_scenario() {
    let (status_code, envelope) =
        exchange(mission_body((5, 5), (1, 2), "N", "LMLMLMLMM")).await;
    assert_eq!(status_code, status::OK);
    assert!(envelope.success);
    assert_eq!(envelope.final_position, "1 3 N");
}

#[tokio::test]
async fn test_boundary_blocked_scenario() {
    let (_, envelope) = exchange(mission_body((5, 5), (5, 5), "N", "M")).await;
    assert!(envelope.success);
    assert_eq!(envelope.final_position, "5 5 N");
}

#[tokio::test]
async fn test_junk_commands_scenario() {
    let (_, envelope) = exchange(mission_body((5, 5), (2, 2), "N", "MXL1R@M")).await;
    assert!(envelope.success);
    assert_eq!(envelope.final_position, "2 4 N");
}

#[tokio::test]
async fn test_negative_plateau_is_validation_failure_at_200() {
    let (status_code, envelope) = exchange(mission_body((-1, 5), (0, 0), "N", "M")).await;
    // Structurally valid request: the exchange succeeds, the mission fails.
    assert_eq!(status_code, status::OK);
    assert!(!envelope.success);
    assert_eq!(envelope.final_position, "");
    let error = envelope.error.expect("failure envelope carries error");
    assert_eq!(error.code, ErrorCode::ValidationError);
    assert!(error.message.contains("-1"));
}

#[tokio::test]
async fn test_bad_direction_aborts_before_movement() {
    for direction in ["NE", "X"] {
        let (status_code, envelope) =
            exchange(mission_body((5, 5), (1, 2), direction, "MMMM")).await;
        assert_eq!(status_code, status::OK);
        assert!(!envelope.success, "direction {direction:?}");
        assert_eq!(
            envelope.error.unwrap().code,
            ErrorCode::ValidationError,
            "direction {direction:?}"
        );
    }
}

#[tokio::test]
async fn test_malformed_body_is_transport_failure() {
    let (status_code, envelope) = exchange("{".to_string()).await;
    assert_eq!(status_code, status::BAD_REQUEST);
    assert_eq!(envelope.error.unwrap().code, ErrorCode::InvalidJson);
}

#[tokio::test]
async fn test_missing_fields_are_transport_failure() {
    let (status_code, envelope) =
        exchange(r#"{"roverDirection":"N"}"#.to_string()).await;
    assert_eq!(status_code, status::BAD_REQUEST);
    assert_eq!(envelope.error.unwrap().code, ErrorCode::InvalidRequest);
}

#[tokio::test]
async fn test_extra_fields_are_ignored() {
    let body = r#"{
        "topRightCorner": {"x": 5, "y": 5},
        "roverPosition": {"x": 1, "y": 2},
        "roverDirection": "N",
        "movements": "LMLMLMLMM",
        "missionName": "ares-3",
        "telemetry": {"battery": 0.93}
    }"#;
    let (status_code, envelope) = exchange(body.to_string()).await;
    assert_eq!(status_code, status::OK);
    assert!(envelope.success);
}

#[tokio::test]
async fn test_envelope_wire_fields_on_success() {
    let request = SimulatedRequest::new(
        EXECUTE_MISSION_METHOD,
        EXECUTE_MISSION_PATH,
        mission_body((5, 5), (1, 2), "N", "LMLMLMLMM"),
    );
    let Intercept::Handled(response) = simulator().handle(request).await else {
        panic!("expected interception");
    };
    let value: serde_json::Value = serde_json::from_str(&response.body).unwrap();

    for field in [
        "success",
        "finalPosition",
        "message",
        "originalInput",
        "timestamp",
        "executionTimeMs",
    ] {
        assert!(value.get(field).is_some(), "missing wire field {field}");
    }
    assert!(value.get("error").is_none());
    // Timestamp is RFC 3339.
    let timestamp = value["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
    // The decoded instructions are echoed back in wire shape.
    assert_eq!(value["originalInput"]["movements"], "LMLMLMLMM");
}

#[tokio::test]
async fn test_foreign_requests_pass_through_untouched() {
    let foreign = SimulatedRequest::new("GET", "/api/v1/mars-rover/status", "");
    match simulator().handle(foreign.clone()).await {
        Intercept::PassThrough(request) => assert_eq!(request, foreign),
        Intercept::Handled(_) => panic!("foreign request must not be intercepted"),
    }
}

#[tokio::test]
async fn test_custom_coordinate_ceiling_is_enforced_end_to_end() {
    let tight = MissionSimulator::new(SimulatorConfig {
        latency: Duration::from_millis(0),
        limits: ValidationLimits::with_max_coordinate(3),
        ..SimulatorConfig::default()
    });
    let request = SimulatedRequest::new(
        EXECUTE_MISSION_METHOD,
        EXECUTE_MISSION_PATH,
        mission_body((5, 5), (1, 1), "N", "M"),
    );
    let Intercept::Handled(response) = tight.handle(request).await else {
        panic!("expected interception");
    };
    let envelope: MissionResponse = serde_json::from_str(&response.body).unwrap();
    assert!(!envelope.success);
    assert_eq!(envelope.error.unwrap().code, ErrorCode::ValidationError);
}

#[tokio::test]
async fn test_pretty_codec_round_trips() {
    let pretty = MissionSimulator::new(SimulatorConfig {
        latency: Duration::from_millis(0),
        codec: CodecConfig { pretty: true },
        ..SimulatorConfig::default()
    });
    let outcome = pretty
        .post_mission(mission_body((5, 5), (1, 2), "N", "LMLMLMLMM"))
        .await;
    let Outcome::Success(response) = outcome else {
        panic!("expected terminal success");
    };
    assert!(response.body.contains('\n'));
    let envelope: MissionResponse = serde_json::from_str(&response.body).unwrap();
    assert_eq!(envelope.final_position, "1 3 N");
}

#[tokio::test(start_paused = true)]
async fn test_latency_delays_the_envelope() {
    let slow = MissionSimulator::new(SimulatorConfig {
        latency: Duration::from_secs(2),
        ..SimulatorConfig::default()
    });
    let body = mission_body((5, 5), (1, 2), "N", "M");
    let task = tokio::spawn(async move { slow.post_mission(body).await });

    tokio::time::advance(Duration::from_secs(2)).await;
    let outcome = task.await.unwrap();
    assert!(outcome.is_success());
}
