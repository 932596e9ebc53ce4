use rstest::rstest;
use udg_core::{ErrorCategory, ExecutionStrategy, PipelineStage, UdgError, UdgErrorCode};

#[rstest]
#[case(
    UdgError::InvalidVertexCount { got: 0 },
    UdgErrorCode::InvalidVertexCount,
    "UDG_INVALID_VERTEX_COUNT",
)]
#[case(
    UdgError::InvalidRadius { got: -1.0 },
    UdgErrorCode::InvalidRadius,
    "UDG_INVALID_RADIUS",
)]
#[case(UdgError::ZeroDenominator, UdgErrorCode::ZeroDenominator, "UDG_ZERO_DENOMINATOR")]
#[case(
    UdgError::NonFiniteParameter { name: "epsilon", value: f64::NAN },
    UdgErrorCode::NonFiniteParameter,
    "UDG_NON_FINITE_PARAMETER",
)]
#[case(
    UdgError::UnknownVertex { index: 4, vertex_count: 2 },
    UdgErrorCode::UnknownVertex,
    "UDG_UNKNOWN_VERTEX",
)]
#[case(
    UdgError::BackendUnavailable { requested: ExecutionStrategy::Parallel },
    UdgErrorCode::BackendUnavailable,
    "UDG_BACKEND_UNAVAILABLE",
)]
#[case(
    UdgError::ComponentsNotComputed,
    UdgErrorCode::ComponentsNotComputed,
    "UDG_COMPONENTS_NOT_COMPUTED",
)]
#[case(
    UdgError::Cancelled { stage: PipelineStage::Crossings },
    UdgErrorCode::Cancelled,
    "UDG_CANCELLED",
)]
fn returns_expected_code(
    #[case] error: UdgError,
    #[case] expected: UdgErrorCode,
    #[case] code: &str,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), code);
    assert_eq!(expected.to_string(), code);
}

#[rstest]
#[case(UdgError::InvalidVertexCount { got: 0 }, ErrorCategory::InvalidParameter)]
#[case(UdgError::ZeroDenominator, ErrorCategory::InvalidParameter)]
#[case(
    UdgError::BackendUnavailable { requested: ExecutionStrategy::Parallel },
    ErrorCategory::InvalidParameter,
)]
#[case(UdgError::ComponentsNotComputed, ErrorCategory::PreconditionViolation)]
#[case(
    UdgError::Cancelled { stage: PipelineStage::Generate },
    ErrorCategory::Interrupted,
)]
fn returns_expected_category(#[case] error: UdgError, #[case] expected: ErrorCategory) {
    assert_eq!(error.category(), expected);
}

#[rstest]
#[case(UdgError::InvalidRadius { got: -0.5 }, "radius must be finite and non-negative (got -0.5)")]
#[case(
    UdgError::Cancelled { stage: PipelineStage::SuperFree },
    "recomputation cancelled before stage `super_free`",
)]
#[case(
    UdgError::NonFiniteParameter { name: "b", value: f64::INFINITY },
    "radius parameter `b` must be finite (got inf)",
)]
fn renders_messages(#[case] error: UdgError, #[case] expected: &str) {
    assert_eq!(error.to_string(), expected);
}
