use std::sync::LazyLock;

use crate::suki_version;
use crate::{
    modules::{context::Initialize, error::SukiResult},
    utc_now,
};
use prometheus::{
    register_gauge, register_gauge_vec, register_histogram_vec, register_int_counter,
    register_int_counter_vec, Gauge, GaugeVec, HistogramVec, IntCounter, IntCounterVec,
};

pub mod endpoint;

pub const SUCCESS: &str = "success";
pub const FAILURE: &str = "failure";

// Metric name constants
pub const METRIC_REQUEST_DURATION_BY_STATUS: &str = "suki_request_duration_seconds_by_status";
pub const METRIC_REQUEST_DURATION_BY_METHOD_AND_OPERATION: &str =
    "suki_request_duration_seconds_by_method_and_operation";
pub const METRIC_REQUEST_TOTAL_BY_METHOD_AND_OPERATION: &str =
    "suki_request_total_by_method_and_operation";
pub const METRIC_EMAIL_SENT_TOTAL: &str = "suki_email_sent_total";
pub const METRIC_EMAIL_SEND_DURATION_SECONDS: &str = "suki_email_send_duration_seconds";
pub const METRIC_STATUS_CHECK_TOTAL: &str = "suki_status_check_total";
pub const METRIC_BUILD_INFO: &str = "suki_build_info";
pub const METRIC_START_TIMESTAMP: &str = "suki_start_timestamp";

pub static SUKI_BUILD_INFO: LazyLock<GaugeVec> = LazyLock::new(|| {
    register_gauge_vec!(
        METRIC_BUILD_INFO,
        "Build information including version and commit hash",
        &["version", "commit"]
    )
    .expect("Failed to register suki_build_info")
});

pub static SUKI_START_TIMESTAMP: LazyLock<Gauge> = LazyLock::new(|| {
    register_gauge!(METRIC_START_TIMESTAMP, "Unix timestamp when suki started")
        .expect("Failed to register suki_start_timestamp")
});

pub static SUKI_REQUEST_DURATION_BY_STATUS: LazyLock<HistogramVec> = LazyLock::new(|| {
    register_histogram_vec!(
        METRIC_REQUEST_DURATION_BY_STATUS,
        "Distribution of HTTP request durations, measured in seconds, grouped by response status code",
        &["status"]
    )
    .expect("Failed to register request_duration_seconds_by_status")
});

pub static SUKI_REQUEST_DURATION_BY_METHOD_AND_OPERATION: LazyLock<HistogramVec> =
    LazyLock::new(|| {
        register_histogram_vec!(
            METRIC_REQUEST_DURATION_BY_METHOD_AND_OPERATION,
            "Distribution of HTTP request durations, measured in seconds, grouped by method, operation ID, and status code",
            &["method", "operation_id", "status"]
        )
        .expect("Failed to register request_duration_seconds_by_method_and_operation")
    });

pub static SUKI_REQUEST_TOTAL_BY_METHOD_AND_OPERATION: LazyLock<IntCounterVec> =
    LazyLock::new(|| {
        register_int_counter_vec!(
            METRIC_REQUEST_TOTAL_BY_METHOD_AND_OPERATION,
            "Total number of HTTP requests, grouped by method, operation ID, and status code",
            &["method", "operation_id", "status"]
        )
        .expect("Failed to register request_total_by_method_and_operation")
    });

pub static SUKI_EMAIL_SENT_TOTAL: LazyLock<IntCounterVec> = LazyLock::new(|| {
    register_int_counter_vec!(
        METRIC_EMAIL_SENT_TOTAL,
        "Total number of relayed contact emails, grouped by status",
        &["status"]
    )
    .expect("Failed to register suki_email_sent_total")
});

pub static SUKI_EMAIL_SEND_DURATION_SECONDS: LazyLock<HistogramVec> = LazyLock::new(|| {
    register_histogram_vec!(
        METRIC_EMAIL_SEND_DURATION_SECONDS,
        "Distribution of email sending durations, measured in seconds",
        &["status"],
        vec![0.1, 0.25, 0.5, 0.75, 1.0, 2.5, 5.0, 7.5, 10.0, 30.0, 60.0]
    )
    .expect("Failed to register email_send_duration_seconds")
});

pub static SUKI_STATUS_CHECK_TOTAL: LazyLock<IntCounter> = LazyLock::new(|| {
    register_int_counter!(
        METRIC_STATUS_CHECK_TOTAL,
        "Total number of status check-ins recorded (global)"
    )
    .expect("Failed to register suki_status_check_total")
});

pub struct MetricsService;

impl Initialize for MetricsService {
    async fn initialize() -> SukiResult<()> {
        let now = utc_now!();
        SUKI_START_TIMESTAMP.set(now as f64);
        let version = suki_version!();
        let commit = env!("GIT_HASH");
        SUKI_BUILD_INFO
            .with_label_values(&[version, commit])
            .set(1.0);
        Ok(())
    }
}
