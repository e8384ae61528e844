use crate::errors::{SolaceError, SolaceResult};
use flexi_logger::{FileSpec, Logger, LoggerHandle, WriteMode};

/// Details of one request to the backend, recorded whether or not the call
/// succeeded.
#[derive(Debug)]
pub struct ApiCallLog {
    pub endpoint: String,
    pub request_summary: String,
    pub response_status: u16,
    pub response_time_ms: u128,
}

/// Starts the file logger. Output goes to `solace.log` in the working
/// directory, never to stdout while the TUI owns the terminal. The returned
/// handle must be kept alive for the lifetime of the program.
pub fn init_logging(spec: &str) -> SolaceResult<LoggerHandle> {
    Logger::try_with_env_or_str(spec)
        .map_err(|e| SolaceError::config_error(format!("bad log spec: {}", e)))?
        .log_to_file(FileSpec::default().basename("solace").suppress_timestamp())
        .write_mode(WriteMode::BufferAndFlush)
        .start()
        .map_err(|e| SolaceError::config_error(format!("failed to start logger: {}", e)))
}

pub fn log_api_call(call: &ApiCallLog) {
    log::info!(
        target: "api",
        "{} - {} - status: {} - time: {}ms",
        call.endpoint,
        call.request_summary,
        call.response_status,
        call.response_time_ms
    );
}
