use std::path::Path;
use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use crate::settings::logging::{LogFormat, LogOutput, LogSettings};

pub type InitError = Box<dyn std::error::Error + Send + Sync>;

/// 로깅 설정에 따라 전역 subscriber를 초기화합니다.
///
/// 반환된 guard가 drop되면 버퍼에 남은 로그가 기록되므로 프로세스가 끝날 때까지 유지해야 합니다.
pub fn init_logging(settings: &LogSettings) -> Result<WorkerGuard, InitError> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(settings.level).into())
        .from_env_lossy();

    let (writer, guard) = match &settings.output {
        LogOutput::Stdout => tracing_appender::non_blocking(std::io::stdout()),
        LogOutput::File(path) => {
            let path = Path::new(path);
            let directory = path
                .parent()
                .filter(|dir| !dir.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let file_name = path
                .file_name()
                .ok_or_else(|| format!("Invalid log file path: {}", path.display()))?;
            tracing_appender::non_blocking(tracing_appender::rolling::never(directory, file_name))
        }
    };

    match settings.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_target(true)
            .with_current_span(true)
            .try_init()?,
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .try_init()?,
    }

    Ok(guard)
}
