use crate::common::*;

#[doc = "Log line format: [timestamp] [level] T[thread] message"]
fn custom_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] [{}] T[{}] {}",
        now.format("%Y-%m-%d %H:%M:%S"),
        record.level(),
        std::thread::current().name().unwrap_or("unknown"),
        &record.args()
    )
}

#[doc = r#"
    전역 로거 설정.

    `RUST_LOG` 가 있으면 그 값을, 없으면 `info` 레벨을 사용한다.
    로그는 `logs/` 디렉토리에 하루 단위로 롤링되며 최근 10개 파일만 유지하고,
    동일한 내용을 stdout 으로도 출력한다.
    반환된 핸들은 프로그램 종료 시점까지 유지해야 한다.
"#]
pub fn set_global_logger() -> LoggerHandle {
    let log_directory: &str = "logs";

    Logger::try_with_env_or_str("info")
        .unwrap_or_else(|e| panic!("[set_global_logger] Invalid log spec: {:?}", e))
        .log_to_file(
            FileSpec::default()
                .directory(log_directory)
                .basename("sales_history_report"),
        )
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(10),
        )
        .duplicate_to_stdout(Duplicate::Info)
        .format_for_files(custom_format)
        .format_for_stdout(custom_format)
        .start()
        .unwrap_or_else(|e| panic!("[set_global_logger] Logger initialization failed: {:?}", e))
}
