use crate::common::*;

#[doc = r#"
    TOML 형식의 설정 파일을 읽어와서 지정된 구조체 타입으로 역직렬화하는 제네릭 함수.

    # Type Parameters
    * `T` - `DeserializeOwned` 트레이트를 구현한 구조체 타입

    # Arguments
    * `file_path` - 읽을 TOML 파일의 절대 경로 또는 상대 경로

    # Errors
    - 파일이 존재하지 않거나 읽기 권한이 없는 경우
    - TOML 형식이 잘못되어 파싱에 실패하는 경우
"#]
pub fn read_toml_from_file<T: DeserializeOwned>(file_path: &str) -> Result<T, anyhow::Error> {
    let toml_content: String = std::fs::read_to_string(file_path).with_context(|| {
        format!(
            "[io_utils->read_toml_from_file] Failed to read file: {}",
            file_path
        )
    })?;

    let toml: T = toml::from_str(&toml_content).with_context(|| {
        format!(
            "[io_utils->read_toml_from_file] Failed to parse TOML: {}",
            file_path
        )
    })?;

    Ok(toml)
}
